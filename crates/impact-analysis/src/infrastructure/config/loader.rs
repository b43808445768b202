use std::path::Path;
use thiserror::Error;
use trading_core::Quantity;

use super::types::AnalysisConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Load analysis configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AnalysisConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_config_from_str(&content)
}

/// Load configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<AnalysisConfig, ConfigError> {
    let config: AnalysisConfig = serde_json::from_str(json)?;
    Ok(config)
}

/// Load the default embedded configuration
pub fn load_default_config() -> Result<AnalysisConfig, ConfigError> {
    let default_config = include_str!("default_config.json");
    load_config_from_str(default_config)
}

impl AnalysisConfig {
    /// Reject settings that would make the run meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.symbols.is_empty() {
            return Err(ConfigError::Invalid("no symbols configured".into()));
        }
        if let Some(blank) = self.symbols.iter().find(|s| s.symbol.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "blank symbol name (path: {:?})",
                blank.path
            )));
        }
        let sim = &self.simulation;
        if sim.order_size_step == 0 {
            return Err(ConfigError::Invalid("order_size_step must be positive".into()));
        }
        if sim.max_order_size < sim.order_size_step {
            return Err(ConfigError::Invalid(format!(
                "max_order_size {} is below order_size_step {}",
                sim.max_order_size, sim.order_size_step
            )));
        }
        let largest = Quantity::MAX_WHOLE as u64;
        if sim.max_order_size > largest {
            return Err(ConfigError::Invalid(format!(
                "max_order_size {} exceeds the largest representable size {largest}",
                sim.max_order_size
            )));
        }
        if self.loader.max_files == 0 {
            return Err(ConfigError::Invalid("max_files must be positive".into()));
        }
        if self.loader.max_rows_per_file == 0 {
            return Err(ConfigError::Invalid(
                "max_rows_per_file must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::SchemaMode;

    #[test]
    fn test_load_default_config() {
        let config = load_default_config().unwrap();
        assert_eq!(config, AnalysisConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_symbols() {
        let config = load_default_config().unwrap();
        let names: Vec<&str> = config.symbols.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(names, vec!["CRWV", "FROG", "SOUN"]);
        assert!(config.symbols.iter().all(|s| s.path.is_none()));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = load_config_from_str(
            r#"{
                "symbols": [{ "symbol": "ABC", "path": "/data/abc" }],
                "loader": { "max_files": 1, "schema": "fixed_offsets" },
                "simulation": { "max_order_size": 100 }
            }"#,
        )
        .unwrap();

        assert_eq!(config.symbols.len(), 1);
        assert_eq!(config.loader.max_files, 1);
        assert_eq!(config.loader.max_rows_per_file, 10_000);
        assert_eq!(config.loader.schema, SchemaMode::FixedOffsets);
        assert_eq!(config.simulation.max_order_size, 100);
        assert_eq!(config.simulation.order_size_step, 10);
        assert!(config.simulation.skip_crossed_books);
        assert_eq!(config.report.precision, 6);
        assert_eq!(config.simulation.menu().sizes().count(), 10);
    }

    #[test]
    fn test_validate_rejects_bad_menu() {
        let mut config = AnalysisConfig::default();
        config.simulation.order_size_step = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = AnalysisConfig::default();
        config.simulation.max_order_size = 5;
        assert!(config.validate().is_err());

        let mut config = AnalysisConfig::default();
        config.symbols.clear();
        assert!(config.validate().is_err());

        let mut config = AnalysisConfig::default();
        config.loader.max_rows_per_file = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unrepresentable_order_size() {
        let config = load_config_from_str(
            r#"{ "simulation": { "max_order_size": 100000000000, "order_size_step": 100000000000 } }"#,
        )
        .unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = AnalysisConfig::default();
        config.simulation.max_order_size = u64::MAX;
        assert!(config.validate().is_err());

        let mut config = AnalysisConfig::default();
        config.simulation.order_size_step = 10;
        config.simulation.max_order_size = Quantity::MAX_WHOLE as u64;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            load_config_from_str("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            load_config("/definitely/not/here.json"),
            Err(ConfigError::Io { .. })
        ));
    }
}
