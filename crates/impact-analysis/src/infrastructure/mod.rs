//! Infrastructure Layer
//!
//! File-system adapters for the application ports: MBP-10 CSV loading,
//! CSV/console reporting and JSON configuration.

pub mod config;
pub mod mbp10;
pub mod report;

pub use config::{AnalysisConfig, ConfigError, load_config, load_default_config};
pub use mbp10::{Mbp10Loader, Mbp10Schema};
pub use report::{ConsoleReport, CsvImpactWriter};
