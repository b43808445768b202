//! Configuration types for the impact analysis
//!
//! Every field has a default, so a config file only needs to name what it
//! changes. The defaults reproduce the reference run: three symbols under the
//! working directory, 3 files × 10 000 rows each, sizes 10..=500 in steps of 10.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::application::SimulatorConfig;
use crate::domain::{OrderSizeMenu, SymbolSource};

/// Root configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Root directory holding one sub-directory per symbol
    #[serde(default = "default_dir")]
    pub data_dir: PathBuf,

    /// Where `<SYMBOL>_<side>_impact.csv` files are written
    #[serde(default = "default_dir")]
    pub output_dir: PathBuf,

    /// Securities to analyze, in order
    #[serde(default = "default_symbols")]
    pub symbols: Vec<SymbolSource>,

    #[serde(default)]
    pub loader: LoaderConfig,

    #[serde(default)]
    pub simulation: SimulationConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_symbols() -> Vec<SymbolSource> {
    ["CRWV", "FROG", "SOUN"]
        .into_iter()
        .map(SymbolSource::new)
        .collect()
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            data_dir: default_dir(),
            output_dir: default_dir(),
            symbols: default_symbols(),
            loader: LoaderConfig::default(),
            simulation: SimulationConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

/// How MBP-10 columns are located in a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaMode {
    /// Look up `bid_px_00`.. by name in the header line, falling back to
    /// fixed offsets when the header lacks them
    #[default]
    Header,
    /// Databento MBP-10 column positions
    FixedOffsets,
}

/// Load-time limits and file selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    #[serde(default = "default_max_files")]
    pub max_files: usize,

    /// Cap on retained snapshots per file
    #[serde(default = "default_max_rows")]
    pub max_rows_per_file: usize,

    #[serde(default = "default_extension")]
    pub extension: String,

    /// Keep only files whose name contains one of these (e.g. "2025-04-03");
    /// empty keeps all
    #[serde(default)]
    pub dates: Vec<String>,

    #[serde(default)]
    pub schema: SchemaMode,
}

fn default_max_files() -> usize {
    3
}

fn default_max_rows() -> usize {
    10_000
}

fn default_extension() -> String {
    "csv".to_string()
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_files: default_max_files(),
            max_rows_per_file: default_max_rows(),
            extension: default_extension(),
            dates: Vec::new(),
            schema: SchemaMode::default(),
        }
    }
}

/// Order size menu and crossed-book policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_max_order_size")]
    pub max_order_size: u64,

    #[serde(default = "default_order_size_step")]
    pub order_size_step: u64,

    #[serde(default = "default_true")]
    pub skip_crossed_books: bool,
}

fn default_max_order_size() -> u64 {
    OrderSizeMenu::DEFAULT_MAX
}

fn default_order_size_step() -> u64 {
    OrderSizeMenu::DEFAULT_STEP
}

fn default_true() -> bool {
    true
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_order_size: default_max_order_size(),
            order_size_step: default_order_size_step(),
            skip_crossed_books: default_true(),
        }
    }
}

impl SimulationConfig {
    pub fn menu(&self) -> OrderSizeMenu {
        OrderSizeMenu::new(self.order_size_step, self.max_order_size)
    }

    pub fn simulator_config(&self) -> SimulatorConfig {
        SimulatorConfig {
            menu: self.menu(),
            skip_crossed_books: self.skip_crossed_books,
        }
    }
}

/// Output formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Leading result rows printed per side
    #[serde(default = "default_sample_rows")]
    pub sample_rows: usize,

    /// Fractional digits in the CSV output
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_sample_rows() -> usize {
    10
}

fn default_precision() -> usize {
    6
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sample_rows: default_sample_rows(),
            precision: default_precision(),
        }
    }
}
