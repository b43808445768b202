use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A security to analyze and where its MBP-10 files live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolSource {
    pub symbol: String,
    /// Directory holding the symbol's files; `<data_dir>/<symbol>` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl SymbolSource {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            path: None,
        }
    }

    /// Resolve the directory to read from
    pub fn directory(&self, data_dir: &Path) -> PathBuf {
        match &self.path {
            Some(path) => path.clone(),
            None => data_dir.join(&self.symbol),
        }
    }
}
