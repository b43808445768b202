//! MBP-10 Directory Loader
//!
//! Reads `<data_dir>/<SYMBOL>/*.csv` in file-name order. Each file's header
//! line binds the schema; data rows become snapshots until the per-file cap
//! of retained rows is reached.

use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info, warn};

use super::schema::Mbp10Schema;
use crate::application::{LoadedSymbol, SnapshotSource};
use crate::domain::{BookSnapshot, SymbolSource};
use crate::error::{AnalysisError, Result};
use crate::infrastructure::config::{LoaderConfig, SchemaMode};

/// Snapshot source over a directory tree of Databento MBP-10 CSV files
#[derive(Debug, Clone)]
pub struct Mbp10Loader {
    data_dir: PathBuf,
    config: LoaderConfig,
}

impl Mbp10Loader {
    pub fn new(data_dir: impl Into<PathBuf>, config: LoaderConfig) -> Self {
        Self {
            data_dir: data_dir.into(),
            config,
        }
    }

    /// Candidate files in `dir`, sorted by name
    ///
    /// Matches the configured extension and, when dates are configured, a
    /// file name containing one of them.
    pub fn source_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(dir).map_err(|e| AnalysisError::io(dir, e))?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file())
            .filter(|path| self.matches_extension(path))
            .filter(|path| self.matches_dates(path))
            .collect();
        files.sort();
        Ok(files)
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.config.extension))
    }

    fn matches_dates(&self, path: &Path) -> bool {
        if self.config.dates.is_empty() {
            return true;
        }
        let name = file_name(path);
        self.config.dates.iter().any(|date| name.contains(date.as_str()))
    }

    /// Load one file; fails only if it cannot be opened
    pub fn load_file(&self, path: &Path) -> Result<LoadedSymbol> {
        let file = File::open(path).map_err(|e| AnalysisError::io(path, e))?;
        let date = date_from_filename(path);

        let mut loaded = read_snapshots(
            BufReader::new(file),
            date,
            self.config.schema,
            self.config.max_rows_per_file,
        );
        loaded.summary.files_read = 1;

        debug!(
            file = %path.display(),
            date = ?date,
            retained = loaded.summary.rows_retained,
            rejected = loaded.summary.rows_rejected,
            "Loaded file"
        );
        Ok(loaded)
    }
}

impl SnapshotSource for Mbp10Loader {
    fn load(&self, source: &SymbolSource) -> LoadedSymbol {
        let dir = source.directory(&self.data_dir);
        let mut loaded = LoadedSymbol::default();

        let files = match self.source_files(&dir) {
            Ok(files) => files,
            Err(e) => {
                warn!(symbol = %source.symbol, error = %e, "Symbol directory unreadable");
                return loaded;
            }
        };
        info!(
            symbol = %source.symbol,
            dir = %dir.display(),
            candidates = files.len(),
            "Found data files"
        );

        for path in &files {
            if loaded.summary.files_read >= self.config.max_files {
                break;
            }
            match self.load_file(path) {
                Ok(file) => {
                    loaded.snapshots.extend(file.snapshots);
                    loaded.summary.absorb(file.summary);
                }
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "Skipping unreadable file");
                    loaded.summary.files_failed += 1;
                }
            }
        }

        loaded
    }
}

/// Parse MBP-10 CSV text: a header line followed by data rows
///
/// Stops after `max_rows` snapshots have been retained. A read error ends the
/// file early but keeps what was parsed before it.
pub fn read_snapshots<R: Read>(
    reader: R,
    date: Option<NaiveDate>,
    mode: SchemaMode,
    max_rows: usize,
) -> LoadedSymbol {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let mut loaded = LoadedSymbol::default();

    let header = match reader.headers() {
        Ok(header) => header.clone(),
        Err(e) => {
            warn!(error = %e, "Unreadable header line");
            return loaded;
        }
    };
    let schema = Mbp10Schema::resolve(mode, &header);
    if mode == SchemaMode::Header && schema.mode() != SchemaMode::Header {
        debug!("Header lacks MBP-10 level columns, using fixed offsets");
    }

    let mut record = StringRecord::new();
    while loaded.summary.rows_retained < max_rows {
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) if e.is_io_error() => {
                warn!(error = %e, "Read error, keeping rows parsed so far");
                break;
            }
            Err(e) => {
                debug!(error = %e, "Skipping undecodable row");
                loaded.summary.rows_read += 1;
                loaded.summary.rows_rejected += 1;
                continue;
            }
        }

        loaded.summary.rows_read += 1;
        match schema.parse_row(&record, date) {
            Ok(snapshot) => {
                loaded.snapshots.push(snapshot);
                loaded.summary.rows_retained += 1;
            }
            Err(rejection) => {
                debug!(row = loaded.summary.rows_read, %rejection, "Skipping row");
                loaded.summary.rows_rejected += 1;
            }
        }
    }

    loaded
}

/// Trading date carried in names like `xnas-itch-20250403_2025-04-03.mbp-10.csv`:
/// the ten characters after the first underscore
pub fn date_from_filename(path: &Path) -> Option<NaiveDate> {
    let name = file_name(path);
    let (_, rest) = name.split_once('_')?;
    let candidate: String = rest.chars().take(10).collect();
    NaiveDate::parse_from_str(&candidate, "%Y-%m-%d").ok()
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
}

/// Snapshots only; convenience for callers that ignore the counters
pub fn parse_snapshots(text: &str, mode: SchemaMode, max_rows: usize) -> Vec<BookSnapshot> {
    read_snapshots(text.as_bytes(), None, mode, max_rows).snapshots
}
