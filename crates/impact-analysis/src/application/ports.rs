//! Ports
//!
//! Boundaries between the analysis pipeline and the outside world: where
//! snapshots come from, where curves are persisted and where reports go.

use std::path::PathBuf;

use crate::domain::{BookSnapshot, ImpactCurve, SymbolSource};
use crate::error::Result;

use super::analyzer::{RunSummary, SymbolReport};

/// Row and file counters for one symbol's load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub files_read: usize,
    pub files_failed: usize,
    pub rows_read: usize,
    pub rows_retained: usize,
    /// Too short, non-numeric, or without a two-sided touch
    pub rows_rejected: usize,
}

impl LoadSummary {
    pub fn absorb(&mut self, other: LoadSummary) {
        self.files_read += other.files_read;
        self.files_failed += other.files_failed;
        self.rows_read += other.rows_read;
        self.rows_retained += other.rows_retained;
        self.rows_rejected += other.rows_rejected;
    }
}

/// Snapshots of one symbol in input order
#[derive(Debug, Clone, Default)]
pub struct LoadedSymbol {
    pub snapshots: Vec<BookSnapshot>,
    pub summary: LoadSummary,
}

/// Source of order book snapshots
///
/// Loading never fails as a whole: unreadable files and malformed rows are
/// skipped, so a symbol with no usable data comes back empty.
pub trait SnapshotSource {
    fn load(&self, source: &SymbolSource) -> LoadedSymbol;
}

/// Persists an impact curve, returning where it was written
pub trait CurveWriter {
    fn write_curve(&self, curve: &ImpactCurve) -> Result<PathBuf>;
}

/// Human-facing presentation of results
pub trait ReportSink {
    fn symbol_report(&mut self, report: &SymbolReport);

    fn symbol_skipped(&mut self, symbol: &str);

    fn run_summary(&mut self, summary: &RunSummary);
}
