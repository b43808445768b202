//! Analysis Pipeline
//!
//! Per symbol, strictly in sequence: load → statistics → buy/sell curves →
//! persist → report. No state is carried from one symbol to the next; each
//! symbol's snapshots are dropped once its report is built.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{error, info, warn};
use trading_core::Side;

use super::ports::{CurveWriter, LoadSummary, ReportSink, SnapshotSource};
use super::simulator::ImpactSimulator;
use crate::domain::{BookStatistics, CrossSymbolSummary, ImpactCurve, SymbolSource};
use crate::error::{AnalysisError, Result};

/// Everything produced for one symbol
#[derive(Debug, Clone)]
pub struct SymbolReport {
    pub symbol: String,
    pub load: LoadSummary,
    pub statistics: BookStatistics,
    pub buy: ImpactCurve,
    pub sell: ImpactCurve,
    /// Files successfully written
    pub outputs: Vec<PathBuf>,
}

impl SymbolReport {
    pub fn curves(&self) -> [&ImpactCurve; 2] {
        [&self.buy, &self.sell]
    }

    pub fn curve(&self, side: Side) -> &ImpactCurve {
        match side {
            Side::Buy => &self.buy,
            Side::Sell => &self.sell,
        }
    }
}

/// Outcome of a whole run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub reports: Vec<SymbolReport>,
    /// Symbols abandoned for lack of data
    pub skipped: Vec<String>,
    pub cross_symbol: Option<CrossSymbolSummary>,
    pub elapsed: Duration,
}

/// Runs the impact analysis over a list of symbols
pub struct ImpactAnalyzer {
    symbols: Vec<SymbolSource>,
    source: Box<dyn SnapshotSource>,
    simulator: ImpactSimulator,
    writer: Box<dyn CurveWriter>,
}

impl ImpactAnalyzer {
    pub fn new(
        symbols: Vec<SymbolSource>,
        source: Box<dyn SnapshotSource>,
        simulator: ImpactSimulator,
        writer: Box<dyn CurveWriter>,
    ) -> Self {
        Self {
            symbols,
            source,
            simulator,
            writer,
        }
    }

    /// Analyze one symbol end to end
    ///
    /// Output failures are logged and leave the report without that path;
    /// only a symbol without snapshots is an error.
    pub fn analyze_symbol(&self, source: &SymbolSource) -> Result<SymbolReport> {
        info!(
            symbol = %source.symbol,
            model = self.simulator.model_name(),
            "Analyzing symbol"
        );

        let loaded = self.source.load(source);
        if loaded.snapshots.is_empty() {
            return Err(AnalysisError::NoSnapshots {
                symbol: source.symbol.clone(),
            });
        }
        info!(
            symbol = %source.symbol,
            snapshots = loaded.snapshots.len(),
            files = loaded.summary.files_read,
            rejected = loaded.summary.rows_rejected,
            "Loaded snapshots"
        );

        let statistics = BookStatistics::from_snapshots(&loaded.snapshots);
        if statistics.crossed_snapshots > 0 {
            warn!(
                symbol = %source.symbol,
                crossed = statistics.crossed_snapshots,
                skipped = self.simulator.config().skip_crossed_books,
                "Crossed or locked books in input"
            );
        }

        let buy = self
            .simulator
            .curve(&source.symbol, &loaded.snapshots, Side::Buy);
        let sell = self
            .simulator
            .curve(&source.symbol, &loaded.snapshots, Side::Sell);

        let mut outputs = Vec::with_capacity(2);
        for curve in [&buy, &sell] {
            match self.writer.write_curve(curve) {
                Ok(path) => {
                    info!(symbol = %curve.symbol, side = %curve.side, path = %path.display(), "Saved results");
                    outputs.push(path);
                }
                Err(e) => {
                    error!(symbol = %curve.symbol, side = %curve.side, error = %e, "Failed to save results");
                }
            }
        }

        Ok(SymbolReport {
            symbol: source.symbol.clone(),
            load: loaded.summary,
            statistics,
            buy,
            sell,
            outputs,
        })
    }

    /// Analyze every configured symbol in order
    pub fn run(&self, sink: &mut dyn ReportSink) -> RunSummary {
        let start = Instant::now();
        let mut reports = Vec::with_capacity(self.symbols.len());
        let mut skipped = Vec::new();

        for source in &self.symbols {
            match self.analyze_symbol(source) {
                Ok(report) => {
                    sink.symbol_report(&report);
                    reports.push(report);
                }
                Err(e) => {
                    warn!(symbol = %source.symbol, error = %e, "Skipping symbol");
                    sink.symbol_skipped(&source.symbol);
                    skipped.push(source.symbol.clone());
                }
            }
        }

        let cross_symbol =
            CrossSymbolSummary::from_curves(reports.iter().flat_map(|r| r.curves()));
        let summary = RunSummary {
            reports,
            skipped,
            cross_symbol,
            elapsed: start.elapsed(),
        };
        sink.run_summary(&summary);

        info!(
            analyzed = summary.reports.len(),
            skipped = summary.skipped.len(),
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "Analysis complete"
        );
        summary
    }
}
