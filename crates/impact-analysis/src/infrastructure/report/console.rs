//! Plain-text run report
//!
//! Per symbol: book statistics, the leading rows of each impact curve and its
//! range. After the last symbol: buy/sell averages across all symbols and the
//! total run time.

use std::io::{self, Write};

use tracing::warn;
use trading_core::Side;

use crate::application::{ReportSink, RunSummary, SymbolReport};
use crate::domain::ImpactCurve;

const RULE_WIDTH: usize = 60;

pub struct ConsoleReport<W: Write> {
    out: W,
    sample_rows: usize,
}

impl ConsoleReport<io::Stdout> {
    pub fn stdout(sample_rows: usize) -> Self {
        Self::new(io::stdout(), sample_rows)
    }
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W, sample_rows: usize) -> Self {
        Self { out, sample_rows }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Title line printed before the first symbol
    pub fn banner(&mut self) {
        let result = writeln!(self.out, "Order Book Temporary Impact Analysis")
            .and_then(|_| writeln!(self.out, "{}", "=".repeat(50)));
        self.check(result);
    }

    fn check(&mut self, result: io::Result<()>) {
        if let Err(e) = result.and_then(|_| self.out.flush()) {
            warn!(error = %e, "Console report write failed");
        }
    }

    fn write_symbol(&mut self, report: &SymbolReport) -> io::Result<()> {
        let out = &mut self.out;
        writeln!(out, "\n=== Analyzing {} ===", report.symbol)?;
        writeln!(
            out,
            "Loaded {} snapshots from {} file(s), {} row(s) rejected",
            report.load.rows_retained, report.load.files_read, report.load.rows_rejected
        )?;

        let stats = &report.statistics;
        writeln!(out, "Average mid price: ${:.4}", stats.mean_mid)?;
        writeln!(out, "Average spread: {:.4} bps", stats.mean_spread_bps)?;
        writeln!(out, "Average bid depth: {:.4} shares", stats.mean_bid_depth)?;
        writeln!(out, "Average ask depth: {:.4} shares", stats.mean_ask_depth)?;
        if stats.crossed_snapshots > 0 {
            writeln!(out, "Crossed snapshots: {}", stats.crossed_snapshots)?;
        }

        for side in Side::ALL {
            write_curve(out, report.curve(side), self.sample_rows)?;
        }

        for path in &report.outputs {
            writeln!(out, "Saved results to {}", path.display())?;
        }
        Ok(())
    }

    fn write_summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        let out = &mut self.out;
        if let Some(cross) = &summary.cross_symbol {
            writeln!(out, "\n{}", "=".repeat(RULE_WIDTH))?;
            writeln!(out, "CROSS-SYMBOL SUMMARY")?;
            writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
            writeln!(out, "Symbols analyzed: {}", summary.reports.len())?;
            writeln!(out, "Average buy impact: {:.2} bps", cross.avg_buy_bps)?;
            writeln!(out, "Average sell impact: {:.2} bps", cross.avg_sell_bps)?;
            writeln!(out, "Asymmetry: {:.2} bps", cross.asymmetry_bps())?;
        }
        if !summary.skipped.is_empty() {
            writeln!(out, "\nSkipped: {}", summary.skipped.join(", "))?;
        }
        writeln!(
            out,
            "\nTotal execution time: {} ms",
            summary.elapsed.as_millis()
        )
    }
}

fn write_curve<W: Write>(out: &mut W, curve: &ImpactCurve, rows: usize) -> io::Result<()> {
    let label = match curve.side {
        Side::Buy => "Buy",
        Side::Sell => "Sell",
    };
    writeln!(out, "\nSample {label} Impact Results:")?;
    writeln!(out, "Order Size\tImpact (bps)")?;
    for result in curve.sample(rows) {
        writeln!(out, "{}\t\t{:.2}", result.order_size, result.impact_bps)?;
    }
    match (curve.min_bps(), curve.max_bps()) {
        (Some(min), Some(max)) => {
            writeln!(out, "{label} impact range: {min:.2} - {max:.2} bps")
        }
        _ => writeln!(out, "No {} fills", curve.side),
    }
}

impl<W: Write> ReportSink for ConsoleReport<W> {
    fn symbol_report(&mut self, report: &SymbolReport) {
        let result = self.write_symbol(report);
        self.check(result);
    }

    fn symbol_skipped(&mut self, symbol: &str) {
        let result = writeln!(self.out, "\nFailed to load data for {symbol}");
        self.check(result);
    }

    fn run_summary(&mut self, summary: &RunSummary) {
        let result = self.write_summary(summary);
        self.check(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::LoadSummary;
    use crate::domain::{BookStatistics, CrossSymbolSummary, ImpactResult};
    use std::path::PathBuf;
    use std::time::Duration;

    fn report() -> SymbolReport {
        let results = |scale: f64| {
            (1..=12)
                .map(|i| ImpactResult::new(i * 10, scale * i as f64 / 10_000.0, 3))
                .collect::<Vec<_>>()
        };
        SymbolReport {
            symbol: "SOUN".into(),
            load: LoadSummary {
                files_read: 2,
                rows_read: 5,
                rows_retained: 4,
                rows_rejected: 1,
                ..Default::default()
            },
            statistics: BookStatistics {
                valid_snapshots: 4,
                mean_mid: 10.005,
                mean_spread_bps: 9.995,
                mean_bid_depth: 1200.0,
                mean_ask_depth: 1300.0,
                crossed_snapshots: 0,
            },
            buy: ImpactCurve::new("SOUN", Side::Buy, results(1.0)),
            sell: ImpactCurve::new("SOUN", Side::Sell, Vec::new()),
            outputs: vec![PathBuf::from("SOUN_buy_impact.csv")],
        }
    }

    fn render(f: impl FnOnce(&mut ConsoleReport<Vec<u8>>)) -> String {
        let mut console = ConsoleReport::new(Vec::new(), 10);
        f(&mut console);
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn test_symbol_section() {
        let text = render(|c| c.symbol_report(&report()));

        assert!(text.contains("=== Analyzing SOUN ==="));
        assert!(text.contains("Average mid price: $10.0050"));
        assert!(text.contains("Average spread: 9.9950 bps"));
        assert!(text.contains("Average ask depth: 1300.0000 shares"));
        assert!(!text.contains("Crossed snapshots"));
        assert!(text.contains("Order Size\tImpact (bps)\n10\t\t1.00\n"));
        assert!(text.contains("100\t\t10.00\n"));
        // only the first 10 rows are listed
        assert!(!text.contains("110\t\t"));
        assert!(text.contains("Buy impact range: 1.00 - 12.00 bps"));
        assert!(text.contains("No sell fills"));
        assert!(text.contains("Saved results to SOUN_buy_impact.csv"));
    }

    #[test]
    fn test_run_summary() {
        let summary = RunSummary {
            reports: vec![report()],
            skipped: vec!["FROG".into()],
            cross_symbol: Some(CrossSymbolSummary {
                avg_buy_bps: 6.5,
                avg_sell_bps: 4.25,
            }),
            elapsed: Duration::from_millis(42),
        };
        let text = render(|c| c.run_summary(&summary));

        assert!(text.contains("CROSS-SYMBOL SUMMARY"));
        assert!(text.contains("Average buy impact: 6.50 bps"));
        assert!(text.contains("Average sell impact: 4.25 bps"));
        assert!(text.contains("Asymmetry: 2.25 bps"));
        assert!(text.contains("Skipped: FROG"));
        assert!(text.ends_with("Total execution time: 42 ms\n"));
    }

    #[test]
    fn test_skipped_symbol() {
        let text = render(|c| c.symbol_skipped("FROG"));
        assert_eq!(text, "\nFailed to load data for FROG\n");
    }
}
