use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use impact_analysis::application::{ImpactAnalyzer, ImpactSimulator};
use impact_analysis::domain::SymbolSource;
use impact_analysis::infrastructure::{
    AnalysisConfig, ConsoleReport, CsvImpactWriter, Mbp10Loader, load_config, load_default_config,
};
use impact_analysis::BookWalkImpact;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Temporary price impact of market orders over MBP-10 order book snapshots
#[derive(Parser, Debug)]
#[command(name = "impact-analysis")]
#[command(about = "Measure temporary price impact from MBP-10 order book snapshots")]
struct Args {
    /// JSON configuration file (embedded defaults when omitted)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Root directory with one sub-directory per symbol
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Directory for `<SYMBOL>_<side>_impact.csv` outputs
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Comma-separated symbols, e.g. CRWV,FROG,SOUN
    #[arg(long, value_delimiter = ',')]
    symbols: Option<Vec<String>>,

    /// Files read per symbol
    #[arg(long)]
    max_files: Option<usize>,

    /// Snapshots retained per file
    #[arg(long)]
    max_rows_per_file: Option<usize>,

    /// Largest order size tested
    #[arg(long)]
    max_order_size: Option<u64>,

    /// Simulate crossed or locked books instead of skipping them
    #[arg(long)]
    keep_crossed: bool,
}

impl Args {
    /// Command line values take precedence over the config file
    fn apply(self, config: &mut AnalysisConfig) {
        if let Some(dir) = self.data_dir {
            config.data_dir = dir;
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(symbols) = self.symbols {
            config.symbols = symbols
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(SymbolSource::new)
                .collect();
        }
        if let Some(n) = self.max_files {
            config.loader.max_files = n;
        }
        if let Some(n) = self.max_rows_per_file {
            config.loader.max_rows_per_file = n;
        }
        if let Some(n) = self.max_order_size {
            config.simulation.max_order_size = n;
        }
        if self.keep_crossed {
            config.simulation.skip_crossed_books = false;
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "impact_analysis=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => load_default_config()?,
    };
    args.apply(&mut config);
    config.validate().context("invalid configuration")?;

    tracing::info!(
        symbols = config.symbols.len(),
        data_dir = %config.data_dir.display(),
        output_dir = %config.output_dir.display(),
        max_order_size = config.simulation.max_order_size,
        "Starting analysis"
    );

    let analyzer = ImpactAnalyzer::new(
        config.symbols.clone(),
        Box::new(Mbp10Loader::new(&config.data_dir, config.loader.clone())),
        ImpactSimulator::new(
            Box::new(BookWalkImpact::new()),
            config.simulation.simulator_config(),
        ),
        Box::new(CsvImpactWriter::new(
            &config.output_dir,
            config.report.precision,
        )),
    );

    let mut console = ConsoleReport::stdout(config.report.sample_rows);
    console.banner();
    let summary = analyzer.run(&mut console);

    if summary.reports.is_empty() {
        tracing::warn!("No symbol produced any order book snapshots");
    }
    Ok(())
}
