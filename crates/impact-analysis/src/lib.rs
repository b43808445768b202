//! Temporary Price Impact Analysis
//!
//! Replays hypothetical market orders of increasing size against historical
//! MBP-10 (10-level) order book snapshots and measures how far the
//! volume-weighted execution price lands from the mid price.
//!
//! # Pipeline
//!
//! - [`Mbp10Loader`](infrastructure::Mbp10Loader): Databento MBP-10 CSV files → [`BookSnapshot`]s
//! - [`BookWalkImpact`](application::impact_models::BookWalkImpact): walks the opposite side for one order
//! - [`ImpactSimulator`]: averages samples per order size into an [`ImpactCurve`]
//! - [`ImpactAnalyzer`]: per symbol load → statistics → curves → CSV + console
//!
//! # Example
//!
//! ```rust,no_run
//! use impact_analysis::application::impact_models::{BookWalkImpact, ImpactModel};
//! use impact_analysis::domain::BookSnapshot;
//! use trading_core::{Price, Quantity, Side};
//!
//! let book = BookSnapshot::from_levels(
//!     "2025-04-03T13:30:00Z",
//!     &[(Price::parse("99.95").unwrap(), Quantity::from_int(100))],
//!     &[
//!         (Price::parse("100.00").unwrap(), Quantity::from_int(50)),
//!         (Price::parse("100.05").unwrap(), Quantity::from_int(50)),
//!     ],
//! );
//! let sample = BookWalkImpact::new().sample(Quantity::from_int(60), Side::Buy, &book);
//! assert!(sample.is_some_and(|s| s.impact_bps() > 0.0));
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-export commonly used types
pub use application::impact_models::{BookWalkImpact, ImpactModel};
pub use application::{ImpactAnalyzer, ImpactSimulator, RunSummary, SymbolReport};
pub use domain::{BookSnapshot, BookStatistics, ImpactCurve, ImpactResult, SymbolSource};
pub use error::{AnalysisError, Result};
