//! Analysis Domain Types
//!
//! Order book snapshots and the impact/statistics value objects derived from them.

mod impact;
mod snapshot;
mod statistics;
mod symbol;

pub use impact::{ImpactCurve, ImpactResult, ImpactSample, OrderSizeMenu};
pub use snapshot::{BOOK_DEPTH, BookSnapshot};
pub use statistics::{BookStatistics, CrossSymbolSummary};
pub use symbol::SymbolSource;
