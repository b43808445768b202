//! Impact Models
//!
//! Per-snapshot impact estimation.
//!
//! - Book walk: fill against resting liquidity tier by tier and measure the
//!   VWAP deviation from mid

mod book_walk;
mod protocol;

pub use book_walk::{BookWalkImpact, Fill};
pub use protocol::ImpactModel;
