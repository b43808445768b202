//! Impact Model Protocol
//!
//! Core trait for per-snapshot impact measurement (SOLID: OCP)

use crate::domain::{BookSnapshot, ImpactSample};
use trading_core::{Quantity, Side};

/// Impact measurement interface
///
/// Implementations replay a hypothetical order against one snapshot.
/// All implementations must be thread-safe (Send + Sync).
pub trait ImpactModel: Send + Sync {
    /// Measure the impact of an order of `order_size` on `side`
    ///
    /// # Returns
    /// `None` when the snapshot yields no sample: undefined mid price or
    /// nothing fillable
    fn sample(
        &self,
        order_size: Quantity,
        side: Side,
        snapshot: &BookSnapshot,
    ) -> Option<ImpactSample>;

    /// Get the model name for logging/debugging
    fn name(&self) -> &str;
}
