//! Impact Types
//!
//! Per-snapshot fill outcomes and their per-order-size aggregates.

use serde::{Deserialize, Serialize};
use trading_core::{Quantity, Side};

/// Basis points per unit of decimal fraction
pub(crate) const BPS_PER_UNIT: f64 = 10_000.0;

/// Outcome of walking one snapshot's book for one order size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactSample {
    /// Order size asked for
    pub requested: Quantity,
    /// Shares actually filled (at most `requested`, at most visible depth)
    pub filled: Quantity,
    /// Volume-weighted execution price over `filled`
    pub vwap: f64,
    /// Reference mid price of the snapshot
    pub mid: f64,
    /// Signed deviation of `vwap` from `mid`, as a fraction of `mid`
    pub impact: f64,
    /// Depth tiers the fill reached into
    pub levels: usize,
}

impl ImpactSample {
    pub fn is_partial(&self) -> bool {
        self.filled < self.requested
    }

    pub fn impact_bps(&self) -> f64 {
        self.impact * BPS_PER_UNIT
    }
}

/// Average temporary impact for one order size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    pub order_size: u64,
    /// Mean impact as a decimal fraction (0.001 = 0.1%)
    pub avg_impact: f64,
    /// `avg_impact` in basis points
    pub impact_bps: f64,
    /// Snapshots that filled at least one share
    #[serde(skip)]
    pub samples: usize,
}

impl ImpactResult {
    pub fn new(order_size: u64, avg_impact: f64, samples: usize) -> Self {
        Self {
            order_size,
            avg_impact,
            impact_bps: avg_impact * BPS_PER_UNIT,
            samples,
        }
    }
}

/// Impact results for one symbol and side, ordered by increasing order size
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactCurve {
    pub symbol: String,
    pub side: Side,
    pub results: Vec<ImpactResult>,
}

impl ImpactCurve {
    pub fn new(symbol: impl Into<String>, side: Side, results: Vec<ImpactResult>) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            results,
        }
    }

    pub fn min_bps(&self) -> Option<f64> {
        self.results.iter().map(|r| r.impact_bps).reduce(f64::min)
    }

    pub fn max_bps(&self) -> Option<f64> {
        self.results.iter().map(|r| r.impact_bps).reduce(f64::max)
    }


    /// Leading rows, for console display
    pub fn sample(&self, rows: usize) -> &[ImpactResult] {
        &self.results[..rows.min(self.results.len())]
    }
}

/// Menu of tested order sizes: `step, 2·step, …` up to and including `max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSizeMenu {
    pub step: u64,
    pub max: u64,
}

impl OrderSizeMenu {
    pub const DEFAULT_STEP: u64 = 10;
    pub const DEFAULT_MAX: u64 = 500;

    pub fn new(step: u64, max: u64) -> Self {
        Self { step, max }
    }

    pub fn sizes(&self) -> impl Iterator<Item = u64> + use<> {
        let (step, max) = (self.step, self.max);
        // A zero step would never advance
        let count = if step == 0 { 0 } else { max / step };
        (1..=count).map(move |i| i * step)
    }
}

impl Default for OrderSizeMenu {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEP, Self::DEFAULT_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn result(size: u64, bps: f64) -> ImpactResult {
        ImpactResult::new(size, bps / BPS_PER_UNIT, 1)
    }

    #[test]
    fn test_result_bps_conversion() {
        let r = ImpactResult::new(60, 0.000_333_4, 3);
        assert_relative_eq!(r.impact_bps, 3.334, epsilon = 1e-9);
        assert_eq!(r.samples, 3);
    }

    #[test]
    fn test_menu_default() {
        let sizes: Vec<u64> = OrderSizeMenu::default().sizes().collect();
        assert_eq!(sizes.len(), 50);
        assert_eq!(sizes.first(), Some(&10));
        assert_eq!(sizes.last(), Some(&500));
    }

    #[test]
    fn test_menu_stops_at_or_below_max() {
        let sizes: Vec<u64> = OrderSizeMenu::new(10, 35).sizes().collect();
        assert_eq!(sizes, vec![10, 20, 30]);
        assert_eq!(OrderSizeMenu::new(10, 5).sizes().count(), 0);
        assert_eq!(OrderSizeMenu::new(0, 100).sizes().count(), 0);
    }

    #[test]
    fn test_curve_summary() {
        let curve = ImpactCurve::new(
            "CRWV",
            Side::Buy,
            vec![result(10, 2.0), result(20, 6.0), result(30, 4.0)],
        );
        assert_relative_eq!(curve.min_bps().unwrap(), 2.0, epsilon = 1e-9);
        assert_relative_eq!(curve.max_bps().unwrap(), 6.0, epsilon = 1e-9);
        assert_eq!(curve.sample(2).len(), 2);
        assert_eq!(curve.sample(10).len(), 3);

        let empty = ImpactCurve::new("SOUN", Side::Sell, Vec::new());
        assert!(empty.min_bps().is_none());
        assert!(empty.max_bps().is_none());
    }

    #[test]
    fn test_sample_partial_flag() {
        let sample = ImpactSample {
            requested: Quantity::from_int(150),
            filled: Quantity::from_int(100),
            vwap: 100.0,
            mid: 99.5,
            impact: 0.005,
            levels: 2,
        };
        assert!(sample.is_partial());
        assert_relative_eq!(sample.impact_bps(), 50.0, epsilon = 1e-9);
    }
}
