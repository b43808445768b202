//! Book Walk Impact Model
//!
//! Replays a market order against the resting liquidity of a snapshot:
//!
//! ```text
//! VWAP(X)   = Σ min(remaining, sᵢ) × pᵢ / Σ min(remaining, sᵢ)
//! g_buy(X)  = (VWAP(X) − mid) / mid      (walks the asks)
//! g_sell(X) = (mid − VWAP(X)) / mid      (walks the bids)
//! ```
//!
//! The walk stops at the first empty or unpriced tier. An order larger than
//! the visible depth is only partially filled and its impact is measured
//! over the filled shares alone.

use super::protocol::ImpactModel;
use crate::domain::{BookSnapshot, ImpactSample};
use trading_core::{PriceLevel, Quantity, Side, Value};

/// Result of consuming liquidity from a run of tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fill {
    pub cost: Value,
    pub filled: Quantity,
    /// Tiers touched, including a partially consumed last tier
    pub levels_consumed: usize,
}

impl Fill {
    /// Volume-weighted fill price, `None` if nothing filled
    pub fn vwap(&self) -> Option<f64> {
        self.cost.per_unit(self.filled)
    }
}

/// VWAP-based temporary impact measured by walking the book
#[derive(Debug, Clone, Copy, Default)]
pub struct BookWalkImpact;

impl BookWalkImpact {
    pub fn new() -> Self {
        Self
    }

    /// Consume up to `order_size` from `levels`, best tier first
    pub fn walk(levels: &[PriceLevel], order_size: Quantity) -> Fill {
        let mut remaining = order_size;
        let mut fill = Fill::default();

        for level in levels {
            if !remaining.is_positive() || !level.is_valid() {
                break;
            }
            let take = remaining.min(level.size);
            fill.cost += level.price.mul_qty(take);
            fill.filled += take;
            fill.levels_consumed += 1;
            remaining -= take;
        }

        fill
    }
}

impl ImpactModel for BookWalkImpact {
    fn sample(
        &self,
        order_size: Quantity,
        side: Side,
        snapshot: &BookSnapshot,
    ) -> Option<ImpactSample> {
        let mid = snapshot.mid_price().filter(|mid| *mid > 0.0)?;
        let fill = Self::walk(snapshot.liquidity_for(side), order_size);
        let vwap = fill.vwap()?;

        let impact = match side {
            Side::Buy => (vwap - mid) / mid,
            Side::Sell => (mid - vwap) / mid,
        };

        Some(ImpactSample {
            requested: order_size,
            filled: fill.filled,
            vwap,
            mid,
            impact,
            levels: fill.levels_consumed,
        })
    }

    fn name(&self) -> &str {
        "book_walk"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use trading_core::Price;

    fn px(s: &str) -> Price {
        Price::parse(s).unwrap()
    }

    fn qty(n: i64) -> Quantity {
        Quantity::from_int(n)
    }

    /// Best bid 99.95, asks 50@100.00 and 50@100.05
    fn two_tier_book() -> BookSnapshot {
        BookSnapshot::from_levels(
            "t",
            &[(px("99.95"), qty(50)), (px("99.90"), qty(50))],
            &[(px("100.00"), qty(50)), (px("100.05"), qty(50))],
        )
    }

    #[test]
    fn test_buy_sixty_shares_across_two_tiers() {
        let sample = BookWalkImpact
            .sample(qty(60), Side::Buy, &two_tier_book())
            .unwrap();

        assert_eq!(sample.filled, qty(60));
        assert_eq!(sample.levels, 2);
        assert_relative_eq!(sample.mid, 99.975, epsilon = 1e-12);
        assert_relative_eq!(sample.vwap, 6000.5 / 60.0, epsilon = 1e-9);
        assert_relative_eq!(
            sample.impact,
            (6000.5 / 60.0 - 99.975) / 99.975,
            epsilon = 1e-12
        );
        assert_relative_eq!(sample.impact_bps(), 3.334, epsilon = 1e-3);
    }

    #[test]
    fn test_sell_walks_bids() {
        let sample = BookWalkImpact
            .sample(qty(60), Side::Sell, &two_tier_book())
            .unwrap();

        // 50 @ 99.95 + 10 @ 99.90
        let vwap = (50.0 * 99.95 + 10.0 * 99.90) / 60.0;
        assert_relative_eq!(sample.vwap, vwap, epsilon = 1e-9);
        assert_relative_eq!(sample.impact, (99.975 - vwap) / 99.975, epsilon = 1e-12);
        assert!(sample.impact > 0.0);
    }

    #[test]
    fn test_order_beyond_depth_is_partial() {
        let sample = BookWalkImpact
            .sample(qty(150), Side::Buy, &two_tier_book())
            .unwrap();

        assert_eq!(sample.filled, qty(100));
        assert!(sample.is_partial());
        // Impact over the 100 filled shares, not the 150 requested
        let vwap = (50.0 * 100.00 + 50.0 * 100.05) / 100.0;
        assert_relative_eq!(sample.vwap, vwap, epsilon = 1e-9);
    }

    #[test]
    fn test_walk_stops_at_first_invalid_tier() {
        let levels = [
            PriceLevel::new(px("10.00"), qty(5)),
            PriceLevel::new(px("10.01"), qty(0)),
            PriceLevel::new(px("10.02"), qty(100)),
        ];
        let fill = BookWalkImpact::walk(&levels, qty(50));
        assert_eq!(fill.filled, qty(5));
        assert_eq!(fill.levels_consumed, 1);

        let unpriced = [
            PriceLevel::new(Price::ZERO, qty(5)),
            PriceLevel::new(px("10.02"), qty(100)),
        ];
        assert_eq!(BookWalkImpact::walk(&unpriced, qty(50)), Fill::default());
    }

    #[test]
    fn test_walk_stops_once_filled() {
        let levels = [
            PriceLevel::new(px("10.00"), qty(30)),
            PriceLevel::new(px("10.01"), qty(30)),
            PriceLevel::new(px("10.02"), qty(30)),
        ];
        let fill = BookWalkImpact::walk(&levels, qty(30));
        assert_eq!(fill.filled, qty(30));
        assert_eq!(fill.levels_consumed, 1);
        assert_relative_eq!(fill.vwap().unwrap(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_no_sample_without_mid() {
        let one_sided = BookSnapshot::from_levels("t", &[], &[(px("100.00"), qty(50))]);
        assert!(BookWalkImpact.sample(qty(10), Side::Buy, &one_sided).is_none());
    }

    #[test]
    fn test_no_sample_when_nothing_fills() {
        // Touch priced but no size on the ask side
        let book = BookSnapshot::from_levels(
            "t",
            &[(px("99.95"), qty(50))],
            &[(px("100.00"), qty(0))],
        );
        assert!(BookWalkImpact.sample(qty(10), Side::Buy, &book).is_none());
        assert!(BookWalkImpact.sample(qty(10), Side::Sell, &book).is_some());
    }

    #[test]
    fn test_fill_bounded_by_order_and_depth() {
        let book = two_tier_book();
        for size in (10..=200).step_by(10) {
            let fill = BookWalkImpact::walk(book.liquidity_for(Side::Buy), qty(size));
            assert!(fill.filled <= qty(size));
            assert!(fill.filled <= book.total_ask_depth());
        }
    }
}
