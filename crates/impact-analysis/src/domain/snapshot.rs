//! Order Book Snapshot
//!
//! One MBP-10 row: ten bid tiers and ten ask tiers, best first.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use trading_core::{Price, PriceLevel, Quantity, Side};

/// Number of depth tiers per side in an MBP-10 record
pub const BOOK_DEPTH: usize = 10;

/// Immutable order book state at one timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSnapshot {
    /// Event timestamp as recorded in the source file
    pub timestamp: String,
    /// Trading date taken from the source file name
    pub date: Option<NaiveDate>,
    /// Bid tiers, highest price first
    pub bids: [PriceLevel; BOOK_DEPTH],
    /// Ask tiers, lowest price first
    pub asks: [PriceLevel; BOOK_DEPTH],
}

impl BookSnapshot {
    /// Empty book (all tiers zeroed) at the given timestamp
    pub fn empty(timestamp: impl Into<String>, date: Option<NaiveDate>) -> Self {
        Self {
            timestamp: timestamp.into(),
            date,
            bids: [PriceLevel::default(); BOOK_DEPTH],
            asks: [PriceLevel::default(); BOOK_DEPTH],
        }
    }

    /// Build from explicit tiers; missing tiers stay empty, extra tiers are dropped
    pub fn from_levels(
        timestamp: impl Into<String>,
        bids: &[(Price, Quantity)],
        asks: &[(Price, Quantity)],
    ) -> Self {
        let mut snapshot = Self::empty(timestamp, None);
        for (slot, level) in snapshot.bids.iter_mut().zip(bids) {
            *slot = PriceLevel::from(*level);
        }
        for (slot, level) in snapshot.asks.iter_mut().zip(asks) {
            *slot = PriceLevel::from(*level);
        }
        snapshot
    }

    pub fn best_bid(&self) -> &PriceLevel {
        &self.bids[0]
    }

    pub fn best_ask(&self) -> &PriceLevel {
        &self.asks[0]
    }

    /// `(best_bid + best_ask) / 2`, defined only when both best prices are positive
    pub fn mid_price(&self) -> Option<f64> {
        self.touch()
            .map(|(bid, ask)| (bid.to_f64() + ask.to_f64()) / 2.0)
    }

    /// `best_ask - best_bid`, under the same condition as [`mid_price`](Self::mid_price)
    pub fn spread(&self) -> Option<f64> {
        self.touch().map(|(bid, ask)| (ask - bid).to_f64())
    }

    pub fn total_bid_depth(&self) -> Quantity {
        self.bids.iter().map(|level| level.size).sum()
    }

    pub fn total_ask_depth(&self) -> Quantity {
        self.asks.iter().map(|level| level.size).sum()
    }

    /// Mid price is well defined
    pub fn is_valid(&self) -> bool {
        self.touch().is_some()
    }

    /// Best bid at or through the best ask (abnormal market data)
    pub fn is_crossed(&self) -> bool {
        match self.touch() {
            Some((bid, ask)) => bid >= ask,
            None => false,
        }
    }

    /// Tiers an aggressive order on `side` consumes: asks for a buy, bids for a sell
    pub fn liquidity_for(&self, side: Side) -> &[PriceLevel; BOOK_DEPTH] {
        match side {
            Side::Buy => &self.asks,
            Side::Sell => &self.bids,
        }
    }

    fn touch(&self) -> Option<(Price, Price)> {
        let bid = self.bids[0].price;
        let ask = self.asks[0].price;
        (bid.is_positive() && ask.is_positive()).then_some((bid, ask))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn px(s: &str) -> Price {
        Price::parse(s).unwrap()
    }

    fn qty(n: i64) -> Quantity {
        Quantity::from_int(n)
    }

    fn sample_book() -> BookSnapshot {
        BookSnapshot::from_levels(
            "2025-04-03T13:30:00Z",
            &[(px("99.95"), qty(40)), (px("99.90"), qty(60))],
            &[(px("100.00"), qty(50)), (px("100.05"), qty(50))],
        )
    }

    #[test]
    fn test_mid_and_spread() {
        let book = sample_book();
        assert_relative_eq!(book.mid_price().unwrap(), 99.975, epsilon = 1e-12);
        assert_relative_eq!(book.spread().unwrap(), 0.05, epsilon = 1e-12);
        assert!(book.is_valid());
        assert!(!book.is_crossed());
    }

    #[test]
    fn test_mid_undefined_without_both_sides() {
        let one_sided = BookSnapshot::from_levels("t", &[], &[(px("100.00"), qty(10))]);
        assert!(one_sided.mid_price().is_none());
        assert!(one_sided.spread().is_none());
        assert!(!one_sided.is_valid());
        assert!(!one_sided.is_crossed());
    }

    #[test]
    fn test_depth_totals() {
        let book = sample_book();
        assert_eq!(book.total_bid_depth(), qty(100));
        assert_eq!(book.total_ask_depth(), qty(100));
    }

    #[test]
    fn test_crossed_and_locked() {
        let crossed = BookSnapshot::from_levels(
            "t",
            &[(px("100.10"), qty(10))],
            &[(px("100.00"), qty(10))],
        );
        assert!(crossed.is_crossed());

        let locked = BookSnapshot::from_levels(
            "t",
            &[(px("100.00"), qty(10))],
            &[(px("100.00"), qty(10))],
        );
        assert!(locked.is_crossed());
    }

    #[test]
    fn test_liquidity_for_side() {
        let book = sample_book();
        assert_eq!(book.liquidity_for(Side::Buy)[0].price, px("100.00"));
        assert_eq!(book.liquidity_for(Side::Sell)[0].price, px("99.95"));
    }
}
