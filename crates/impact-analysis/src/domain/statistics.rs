//! Descriptive statistics over a symbol's snapshots and across symbols.

use super::impact::{BPS_PER_UNIT, ImpactCurve};
use super::snapshot::BookSnapshot;
use serde::Serialize;

/// Averages over the valid snapshots of one symbol
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BookStatistics {
    pub valid_snapshots: usize,
    pub mean_mid: f64,
    /// Mean spread normalized by mean mid, in basis points
    pub mean_spread_bps: f64,
    pub mean_bid_depth: f64,
    pub mean_ask_depth: f64,
    pub crossed_snapshots: usize,
}

impl BookStatistics {
    pub fn from_snapshots(snapshots: &[BookSnapshot]) -> Self {
        let mut total_mid = 0.0;
        let mut total_spread = 0.0;
        let mut total_bid_depth = 0.0;
        let mut total_ask_depth = 0.0;
        let mut valid = 0usize;
        let mut crossed = 0usize;

        for snapshot in snapshots {
            let (Some(mid), Some(spread)) = (snapshot.mid_price(), snapshot.spread()) else {
                continue;
            };
            total_mid += mid;
            total_spread += spread;
            total_bid_depth += snapshot.total_bid_depth().to_f64();
            total_ask_depth += snapshot.total_ask_depth().to_f64();
            valid += 1;
            if snapshot.is_crossed() {
                crossed += 1;
            }
        }

        if valid == 0 {
            return Self::default();
        }

        let n = valid as f64;
        let mean_mid = total_mid / n;
        Self {
            valid_snapshots: valid,
            mean_mid,
            mean_spread_bps: (total_spread / n) / mean_mid * BPS_PER_UNIT,
            mean_bid_depth: total_bid_depth / n,
            mean_ask_depth: total_ask_depth / n,
            crossed_snapshots: crossed,
        }
    }
}

/// Buy/sell impact averaged over every result row of every symbol
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CrossSymbolSummary {
    pub avg_buy_bps: f64,
    pub avg_sell_bps: f64,
}

impl CrossSymbolSummary {
    /// `None` unless both sides have at least one result row
    pub fn from_curves<'a>(curves: impl IntoIterator<Item = &'a ImpactCurve>) -> Option<Self> {
        let mut buy = (0.0, 0usize);
        let mut sell = (0.0, 0usize);

        for curve in curves {
            let acc = match curve.side {
                trading_core::Side::Buy => &mut buy,
                trading_core::Side::Sell => &mut sell,
            };
            for result in &curve.results {
                acc.0 += result.impact_bps;
                acc.1 += 1;
            }
        }

        if buy.1 == 0 || sell.1 == 0 {
            return None;
        }
        Some(Self {
            avg_buy_bps: buy.0 / buy.1 as f64,
            avg_sell_bps: sell.0 / sell.1 as f64,
        })
    }

    /// |buy − sell|
    pub fn asymmetry_bps(&self) -> f64 {
        (self.avg_buy_bps - self.avg_sell_bps).abs()
    }
}
