//! Impact Simulator
//!
//! Runs an [`ImpactModel`] over every snapshot for every size in the order
//! size menu and averages the samples per size.
//!
//! Only snapshots that filled at least one share contribute to a size's
//! average, and sizes without any sample produce no row. Patchy liquidity can
//! therefore make the curve non-monotonic; that is preserved as measured.

use super::impact_models::{BookWalkImpact, ImpactModel};
use crate::domain::{BookSnapshot, ImpactCurve, ImpactResult, OrderSizeMenu};
use tracing::{debug, info, warn};
use trading_core::{Quantity, Side};

/// Simulation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatorConfig {
    pub menu: OrderSizeMenu,
    /// Leave crossed or locked books out of the averages
    pub skip_crossed_books: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            menu: OrderSizeMenu::default(),
            skip_crossed_books: true,
        }
    }
}

/// Per-size impact aggregation over a symbol's snapshots
pub struct ImpactSimulator {
    model: Box<dyn ImpactModel>,
    config: SimulatorConfig,
}

impl ImpactSimulator {
    pub fn new(model: Box<dyn ImpactModel>, config: SimulatorConfig) -> Self {
        Self { model, config }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// One result per order size that produced at least one sample
    pub fn simulate(&self, snapshots: &[BookSnapshot], side: Side) -> Vec<ImpactResult> {
        info!(
            side = %side,
            model = self.model.name(),
            snapshots = snapshots.len(),
            "Calculating temporary impact"
        );

        let eligible: Vec<&BookSnapshot> = snapshots
            .iter()
            .filter(|snapshot| !(self.config.skip_crossed_books && snapshot.is_crossed()))
            .collect();

        let mut results = Vec::new();
        let mut impacts = Vec::with_capacity(eligible.len());

        for order_size in self.config.menu.sizes() {
            let Some(requested) = i64::try_from(order_size)
                .ok()
                .and_then(Quantity::checked_from_int)
            else {
                warn!(order_size, "Order size not representable, stopping menu");
                break;
            };

            impacts.clear();
            let mut partial = 0usize;
            let mut deepest = 0usize;
            for sample in eligible
                .iter()
                .filter_map(|snapshot| self.model.sample(requested, side, snapshot))
            {
                partial += usize::from(sample.is_partial());
                deepest = deepest.max(sample.levels);
                impacts.push(sample.impact);
            }

            if impacts.is_empty() {
                debug!(side = %side, order_size, "No fillable snapshots for order size");
                continue;
            }
            debug!(
                side = %side,
                order_size,
                samples = impacts.len(),
                partial,
                deepest,
                "Averaged order size"
            );

            let avg_impact = impacts.iter().sum::<f64>() / impacts.len() as f64;
            results.push(ImpactResult::new(order_size, avg_impact, impacts.len()));
        }

        results
    }

    /// [`simulate`](Self::simulate) wrapped as a curve for `symbol`
    pub fn curve(&self, symbol: &str, snapshots: &[BookSnapshot], side: Side) -> ImpactCurve {
        ImpactCurve::new(symbol, side, self.simulate(snapshots, side))
    }
}

impl Default for ImpactSimulator {
    fn default() -> Self {
        Self::new(Box::new(BookWalkImpact::new()), SimulatorConfig::default())
    }
}
