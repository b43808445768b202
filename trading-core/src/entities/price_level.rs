use crate::value_objects::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// A single resting quote at one depth tier of the order book
///
/// The zero default stands for an empty tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLevel {
    pub price: Price,
    pub size: Quantity,
}

impl PriceLevel {
    pub fn new(price: Price, size: Quantity) -> Self {
        PriceLevel { price, size }
    }

    /// Tradeable liquidity: positive price and positive size
    pub fn is_valid(&self) -> bool {
        self.price.is_positive() && self.size.is_positive()
    }
}

impl From<(Price, Quantity)> for PriceLevel {
    fn from((price, size): (Price, Quantity)) -> Self {
        PriceLevel { price, size }
    }
}
