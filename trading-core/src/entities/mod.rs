mod price_level;

pub use price_level::PriceLevel;
