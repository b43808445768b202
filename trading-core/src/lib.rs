pub mod entities;
pub mod value_objects;

// Re-export value objects at crate root for convenience
pub use value_objects::{
    PRICE_DECIMALS, PRICE_SCALE, ParseError, Price, QUANTITY_DECIMALS, QUANTITY_SCALE, Quantity,
    Side, Value,
};

// Re-export entities at crate root
pub use entities::PriceLevel;
