mod error;
mod price;
mod quantity;
mod side;

pub use error::ParseError;
pub use price::{PRICE_DECIMALS, PRICE_SCALE, Price, Value};
pub use quantity::{QUANTITY_DECIMALS, QUANTITY_SCALE, Quantity};
pub use side::Side;
