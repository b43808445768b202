//! Fixed-point price representation
//!
//! Uses i64 with 8 implied decimal places (scale = 100_000_000).
//! Vendor quotes carry up to 9 decimals; the 9th is truncated on parse.

use super::error::{ParseError, parse_fixed_point};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// Scale factor: 8 decimal places
pub const PRICE_DECIMALS: u8 = 8;
pub const PRICE_SCALE: i64 = 100_000_000;

/// Fixed-point price with 8 decimal places
///
/// Internally stored as i64 where the value represents:
/// actual_price = raw_value / 100_000_000
///
/// Example: 123.45 is stored as 12_345_000_000
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct Price(i64);

impl Price {
    pub const ZERO: Price = Price(0);
    pub const DECIMALS: u8 = PRICE_DECIMALS;
    pub const SCALE: i64 = PRICE_SCALE;

    /// Create from raw scaled value
    #[inline(always)]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Create from integer (whole number)
    #[inline(always)]
    pub const fn from_int(value: i64) -> Self {
        Self(value * PRICE_SCALE)
    }

    /// Get the raw scaled value
    #[inline(always)]
    pub const fn raw(self) -> i64 {
        self.0
    }

    #[inline(always)]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Parse from string (e.g., "123.45678901")
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        parse_fixed_point(s, PRICE_DECIMALS).map(Self)
    }

    /// Multiply by quantity, returning Value (i128 for overflow safety)
    #[inline(always)]
    pub const fn mul_qty(self, qty: super::Quantity) -> Value {
        // price (8 dec) × qty (8 dec) = 16 dec, divide by SCALE to get 8 dec
        Value::from_raw((self.0 as i128 * qty.raw() as i128) / PRICE_SCALE as i128)
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / PRICE_SCALE as f64
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = PRICE_SCALE as u64;
        write!(f, "{}{}.{:08}", sign, abs / scale, abs % scale)
    }
}

impl Sub for Price {
    type Output = Price;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Price(self.0 - rhs.0)
    }
}

/// Value type for price × quantity results
///
/// Uses i128 to handle the larger range from multiplication.
/// Stored with 8 decimal places like Price.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct Value(i128);

impl Value {
    pub const ZERO: Value = Value(0);

    #[inline(always)]
    pub const fn from_raw(raw: i128) -> Self {
        Self(raw)
    }

    #[inline(always)]
    pub const fn raw(self) -> i128 {
        self.0
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / PRICE_SCALE as f64
    }

    /// Average price per unit of `qty`, or `None` for an empty quantity
    pub fn per_unit(self, qty: super::Quantity) -> Option<f64> {
        if !qty.is_positive() {
            return None;
        }
        Some(self.to_f64() / qty.to_f64())
    }
}

impl Add for Value {
    type Output = Value;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Value(self.0 + rhs.0)
    }
}

impl AddAssign for Value {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = PRICE_SCALE as u128;
        write!(f, "{}{}.{:08}", sign, abs / scale, abs % scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Quantity;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_int() {
        let p = Price::from_int(100);
        assert_eq!(p.raw(), 100_00000000);
    }

    #[test]
    fn test_parse() {
        let p = Price::parse("123.45").unwrap();
        assert_eq!(p.raw(), 123_45000000);

        let p = Price::parse("0.00000001").unwrap();
        assert_eq!(p.raw(), 1);

        // Nine-decimal vendor quote
        let p = Price::parse("2.345000000").unwrap();
        assert_eq!(p.raw(), 2_34500000);

        assert!(Price::parse("").is_err());
        assert!(Price::parse("n/a").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_raw(123_45000000).to_string(), "123.45000000");
        assert_eq!(Price::from_raw(-5000000).to_string(), "-0.05000000");
    }

    #[test]
    fn test_positive() {
        assert!(Price::from_int(1).is_positive());
        assert!(!Price::ZERO.is_positive());
        assert!(!Price::from_int(-1).is_positive());
    }

    #[test]
    fn test_mul_qty_and_per_unit() {
        let cost = Price::parse("100.05").unwrap().mul_qty(Quantity::from_int(10))
            + Price::parse("100.00").unwrap().mul_qty(Quantity::from_int(50));
        assert_eq!(cost.to_string(), "6000.50000000");

        let vwap = cost.per_unit(Quantity::from_int(60)).unwrap();
        assert_relative_eq!(vwap, 100.008333333, epsilon = 1e-8);
        assert!(cost.per_unit(Quantity::ZERO).is_none());
    }

    #[test]
    fn test_to_f64() {
        let p = Price::parse("123.45").unwrap();
        assert_relative_eq!(p.to_f64(), 123.45, epsilon = 1e-9);
    }
}
