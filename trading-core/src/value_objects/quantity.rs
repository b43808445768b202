//! Fixed-point quantity representation
//!
//! Uses i64 with 8 implied decimal places (scale = 100_000_000), the same
//! scale as [`Price`](super::Price) so that `price × quantity` stays exact.

use super::error::{ParseError, parse_fixed_point};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Scale factor: 8 decimal places (same as Price for consistency)
pub const QUANTITY_DECIMALS: u8 = 8;
pub const QUANTITY_SCALE: i64 = 100_000_000;

/// Fixed-point quantity with 8 decimal places
///
/// Example: 123.45 is stored as 12_345_000_000
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct Quantity(i64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);
    pub const DECIMALS: u8 = QUANTITY_DECIMALS;
    pub const SCALE: i64 = QUANTITY_SCALE;
    /// Largest whole number of units representable at this scale
    pub const MAX_WHOLE: i64 = i64::MAX / QUANTITY_SCALE;

    #[inline(always)]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Create from integer (whole number of units)
    #[inline(always)]
    pub const fn from_int(value: i64) -> Self {
        Self(value * QUANTITY_SCALE)
    }

    /// Like [`from_int`](Self::from_int), `None` on overflow
    #[inline]
    pub const fn checked_from_int(value: i64) -> Option<Self> {
        match value.checked_mul(QUANTITY_SCALE) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }

    #[inline(always)]
    pub const fn raw(self) -> i64 {
        self.0
    }

    #[inline(always)]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Parse a decimal quantity (e.g., "123.45678901")
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        parse_fixed_point(s, QUANTITY_DECIMALS).map(Self)
    }

    /// Whole units, truncating any fractional part
    #[inline]
    pub const fn whole(self) -> i64 {
        self.0 / QUANTITY_SCALE
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / QUANTITY_SCALE as f64
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % QUANTITY_SCALE == 0 {
            return write!(f, "{}", self.whole());
        }
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = QUANTITY_SCALE as u64;
        write!(f, "{}{}.{:08}", sign, abs / scale, abs % scale)
    }
}

impl Add for Quantity {
    type Output = Quantity;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Quantity(self.0 + rhs.0)
    }
}

impl AddAssign for Quantity {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Quantity {
    type Output = Quantity;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Quantity(self.0 - rhs.0)
    }
}

impl SubAssign for Quantity {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Sum for Quantity {
    fn sum<I: Iterator<Item = Quantity>>(iter: I) -> Self {
        iter.fold(Quantity::ZERO, Add::add)
    }
}
