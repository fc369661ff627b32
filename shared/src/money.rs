//! Money in integer minor units
//!
//! Prices are carried as cents (`i64`) everywhere inside the catalog. Decimal
//! conversion happens only at the boundary, through `rust_decimal`, rounded to
//! 2 decimal places half away from zero. The JSON form is a plain decimal
//! number (`12.5`), matching the REST payloads. Amounts that do not fit in
//! `i64` cents are rejected, never clamped.

use rust_decimal::prelude::*;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Monetary amount in cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

/// Maximum allowed catalog price (1,000,000.00)
pub const MAX_PRICE: Money = Money(100_000_000);

impl Money {
    pub const ZERO: Money = Money(0);

    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    #[inline]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Round a decimal amount to cents, `None` when it does not fit
    pub fn from_decimal(value: Decimal) -> Option<Self> {
        value
            .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::ONE_HUNDRED)?
            .to_i64()
            .map(Self)
    }

    /// Convert a float amount, `None` for non-finite or out-of-range input
    pub fn from_f64(value: f64) -> Option<Self> {
        Decimal::from_f64(value).and_then(Self::from_decimal)
    }

    #[inline]
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, DECIMAL_PLACES)
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.to_decimal().to_f64().unwrap_or_default()
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Arithmetic mean rounded to the cent, `None` for an empty input
    pub fn average(values: impl IntoIterator<Item = Money>) -> Option<Money> {
        let (total, count) = values
            .into_iter()
            .fold((0i128, 0i64), |(sum, n), m| (sum + i128::from(m.0), n + 1));
        if count == 0 {
            return None;
        }
        let mean = Decimal::from_i128(total)? / Decimal::from(count);
        mean.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.to_decimal(), serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    /// Accepts a JSON number or a decimal string; parsed as `Decimal`, not `f64`
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <Decimal as Deserialize>::deserialize(deserializer)?;
        Money::from_decimal(value)
            .ok_or_else(|| D::Error::custom(format!("amount {value} is out of range")))
    }
}
