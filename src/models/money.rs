//! Money type for representing currency amounts
//!
//! Amounts are stored as plain JSON numbers, so the in-memory representation
//! is an `f64`. Equal splits are exact divisions of that value; no remainder is
//! redistributed. Formatting always rounds to two decimal places.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Tolerance used when comparing amounts that went through division
pub const EPSILON: f64 = 1e-9;

/// A monetary amount in currency units (e.g. `12.5` is twelve fifty)
///
/// Only finite values serialize. JSON has no spelling for NaN or infinity,
/// so writing one is an error rather than a `null` that could never be read
/// back.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    /// Create a Money amount from a raw value
    ///
    /// # Examples
    /// ```
    /// use splitledger::models::Money;
    /// let amount = Money::new(10.5);
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Value rounded to whole cents
    pub fn rounded_cents(&self) -> i64 {
        (self.0 * 100.0).round() as i64
    }

    /// Check if the amount is positive (after rounding to cents)
    pub fn is_positive(&self) -> bool {
        self.rounded_cents() > 0
    }

    /// Check if the amount is negative (after rounding to cents)
    pub fn is_negative(&self) -> bool {
        self.rounded_cents() < 0
    }

    /// Check that the value is a real number
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Divide into `parts` equal shares; zero parts yields zero
    pub fn divide_evenly(&self, parts: usize) -> Self {
        if parts == 0 {
            return Self::zero();
        }
        Self(self.0 / parts as f64)
    }

    /// Compare two amounts within [`EPSILON`]
    pub fn approx_eq(&self, other: Money) -> bool {
        (self.0 - other.0).abs() <= EPSILON
    }

    /// Share of `total` this amount represents, in percent
    pub fn percentage_of(&self, total: Money) -> f64 {
        if total.0 == 0.0 {
            0.0
        } else {
            self.0 / total.0 * 100.0
        }
    }

    /// Parse a money amount from user input
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest).trim();

        // Reject "inf"/"NaN" spellings that f64::from_str accepts
        if !rest
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == 'e' || c == 'E' || c == '+' || c == '-')
        {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let value: f64 = rest
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;
        if !value.is_finite() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        Ok(Self(if negative { -value } else { value }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let cents = self.rounded_cents();
        let sign = if cents < 0 { "-" } else { "" };
        let cents = cents.abs();
        format!("{}{}{}.{:02}", sign, symbol, cents / 100, cents % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.0.is_finite() {
            return Err(serde::ser::Error::custom(format!(
                "cannot store non-finite amount {}",
                self.0
            )));
        }
        serializer.serialize_f64(self.0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl From<f64> for Money {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyParseError {
    #[error("Amount is empty")]
    Empty,
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),
}
