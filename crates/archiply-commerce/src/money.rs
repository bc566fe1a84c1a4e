//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The storefront deals
//! in a single currency, so amounts carry no currency code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;

/// Symbol prefixed to displayed amounts.
pub const CURRENCY_SYMBOL: &str = "$";

/// A monetary amount in cents.
///
/// Serializes as the bare integer number of cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from whole currency units.
    ///
    /// ```
    /// use archiply_commerce::Money;
    /// assert_eq!(Money::from_units(799).amount_cents, 79900);
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self::new(units * 100)
    }

    /// Create a Money value from a decimal amount, rounding to the nearest cent.
    ///
    /// ```
    /// use archiply_commerce::Money;
    /// let price = Money::from_decimal(49.99);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::new((amount * 100.0).round() as i64)
    }

    /// Create a zero amount.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Format as a display string (e.g., "$49.99", "-$2.50").
    pub fn display(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        format!("{}{}{}.{:02}", sign, CURRENCY_SYMBOL, abs / 100, abs % 100)
    }

    /// Format as a display string without symbol, always two decimal places.
    pub fn display_amount(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }

    /// Try to add another amount, returning None on overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        self.amount_cents.checked_add(other.amount_cents).map(Money::new)
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: u32) -> Option<Money> {
        self.amount_cents
            .checked_mul(i64::from(factor))
            .map(Money::new)
    }

    /// Add, clamping at the numeric bounds.
    pub fn saturating_add(&self, other: &Money) -> Money {
        Money::new(self.amount_cents.saturating_add(other.amount_cents))
    }

    /// Multiply by a quantity, clamping at the numeric bounds.
    pub fn saturating_multiply(&self, factor: u32) -> Money {
        Money::new(self.amount_cents.saturating_mul(i64::from(factor)))
    }

    /// Sum amounts, returning None on overflow.
    pub fn try_sum<'a>(iter: impl IntoIterator<Item = &'a Money>) -> Option<Money> {
        iter.into_iter()
            .try_fold(Money::zero(), |acc, m| acc.try_add(m))
    }
}

impl<'a> Sum<&'a Money> for Money {
    /// Saturating sum.
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc.saturating_add(m))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc.saturating_add(&m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_cents() {
        let m = Money::new(4999);
        assert_eq!(m.amount_cents, 4999);
    }

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(49.99).amount_cents, 4999);
        assert_eq!(Money::from_decimal(0.1 + 0.2).amount_cents, 30);
    }

    #[test]
    fn test_money_to_decimal() {
        let m = Money::new(4999);
        assert!((m.to_decimal() - 49.99).abs() < 0.001);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999).display(), "$49.99");
        assert_eq!(Money::from_units(1598).display(), "$1598.00");
        assert_eq!(Money::new(5).display(), "$0.05");
        assert_eq!(Money::zero().display(), "$0.00");
        assert_eq!(Money::new(-250).display_amount(), "-2.50");
        assert_eq!(Money::new(-250).display(), "-$2.50");
        assert_eq!(Money::new(-250).to_string(), "-$2.50");
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::from_units(799);
        assert_eq!(m.try_multiply(2), Some(Money::from_units(1598)));
        assert_eq!(Money::new(i64::MAX).try_multiply(2), None);
        assert_eq!(Money::new(i64::MAX).saturating_multiply(2), Money::new(i64::MAX));
    }

    #[test]
    fn test_money_sum() {
        let amounts = [Money::new(100), Money::new(250)];
        assert_eq!(Money::try_sum(&amounts), Some(Money::new(350)));
        assert_eq!(amounts.iter().sum::<Money>(), Money::new(350));
        assert_eq!(Money::try_sum(std::iter::empty::<&Money>()), Some(Money::zero()));
        assert_eq!(Money::try_sum(&[Money::new(i64::MAX), Money::new(1)]), None);
    }

    #[test]
    fn test_money_serializes_as_cents() {
        assert_eq!(serde_json::to_string(&Money::new(79900)).unwrap(), "79900");
    }
}
