//! Money type for catalog prices and cart totals.
//!
//! Amounts are integer cents, so a price range check or a cart total never
//! drifts the way `0.1 + 0.2` does.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Currencies a catalog can be priced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    CAD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::CAD => "CAD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::CAD => "CA$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "CAD" => Some(Currency::CAD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Which end of a price range a bound sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Lower,
    Upper,
}

/// Float noise tolerated when deciding an amount is already whole cents.
const CENT_EPSILON: f64 = 1e-6;

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents. May be negative when it comes from user-entered bounds.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount, rounding to the nearest cent.
    ///
    /// ```
    /// use parts_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(89.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 8999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let amount_cents = (amount * 100.0).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Parse user-entered text such as `"49.5"` or `"$100"`.
    ///
    /// Anything unparseable becomes zero, the same way an empty or garbled
    /// number field reads as 0 in the storefront.
    pub fn parse_or_zero(input: &str, currency: Currency) -> Self {
        parse_decimal(input, currency)
            .map(|amount| Self::from_decimal(amount, currency))
            .unwrap_or_else(|| Self::zero(currency))
    }

    /// Convert a price bound to whole cents without widening it.
    ///
    /// Prices are whole cents, so a lower bound rounds up and an upper bound
    /// rounds down: `max = 89.985` excludes a $89.99 part and `min = 0.004`
    /// excludes a free one.
    ///
    /// ```
    /// use parts_commerce::money::{Bound, Currency, Money};
    /// assert_eq!(Money::bound_from_decimal(89.985, Bound::Upper, Currency::USD).amount_cents, 8998);
    /// assert_eq!(Money::bound_from_decimal(0.004, Bound::Lower, Currency::USD).amount_cents, 1);
    /// ```
    pub fn bound_from_decimal(amount: f64, bound: Bound, currency: Currency) -> Self {
        let scaled = amount * 100.0;
        let nearest = scaled.round();
        // 89.99 * 100 is 8998.999..., which is a whole cent amount.
        let cents = if (scaled - nearest).abs() < CENT_EPSILON {
            nearest
        } else {
            match bound {
                Bound::Lower => scaled.ceil(),
                Bound::Upper => scaled.floor(),
            }
        };
        Self::new(cents as i64, currency)
    }

    /// [`Money::parse_or_zero`] for a price bound, see [`Money::bound_from_decimal`].
    pub fn parse_bound_or_zero(input: &str, bound: Bound, currency: Currency) -> Self {
        parse_decimal(input, currency)
            .map(|amount| Self::bound_from_decimal(amount, bound, currency))
            .unwrap_or_else(|| Self::zero(currency))
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Format as a display string (e.g., "$89.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format without symbol (e.g., "89.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }

    /// Add another amount, saturating at the `i64` bounds.
    pub fn saturating_add(&self, other: &Money) -> Money {
        Money::new(
            self.amount_cents.saturating_add(other.amount_cents),
            self.currency,
        )
    }

    /// Multiply by a quantity, saturating at the `i64` bounds.
    pub fn saturating_mul(&self, quantity: u32) -> Money {
        Money::new(
            self.amount_cents.saturating_mul(i64::from(quantity)),
            self.currency,
        )
    }

    /// Inclusive range check on the amount.
    ///
    /// Currency is not compared: bounds typed by a shopper carry the
    /// catalog's currency by construction.
    pub fn is_within(&self, min: &Money, max: &Money) -> bool {
        min.amount_cents <= self.amount_cents && self.amount_cents <= max.amount_cents
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(&other)
    }
}

fn parse_decimal(input: &str, currency: Currency) -> Option<f64> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix(currency.symbol()).unwrap_or(trimmed);
    trimmed
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
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
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(12.99, Currency::USD).amount_cents, 1299);
        assert_eq!(Money::from_decimal(0.1 + 0.2, Currency::USD).amount_cents, 30);
        assert_eq!(Money::from_decimal(-5.0, Currency::USD).amount_cents, -500);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(7197, Currency::USD).display(), "$71.97");
        assert_eq!(Money::new(5, Currency::USD).display(), "$0.05");
        assert_eq!(Money::new(-250, Currency::USD).display(), "$-2.50");
        assert_eq!(Money::zero(Currency::EUR).display(), "\u{20ac}0.00");
    }

    #[test]
    fn test_parse_or_zero() {
        assert_eq!(Money::parse_or_zero("49.5", Currency::USD).amount_cents, 4950);
        assert_eq!(Money::parse_or_zero(" $100 ", Currency::USD).amount_cents, 10000);
        assert_eq!(Money::parse_or_zero("-20", Currency::USD).amount_cents, -2000);
        assert!(Money::parse_or_zero("", Currency::USD).is_zero());
        assert!(Money::parse_or_zero("abc", Currency::USD).is_zero());
        assert!(Money::parse_or_zero("NaN", Currency::USD).is_zero());
    }

    #[test]
    fn test_is_within_is_inclusive() {
        let min = Money::new(5000, Currency::USD);
        let max = Money::new(10000, Currency::USD);
        assert!(Money::new(5000, Currency::USD).is_within(&min, &max));
        assert!(Money::new(10000, Currency::USD).is_within(&min, &max));
        assert!(!Money::new(10001, Currency::USD).is_within(&min, &max));
        // Inverted bounds admit nothing.
        assert!(!Money::new(7500, Currency::USD).is_within(&max, &min));
    }

    #[test]
    fn test_sub_cent_bounds_never_widen_the_range() {
        let price = Money::new(8999, Currency::USD);
        let min = Money::zero(Currency::USD);

        let max = Money::bound_from_decimal(89.985, Bound::Upper, Currency::USD);
        assert_eq!(max.amount_cents, 8998);
        assert!(!price.is_within(&min, &max));

        let max = Money::bound_from_decimal(89.99, Bound::Upper, Currency::USD);
        assert_eq!(max.amount_cents, 8999);
        assert!(price.is_within(&min, &max));

        let min = Money::bound_from_decimal(0.004, Bound::Lower, Currency::USD);
        assert_eq!(min.amount_cents, 1);
        assert!(!Money::zero(Currency::USD).is_within(&min, &max));

        assert_eq!(
            Money::bound_from_decimal(50.0, Bound::Lower, Currency::USD).amount_cents,
            5000
        );
        assert_eq!(
            Money::bound_from_decimal(-0.005, Bound::Upper, Currency::USD).amount_cents,
            -1
        );
    }

    #[test]
    fn test_parse_bound_or_zero() {
        assert_eq!(
            Money::parse_bound_or_zero("$89.985", Bound::Upper, Currency::USD).amount_cents,
            8998
        );
        assert_eq!(
            Money::parse_bound_or_zero("0.004", Bound::Lower, Currency::USD).amount_cents,
            1
        );
        assert!(Money::parse_bound_or_zero("abc", Bound::Lower, Currency::USD).is_zero());
    }

    #[test]
    fn test_saturating_arithmetic() {
        let m = Money::new(i64::MAX - 1, Currency::USD);
        assert_eq!(m.saturating_mul(3).amount_cents, i64::MAX);
        assert_eq!((m + Money::new(10, Currency::USD)).amount_cents, i64::MAX);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("GBP"), Some(Currency::GBP));
        assert_eq!(Currency::from_code("XYZ"), None);
    }
}
