//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so that rounding an allowance to
//! two decimal places is exact. Arithmetic is checked: a result that does not
//! fit in an i64 is reported as `None` instead of wrapping or panicking.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use daily_allowance::models::Money;
    /// let amount = Money::from_cents(2550); // 25.50
    /// assert_eq!(amount.dollars(), 25);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add two amounts, `None` on overflow
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Subtract `other`, `None` on overflow
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Divide evenly into `parts` shares, rounding half away from zero to the cent
    ///
    /// Returns `None` when `parts` is not strictly positive.
    ///
    /// # Examples
    /// ```
    /// use daily_allowance::models::Money;
    /// assert_eq!(Money::from_cents(10_000).split_even(3), Some(Money::from_cents(3333)));
    /// assert_eq!(Money::from_cents(200).split_even(3), Some(Money::from_cents(67)));
    /// assert_eq!(Money::from_cents(100).split_even(0), None);
    /// ```
    pub fn split_even(&self, parts: i64) -> Option<Self> {
        if parts <= 0 {
            return None;
        }

        let quotient = self.0 / parts;
        let remainder = (self.0 % parts).abs();

        // remainder >= parts / 2, written without overflowing
        if remainder >= parts - remainder {
            Some(Self(quotient + self.0.signum()))
        } else {
            Some(Self(quotient))
        }
    }

    /// Parse a money amount, accepting an optional leading `$`
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", ".5", "10.505"
    /// (digits past the cent are rounded half away from zero).
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        Self::parse_with_symbol(s, "$")
    }

    /// Parse a money amount, accepting an optional leading currency symbol
    pub fn parse_with_symbol(s: &str, symbol: &str) -> Result<Self, MoneyParseError> {
        let original = s.trim();
        if original.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, rest) = match original.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, original),
        };

        let rest = if symbol.is_empty() {
            rest
        } else {
            rest.strip_prefix(symbol).unwrap_or(rest)
        };

        let (whole, fraction) = match rest.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (rest, ""),
        };

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(MoneyParseError::InvalidFormat(original.to_string()));
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| MoneyParseError::OutOfRange(original.to_string()))?
        };

        let digits: Vec<i64> = fraction
            .bytes()
            .map(|b| i64::from(b - b'0'))
            .chain(std::iter::repeat(0))
            .take(3)
            .collect();
        let mut fraction_cents = digits[0] * 10 + digits[1];
        if digits[2] >= 5 {
            fraction_cents += 1;
        }

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction_cents))
            .ok_or_else(|| MoneyParseError::OutOfRange(original.to_string()))?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
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

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "no amount given"),
            MoneyParseError::InvalidFormat(s) => write!(f, "invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
        assert_eq!(Money::from_cents(-5).format_with_symbol("€"), "-€0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a.checked_add(b), Some(Money::from_cents(1500)));
        assert_eq!(a.checked_sub(b), Some(Money::from_cents(500)));
        assert_eq!(b.checked_sub(a), Some(Money::from_cents(-500)));
    }

    #[test]
    fn test_arithmetic_overflow() {
        let max = Money::from_cents(i64::MAX);
        let min = Money::from_cents(i64::MIN);

        assert_eq!(max.checked_add(Money::from_cents(1)), None);
        assert_eq!(min.checked_sub(Money::from_cents(1)), None);
        assert_eq!(max.checked_sub(max), Some(Money::zero()));
    }

    #[test]
    fn test_display_extremes() {
        assert_eq!(
            Money::from_cents(i64::MAX).to_string(),
            "$92233720368547758.07"
        );
        assert_eq!(
            Money::from_cents(i64::MIN).to_string(),
            "-$92233720368547758.08"
        );
    }

    #[test]
    fn test_split_even_rounding() {
        assert_eq!(Money::from_cents(10_000).split_even(4), Some(Money::from_cents(2500)));
        // 1.00 / 8 = 0.125 -> 0.13
        assert_eq!(Money::from_cents(100).split_even(8), Some(Money::from_cents(13)));
        // 1.00 / 3 = 0.333.. -> 0.33
        assert_eq!(Money::from_cents(100).split_even(3), Some(Money::from_cents(33)));
        // negative balances round away from zero as well
        assert_eq!(Money::from_cents(-100).split_even(8), Some(Money::from_cents(-13)));
    }

    #[test]
    fn test_split_even_rejects_non_positive_parts() {
        assert_eq!(Money::from_cents(100).split_even(0), None);
        assert_eq!(Money::from_cents(100).split_even(-2), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("10.").unwrap().cents(), 1000);
        assert_eq!(Money::parse(" 7 ").unwrap().cents(), 700);
    }

    #[test]
    fn test_parse_rounds_sub_cent_digits() {
        assert_eq!(Money::parse("10.505").unwrap().cents(), 1051);
        assert_eq!(Money::parse("10.504").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-0.999").unwrap().cents(), -100);
    }

    #[test]
    fn test_parse_custom_symbol() {
        assert_eq!(Money::parse_with_symbol("€12.30", "€").unwrap().cents(), 1230);
        assert!(Money::parse_with_symbol("$12.30", "€").is_err());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(Money::parse(""), Err(MoneyParseError::Empty));
        assert!(matches!(Money::parse("abc"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("1.2.3"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("."), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("1e5"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("--5"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(
            Money::parse("99999999999999999999"),
            Err(MoneyParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_comparison() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert!(a > b);
        assert!(b < a);
        assert_eq!(a, Money::from_cents(1000));
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
