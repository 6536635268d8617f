//! Signed transaction amounts
//!
//! Amounts are plain `f64` values: the sign says income (positive) or expense
//! (negative). Text that doesn't read as a number coerces to NaN instead of
//! being rejected, and NaN flows through sums unchanged.

use serde::Serialize;
use std::fmt;

/// A signed amount of money
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Default)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Coerce free-form text into an amount
    ///
    /// Follows the usual string-to-number rules of web forms:
    /// - surrounding whitespace is ignored, and whitespace alone is zero
    /// - decimal and exponent forms (`12`, `-3.5`, `.5`, `1e3`)
    /// - `0x`, `0o` and `0b` integer literals
    /// - `Infinity`, `+Infinity`, `-Infinity`
    ///
    /// Anything else becomes NaN.
    ///
    /// # Examples
    /// ```
    /// use expense::models::Amount;
    /// assert_eq!(Amount::coerce(" -1500 ").value(), -1500.0);
    /// assert!(Amount::coerce("-abc").is_nan());
    /// ```
    pub fn coerce(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self(0.0);
        }
        Self(parse_numeric(trimmed).unwrap_or(f64::NAN))
    }

    pub const fn value(&self) -> f64 {
        self.0
    }

    pub fn is_nan(&self) -> bool {
        self.0.is_nan()
    }

    /// Positive amounts count as income
    pub fn is_income(&self) -> bool {
        self.0 > 0.0
    }

    /// Negative amounts count as expense
    pub fn is_expense(&self) -> bool {
        self.0 < 0.0
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::display::format_number(self.0))
    }
}

fn parse_numeric(s: &str) -> Option<f64> {
    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(value) = parse_prefixed_integer(s) {
        return Some(value);
    }

    // f64::from_str also takes "inf" and "nan", which must stay NaN here
    let decimal_chars = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !decimal_chars {
        return None;
    }

    s.parse::<f64>().ok()
}

/// `0x1F`, `0o17`, `0b101`; a known prefix with bad digits is NaN
fn parse_prefixed_integer(s: &str) -> Option<f64> {
    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        Some("0o") | Some("0O") => (8, &s[2..]),
        Some("0b") | Some("0B") => (2, &s[2..]),
        _ => return None,
    };

    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    });

    Some(value.unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_plain_numbers() {
        assert_eq!(Amount::coerce("5000").value(), 5000.0);
        assert_eq!(Amount::coerce("-500").value(), -500.0);
        assert_eq!(Amount::coerce("+12.5").value(), 12.5);
        assert_eq!(Amount::coerce(".5").value(), 0.5);
        assert_eq!(Amount::coerce("1e3").value(), 1000.0);
    }

    #[test]
    fn test_coerce_whitespace() {
        assert_eq!(Amount::coerce("  42\t").value(), 42.0);
        assert_eq!(Amount::coerce("   ").value(), 0.0);
    }

    #[test]
    fn test_coerce_non_numeric_is_nan() {
        assert!(Amount::coerce("-abc").is_nan());
        assert!(Amount::coerce("12abc").is_nan());
        assert!(Amount::coerce("1,000").is_nan());
        assert!(Amount::coerce("nan").is_nan());
        assert!(Amount::coerce("inf").is_nan());
        assert!(Amount::coerce("e5").is_nan());
        assert!(Amount::coerce("--1").is_nan());
    }

    #[test]
    fn test_coerce_infinity() {
        assert_eq!(Amount::coerce("Infinity").value(), f64::INFINITY);
        assert_eq!(Amount::coerce("-Infinity").value(), f64::NEG_INFINITY);
        assert!(Amount::coerce("infinity").is_nan());
    }

    #[test]
    fn test_coerce_prefixed_integers() {
        assert_eq!(Amount::coerce("0x1F").value(), 31.0);
        assert_eq!(Amount::coerce("0o17").value(), 15.0);
        assert_eq!(Amount::coerce("0b101").value(), 5.0);
        assert!(Amount::coerce("0x").is_nan());
        assert!(Amount::coerce("0b102").is_nan());
    }

    #[test]
    fn test_sign_classification() {
        assert!(Amount::new(10.0).is_income());
        assert!(Amount::new(-10.0).is_expense());

        let zero = Amount::new(0.0);
        assert!(!zero.is_income() && !zero.is_expense());

        let nan = Amount::coerce("x");
        assert!(!nan.is_income() && !nan.is_expense());
    }
}
