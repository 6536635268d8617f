//! Number and currency text
//!
//! Totals are shown with two decimals; history rows show the bare magnitude
//! with a sign glyph in front of the currency symbol.

use crate::models::Amount;

/// Shortest text for a number
///
/// Uses the fewest digits that read back as the same value. Magnitudes of
/// `1e21` and above, or below `1e-6`, switch to exponent form (`1e+21`,
/// `1.5e-7`). NaN and infinities are spelled out and negative zero prints
/// as `0`.
pub fn format_number(value: f64) -> String {
    if let Some(special) = non_finite(value) {
        return special.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let (digits, exponent) = shortest_digits(value.abs());
    format!("{}{}", sign, place_digits(&digits, exponent))
}

/// Significant digits and decimal exponent of the shortest round-trip form
///
/// `1500.0` gives `("15", 3)`, meaning `1.5e3`.
fn shortest_digits(magnitude: f64) -> (String, i32) {
    let scientific = format!("{:e}", magnitude);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    (digits, exponent.parse().unwrap_or(0))
}

fn place_digits(digits: &str, exponent: i32) -> String {
    let k = digits.len() as i32;
    let n = exponent + 1;

    if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let exp_sign = if n - 1 < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, exp_sign, (n - 1).abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, exp_sign, (n - 1).abs())
        }
    }
}

/// Text for a number with exactly two decimals
///
/// A value exactly halfway between two cents rounds away from zero, so
/// `0.125` gives `0.13`. Magnitudes of `1e21` and above fall back to
/// [`format_number`].
pub fn format_fixed(value: f64) -> String {
    if let Some(special) = non_finite(value) {
        return special.to_string();
    }
    if value.abs() >= 1e21 {
        return format_number(value);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    let text = if is_cent_tie(magnitude) {
        // Ties have at most three decimals, so this expansion is exact
        let exact = format!("{:.3}", magnitude);
        round_up_last_digit(&exact[..exact.len() - 1])
    } else {
        format!("{:.2}", magnitude)
    };
    format!("{}{}", sign, text)
}

/// Whether `magnitude` sits exactly between two hundredths
///
/// Such a value is `j / 8` for an odd integer `j`; scaling by eight is exact.
fn is_cent_tie(magnitude: f64) -> bool {
    let eighths = magnitude * 8.0;
    eighths.fract() == 0.0 && eighths % 2.0 == 1.0
}

/// Add one unit in the last place of a plain decimal string
fn round_up_last_digit(text: &str) -> String {
    let mut bytes = text.as_bytes().to_vec();
    let mut carry = true;
    for byte in bytes.iter_mut().rev() {
        if !carry {
            break;
        }
        match *byte {
            b'.' => continue,
            b'9' => *byte = b'0',
            _ => {
                *byte += 1;
                carry = false;
            }
        }
    }

    let rounded = String::from_utf8_lossy(&bytes).into_owned();
    if carry {
        format!("1{}", rounded)
    } else {
        rounded
    }
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

/// `"₹ 18200.00"`
pub fn currency_fixed(symbol: &str, value: f64) -> String {
    format!("{} {}", symbol, format_fixed(value))
}

/// `"-₹ 300"` or `"+₹ 20000"`
///
/// Anything that isn't an expense, NaN included, gets the plus sign.
pub fn signed_amount(symbol: &str, amount: Amount) -> String {
    let sign = if amount.is_expense() { "-" } else { "+" };
    format!("{}{} {}", sign, symbol, format_number(amount.abs().value()))
}
