//! Monetary text parsing and fixed-precision currency formatting.
//!
//! Amounts arrive as pre-rendered element text and leave as
//! `<amount><separator><suffix>`. Parsing reads the longest numeric prefix and
//! ignores the rest, which is what makes re-formatting already formatted text
//! a fixed point: `"100.00 PLN"` parses back to `100`.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

use serde::Deserialize;

use crate::consts::{DEFAULT_MONEY_PRECISION, DEFAULT_MONEY_SEPARATOR, DEFAULT_MONEY_SUFFIX};

/// Every finite `f64` has a terminating decimal expansion within this many fractional digits.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// How monetary values are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MoneyFormat {
    /// Fractional digits after rounding.
    pub precision: usize,
    /// Text between the amount and the suffix.
    pub separator: String,
    /// Currency suffix.
    pub suffix: String,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            precision: DEFAULT_MONEY_PRECISION,
            separator: DEFAULT_MONEY_SEPARATOR.to_owned(),
            suffix: DEFAULT_MONEY_SUFFIX.to_owned(),
        }
    }
}

impl MoneyFormat {
    /// Render `value` as `<amount><separator><suffix>`.
    ///
    /// Non-finite values render as zero.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        let value = if value.is_finite() { value } else { 0.0 };
        format!("{}{}{}", to_fixed(value, self.precision), self.separator, self.suffix)
    }
}

/// Parse the leading decimal number of `text`, or zero when there is none.
///
/// Leading whitespace is skipped and anything after the number is ignored.
/// Results that overflow to infinity are zero as well.
#[must_use]
pub fn parse_amount(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let len = numeric_prefix_len(trimmed);
    if len == 0 {
        return 0.0;
    }
    match trimmed[..len].parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Byte length of the `[+-]digits[.[digits]][(e|E)[+-]digits]` (or
/// `[+-].digits[...]`) prefix of `s`.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_start = end;
    end = skip_digits(bytes, end);
    let mut mantissa_digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(bytes, end + 1);
        // A bare `.` belongs to the number only after integer digits.
        if mantissa_digits > 0 || frac_end > end + 1 {
            mantissa_digits += frac_end - end - 1;
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = skip_digits(bytes, exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }
    end
}

fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    pos
}

/// Round `value` to `precision` fractional digits, ties away from zero.
///
/// Rounding works on the exact binary value, so `1.005` (stored just below
/// `1.005`) gives `1.00` while `0.125` (exact) gives `0.13`. Negative inputs
/// keep their sign even when they round to zero.
#[must_use]
pub fn to_fixed(value: f64, precision: usize) -> String {
    let negative = value < 0.0;
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(precision))
        .map(|b| b - b'0')
        .collect();

    if fraction.as_bytes().get(precision).is_some_and(|&b| b >= b'5') {
        increment(&mut digits);
    }

    let whole_len = digits.len() - precision;
    let mut out = String::with_capacity(digits.len() + 2);
    if negative {
        out.push('-');
    }
    for (idx, digit) in digits.iter().enumerate() {
        if idx == whole_len {
            out.push('.');
        }
        out.push(char::from(b'0' + digit));
    }
    out
}

/// Add one unit in the last place to a big-endian decimal digit string.
fn increment(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, 1);
}
