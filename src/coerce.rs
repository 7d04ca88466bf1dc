//! Lenient field decoding for form-shaped input.
//!
//! Form values arrive as JSON numbers, numeric strings, blanks or junk. None of
//! these are rejected: numbers degrade to `0.0` and categories fall back to
//! their default.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// Coerces a raw value to a finite, non-negative quantity.
pub fn quantity(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_leading_f64(text),
        _ => None,
    };
    finite_or_zero(parsed.unwrap_or(0.0))
}

/// Parses the longest numeric prefix of `text`, the way form fields are read
/// in the browser ("12 km" reads as 12).
pub fn parse_leading_f64(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}

/// Maps a category label to `T`, ignoring case and surrounding whitespace.
pub fn category<T: FromStr>(value: &Value) -> Option<T> {
    match value {
        Value::String(text) => text.trim().to_ascii_lowercase().parse().ok(),
        _ => None,
    }
}

/// Non-finite and negative figures count as zero.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

pub fn de_quantity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(quantity(&value))
}

pub fn de_category<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let value = Value::deserialize(deserializer)?;
    Ok(category(&value))
}

pub fn de_category_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(category(&value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn quantity_accepts_numbers_and_numeric_strings() {
        assert_eq!(quantity(&json!(200)), 200.0);
        assert_eq!(quantity(&json!("12.5")), 12.5);
        assert_eq!(quantity(&json!("  40 km")), 40.0);
        assert_eq!(quantity(&json!("1e3")), 1000.0);
    }

    #[test]
    fn quantity_degrades_to_zero() {
        assert_eq!(quantity(&json!("")), 0.0);
        assert_eq!(quantity(&json!("abc")), 0.0);
        assert_eq!(quantity(&json!(null)), 0.0);
        assert_eq!(quantity(&json!(true)), 0.0);
        assert_eq!(quantity(&json!(-5)), 0.0);
        assert_eq!(quantity(&json!("-3.2")), 0.0);
        assert_eq!(quantity(&json!("Infinity")), 0.0);
    }

    #[test]
    fn out_of_range_numbers_degrade_to_zero() {
        let huge: Value = serde_json::from_str("1e400").unwrap();
        assert_eq!(quantity(&huge), 0.0);
        assert_eq!(quantity(&json!("1e400")), 0.0);
    }

    #[test]
    fn leading_parse_stops_at_first_invalid_char() {
        assert_eq!(parse_leading_f64(".5"), Some(0.5));
        assert_eq!(parse_leading_f64("7."), Some(7.0));
        assert_eq!(parse_leading_f64("3e"), Some(3.0));
        assert_eq!(parse_leading_f64("1_000"), Some(1.0));
        assert_eq!(parse_leading_f64("."), None);
        assert_eq!(parse_leading_f64("-"), None);
    }
}
