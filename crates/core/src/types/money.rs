//! Lenient money parsing for inconsistent upstream price fields.
//!
//! Catalog responses carry prices as JSON numbers (`40`), bare strings
//! (`"40"`), or display strings with currency noise (`"₹50.00"`,
//! `"Rs. 120"`). Prices are decoded with [`parse_money`], which tolerates
//! all of these and never fails - an unparseable value is simply absent.

use rust_decimal::Decimal;
use serde_json::Value;

/// Parse a money amount from a heterogeneous JSON value.
///
/// Numbers are converted directly. Strings are stripped of every character
/// that is not an ASCII digit or a decimal point (currency symbols, spaces,
/// thousands separators, text prefixes), then the leading well-formed
/// decimal run is parsed. Anything else - or a string with no digits -
/// yields `None`.
///
/// ```
/// use medikart_core::parse_money;
/// use rust_decimal::Decimal;
/// use serde_json::json;
///
/// assert_eq!(parse_money(&json!(40)), Some(Decimal::from(40)));
/// assert_eq!(parse_money(&json!("₹50.00")), Some(Decimal::new(5000, 2)));
/// assert_eq!(parse_money(&json!("out of stock")), None);
/// ```
#[must_use]
pub fn parse_money(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Decimal::from(i))
            } else {
                n.as_f64().and_then(Decimal::from_f64_retain)
            }
        }
        Value::String(s) => parse_money_str(s),
        _ => None,
    }
}

/// Like [`parse_money`], but defaulting to zero instead of `None`.
///
/// This is the documented silent-degrade policy for cart pricing: a price
/// that cannot be parsed never rejects the operation, it becomes zero.
#[must_use]
pub fn parse_money_or_default(value: &Value) -> Decimal {
    parse_money(value).unwrap_or(Decimal::ZERO)
}

/// Strip currency noise from a display string and parse the remainder.
fn parse_money_str(s: &str) -> Option<Decimal> {
    let stripped: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let prefix = decimal_prefix(&stripped);
    let prefix = prefix.trim_end_matches('.');
    if prefix.is_empty() {
        return None;
    }
    prefix.parse::<Decimal>().ok()
}

/// The leading run of digits with at most one decimal point.
///
/// `"50.00"` stays whole; `".50.00"` (a stray dot survived stripping)
/// truncates at the second dot, matching lenient float parsing upstream.
fn decimal_prefix(s: &str) -> &str {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        match c {
            '0'..='9' => end = i + 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            _ => break,
        }
    }
    s.get(..end).unwrap_or("")
}
