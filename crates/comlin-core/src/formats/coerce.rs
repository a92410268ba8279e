//! Locale-aware scalar coercion for Argentine receipt text.
//!
//! AFIP receipts print amounts with a decimal comma and optional dot
//! thousands separators ("1.234,56"). Identifier fields may carry dashes or
//! dots ("30-71234567-8"). These helpers normalize both into plain values.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse an Argentine-formatted amount (e.g., "27,00" or "1.234,56").
///
/// Dots are thousands separators and are dropped; the comma becomes the
/// decimal point. Returns `None` when no number remains after cleaning.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    let normalized = cleaned.replace('.', "").replace(',', ".");
    Decimal::from_str(&normalized).ok()
}

/// Parse a plain base-10 integer field, ignoring surrounding whitespace.
pub fn parse_integer(s: &str) -> Option<i64> {
    s.trim().parse().ok()
}

/// Strip separator punctuation from a formatted identifier.
///
/// "30-71234567-8" and "30.71234567.8" both become "30712345678".
pub fn digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("27,00"), Some(Decimal::from_str("27.00").unwrap()));
        assert_eq!(parse_amount("100,50"), Some(Decimal::from_str("100.50").unwrap()));
        assert_eq!(
            parse_amount("1.234,56"),
            Some(Decimal::from_str("1234.56").unwrap())
        );
        assert_eq!(
            parse_amount("12.345.678,90"),
            Some(Decimal::from_str("12345678.90").unwrap())
        );
        assert_eq!(parse_amount("0,00"), Some(Decimal::from_str("0.00").unwrap()));
    }

    #[test]
    fn test_parse_amount_rejects_empty() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("$ "), None);
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("3"), Some(3));
        assert_eq!(parse_integer(" 42 "), Some(42));
        assert_eq!(parse_integer("x"), None);
    }

    #[test]
    fn test_digits() {
        assert_eq!(digits("30-71234567-8"), "30712345678");
        assert_eq!(digits("30.58517812.9"), "30585178129");
        assert_eq!(digits("0003"), "0003");
    }
}
