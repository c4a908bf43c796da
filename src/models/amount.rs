//! Currency amount helpers
//!
//! Amounts are plain `f64` currency units. Totals and simulated values are
//! rounded to cents at the points where they are reported.

use std::fmt;

/// Round an amount to two decimal places
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parse a user-entered amount
///
/// Accepts formats: "10.50", "-10.50", "€10.50", "10.50€", "$10", "1,250.00"
pub fn parse_amount(s: &str) -> Result<f64, AmountParseError> {
    let trimmed = s.trim();

    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(stripped) => (true, stripped),
        None => (false, trimmed),
    };

    let cleaned: String = rest
        .trim_start_matches(['€', '$', '£'])
        .trim_end_matches(['€', '$', '£'])
        .trim()
        .chars()
        .filter(|c| *c != ',')
        .collect();

    if cleaned.is_empty() {
        return Err(AmountParseError::InvalidFormat(s.to_string()));
    }

    let value: f64 = cleaned
        .parse()
        .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?;

    if !value.is_finite() {
        return Err(AmountParseError::InvalidFormat(s.to_string()));
    }

    Ok(if negative { -value } else { value })
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(1610.0), 1610.0);
        assert_eq!(round_to_cents(8.333333), 8.33);
        assert_eq!(round_to_cents(99.900045), 99.9);
        assert_eq!(round_to_cents(-30.456), -30.46);
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse_amount("10.50").unwrap(), 10.5);
        assert_eq!(parse_amount("€10.50").unwrap(), 10.5);
        assert_eq!(parse_amount("10.50€").unwrap(), 10.5);
        assert_eq!(parse_amount("$10").unwrap(), 10.0);
        assert_eq!(parse_amount("-10.50").unwrap(), -10.5);
        assert_eq!(parse_amount("1,250.00").unwrap(), 1250.0);
        assert_eq!(parse_amount("  42 ").unwrap(), 42.0);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("€").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("NaN").is_err());
    }
}
