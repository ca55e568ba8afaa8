//! Monetary amount value type

use serde::{Deserialize, Serialize};
use std::fmt;

/// A strictly positive decimal amount
///
/// Holds the canonical decimal text: no thousands separators, no leading
/// integer zeros, no trailing fractional zeros ("500", "12345.5"). The
/// text is kept exactly as written, so arbitrarily long numbers keep
/// every digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount {
    canonical: String,
}

impl Amount {
    /// Parse plain ASCII decimal text (`123`, `123.`, `123.45`)
    ///
    /// Returns `None` for anything else, and for zero.
    pub fn parse_decimal(text: &str) -> Option<Self> {
        let (int_part, frac_part) = match text.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (text, ""),
        };

        if int_part.is_empty()
            || !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let int_part = int_part.trim_start_matches('0');
        let frac_part = frac_part.trim_end_matches('0');

        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }

        let mut canonical = if int_part.is_empty() {
            "0".to_string()
        } else {
            int_part.to_string()
        };
        if !frac_part.is_empty() {
            canonical.push('.');
            canonical.push_str(frac_part);
        }

        Some(Self { canonical })
    }

    /// Numeric value; approximate past `f64` precision, infinite past its range
    pub fn value(&self) -> f64 {
        self.canonical.parse().unwrap_or(f64::INFINITY)
    }

    /// Canonical string form
    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical(text: &str) -> Option<String> {
        Amount::parse_decimal(text).map(|a| a.canonical().to_string())
    }

    #[test]
    fn test_rejects_zero_and_malformed() {
        assert_eq!(canonical("0"), None);
        assert_eq!(canonical("000.000"), None);
        assert_eq!(canonical(""), None);
        assert_eq!(canonical(".5"), None);
        assert_eq!(canonical("-5"), None);
        assert_eq!(canonical("1.2.3"), None);
        assert_eq!(canonical("５００"), None);
    }

    #[test]
    fn test_canonical_rendering() {
        assert_eq!(canonical("500").as_deref(), Some("500"));
        assert_eq!(canonical("500.0").as_deref(), Some("500"));
        assert_eq!(canonical("500.").as_deref(), Some("500"));
        assert_eq!(canonical("12345.50").as_deref(), Some("12345.5"));
        assert_eq!(canonical("0.25").as_deref(), Some("0.25"));
        assert_eq!(canonical("007.10").as_deref(), Some("7.1"));
    }

    #[test]
    fn test_long_numbers_keep_every_digit() {
        assert_eq!(
            canonical("12345678901234567891").as_deref(),
            Some("12345678901234567891")
        );

        let huge = "9".repeat(400);
        let amount = Amount::parse_decimal(&huge).unwrap();
        assert_eq!(amount.canonical(), huge);
        assert!(amount.value().is_infinite());
    }

    #[test]
    fn test_value_and_display() {
        let amount = Amount::parse_decimal("75.10").unwrap();
        assert!((amount.value() - 75.1).abs() < f64::EPSILON);
        assert_eq!(amount.to_string(), "75.1");
    }
}
