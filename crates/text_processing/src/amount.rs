//! Amount Parser
//!
//! Pulls the first ASCII decimal number out of free-form text. Thousands
//! separators are stripped before matching, and a leading minus sign is
//! kept in the match so negative amounts are rejected rather than read
//! as their absolute value. The canonical string is built from the
//! matched digits, never from a float.
//!
//! The pattern is compiled once at program start using
//! `once_cell::sync::Lazy`.

use once_cell::sync::Lazy;
use regex::Regex;
use vaulty_core::Amount;

// `\d` would also match non-ASCII digits
static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(-?)([0-9]+\.?[0-9]*)").unwrap());

/// Parse a strictly positive amount from text
///
/// Returns `None` for missing text, text without a number, and zero or
/// negative values.
pub fn parse_amount(text: Option<&str>) -> Option<Amount> {
    let text = text?;
    let cleaned = text.replace(',', "");

    let captures = AMOUNT_PATTERN.captures(&cleaned)?;
    let negative = captures.get(1).map(|m| !m.as_str().is_empty()).unwrap_or(false);
    let digits = captures.get(2)?.as_str();

    if negative {
        tracing::trace!(text = %text, "Rejected negative amount");
        return None;
    }

    let amount = Amount::parse_decimal(digits);
    if amount.is_none() {
        tracing::trace!(text = %text, "Rejected zero amount");
    }
    amount
}

/// Canonical string form of the first positive amount in `text`
pub fn canonical_amount(text: Option<&str>) -> Option<String> {
    parse_amount(text).map(|amount| amount.canonical().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_amounts() {
        assert_eq!(canonical_amount(Some("500")).as_deref(), Some("500"));
        assert_eq!(canonical_amount(Some("500.0")).as_deref(), Some("500"));
        assert_eq!(canonical_amount(Some("12,345.50")).as_deref(), Some("12345.5"));
        assert_eq!(canonical_amount(Some("500.")).as_deref(), Some("500"));
    }

    #[test]
    fn test_amount_inside_sentence() {
        assert_eq!(
            canonical_amount(Some("I want to pay 1,200 dollars for electricity")).as_deref(),
            Some("1200")
        );
        assert_eq!(
            canonical_amount(Some("send $75.25 please")).as_deref(),
            Some("75.25")
        );
        // first number wins
        assert_eq!(
            canonical_amount(Some("pay 40 now and 60 later")).as_deref(),
            Some("40")
        );
    }

    #[test]
    fn test_rejects_zero_negative_and_missing() {
        assert!(parse_amount(None).is_none());
        assert!(parse_amount(Some("")).is_none());
        assert!(parse_amount(Some("no number here")).is_none());
        assert!(parse_amount(Some("0")).is_none());
        assert!(parse_amount(Some("0.00")).is_none());
        assert!(parse_amount(Some("-50")).is_none());
        assert!(parse_amount(Some("transfer -1,000.5")).is_none());
    }

    #[test]
    fn test_numeric_value_matches_string_form() {
        let amount = parse_amount(Some("12,345.50")).unwrap();
        assert!((amount.value() - 12345.5).abs() < f64::EPSILON);
        assert_eq!(amount.canonical(), "12345.5");
    }

    #[test]
    fn test_non_ascii_digits_are_skipped() {
        assert_eq!(canonical_amount(Some("pay ५०० or 300")).as_deref(), Some("300"));
        assert_eq!(
            canonical_amount(Some("pay ５００ now, that is 500")).as_deref(),
            Some("500")
        );
        assert!(parse_amount(Some("५००")).is_none());
    }

    #[test]
    fn test_long_amounts_are_exact() {
        assert_eq!(
            canonical_amount(Some("12345678901234567891")).as_deref(),
            Some("12345678901234567891")
        );
        let huge = "9".repeat(400);
        assert_eq!(canonical_amount(Some(&huge)), Some(huge.clone()));
    }
}
