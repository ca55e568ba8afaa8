//! Category Normalizer
//!
//! Case-insensitive substring matching against the ordered alias tables
//! from `vaulty_config::vocabulary`. The first alias in table order that
//! occurs anywhere in the input decides the category.

use vaulty_config::{BILL_TYPE_ALIASES, LOAN_TYPE_ALIASES};
use vaulty_core::{BillType, LoanType};

/// Look `text` up in an ordered alias table
pub fn normalize_category<T: Clone>(text: &str, table: &[(&str, T)]) -> Option<T> {
    let lower = text.trim().to_lowercase();
    if lower.is_empty() {
        return None;
    }

    table
        .iter()
        .find(|(alias, _)| lower.contains(alias))
        .map(|(_, canonical)| canonical.clone())
}

/// Normalize a bill type; `None` when no alias matches
pub fn normalize_bill_type(text: &str) -> Option<BillType> {
    normalize_category(text, BILL_TYPE_ALIASES)
}

/// Normalize a loan type
///
/// Unmatched, non-blank text is accepted verbatim (trimmed) as
/// `LoanType::Other`.
pub fn normalize_loan_type(text: &str) -> Option<LoanType> {
    if let Some(loan) = normalize_category(text, LOAN_TYPE_ALIASES) {
        return Some(loan);
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        tracing::debug!(loan_type = %trimmed, "No loan alias matched, keeping raw text");
        Some(LoanType::Other(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bill_type_aliases() {
        assert_eq!(normalize_bill_type("creditcard"), Some(BillType::CreditCard));
        assert_eq!(normalize_bill_type("my Credit Card bill"), Some(BillType::CreditCard));
        assert_eq!(normalize_bill_type("mobile"), Some(BillType::Phone));
        assert_eq!(normalize_bill_type("Electric bill"), Some(BillType::Electricity));
        assert_eq!(normalize_bill_type("broadband"), Some(BillType::Internet));
        assert_eq!(normalize_bill_type("rent"), None);
        assert_eq!(normalize_bill_type("   "), None);
    }

    #[test]
    fn test_bill_type_idempotent_on_canonical() {
        for bill in [
            BillType::Electricity,
            BillType::Water,
            BillType::Phone,
            BillType::Internet,
            BillType::Gas,
            BillType::CreditCard,
        ] {
            assert_eq!(normalize_bill_type(bill.as_str()), Some(bill));
        }
    }

    #[test]
    fn test_loan_type_aliases_and_fallback() {
        assert_eq!(normalize_loan_type("Home Loan"), Some(LoanType::Home));
        assert_eq!(normalize_loan_type("a loan for my house"), Some(LoanType::Home));
        assert_eq!(normalize_loan_type("car"), Some(LoanType::Car));
        assert_eq!(normalize_loan_type("auto loan"), Some(LoanType::Auto));
        assert_eq!(normalize_loan_type("education"), Some(LoanType::Student));
        assert_eq!(
            normalize_loan_type("  business  "),
            Some(LoanType::Other("business".to_string()))
        );
        assert_eq!(normalize_loan_type(""), None);
    }

    #[test]
    fn test_loan_type_idempotent_on_canonical() {
        for loan in [
            LoanType::Personal,
            LoanType::Home,
            LoanType::Auto,
            LoanType::Car,
            LoanType::Student,
        ] {
            assert_eq!(normalize_loan_type(loan.as_str()), Some(loan.clone()));
        }
    }
}
