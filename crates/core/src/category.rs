//! Canonical categories
//!
//! Free-form user text is normalized into one of these before it is
//! stored in a slot. The string forms are what the slots hold.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bill categories accepted by the pay-bill form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BillType {
    Electricity,
    Water,
    Phone,
    Internet,
    Gas,
    CreditCard,
}

impl BillType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillType::Electricity => "electricity",
            BillType::Water => "water",
            BillType::Phone => "phone",
            BillType::Internet => "internet",
            BillType::Gas => "gas",
            BillType::CreditCard => "credit card",
        }
    }
}

impl fmt::Display for BillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loan categories
///
/// Text that matches no known alias is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanType {
    Personal,
    Home,
    Auto,
    Car,
    Student,
    Other(String),
}

impl LoanType {
    pub fn as_str(&self) -> &str {
        match self {
            LoanType::Personal => "personal",
            LoanType::Home => "home",
            LoanType::Auto => "auto",
            LoanType::Car => "car",
            LoanType::Student => "student",
            LoanType::Other(raw) => raw.as_str(),
        }
    }

    /// True for the fallback variant
    pub fn is_other(&self) -> bool {
        matches!(self, LoanType::Other(_))
    }
}

impl fmt::Display for LoanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Savings,
    Checking,
}

impl AccountType {
    pub const ALL: [AccountType; 2] = [AccountType::Savings, AccountType::Checking];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Savings => "savings",
            AccountType::Checking => "checking",
        }
    }

    /// Case-insensitive exact match, ignoring surrounding whitespace.
    ///
    /// No substring leniency: "Savings!!" and "my savings" are rejected.
    pub fn parse_exact(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        AccountType::ALL
            .iter()
            .copied()
            .find(|account| account.as_str().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_exact_match() {
        assert_eq!(AccountType::parse_exact("Savings"), Some(AccountType::Savings));
        assert_eq!(AccountType::parse_exact(" CHECKING "), Some(AccountType::Checking));
        assert_eq!(AccountType::parse_exact("Savings!!"), None);
        assert_eq!(AccountType::parse_exact("my savings account"), None);
        assert_eq!(AccountType::parse_exact(""), None);
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(BillType::CreditCard.to_string(), "credit card");
        assert_eq!(LoanType::Other("gold".into()).to_string(), "gold");
        assert!(LoanType::Other("gold".into()).is_other());
        assert!(!LoanType::Home.is_other());
    }
}
