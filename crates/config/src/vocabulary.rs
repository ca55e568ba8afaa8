//! Category alias tables
//!
//! Ordered alias -> canonical mappings. Matching is substring containment
//! on the lowercased input and the first alias in table order wins, so
//! longer or more specific aliases must come before the ones they contain.

use vaulty_core::{BillType, LoanType};

/// Bill type aliases
pub static BILL_TYPE_ALIASES: &[(&str, BillType)] = &[
    ("credit card", BillType::CreditCard),
    ("creditcard", BillType::CreditCard),
    ("card", BillType::CreditCard),
    ("electricity", BillType::Electricity),
    ("electric", BillType::Electricity),
    ("power", BillType::Electricity),
    ("water", BillType::Water),
    ("phone", BillType::Phone),
    ("mobile", BillType::Phone),
    ("internet", BillType::Internet),
    ("broadband", BillType::Internet),
    ("wifi", BillType::Internet),
    ("wi-fi", BillType::Internet),
    ("gas", BillType::Gas),
];

/// Loan type aliases
///
/// `LoanType::Other` never appears here; it is the fallback for text
/// that matches nothing.
pub static LOAN_TYPE_ALIASES: &[(&str, LoanType)] = &[
    ("personal", LoanType::Personal),
    ("home", LoanType::Home),
    ("house", LoanType::Home),
    ("mortgage", LoanType::Home),
    ("auto", LoanType::Auto),
    ("car", LoanType::Car),
    ("vehicle", LoanType::Car),
    ("student", LoanType::Student),
    ("education", LoanType::Student),
];
