//! Text processing for slot values
//!
//! - [`amount`]: extract a canonical amount from free-form text
//! - [`normalize`]: map free-form text onto canonical categories

pub mod amount;
pub mod normalize;

pub use amount::{canonical_amount, parse_amount};
pub use normalize::{normalize_bill_type, normalize_category, normalize_loan_type};
