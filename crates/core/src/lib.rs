//! Core types for the Vaulty banking actions
//!
//! This crate provides the foundational types shared by every other crate:
//! - Slot names and the fixed-key slot record
//! - Canonical categories (bill type, loan type, account type)
//! - Amount value type
//! - Response template keys and outbound messages
//! - Action identifiers and outcomes
//! - Error types

pub mod action;
pub mod amount;
pub mod category;
pub mod error;
pub mod response;
pub mod slots;

pub use action::{ActionId, ActionOutcome};
pub use amount::Amount;
pub use category::{AccountType, BillType, LoanType};
pub use error::{Error, Result};
pub use response::{OutboundMessage, ResponseKey};
pub use slots::{SlotName, SlotValues};
