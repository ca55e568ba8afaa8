//! Slot names and the per-conversation slot record
//!
//! Every slot the actions know about is a variant of [`SlotName`], and
//! [`SlotValues`] holds exactly one optional value per variant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// A slot collected by one of the forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotName {
    BillType,
    AmountOfMoney,
    LoanType,
    ApplicantName,
    RecipientName,
    AccountType,
}

impl SlotName {
    /// All slots, in declaration order
    pub const ALL: [SlotName; 6] = [
        SlotName::BillType,
        SlotName::AmountOfMoney,
        SlotName::LoanType,
        SlotName::ApplicantName,
        SlotName::RecipientName,
        SlotName::AccountType,
    ];

    /// Wire name used by the dialogue framework
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotName::BillType => "bill_type",
            SlotName::AmountOfMoney => "amount_of_money",
            SlotName::LoanType => "loan_type",
            SlotName::ApplicantName => "applicant_name",
            SlotName::RecipientName => "recipient_name",
            SlotName::AccountType => "account_type",
        }
    }
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SlotName::ALL
            .iter()
            .copied()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| Error::UnknownSlot(s.to_string()))
    }
}

/// Current slot values for one conversation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotValues {
    #[serde(default)]
    pub bill_type: Option<String>,
    #[serde(default)]
    pub amount_of_money: Option<String>,
    #[serde(default)]
    pub loan_type: Option<String>,
    #[serde(default)]
    pub applicant_name: Option<String>,
    #[serde(default)]
    pub recipient_name: Option<String>,
    #[serde(default)]
    pub account_type: Option<String>,
}

impl SlotValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value of a slot
    pub fn get(&self, slot: SlotName) -> Option<&str> {
        self.field(slot).as_deref()
    }

    /// Set (or clear, with `None`) the value of a slot
    pub fn set(&mut self, slot: SlotName, value: Option<String>) {
        *self.field_mut(slot) = value;
    }

    /// Builder-style setter
    pub fn with(mut self, slot: SlotName, value: impl Into<String>) -> Self {
        self.set(slot, Some(value.into()));
        self
    }

    /// Clear every slot
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// A slot is filled when it holds a non-blank value
    pub fn is_filled(&self, slot: SlotName) -> bool {
        self.get(slot).map(|v| !v.trim().is_empty()).unwrap_or(false)
    }

    fn field(&self, slot: SlotName) -> &Option<String> {
        match slot {
            SlotName::BillType => &self.bill_type,
            SlotName::AmountOfMoney => &self.amount_of_money,
            SlotName::LoanType => &self.loan_type,
            SlotName::ApplicantName => &self.applicant_name,
            SlotName::RecipientName => &self.recipient_name,
            SlotName::AccountType => &self.account_type,
        }
    }

    fn field_mut(&mut self, slot: SlotName) -> &mut Option<String> {
        match slot {
            SlotName::BillType => &mut self.bill_type,
            SlotName::AmountOfMoney => &mut self.amount_of_money,
            SlotName::LoanType => &mut self.loan_type,
            SlotName::ApplicantName => &mut self.applicant_name,
            SlotName::RecipientName => &mut self.recipient_name,
            SlotName::AccountType => &mut self.account_type,
        }
    }
}
