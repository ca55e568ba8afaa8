//! Slot Validators
//!
//! Every slot goes through the same protocol:
//! 1. normalize the candidate value extracted upstream, if any
//! 2. otherwise normalize the raw text of the latest user message
//! 3. otherwise reject: clear the slot and re-prompt
//!
//! Only the normalization differs per slot.

use vaulty_core::{AccountType, ResponseKey, SlotName};
use vaulty_text_processing::{canonical_amount, normalize_bill_type, normalize_loan_type};

use crate::Turn;

/// Minimum length of an applicant name, in characters
pub const MIN_APPLICANT_NAME_CHARS: usize = 2;

/// Outcome of validating one slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotValidation {
    /// Canonical value to store, or `None` to clear the slot
    pub value: Option<String>,
    /// Re-prompt to show when the value was rejected
    pub prompt: Option<ResponseKey>,
}

impl SlotValidation {
    pub fn accepted(value: String) -> Self {
        Self {
            value: Some(value),
            prompt: None,
        }
    }

    pub fn rejected(slot: SlotName) -> Self {
        Self {
            value: None,
            prompt: Some(ResponseKey::InvalidSlot(slot)),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.value.is_some()
    }
}

/// Validate a slot for the current turn
pub fn validate_slot(slot: SlotName, candidate: Option<&str>, turn: &Turn) -> SlotValidation {
    let from_candidate = candidate.and_then(|value| normalize_slot_value(slot, value));

    let accepted = match from_candidate {
        Some(value) => Some(value),
        None => {
            let from_text = normalize_slot_value(slot, &turn.latest_text);
            if from_text.is_some() {
                tracing::debug!(
                    slot = %slot,
                    sender = %turn.sender_id,
                    "Recovered slot value from message text"
                );
            }
            from_text
        }
    };

    match accepted {
        Some(value) => {
            tracing::debug!(slot = %slot, value = %value, "Slot accepted");
            SlotValidation::accepted(value)
        }
        None => {
            tracing::debug!(
                slot = %slot,
                candidate = ?candidate,
                sender = %turn.sender_id,
                "Slot rejected, re-prompting"
            );
            SlotValidation::rejected(slot)
        }
    }
}

/// Canonical form of `raw` for `slot`, or `None` if it is not acceptable
pub fn normalize_slot_value(slot: SlotName, raw: &str) -> Option<String> {
    match slot {
        SlotName::BillType => normalize_bill_type(raw).map(|bill| bill.as_str().to_string()),
        SlotName::AmountOfMoney => canonical_amount(Some(raw)),
        SlotName::LoanType => normalize_loan_type(raw).map(|loan| loan.to_string()),
        SlotName::AccountType => {
            AccountType::parse_exact(raw).map(|account| account.as_str().to_string())
        }
        SlotName::ApplicantName => {
            let name = raw.trim();
            if name.chars().count() >= MIN_APPLICANT_NAME_CHARS {
                Some(name.to_string())
            } else {
                None
            }
        }
        SlotName::RecipientName => {
            let name = raw.trim();
            if name.is_empty() {
                None
            } else {
                Some(name.to_string())
            }
        }
    }
}
