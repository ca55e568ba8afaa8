//! Action identifiers and outcomes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, OutboundMessage, SlotName, SlotValues};

/// Every action exposed to the dialogue framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActionId {
    Greet,
    CheckBalance,
    HandleSpecificLoan,
    ValidatePayBillForm,
    ValidateLoanApplicationForm,
    ValidateTransferMoneyForm,
    SubmitPayBill,
    SubmitLoanApplication,
    SubmitTransferMoney,
}

impl ActionId {
    pub const ALL: [ActionId; 9] = [
        ActionId::Greet,
        ActionId::CheckBalance,
        ActionId::HandleSpecificLoan,
        ActionId::ValidatePayBillForm,
        ActionId::ValidateLoanApplicationForm,
        ActionId::ValidateTransferMoneyForm,
        ActionId::SubmitPayBill,
        ActionId::SubmitLoanApplication,
        ActionId::SubmitTransferMoney,
    ];

    /// Action name as referenced by the bot's domain
    pub fn name(&self) -> &'static str {
        match self {
            ActionId::Greet => "action_greet",
            ActionId::CheckBalance => "action_check_balance",
            ActionId::HandleSpecificLoan => "action_handle_specific_loan",
            ActionId::ValidatePayBillForm => "validate_pay_bill_form",
            ActionId::ValidateLoanApplicationForm => "validate_loan_application_form",
            ActionId::ValidateTransferMoneyForm => "validate_transfer_money_form",
            ActionId::SubmitPayBill => "action_submit_pay_bill",
            ActionId::SubmitLoanApplication => "action_submit_loan_application",
            ActionId::SubmitTransferMoney => "action_submit_transfer_money",
        }
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionId::ALL
            .iter()
            .copied()
            .find(|id| id.name() == s)
            .ok_or_else(|| Error::UnknownAction(s.to_string()))
    }
}

/// Result of running an action for one turn
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionOutcome {
    /// Slot updates merged into the tracker; `None` clears the slot
    pub slot_updates: Vec<(SlotName, Option<String>)>,
    /// Messages to show, in order
    pub messages: Vec<OutboundMessage>,
    /// Clear every slot after applying the updates
    pub reset_slots: bool,
}

impl ActionOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_slot(&mut self, slot: SlotName, value: Option<String>) {
        self.slot_updates.push((slot, value));
    }

    pub fn push_message(&mut self, message: OutboundMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: OutboundMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_slot(mut self, slot: SlotName, value: Option<String>) -> Self {
        self.slot_updates.push((slot, value));
        self
    }

    pub fn with_reset(mut self) -> Self {
        self.reset_slots = true;
        self
    }

    /// Latest update recorded for a slot, if any
    pub fn slot_update(&self, slot: SlotName) -> Option<&Option<String>> {
        self.slot_updates
            .iter()
            .rev()
            .find(|(name, _)| *name == slot)
            .map(|(_, value)| value)
    }

    /// Merge this outcome into a slot record the way the dialogue
    /// framework does: updates first, then the reset.
    pub fn apply_to(&self, slots: &mut SlotValues) {
        for (slot, value) in &self.slot_updates {
            slots.set(*slot, value.clone());
        }
        if self.reset_slots {
            slots.clear();
        }
    }

    /// True when the action updates or resets slots
    pub fn changes_state(&self) -> bool {
        self.reset_slots || !self.slot_updates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_names_resolve() {
        for id in ActionId::ALL {
            assert_eq!(id.name().parse::<ActionId>().unwrap(), id);
        }
        assert!(matches!(
            "action_unknown".parse::<ActionId>(),
            Err(Error::UnknownAction(_))
        ));
    }

    #[test]
    fn test_outcome_latest_slot_update_wins() {
        let outcome = ActionOutcome::new()
            .with_slot(SlotName::BillType, None)
            .with_slot(SlotName::BillType, Some("gas".into()));
        assert_eq!(
            outcome.slot_update(SlotName::BillType),
            Some(&Some("gas".to_string()))
        );
        assert!(outcome.changes_state());
        assert!(!ActionOutcome::new().changes_state());
    }

    #[test]
    fn test_apply_updates_then_reset() {
        let mut slots = SlotValues::new().with(SlotName::LoanType, "home");
        ActionOutcome::new()
            .with_slot(SlotName::ApplicantName, Some("Al".into()))
            .apply_to(&mut slots);
        assert_eq!(slots.get(SlotName::ApplicantName), Some("Al"));

        ActionOutcome::new().with_reset().apply_to(&mut slots);
        assert_eq!(slots, SlotValues::default());
    }
}
