//! Forms: per-form validation and submission
//!
//! A form collects a fixed set of required slots over several turns.
//! The dialogue framework runs the form's validate action after every
//! extraction and its submit action once it considers the form complete.

use std::fmt;
use vaulty_core::{
    AccountType, ActionId, ActionOutcome, OutboundMessage, ResponseKey, SlotName,
};

use crate::registry::Action;
use crate::validation::{normalize_slot_value, validate_slot};
use crate::Turn;

/// The multi-turn forms of the banking assistant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    PayBill,
    LoanApplication,
    TransferMoney,
}

impl FormKind {
    pub const ALL: [FormKind; 3] = [
        FormKind::PayBill,
        FormKind::LoanApplication,
        FormKind::TransferMoney,
    ];

    /// Form name in the bot's domain
    pub fn name(&self) -> &'static str {
        match self {
            FormKind::PayBill => "pay_bill_form",
            FormKind::LoanApplication => "loan_application_form",
            FormKind::TransferMoney => "transfer_money_form",
        }
    }

    /// Slots that must be filled before submission
    pub fn required_slots(&self) -> &'static [SlotName] {
        match self {
            FormKind::PayBill => &[SlotName::BillType, SlotName::AmountOfMoney],
            FormKind::LoanApplication => &[SlotName::LoanType, SlotName::ApplicantName],
            FormKind::TransferMoney => &[
                SlotName::RecipientName,
                SlotName::AmountOfMoney,
                SlotName::AccountType,
            ],
        }
    }

    pub fn requires(&self, slot: SlotName) -> bool {
        self.required_slots().contains(&slot)
    }

    pub fn confirmation(&self) -> ResponseKey {
        match self {
            FormKind::PayBill => ResponseKey::ConfirmBillPayment,
            FormKind::LoanApplication => ResponseKey::ConfirmLoanApplication,
            FormKind::TransferMoney => ResponseKey::ConfirmTransfer,
        }
    }

    pub fn validate_action(&self) -> ActionId {
        match self {
            FormKind::PayBill => ActionId::ValidatePayBillForm,
            FormKind::LoanApplication => ActionId::ValidateLoanApplicationForm,
            FormKind::TransferMoney => ActionId::ValidateTransferMoneyForm,
        }
    }

    pub fn submit_action(&self) -> ActionId {
        match self {
            FormKind::PayBill => ActionId::SubmitPayBill,
            FormKind::LoanApplication => ActionId::SubmitLoanApplication,
            FormKind::TransferMoney => ActionId::SubmitTransferMoney,
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validates the slots extracted for a form this turn
pub struct ValidateFormAction {
    form: FormKind,
}

impl ValidateFormAction {
    pub fn new(form: FormKind) -> Self {
        Self { form }
    }

    /// Slots to validate this turn, with their candidates.
    ///
    /// Extracted slots that the form does not collect are ignored. With
    /// nothing extracted, the requested slot is validated against the
    /// message text alone.
    fn targets<'a>(&self, turn: &'a Turn) -> Vec<(SlotName, Option<&'a str>)> {
        let extracted: Vec<_> = turn
            .slots_to_validate
            .iter()
            .filter(|(slot, _)| self.form.requires(*slot))
            .map(|(slot, value)| (*slot, value.as_deref()))
            .collect();

        if !extracted.is_empty() {
            return extracted;
        }

        match turn.requested_slot {
            Some(slot) if self.form.requires(slot) => vec![(slot, None)],
            _ => Vec::new(),
        }
    }
}

impl Action for ValidateFormAction {
    fn id(&self) -> ActionId {
        self.form.validate_action()
    }

    fn description(&self) -> &str {
        match self.form {
            FormKind::PayBill => "Validate bill type and amount for the pay bill form",
            FormKind::LoanApplication => "Validate loan type and applicant for the loan form",
            FormKind::TransferMoney => "Validate recipient, amount and account for transfers",
        }
    }

    fn run(&self, turn: &Turn) -> ActionOutcome {
        let mut outcome = ActionOutcome::new();

        for (slot, candidate) in self.targets(turn) {
            let result = validate_slot(slot, candidate, turn);
            if let Some(prompt) = result.prompt {
                outcome.push_message(OutboundMessage::template(prompt));
            }
            outcome.set_slot(slot, result.value);
        }

        tracing::debug!(
            form = %self.form,
            sender = %turn.sender_id,
            validated = outcome.slot_updates.len(),
            rejected = outcome.messages.len(),
            "Form slots validated"
        );

        outcome
    }
}

/// Submits a completed form, or asks for whatever is still missing
pub struct SubmitFormAction {
    form: FormKind,
    default_account: Option<AccountType>,
}

impl SubmitFormAction {
    pub fn new(form: FormKind) -> Self {
        Self {
            form,
            default_account: None,
        }
    }

    /// Fill a missing transfer account with `account` instead of asking.
    ///
    /// Only meaningful for [`FormKind::TransferMoney`].
    pub fn with_default_account(mut self, account: Option<AccountType>) -> Self {
        self.default_account = account;
        self
    }

    /// Value used for `slot` at submission time
    fn resolve(&self, slot: SlotName, turn: &Turn) -> Resolution {
        if let Some(raw) = turn.slots.get(slot).filter(|_| turn.slots.is_filled(slot)) {
            // Stored values are re-checked so a slot set outside the
            // validators cannot reach a confirmation.
            return match normalize_slot_value(slot, raw) {
                Some(value) => Resolution::Value(value),
                None => Resolution::Invalid,
            };
        }

        match (self.form, slot, self.default_account) {
            (FormKind::TransferMoney, SlotName::AccountType, Some(account)) => {
                tracing::debug!(
                    sender = %turn.sender_id,
                    account = %account,
                    "Defaulting transfer account"
                );
                Resolution::Value(account.as_str().to_string())
            }
            _ => Resolution::Missing,
        }
    }
}

enum Resolution {
    Value(String),
    Missing,
    Invalid,
}

impl Action for SubmitFormAction {
    fn id(&self) -> ActionId {
        self.form.submit_action()
    }

    fn description(&self) -> &str {
        match self.form {
            FormKind::PayBill => "Confirm a bill payment and end the form",
            FormKind::LoanApplication => "Confirm a loan application and end the form",
            FormKind::TransferMoney => "Confirm a money transfer and end the form",
        }
    }

    fn run(&self, turn: &Turn) -> ActionOutcome {
        let mut confirmation = OutboundMessage::template(self.form.confirmation());
        let mut pending = ActionOutcome::new();
        let mut missing = Vec::new();

        for slot in self.form.required_slots() {
            match self.resolve(*slot, turn) {
                Resolution::Value(value) => {
                    confirmation = confirmation.with_param(slot.as_str(), value)
                }
                Resolution::Missing => {
                    missing.push(*slot);
                    pending.push_message(OutboundMessage::template(ResponseKey::AskSlot(*slot)));
                }
                Resolution::Invalid => {
                    missing.push(*slot);
                    pending.set_slot(*slot, None);
                    pending
                        .push_message(OutboundMessage::template(ResponseKey::InvalidSlot(*slot)));
                }
            }
        }

        if !missing.is_empty() {
            tracing::info!(
                form = %self.form,
                sender = %turn.sender_id,
                missing = ?missing,
                "Form submitted with missing slots, continuing"
            );
            return pending;
        }

        tracing::info!(form = %self.form, sender = %turn.sender_id, "Form completed");
        ActionOutcome::new().with_message(confirmation).with_reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaulty_core::SlotValues;

    #[test]
    fn test_validate_ignores_foreign_slots() {
        let turn = Turn::new("u1")
            .with_text("pay 75 for electricity")
            .with_extracted(SlotName::BillType, Some("electric"))
            .with_extracted(SlotName::RecipientName, Some("Bob"));

        let outcome = ValidateFormAction::new(FormKind::PayBill).run(&turn);
        assert_eq!(
            outcome.slot_updates,
            vec![(SlotName::BillType, Some("electricity".to_string()))]
        );
        assert!(outcome.messages.is_empty());
    }

    #[test]
    fn test_validate_requested_slot_from_text() {
        let turn = Turn::new("u1")
            .with_text("about 2,000")
            .with_requested_slot(SlotName::AmountOfMoney);

        let outcome = ValidateFormAction::new(FormKind::TransferMoney).run(&turn);
        assert_eq!(
            outcome.slot_update(SlotName::AmountOfMoney),
            Some(&Some("2000".to_string()))
        );
    }

    #[test]
    fn test_validate_rejection_reprompts() {
        let turn = Turn::new("u1")
            .with_text("Savings!!")
            .with_extracted(SlotName::AccountType, Some("Savings!!"));

        let outcome = ValidateFormAction::new(FormKind::TransferMoney).run(&turn);
        assert_eq!(outcome.slot_update(SlotName::AccountType), Some(&None));
        assert_eq!(
            outcome.messages[0].key(),
            Some(ResponseKey::InvalidSlot(SlotName::AccountType))
        );
    }

    #[test]
    fn test_validate_with_nothing_to_do() {
        let outcome = ValidateFormAction::new(FormKind::PayBill).run(&Turn::new("u1"));
        assert_eq!(outcome, ActionOutcome::new());
    }

    #[test]
    fn test_submit_complete_pay_bill() {
        let slots = SlotValues::new()
            .with(SlotName::BillType, "electricity")
            .with(SlotName::AmountOfMoney, "75");
        let outcome = SubmitFormAction::new(FormKind::PayBill).run(&Turn::new("u1").with_slots(slots));

        assert!(outcome.reset_slots);
        assert_eq!(outcome.messages.len(), 1);
        let msg = &outcome.messages[0];
        assert_eq!(msg.key(), Some(ResponseKey::ConfirmBillPayment));
        assert_eq!(msg.param("bill_type"), Some("electricity"));
        assert_eq!(msg.param("amount_of_money"), Some("75"));
    }

    #[test]
    fn test_submit_missing_amount_continues_form() {
        let slots = SlotValues::new().with(SlotName::BillType, "electricity");
        let outcome = SubmitFormAction::new(FormKind::PayBill).run(&Turn::new("u1").with_slots(slots));

        assert!(!outcome.changes_state());
        assert_eq!(
            outcome.messages,
            vec![OutboundMessage::template(ResponseKey::AskSlot(SlotName::AmountOfMoney))]
        );
    }

    #[test]
    fn test_submit_lists_every_missing_slot_in_order() {
        let outcome = SubmitFormAction::new(FormKind::TransferMoney).run(&Turn::new("u1"));
        let keys: Vec<_> = outcome.messages.iter().filter_map(|m| m.key()).collect();
        assert_eq!(
            keys,
            vec![
                ResponseKey::AskSlot(SlotName::RecipientName),
                ResponseKey::AskSlot(SlotName::AmountOfMoney),
                ResponseKey::AskSlot(SlotName::AccountType),
            ]
        );
        assert!(!outcome.reset_slots);
    }

    #[test]
    fn test_transfer_strict_vs_default_account() {
        let slots = SlotValues::new()
            .with(SlotName::RecipientName, "Priya")
            .with(SlotName::AmountOfMoney, "250");
        let turn = Turn::new("u1").with_slots(slots);

        let strict = SubmitFormAction::new(FormKind::TransferMoney).run(&turn);
        assert!(!strict.reset_slots);
        assert_eq!(
            strict.messages[0].key(),
            Some(ResponseKey::AskSlot(SlotName::AccountType))
        );

        let defaulting = SubmitFormAction::new(FormKind::TransferMoney)
            .with_default_account(Some(AccountType::Savings))
            .run(&turn);
        assert!(defaulting.reset_slots);
        assert_eq!(defaulting.messages[0].key(), Some(ResponseKey::ConfirmTransfer));
        assert_eq!(defaulting.messages[0].param("account_type"), Some("savings"));
        assert_eq!(defaulting.messages[0].param("recipient_name"), Some("Priya"));
    }

    #[test]
    fn test_default_account_ignored_outside_transfer() {
        let slots = SlotValues::new().with(SlotName::LoanType, "home");
        let outcome = SubmitFormAction::new(FormKind::LoanApplication)
            .with_default_account(Some(AccountType::Checking))
            .run(&Turn::new("u1").with_slots(slots));
        assert_eq!(
            outcome.messages,
            vec![OutboundMessage::template(ResponseKey::AskSlot(SlotName::ApplicantName))]
        );
    }

    #[test]
    fn test_submit_loan_applicant_name_length() {
        let accepted = SubmitFormAction::new(FormKind::LoanApplication).run(
            &Turn::new("u1").with_slots(
                SlotValues::new()
                    .with(SlotName::LoanType, "home")
                    .with(SlotName::ApplicantName, "Al"),
            ),
        );
        assert!(accepted.reset_slots);
        assert_eq!(accepted.messages[0].param("applicant_name"), Some("Al"));

        let rejected = SubmitFormAction::new(FormKind::LoanApplication).run(
            &Turn::new("u1").with_slots(
                SlotValues::new()
                    .with(SlotName::LoanType, "home")
                    .with(SlotName::ApplicantName, "A"),
            ),
        );
        assert!(!rejected.reset_slots);
        assert_eq!(rejected.slot_update(SlotName::ApplicantName), Some(&None));
        assert_eq!(
            rejected.messages,
            vec![OutboundMessage::template(ResponseKey::InvalidSlot(SlotName::ApplicantName))]
        );
    }

    #[test]
    fn test_form_metadata() {
        for form in FormKind::ALL {
            assert!(!form.required_slots().is_empty());
            assert_ne!(form.validate_action(), form.submit_action());
        }
        assert_eq!(FormKind::PayBill.to_string(), "pay_bill_form");
    }

    #[test]
    fn test_blank_stored_value_counts_as_missing() {
        let slots = SlotValues::new()
            .with(SlotName::BillType, "water")
            .with(SlotName::AmountOfMoney, "   ");
        let outcome =
            SubmitFormAction::new(FormKind::PayBill).run(&Turn::new("u1").with_slots(slots));

        assert!(!outcome.changes_state());
        assert_eq!(
            outcome.messages,
            vec![OutboundMessage::template(ResponseKey::AskSlot(SlotName::AmountOfMoney))]
        );
    }
}
