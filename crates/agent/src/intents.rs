//! Single-turn intent actions
//!
//! Stateless responses that do not need a form: greeting, balance check
//! and loan details.

use vaulty_config::DemoBalances;
use vaulty_core::{AccountType, ActionId, ActionOutcome, OutboundMessage, ResponseKey, SlotName};

use crate::registry::Action;
use crate::Turn;

/// Greets the user
pub struct GreetAction;

impl Action for GreetAction {
    fn id(&self) -> ActionId {
        ActionId::Greet
    }

    fn description(&self) -> &str {
        "Greet the user"
    }

    fn run(&self, _turn: &Turn) -> ActionOutcome {
        ActionOutcome::new().with_message(OutboundMessage::template(ResponseKey::Greet))
    }
}

/// Answers a balance question from the demo balance table
pub struct CheckBalanceAction {
    balances: DemoBalances,
}

impl CheckBalanceAction {
    pub fn new(balances: DemoBalances) -> Self {
        Self { balances }
    }

    /// Account mentioned in this message, else the one already in the slot
    fn account(&self, turn: &Turn) -> Option<AccountType> {
        turn.latest_entity(SlotName::AccountType.as_str())
            .and_then(AccountType::parse_exact)
            .or_else(|| {
                turn.slots
                    .get(SlotName::AccountType)
                    .and_then(AccountType::parse_exact)
            })
    }
}

impl Action for CheckBalanceAction {
    fn id(&self) -> ActionId {
        ActionId::CheckBalance
    }

    fn description(&self) -> &str {
        "Report the balance of the savings or checking account"
    }

    fn run(&self, turn: &Turn) -> ActionOutcome {
        let Some(account) = self.account(turn) else {
            tracing::debug!(sender = %turn.sender_id, "No account type yet, asking");
            return ActionOutcome::new().with_message(OutboundMessage::template(
                ResponseKey::AskSlot(SlotName::AccountType),
            ));
        };

        let balance = self.balances.balance_for(account);
        ActionOutcome::new().with_message(
            OutboundMessage::template(ResponseKey::Balance)
                .with_param("account_type", account.as_str())
                .with_param("balance", format!("{:.2}", balance)),
        )
    }
}

/// Answers a question about a specific kind of loan
pub struct SpecificLoanAction;

impl SpecificLoanAction {
    /// Pick the loan details response for a mentioned loan type
    pub fn response_for(loan_type: Option<&str>) -> ResponseKey {
        let Some(loan_type) = loan_type else {
            return ResponseKey::AskLoanInfo;
        };

        let lower = loan_type.to_lowercase();
        if lower.contains("home") || lower.contains("house") {
            ResponseKey::LoanDetailsHome
        } else if lower.contains("auto") || lower.contains("car") {
            ResponseKey::LoanDetailsAuto
        } else if lower.contains("personal") {
            ResponseKey::LoanDetailsPersonal
        } else {
            ResponseKey::AskLoanInfo
        }
    }
}

impl Action for SpecificLoanAction {
    fn id(&self) -> ActionId {
        ActionId::HandleSpecificLoan
    }

    fn description(&self) -> &str {
        "Describe home, auto or personal loans"
    }

    fn run(&self, turn: &Turn) -> ActionOutcome {
        let loan_type = turn
            .latest_entity(SlotName::LoanType.as_str())
            .filter(|v| !v.trim().is_empty());
        let key = Self::response_for(loan_type);

        tracing::debug!(sender = %turn.sender_id, loan_type = ?loan_type, response = %key, "Loan inquiry");
        ActionOutcome::new().with_message(OutboundMessage::template(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaulty_core::SlotValues;

    #[test]
    fn test_greet() {
        let outcome = GreetAction.run(&Turn::new("u1").with_text("hello"));
        assert_eq!(outcome.messages[0].key(), Some(ResponseKey::Greet));
        assert!(!outcome.changes_state());
    }

    #[test]
    fn test_balance_asks_without_account() {
        let action = CheckBalanceAction::new(DemoBalances::default());
        let outcome = action.run(&Turn::new("u1").with_text("check my balance"));
        assert_eq!(
            outcome.messages[0].key(),
            Some(ResponseKey::AskSlot(SlotName::AccountType))
        );
    }

    #[test]
    fn test_balance_from_entity_or_slot() {
        let action = CheckBalanceAction::new(DemoBalances {
            savings: 100.0,
            checking: 2500.5,
        });

        let from_entity = action.run(&Turn::new("u1").with_entity("account_type", "Checking"));
        assert_eq!(from_entity.messages[0].param("balance"), Some("2500.50"));
        assert_eq!(from_entity.messages[0].param("account_type"), Some("checking"));

        let from_slot = action.run(
            &Turn::new("u1").with_slots(SlotValues::new().with(SlotName::AccountType, "savings")),
        );
        assert_eq!(from_slot.messages[0].param("balance"), Some("100.00"));
        assert!(!from_slot.changes_state());
    }

    #[test]
    fn test_loan_responses() {
        assert_eq!(SpecificLoanAction::response_for(Some("Home loan")), ResponseKey::LoanDetailsHome);
        assert_eq!(SpecificLoanAction::response_for(Some("house")), ResponseKey::LoanDetailsHome);
        assert_eq!(SpecificLoanAction::response_for(Some("CAR")), ResponseKey::LoanDetailsAuto);
        assert_eq!(SpecificLoanAction::response_for(Some("auto")), ResponseKey::LoanDetailsAuto);
        assert_eq!(
            SpecificLoanAction::response_for(Some("personal")),
            ResponseKey::LoanDetailsPersonal
        );
        assert_eq!(SpecificLoanAction::response_for(Some("student")), ResponseKey::AskLoanInfo);
        assert_eq!(SpecificLoanAction::response_for(None), ResponseKey::AskLoanInfo);
    }

    #[test]
    fn test_loan_action_uses_latest_entity() {
        let outcome = SpecificLoanAction.run(&Turn::new("u1").with_entity("loan_type", "car loan"));
        assert_eq!(outcome.messages[0].key(), Some(ResponseKey::LoanDetailsAuto));

        let blank = SpecificLoanAction.run(&Turn::new("u1").with_entity("loan_type", "  "));
        assert_eq!(blank.messages[0].key(), Some(ResponseKey::AskLoanInfo));
    }
}
