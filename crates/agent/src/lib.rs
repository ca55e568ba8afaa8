//! Banking assistant actions
//!
//! Features:
//! - Per-slot validation with canonicalization and re-prompts
//! - Form submission (pay bill, loan application, money transfer)
//! - Single-turn intent actions (greeting, balance, loan details)
//! - Static registry from [`ActionId`] to handler
//!
//! Dialogue policy, NLU and tracker persistence belong to the dialogue
//! framework calling these actions; every action here is a pure function
//! of the [`Turn`] it is given.

pub mod forms;
pub mod intents;
pub mod registry;
pub mod turn;
pub mod validation;

pub use forms::{FormKind, SubmitFormAction, ValidateFormAction};
pub use intents::{CheckBalanceAction, GreetAction, SpecificLoanAction};
pub use registry::{create_default_registry, Action, ActionRegistry};
pub use turn::{Entity, Turn};
pub use validation::{validate_slot, SlotValidation};

pub use vaulty_core::{ActionId, ActionOutcome, OutboundMessage, ResponseKey, SlotName, SlotValues};
