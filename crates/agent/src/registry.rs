//! Action Registry
//!
//! Maps every [`ActionId`] to its handler. The registry is built once at
//! startup; the string name sent by the dialogue framework is resolved to
//! an `ActionId` at the edge, so dispatch never does string lookup.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use vaulty_config::Settings;
use vaulty_core::{ActionId, ActionOutcome, Error, Result};

use crate::forms::{FormKind, SubmitFormAction, ValidateFormAction};
use crate::intents::{CheckBalanceAction, GreetAction, SpecificLoanAction};
use crate::Turn;

/// A custom action invoked by the dialogue framework
///
/// Actions run synchronously and deterministically: one call per user
/// turn, no I/O, no shared mutable state.
pub trait Action: Send + Sync {
    fn id(&self) -> ActionId;

    fn description(&self) -> &str;

    fn run(&self, turn: &Turn) -> ActionOutcome;
}

/// Action registry
pub struct ActionRegistry {
    actions: HashMap<ActionId, Arc<dyn Action>>,
}

impl ActionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    /// Register an action, replacing any previous handler for its id
    pub fn register<A: Action + 'static>(&mut self, action: A) {
        let id = action.id();
        if self.actions.insert(id, Arc::new(action)).is_some() {
            tracing::warn!(action = %id, "Replaced existing action handler");
        }
    }

    pub fn get(&self, id: ActionId) -> Option<&Arc<dyn Action>> {
        self.actions.get(&id)
    }

    pub fn has(&self, id: ActionId) -> bool {
        self.actions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Registered action ids, sorted
    pub fn action_ids(&self) -> Vec<ActionId> {
        let mut ids: Vec<_> = self.actions.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Run an action
    pub fn run(&self, id: ActionId, turn: &Turn) -> Result<ActionOutcome> {
        let action = self
            .actions
            .get(&id)
            .ok_or_else(|| Error::UnknownAction(id.name().to_string()))?;

        let started = Instant::now();
        let outcome = action.run(turn);

        tracing::debug!(
            action = %id,
            sender = %turn.sender_id,
            slot_updates = outcome.slot_updates.len(),
            messages = outcome.messages.len(),
            reset = outcome.reset_slots,
            elapsed_us = started.elapsed().as_micros() as u64,
            "Action completed"
        );

        Ok(outcome)
    }

    /// Resolve an action name and run it
    pub fn run_named(&self, name: &str, turn: &Turn) -> Result<ActionOutcome> {
        let id: ActionId = name.parse()?;
        self.run(id, turn)
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry with every action, configured from `settings`
pub fn create_default_registry(settings: &Settings) -> ActionRegistry {
    let mut registry = ActionRegistry::new();

    registry.register(GreetAction);
    registry.register(CheckBalanceAction::new(settings.balances.clone()));
    registry.register(SpecificLoanAction);

    let default_account = settings.forms.transfer_default_account();
    for form in FormKind::ALL {
        registry.register(ValidateFormAction::new(form));
        registry.register(SubmitFormAction::new(form).with_default_account(default_account));
    }

    tracing::info!(
        actions = registry.len(),
        transfer_default_account = ?default_account,
        "Action registry created"
    );

    registry
}
