//! Per-call input handed to an action

use serde::{Deserialize, Serialize};
use vaulty_core::{SlotName, SlotValues};

/// An entity extracted from the latest user message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub entity: String,
    pub value: String,
}

/// Everything an action can see about the current turn
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Turn {
    /// Conversation id
    pub sender_id: String,
    /// Raw text of the latest user message
    pub latest_text: String,
    /// Entities extracted from the latest user message
    pub entities: Vec<Entity>,
    /// Slot values before this action runs
    pub slots: SlotValues,
    /// Slots extracted this turn, with their candidate values
    pub slots_to_validate: Vec<(SlotName, Option<String>)>,
    /// Slot the active form is currently asking for
    pub requested_slot: Option<SlotName>,
}

impl Turn {
    pub fn new(sender_id: impl Into<String>) -> Self {
        Self {
            sender_id: sender_id.into(),
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.latest_text = text.into();
        self
    }

    pub fn with_entity(mut self, entity: impl Into<String>, value: impl Into<String>) -> Self {
        self.entities.push(Entity {
            entity: entity.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_slots(mut self, slots: SlotValues) -> Self {
        self.slots = slots;
        self
    }

    /// Record a slot extracted this turn
    pub fn with_extracted(mut self, slot: SlotName, value: Option<&str>) -> Self {
        self.slots_to_validate.push((slot, value.map(str::to_string)));
        self
    }

    pub fn with_requested_slot(mut self, slot: SlotName) -> Self {
        self.requested_slot = Some(slot);
        self
    }

    /// Value of the last entity with this name in the latest message
    pub fn latest_entity(&self, name: &str) -> Option<&str> {
        self.entities
            .iter()
            .rev()
            .find(|e| e.entity == name)
            .map(|e| e.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_entity_prefers_last_occurrence() {
        let turn = Turn::new("u1")
            .with_entity("loan_type", "car")
            .with_entity("loan_type", "home");
        assert_eq!(turn.latest_entity("loan_type"), Some("home"));
        assert_eq!(turn.latest_entity("account_type"), None);
    }
}
