//! Custom action webhook protocol
//!
//! Wire types for the dialogue framework's action server calls and their
//! conversion to and from [`Turn`] / [`ActionOutcome`].

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::HashMap;

use vaulty_agent::{Entity, Turn};
use vaulty_core::{ActionOutcome, OutboundMessage, SlotName, SlotValues};

/// Name of the framework's bookkeeping slot for the slot being asked
const REQUESTED_SLOT: &str = "requested_slot";

/// Fallback conversation id when the framework does not send one
const DEFAULT_SENDER: &str = "default";

/// Action call sent by the dialogue framework
#[derive(Debug, Clone, Deserialize)]
pub struct ActionCall {
    pub next_action: String,
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub tracker: Tracker,
    /// Bot domain; unused, templates are rendered by the framework
    #[serde(default)]
    pub domain: Value,
    #[serde(default)]
    pub version: Option<String>,
}

/// Conversation tracker snapshot
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tracker {
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub slots: HashMap<String, Value>,
    #[serde(default)]
    pub latest_message: LatestMessage,
    #[serde(default)]
    pub events: Vec<Value>,
    #[serde(default)]
    pub active_loop: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LatestMessage {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub entities: Vec<WireEntity>,
    #[serde(default)]
    pub intent: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireEntity {
    pub entity: String,
    #[serde(default)]
    pub value: Value,
}

/// Response returned to the dialogue framework
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActionResponse {
    pub events: Vec<Value>,
    pub responses: Vec<Value>,
}

impl ActionCall {
    /// Conversation id, from the call or the tracker
    pub fn sender(&self) -> &str {
        self.sender_id
            .as_deref()
            .or(self.tracker.sender_id.as_deref())
            .unwrap_or(DEFAULT_SENDER)
    }

    /// Build the action input for this call
    pub fn to_turn(&self) -> Turn {
        let tracker = &self.tracker;

        let mut slots = SlotValues::new();
        for slot in SlotName::ALL {
            slots.set(slot, tracker.slots.get(slot.as_str()).and_then(value_to_string));
        }

        let requested_slot = tracker
            .slots
            .get(REQUESTED_SLOT)
            .and_then(Value::as_str)
            .and_then(|name| name.parse::<SlotName>().ok());

        let entities = tracker
            .latest_message
            .entities
            .iter()
            .filter_map(|e| {
                value_to_string(&e.value).map(|value| Entity {
                    entity: e.entity.clone(),
                    value,
                })
            })
            .collect();

        Turn {
            sender_id: self.sender().to_string(),
            latest_text: tracker.latest_message.text.clone().unwrap_or_default(),
            entities,
            slots,
            slots_to_validate: slots_set_since_last_user_message(&tracker.events),
            requested_slot,
        }
    }
}

/// Slot events recorded after the latest user message, oldest first,
/// one entry per slot (the latest value wins)
fn slots_set_since_last_user_message(events: &[Value]) -> Vec<(SlotName, Option<String>)> {
    let mut extracted: Vec<(SlotName, Option<String>)> = Vec::new();

    for event in events.iter().rev() {
        match event.get("event").and_then(Value::as_str) {
            Some("user") => break,
            Some("slot") => {
                let Some(slot) = event
                    .get("name")
                    .and_then(Value::as_str)
                    .and_then(|name| name.parse::<SlotName>().ok())
                else {
                    continue;
                };
                if extracted.iter().any(|(seen, _)| *seen == slot) {
                    continue;
                }
                let value = event.get("value").and_then(value_to_string);
                extracted.push((slot, value));
            }
            _ => {}
        }
    }

    extracted.reverse();
    extracted
}

/// Slot values arrive as JSON; numbers and booleans are stringified
fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl ActionResponse {
    pub fn from_outcome(outcome: &ActionOutcome) -> Self {
        let mut events: Vec<Value> = outcome
            .slot_updates
            .iter()
            .map(|(slot, value)| {
                json!({
                    "event": "slot",
                    "timestamp": null,
                    "name": slot.as_str(),
                    "value": value,
                })
            })
            .collect();

        if outcome.reset_slots {
            events.push(json!({ "event": "reset_slots", "timestamp": null }));
        }

        let responses = outcome.messages.iter().map(message_to_json).collect();

        Self { events, responses }
    }
}

fn message_to_json(message: &OutboundMessage) -> Value {
    match message {
        OutboundMessage::Template { key, params } => {
            let mut body = Map::new();
            let name = key.name().into_owned();
            body.insert("response".to_string(), Value::String(name.clone()));
            body.insert("template".to_string(), Value::String(name));
            for (param, value) in params {
                body.insert(param.clone(), Value::String(value.clone()));
            }
            Value::Object(body)
        }
        OutboundMessage::Text(text) => json!({ "text": text }),
    }
}
