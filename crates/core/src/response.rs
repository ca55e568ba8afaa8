//! Response template keys and outbound messages
//!
//! Templates are defined and rendered by the dialogue framework. The
//! actions only pick a key and the named parameters to interpolate.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use crate::SlotName;

/// Named response template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseKey {
    /// Ask the user for a slot that is still missing
    AskSlot(SlotName),
    /// Tell the user the value given for a slot was not understood
    InvalidSlot(SlotName),
    ConfirmBillPayment,
    ConfirmLoanApplication,
    ConfirmTransfer,
    LoanDetailsHome,
    LoanDetailsAuto,
    LoanDetailsPersonal,
    AskLoanInfo,
    Greet,
    Balance,
}

impl ResponseKey {
    /// Template name as defined in the bot's domain
    pub fn name(&self) -> Cow<'static, str> {
        match self {
            ResponseKey::AskSlot(slot) => Cow::Owned(format!("utter_ask_{}", slot.as_str())),
            ResponseKey::InvalidSlot(slot) => {
                Cow::Owned(format!("utter_invalid_{}", slot.as_str()))
            }
            ResponseKey::ConfirmBillPayment => Cow::Borrowed("utter_confirm_bill_payment"),
            ResponseKey::ConfirmLoanApplication => Cow::Borrowed("utter_confirm_loan_application"),
            ResponseKey::ConfirmTransfer => Cow::Borrowed("utter_confirm_transfer"),
            ResponseKey::LoanDetailsHome => Cow::Borrowed("utter_loan_details_home"),
            ResponseKey::LoanDetailsAuto => Cow::Borrowed("utter_loan_details_auto"),
            ResponseKey::LoanDetailsPersonal => Cow::Borrowed("utter_loan_details_personal"),
            ResponseKey::AskLoanInfo => Cow::Borrowed("utter_ask_loan_info"),
            ResponseKey::Greet => Cow::Borrowed("utter_greet"),
            ResponseKey::Balance => Cow::Borrowed("utter_balance"),
        }
    }
}

impl fmt::Display for ResponseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// A message directive returned to the dialogue framework
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundMessage {
    /// Render a named template with parameters
    Template {
        key: ResponseKey,
        params: BTreeMap<String, String>,
    },
    /// Literal text
    Text(String),
}

impl OutboundMessage {
    pub fn template(key: ResponseKey) -> Self {
        OutboundMessage::Template {
            key,
            params: BTreeMap::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        OutboundMessage::Text(text.into())
    }

    /// Add a template parameter; ignored for text messages
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let OutboundMessage::Template { params, .. } = &mut self {
            params.insert(name.into(), value.into());
        }
        self
    }

    /// Template key, if this is a template message
    pub fn key(&self) -> Option<ResponseKey> {
        match self {
            OutboundMessage::Template { key, .. } => Some(*key),
            OutboundMessage::Text(_) => None,
        }
    }

    /// Template parameter by name
    pub fn param(&self, name: &str) -> Option<&str> {
        match self {
            OutboundMessage::Template { params, .. } => params.get(name).map(String::as_str),
            OutboundMessage::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_template_names() {
        assert_eq!(
            ResponseKey::AskSlot(SlotName::BillType).name(),
            "utter_ask_bill_type"
        );
        assert_eq!(
            ResponseKey::InvalidSlot(SlotName::AmountOfMoney).name(),
            "utter_invalid_amount_of_money"
        );
    }

    #[test]
    fn test_params_only_on_templates() {
        let msg = OutboundMessage::template(ResponseKey::Balance).with_param("balance", "10.00");
        assert_eq!(msg.param("balance"), Some("10.00"));

        let text = OutboundMessage::text("hi").with_param("balance", "10.00");
        assert_eq!(text, OutboundMessage::Text("hi".to_string()));
        assert_eq!(text.key(), None);
    }
}
