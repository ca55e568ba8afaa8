//! Error types
//!
//! Rejected slot values are not errors: they degrade to a re-prompt.
//! Only failures at the boundary with the dialogue framework end up here.

use thiserror::Error;

/// Boundary errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("No registered action found for name '{0}'")]
    UnknownAction(String),

    #[error("Unknown slot: {0}")]
    UnknownSlot(String),
}

pub type Result<T> = std::result::Result<T, Error>;
