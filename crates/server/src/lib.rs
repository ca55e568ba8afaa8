//! Vaulty Action Server
//!
//! Serves the banking actions over the dialogue framework's custom
//! action webhook, plus health, metrics and admin endpoints.

pub mod http;
pub mod metrics;
pub mod state;
pub mod webhook;

pub use http::create_router;
pub use metrics::{init_metrics, record_action, record_error};
pub use state::AppState;
pub use webhook::{ActionCall, ActionResponse};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Server errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("No registered action found for name '{0}'.")]
    UnknownAction(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<vaulty_core::Error> for ServerError {
    fn from(err: vaulty_core::Error) -> Self {
        match err {
            vaulty_core::Error::UnknownAction(name) => ServerError::UnknownAction(name),
            other => ServerError::InvalidRequest(other.to_string()),
        }
    }
}

impl From<vaulty_config::ConfigError> for ServerError {
    fn from(err: vaulty_config::ConfigError) -> Self {
        ServerError::Config(err.to_string())
    }
}

impl From<&ServerError> for StatusCode {
    fn from(err: &ServerError) -> Self {
        match err {
            ServerError::UnknownAction(_) => StatusCode::NOT_FOUND,
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = StatusCode::from(&self);
        let mut body = serde_json::json!({ "error": self.to_string() });
        if let ServerError::UnknownAction(name) = &self {
            body["action_name"] = serde_json::Value::String(name.clone());
        }
        (status, Json(body)).into_response()
    }
}
