//! Configuration management for the Vaulty banking actions
//!
//! Supports loading configuration from:
//! - YAML/TOML files (`config/default`, `config/{env}`)
//! - Environment variables (VAULTY_ prefix, `__` separator)
//!
//! The category alias tables are compiled in (see [`vocabulary`]) and
//! shared read-only by every conversation.

pub mod settings;
pub mod vocabulary;

pub use settings::{
    allows_default_fallback, load_settings, load_settings_from, DemoBalances, FormPolicy,
    ObservabilityConfig, RuntimeEnvironment, ServerConfig, Settings,
};
pub use vocabulary::{BILL_TYPE_ALIASES, LOAN_TYPE_ALIASES};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::NotFound(path) => ConfigError::FileNotFound(path),
            other => ConfigError::ParseError(other.to_string()),
        }
    }
}
