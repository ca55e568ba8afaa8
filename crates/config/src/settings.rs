//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use vaulty_core::AccountType;

use crate::ConfigError;

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - permissive CORS allowed
    #[default]
    Development,
    Staging,
    Production,
}

impl RuntimeEnvironment {
    /// Check if strict validation should be applied
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }

    /// Environment for a config name such as `VAULTY_ENV`
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "staging" => Some(Self::Staging),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }
}

/// Whether a configuration that fails to load may be replaced by defaults
///
/// Staging and production must start from their own configuration, never
/// from development defaults.
pub fn allows_default_fallback(env: Option<&str>) -> bool {
    !env.and_then(RuntimeEnvironment::from_name)
        .map(|environment| environment.is_strict())
        .unwrap_or(false)
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Action server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging and metrics
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Form completion policies
    #[serde(default)]
    pub forms: FormPolicy,

    /// Demo balances returned by the balance check
    #[serde(default)]
    pub balances: DemoBalances,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                message: "must be non-zero".to_string(),
            });
        }

        if self.server.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.request_timeout_secs".to_string(),
                message: "must be at least 1 second".to_string(),
            });
        }

        if self.environment.is_strict() && !self.server.cors_enabled {
            return Err(ConfigError::InvalidValue {
                field: "server.cors_enabled".to_string(),
                message: format!("CORS cannot be disabled in {:?}", self.environment),
            });
        }

        if let Some(raw) = &self.forms.transfer_default_account {
            if AccountType::parse_exact(raw).is_none() {
                return Err(ConfigError::InvalidValue {
                    field: "forms.transfer_default_account".to_string(),
                    message: format!("'{}' is not one of savings, checking", raw),
                });
            }
        }

        for (field, value) in [
            ("balances.savings", self.balances.savings),
            ("balances.checking", self.balances.checking),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: format!("must be a non-negative number, got {}", value),
                });
            }
        }

        Ok(())
    }
}

/// Action server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// CORS allowed origins
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5055
}

fn default_timeout() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: true,
            cors_origins: Vec::new(),
            request_timeout_secs: default_timeout(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub log_json: bool,

    #[serde(default = "default_true")]
    pub metrics_enabled: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
            metrics_enabled: true,
        }
    }
}

/// Form completion policies
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormPolicy {
    /// Account used when a transfer is submitted without one.
    ///
    /// Unset means the transfer form asks for the account instead.
    #[serde(default)]
    pub transfer_default_account: Option<String>,
}

impl FormPolicy {
    /// Parsed default account, if configured and valid
    pub fn transfer_default_account(&self) -> Option<AccountType> {
        self.transfer_default_account
            .as_deref()
            .and_then(AccountType::parse_exact)
    }
}

/// Static balance table used by the balance check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoBalances {
    #[serde(default = "default_savings_balance")]
    pub savings: f64,

    #[serde(default = "default_checking_balance")]
    pub checking: f64,
}

fn default_savings_balance() -> f64 {
    54_000.50
}

fn default_checking_balance() -> f64 {
    125_000.00
}

impl DemoBalances {
    pub fn balance_for(&self, account: AccountType) -> f64 {
        match account {
            AccountType::Savings => self.savings,
            AccountType::Checking => self.checking,
        }
    }
}

impl Default for DemoBalances {
    fn default() -> Self {
        Self {
            savings: default_savings_balance(),
            checking: default_checking_balance(),
        }
    }
}

/// Load settings from `config/` and the environment
///
/// Priority: env vars > config/{env} > config/default > defaults
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from(Path::new("config"), env)
}

/// Load settings from an explicit configuration directory
pub fn load_settings_from(config_dir: &Path, env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::from(config_dir.join("default")).required(false));

    if let Some(env_name) = env {
        builder = builder.add_source(File::from(config_dir.join(env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("VAULTY")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    tracing::debug!(
        environment = ?settings.environment,
        port = settings.server.port,
        transfer_default_account = ?settings.forms.transfer_default_account,
        "Settings loaded"
    );

    Ok(settings)
}
