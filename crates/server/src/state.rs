//! Application State
//!
//! Shared state across all handlers.

use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;

use vaulty_agent::{create_default_registry, ActionRegistry};
use vaulty_config::{load_settings_from, Settings};

use crate::ServerError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Configuration, swapped on reload
    pub config: Arc<RwLock<Settings>>,
    /// Action registry built from the current configuration
    actions: Arc<RwLock<Arc<ActionRegistry>>>,
    /// Directory holding `default.yaml` and per-environment files
    config_dir: PathBuf,
    /// Environment name for config reload
    env: Option<String>,
}

impl AppState {
    pub fn new(config: Settings) -> Self {
        Self::with_env(config, None)
    }

    /// Create state with an environment name for reload support
    pub fn with_env(config: Settings, env: Option<String>) -> Self {
        let registry = create_default_registry(&config);
        Self {
            config: Arc::new(RwLock::new(config)),
            actions: Arc::new(RwLock::new(Arc::new(registry))),
            config_dir: PathBuf::from("config"),
            env,
        }
    }

    /// Read configuration files from `dir` on reload
    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = dir.into();
        self
    }

    /// Current action registry
    ///
    /// Returns a snapshot; a concurrent reload does not affect calls
    /// already holding it.
    pub fn registry(&self) -> Arc<ActionRegistry> {
        self.actions.read().clone()
    }

    /// Reload configuration from disk and rebuild the action registry
    pub fn reload_config(&self) -> Result<(), ServerError> {
        let new_config = load_settings_from(&self.config_dir, self.env.as_deref())?;
        let registry = Arc::new(create_default_registry(&new_config));

        *self.config.write() = new_config;
        *self.actions.write() = registry;

        tracing::info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Get a read guard to the current configuration
    pub fn get_config(&self) -> parking_lot::RwLockReadGuard<'_, Settings> {
        self.config.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaulty_core::ActionId;

    #[test]
    fn test_state_has_every_action() {
        let state = AppState::new(Settings::default());
        let registry = state.registry();
        assert_eq!(registry.len(), ActionId::ALL.len());
        for id in ActionId::ALL {
            assert!(registry.has(id));
        }
    }

    #[test]
    fn test_reload_missing_dir_uses_defaults() {
        let state = AppState::new(Settings::default())
            .with_config_dir("definitely/not/a/config/dir");
        assert!(state.reload_config().is_ok());
        assert_eq!(state.get_config().server.port, 5055);
    }
}
