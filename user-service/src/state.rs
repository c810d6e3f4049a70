//! Application state management

use std::sync::Arc;

use crate::{config::Config, store::UserStore};

/// Application state shared across handlers
///
/// Built once at startup and handed to the router. Cloning is cheap: both the
/// configuration and the store sit behind `Arc`s, so every clone sees the same
/// records.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    config: Arc<Config>,
    users: Arc<UserStore>,
}

impl AppState {
    /// Create state with a fresh, empty user store
    pub fn new(config: Config) -> Self {
        Self::with_store(config, Arc::new(UserStore::new()))
    }

    /// Create state around an existing store
    pub fn with_store(config: Config, users: Arc<UserStore>) -> Self {
        Self {
            config: Arc::new(config),
            users,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the user store
    pub fn users(&self) -> &UserStore {
        &self.users
    }
}
