//! Application state for the Benefits Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use crate::config::{BenefitsCostSettings, ConfigLoader};
use crate::error::EngineResult;
use crate::store::EmployeeStore;

/// Shared application state.
///
/// Holds the benefits cost policy and the employee store. Handlers take one
/// settings snapshot per request, so a replaced policy is never observed
/// half-applied by a calculation in flight.
#[derive(Clone)]
pub struct AppState {
    settings: Arc<RwLock<Arc<BenefitsCostSettings>>>,
    store: Arc<EmployeeStore>,
}

impl AppState {
    /// Creates a new application state from a loaded configuration and store.
    pub fn new(config: ConfigLoader, store: EmployeeStore) -> Self {
        Self {
            settings: Arc::new(RwLock::new(Arc::new(config.into_settings()))),
            store: Arc::new(store),
        }
    }

    /// Returns the current settings snapshot.
    pub fn settings(&self) -> Arc<BenefitsCostSettings> {
        let guard = self.settings.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Validates and swaps in a new benefits cost policy.
    ///
    /// Calculations already holding a snapshot finish with the old policy.
    pub fn replace_settings(&self, settings: BenefitsCostSettings) -> EngineResult<()> {
        settings.validate()?;
        let mut guard = self.settings.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(settings);
        info!("Benefits cost settings replaced");
        Ok(())
    }

    /// Reloads the policy file at `path` and swaps it in.
    ///
    /// The binary calls this on SIGHUP. On error the current policy stays.
    pub fn reload_settings<P: AsRef<Path>>(&self, path: P) -> EngineResult<()> {
        let config = ConfigLoader::load(path.as_ref())?;
        self.replace_settings(config.into_settings())?;
        info!(path = %path.as_ref().display(), "Benefits cost settings reloaded");
        Ok(())
    }

    /// Returns the employee store.
    pub fn store(&self) -> &EmployeeStore {
        &self.store
    }
}
