//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the benefits
//! cost policy and the optional employee seed file from YAML.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::NewEmployee;

use super::types::BenefitsCostSettings;

/// Employee records used to populate the in-memory store at startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    /// Employees in the order their ids should be assigned.
    #[serde(default)]
    pub employees: Vec<NewEmployee>,
}

/// Loads and provides access to the benefits cost policy.
///
/// # Example
///
/// ```no_run
/// use benefits_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/benefits.yaml")?;
/// println!("Paychecks per year: {}", loader.settings().paychecks_per_year);
/// # Ok::<(), benefits_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: BenefitsCostSettings,
}

impl ConfigLoader {
    /// Loads and validates the policy file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file is not valid YAML or a field has the wrong type, including a
    ///   `paychecks_per_year` that is not a positive integer (`ConfigParseError`)
    /// - A monetary amount is negative (`InvalidConfiguration`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let settings = Self::load_yaml::<BenefitsCostSettings>(path.as_ref())?;
        Self::from_settings(settings)
    }

    /// Parses and validates a policy held in memory.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let settings = serde_yaml::from_str::<BenefitsCostSettings>(content).map_err(|e| {
            EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            }
        })?;
        Self::from_settings(settings)
    }

    /// Wraps already-built settings after validating them.
    pub fn from_settings(settings: BenefitsCostSettings) -> EngineResult<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// Loads the employee seed file at `path`.
    pub fn load_seed<P: AsRef<Path>>(path: P) -> EngineResult<SeedData> {
        Self::load_yaml::<SeedData>(path.as_ref())
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &BenefitsCostSettings {
        &self.settings
    }

    /// Consumes the loader and returns the settings.
    pub fn into_settings(self) -> BenefitsCostSettings {
        self.settings
    }
}
