//! Configuration loading and management for the Benefits Engine.
//!
//! This module loads the benefits cost policy from a YAML file and the
//! optional employee seed data used to populate the in-memory store.
//!
//! # Example
//!
//! ```no_run
//! use benefits_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/benefits.yaml").unwrap();
//! println!("Paychecks per year: {}", config.settings().paychecks_per_year);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, SeedData};
pub use types::{AgeBasedCostsSettings, BenefitsCostSettings, SalaryBasedCostsSettings};
