//! Error types for the Benefits Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine and its collaborators can report. The paycheck
//! calculation itself never fails; errors come from configuration loading,
//! record validation, and record lookup.

use thiserror::Error;

use crate::models::{DependentId, EmployeeId};

/// The main error type for the Benefits Engine.
///
/// # Example
///
/// ```
/// use benefits_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/benefits.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/benefits.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the engine cannot work with.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfiguration {
        /// The offending settings field.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// Admitting a dependent would break the single spouse-or-partner rule.
    #[error("Eligibility violation: {message}")]
    EligibilityViolation {
        /// A description of the violated rule.
        message: String,
    },

    /// An employee record was missing a required field or held an invalid value.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A dependent record was missing a required field or held an invalid value.
    #[error("Invalid dependent field '{field}': {message}")]
    InvalidDependent {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No employee exists with the requested id.
    #[error("Employee with id {id} not found")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: EmployeeId,
    },

    /// No dependent exists with the requested id.
    #[error("Dependent with id {id} not found")]
    DependentNotFound {
        /// The id that was looked up.
        id: DependentId,
    },
}

impl EngineError {
    /// Returns true for the configuration family of errors, which are fatal at startup.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            EngineError::ConfigNotFound { .. }
                | EngineError::ConfigParseError { .. }
                | EngineError::InvalidConfiguration { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
