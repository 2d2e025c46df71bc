//! Configuration types for the benefits cost policy.
//!
//! This module contains the strongly-typed settings structures that are
//! deserialized from the YAML policy file.

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Salary-based surcharge settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBasedCostsSettings {
    /// Yearly salary that must be strictly exceeded before the surcharge applies.
    pub threshold: Decimal,
    /// Fraction of the yearly salary charged per year (0.02 = 2%).
    pub additional_yearly_cost_percent: Decimal,
}

/// Age-based surcharge settings for employees and dependents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBasedCostsSettings {
    /// Employee age that must be strictly exceeded before the surcharge applies.
    pub age_threshold: i32,
    /// Monthly surcharge for employees over the age threshold.
    pub additional_monthly_cost: Decimal,
    /// Dependent age that must be strictly exceeded before the surcharge applies.
    pub dependent_age_threshold: i32,
    /// Monthly surcharge per dependent over the dependent age threshold.
    pub dependent_additional_monthly_cost: Decimal,
}

/// The complete benefits cost policy.
///
/// Loaded once at startup and treated as an immutable snapshot for the
/// duration of every paycheck calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitsCostSettings {
    /// Number of paychecks issued per year. Zero is rejected at parse time.
    pub paychecks_per_year: NonZeroU32,
    /// Base monthly benefits cost for every employee.
    pub employee_cost_per_month: Decimal,
    /// Base monthly benefits cost for every dependent.
    pub dependent_cost_per_month: Decimal,
    /// Salary-based surcharge settings.
    pub salary_based: SalaryBasedCostsSettings,
    /// Age-based surcharge settings.
    pub age_based: AgeBasedCostsSettings,
}

impl BenefitsCostSettings {
    /// Checks the monetary fields for values the engine cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` naming the first negative amount found.
    pub fn validate(&self) -> EngineResult<()> {
        let amounts = [
            ("employee_cost_per_month", self.employee_cost_per_month),
            ("dependent_cost_per_month", self.dependent_cost_per_month),
            ("salary_based.threshold", self.salary_based.threshold),
            (
                "salary_based.additional_yearly_cost_percent",
                self.salary_based.additional_yearly_cost_percent,
            ),
            (
                "age_based.additional_monthly_cost",
                self.age_based.additional_monthly_cost,
            ),
            (
                "age_based.dependent_additional_monthly_cost",
                self.age_based.dependent_additional_monthly_cost,
            ),
        ];

        for (field, amount) in amounts {
            if amount < Decimal::ZERO {
                return Err(EngineError::InvalidConfiguration {
                    field: field.to_string(),
                    message: format!("must not be negative, got {}", amount),
                });
            }
        }

        Ok(())
    }
}
