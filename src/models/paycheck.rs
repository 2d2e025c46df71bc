//! Paycheck result models for the Benefits Engine.
//!
//! This module contains the [`PaycheckBreakdown`] returned by the paycheck
//! calculator and the [`PaycheckCalculation`] that pairs it with an audit
//! trace of every rule decision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmployeeId;

/// Per-paycheck amounts for one employee.
///
/// Every component is floored to the cent independently and `net_pay` is
/// derived from the already-floored components. Amounts serialize as JSON
/// numbers.
///
/// # Example
///
/// ```
/// use benefits_engine::models::PaycheckBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = PaycheckBreakdown {
///     gross_pay: Decimal::new(355250, 2),
///     base_benefits_costs: Decimal::new(46153, 2),
///     dependents_benefits_costs: Decimal::new(83076, 2),
///     salary_benefits_costs: Decimal::new(7105, 2),
///     age_based_benefits_costs: Decimal::new(0, 2),
///     net_pay: Decimal::new(218916, 2),
/// };
/// assert_eq!(breakdown.total_benefits_costs(), Decimal::new(136334, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaycheckBreakdown {
    /// Salary divided across paychecks.
    #[serde(with = "rust_decimal::serde::float")]
    pub gross_pay: Decimal,
    /// Base employee benefits cost.
    #[serde(with = "rust_decimal::serde::float")]
    pub base_benefits_costs: Decimal,
    /// Combined cost of all dependents.
    #[serde(with = "rust_decimal::serde::float")]
    pub dependents_benefits_costs: Decimal,
    /// Surcharge for salaries over the threshold.
    #[serde(with = "rust_decimal::serde::float")]
    pub salary_benefits_costs: Decimal,
    /// Surcharge for employees over the age threshold.
    #[serde(with = "rust_decimal::serde::float")]
    pub age_based_benefits_costs: Decimal,
    /// Gross pay less every benefits cost.
    #[serde(with = "rust_decimal::serde::float")]
    pub net_pay: Decimal,
}

impl PaycheckBreakdown {
    /// Sum of the four benefits cost components.
    pub fn total_benefits_costs(&self) -> Decimal {
        self.base_benefits_costs
            + self.dependents_benefits_costs
            + self.salary_benefits_costs
            + self.age_based_benefits_costs
    }
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditStep {
    /// The sequential step number, starting at 1.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A paycheck breakdown together with the steps that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaycheckCalculation {
    /// The employee the paycheck was calculated for.
    pub employee_id: EmployeeId,
    /// The calculated amounts.
    pub breakdown: PaycheckBreakdown,
    /// Ordered rule decisions.
    pub audit_steps: Vec<AuditStep>,
}
