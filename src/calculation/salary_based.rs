//! Salary-based surcharge.
//!
//! Employees whose yearly salary strictly exceeds the configured threshold pay
//! a percentage of their whole salary per year, spread across paychecks.

use rust_decimal::Decimal;

use crate::config::BenefitsCostSettings;
use crate::models::{AuditStep, Employee};

use super::PaycheckConversion;

/// The result of the salary-based surcharge calculation.
#[derive(Debug, Clone)]
pub struct SalaryBasedCostResult {
    /// Per-paycheck surcharge, not yet floored to the cent.
    pub cost_per_paycheck: Decimal,
    /// Whether the salary threshold was exceeded.
    pub surcharge_applied: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the salary-based surcharge per paycheck.
///
/// The percentage applies to the whole salary, not just the part above the
/// threshold. A salary equal to the threshold pays nothing.
pub fn calculate_salary_based_cost(
    employee: &Employee,
    settings: &BenefitsCostSettings,
    step_number: u32,
) -> SalaryBasedCostResult {
    let salary_settings = &settings.salary_based;
    let surcharge_applied = employee.salary > salary_settings.threshold;

    let yearly_cost = if surcharge_applied {
        salary_settings.additional_yearly_cost_percent * employee.salary
    } else {
        Decimal::ZERO
    };
    let cost_per_paycheck =
        PaycheckConversion::from_settings(settings).yearly_to_paycheck(yearly_cost);

    let reasoning = if surcharge_applied {
        format!(
            "Salary ${} exceeds ${}: ${} x {} / {} paychecks = ${}",
            employee.salary.normalize(),
            salary_settings.threshold.normalize(),
            employee.salary.normalize(),
            salary_settings.additional_yearly_cost_percent.normalize(),
            settings.paychecks_per_year,
            cost_per_paycheck.normalize()
        )
    } else {
        format!(
            "No salary surcharge - salary ${} does not exceed ${}",
            employee.salary.normalize(),
            salary_settings.threshold.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "salary_based_cost".to_string(),
        rule_name: "Salary-Based Benefits Cost".to_string(),
        input: serde_json::json!({
            "salary": employee.salary.normalize().to_string(),
            "threshold": salary_settings.threshold.normalize().to_string(),
            "additional_yearly_cost_percent":
                salary_settings.additional_yearly_cost_percent.normalize().to_string()
        }),
        output: serde_json::json!({
            "surcharge_applied": surcharge_applied,
            "yearly_cost": yearly_cost.normalize().to_string(),
            "cost_per_paycheck": cost_per_paycheck.normalize().to_string()
        }),
        reasoning,
    };

    SalaryBasedCostResult {
        cost_per_paycheck,
        surcharge_applied,
        audit_step,
    }
}
