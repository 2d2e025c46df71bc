//! Paycheck calculation.
//!
//! Composes gross pay, the base employee cost, and the three surcharge
//! calculators into a [`PaycheckBreakdown`]. Every component is floored to the
//! cent on its own and net pay is taken from the floored components; flooring
//! the unrounded total instead gives different results.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::BenefitsCostSettings;
use crate::models::{AuditStep, Employee, PaycheckBreakdown, PaycheckCalculation};

use super::{
    PaycheckConversion, calculate_age_based_cost, calculate_dependent_costs,
    calculate_salary_based_cost, floor_to_cent,
};

/// Calculates an employee's paycheck, recording every rule decision.
///
/// `as_of` is the reference date for all age checks in this calculation.
/// Callers at the service boundary pass today's date.
pub fn calculate_paycheck_with_audit(
    employee: &Employee,
    settings: &BenefitsCostSettings,
    as_of: NaiveDate,
) -> PaycheckCalculation {
    let conversion = PaycheckConversion::from_settings(settings);
    let mut audit_steps: Vec<AuditStep> = Vec::with_capacity(6);

    let gross_pay = floor_to_cent(conversion.yearly_to_paycheck(employee.salary));
    audit_steps.push(AuditStep {
        step_number: 1,
        rule_id: "gross_pay".to_string(),
        rule_name: "Gross Pay".to_string(),
        input: serde_json::json!({
            "salary": employee.salary.normalize().to_string(),
            "paychecks_per_year": settings.paychecks_per_year.get()
        }),
        output: serde_json::json!({
            "gross_pay": gross_pay.to_string()
        }),
        reasoning: format!(
            "${} / {} paychecks, floored to the cent = ${}",
            employee.salary.normalize(),
            settings.paychecks_per_year,
            gross_pay
        ),
    });

    let base_benefits_costs =
        floor_to_cent(conversion.monthly_to_paycheck(settings.employee_cost_per_month));
    audit_steps.push(AuditStep {
        step_number: 2,
        rule_id: "base_cost".to_string(),
        rule_name: "Base Employee Benefits Cost".to_string(),
        input: serde_json::json!({
            "employee_cost_per_month": settings.employee_cost_per_month.normalize().to_string()
        }),
        output: serde_json::json!({
            "base_benefits_costs": base_benefits_costs.to_string()
        }),
        reasoning: format!(
            "${}/month x 12 / {} paychecks, floored to the cent = ${}",
            settings.employee_cost_per_month.normalize(),
            settings.paychecks_per_year,
            base_benefits_costs
        ),
    });

    let dependents = calculate_dependent_costs(employee, settings, as_of, 3);
    let dependents_benefits_costs = floor_to_cent(dependents.cost_per_paycheck);
    audit_steps.push(dependents.audit_step);

    let age_based = calculate_age_based_cost(employee, settings, as_of, 4);
    let age_based_benefits_costs = floor_to_cent(age_based.cost_per_paycheck);
    audit_steps.push(age_based.audit_step);

    let salary_based = calculate_salary_based_cost(employee, settings, 5);
    let salary_benefits_costs = floor_to_cent(salary_based.cost_per_paycheck);
    audit_steps.push(salary_based.audit_step);

    let net_pay = gross_pay
        - base_benefits_costs
        - dependents_benefits_costs
        - age_based_benefits_costs
        - salary_benefits_costs;
    audit_steps.push(AuditStep {
        step_number: 6,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.to_string(),
            "base_benefits_costs": base_benefits_costs.to_string(),
            "dependents_benefits_costs": dependents_benefits_costs.to_string(),
            "age_based_benefits_costs": age_based_benefits_costs.to_string(),
            "salary_benefits_costs": salary_benefits_costs.to_string()
        }),
        output: serde_json::json!({
            "net_pay": net_pay.to_string()
        }),
        reasoning: format!(
            "${} - ${} - ${} - ${} - ${} = ${}",
            gross_pay,
            base_benefits_costs,
            dependents_benefits_costs,
            age_based_benefits_costs,
            salary_benefits_costs,
            net_pay
        ),
    });

    let breakdown = PaycheckBreakdown {
        gross_pay,
        base_benefits_costs,
        dependents_benefits_costs,
        salary_benefits_costs,
        age_based_benefits_costs,
        net_pay,
    };

    debug!(
        employee_id = employee.id,
        as_of = %as_of,
        dependents = employee.dependents.len(),
        gross_pay = %breakdown.gross_pay,
        net_pay = %breakdown.net_pay,
        "Paycheck calculated"
    );

    PaycheckCalculation {
        employee_id: employee.id,
        breakdown,
        audit_steps,
    }
}

/// Calculates an employee's paycheck breakdown.
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::calculate_paycheck;
/// use benefits_engine::config::ConfigLoader;
/// use benefits_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let settings = ConfigLoader::load("./config/benefits.yaml").unwrap().into_settings();
/// let employee = Employee {
///     id: 1,
///     first_name: "LeBron".to_string(),
///     last_name: "James".to_string(),
///     salary: Decimal::from_str("75420.99").unwrap(),
///     date_of_birth: NaiveDate::from_ymd_opt(1984, 12, 30).unwrap(),
///     dependents: vec![],
/// };
///
/// let paycheck = calculate_paycheck(&employee, &settings, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
/// assert_eq!(paycheck.gross_pay.to_string(), "2900.80");
/// assert_eq!(paycheck.net_pay.to_string(), "2439.27");
/// ```
pub fn calculate_paycheck(
    employee: &Employee,
    settings: &BenefitsCostSettings,
    as_of: NaiveDate,
) -> PaycheckBreakdown {
    calculate_paycheck_with_audit(employee, settings, as_of).breakdown
}

/// Returns the net pay implied by a breakdown's rounded components.
pub fn net_pay_from_components(breakdown: &PaycheckBreakdown) -> Decimal {
    breakdown.gross_pay - breakdown.total_benefits_costs()
}
