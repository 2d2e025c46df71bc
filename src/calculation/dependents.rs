//! Dependent benefits cost calculation.
//!
//! Each dependent costs the base dependent monthly amount plus, when the
//! dependent is strictly older than the dependent age threshold, an
//! additional monthly amount. Each dependent's monthly cost is converted to a
//! per-paycheck amount and the results are summed. Flooring to the cent happens
//! once, on the sum, in the paycheck calculator.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::BenefitsCostSettings;
use crate::models::{AuditStep, DependentId, Employee, Relationship};

use super::{PaycheckConversion, calculate_age};

/// The cost attributed to one dependent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependentCost {
    /// The dependent's id.
    pub dependent_id: DependentId,
    /// The dependent's relationship to the employee.
    pub relationship: Relationship,
    /// The dependent's age on the reference date.
    pub age: i32,
    /// Whether the dependent age threshold was exceeded.
    pub surcharge_applied: bool,
    /// Monthly cost including any surcharge.
    pub monthly_cost: Decimal,
    /// Per-paycheck cost, not floored.
    pub cost_per_paycheck: Decimal,
}

/// The result of the dependent cost calculation.
#[derive(Debug, Clone)]
pub struct DependentCostResult {
    /// Sum of every dependent's per-paycheck cost, not yet floored to the cent.
    pub cost_per_paycheck: Decimal,
    /// Per-dependent breakdown in the employee's dependent order.
    pub dependent_costs: Vec<DependentCost>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the combined per-paycheck cost of an employee's dependents.
///
/// An employee with no dependents yields zero.
pub fn calculate_dependent_costs(
    employee: &Employee,
    settings: &BenefitsCostSettings,
    as_of: NaiveDate,
    step_number: u32,
) -> DependentCostResult {
    let conversion = PaycheckConversion::from_settings(settings);
    let age_settings = &settings.age_based;

    let dependent_costs: Vec<DependentCost> = employee
        .dependents
        .iter()
        .map(|dependent| {
            let age = calculate_age(dependent.date_of_birth, as_of);
            let surcharge_applied = age > age_settings.dependent_age_threshold;

            let mut monthly_cost = settings.dependent_cost_per_month;
            if surcharge_applied {
                monthly_cost += age_settings.dependent_additional_monthly_cost;
            }

            DependentCost {
                dependent_id: dependent.id,
                relationship: dependent.relationship,
                age,
                surcharge_applied,
                monthly_cost,
                cost_per_paycheck: conversion.monthly_to_paycheck(monthly_cost),
            }
        })
        .collect();

    let cost_per_paycheck: Decimal = dependent_costs.iter().map(|d| d.cost_per_paycheck).sum();

    let surcharged = dependent_costs.iter().filter(|d| d.surcharge_applied).count();
    let reasoning = if dependent_costs.is_empty() {
        "No dependents - no dependent benefits cost".to_string()
    } else {
        format!(
            "{} dependent(s), {} over age {}: ${} per paycheck",
            dependent_costs.len(),
            surcharged,
            age_settings.dependent_age_threshold,
            cost_per_paycheck.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "dependent_cost".to_string(),
        rule_name: "Dependent Benefits Cost".to_string(),
        input: serde_json::json!({
            "as_of": as_of.to_string(),
            "dependent_cost_per_month": settings.dependent_cost_per_month.normalize().to_string(),
            "dependent_age_threshold": age_settings.dependent_age_threshold,
            "dependents": dependent_costs
                .iter()
                .map(|d| serde_json::json!({
                    "id": d.dependent_id,
                    "relationship": d.relationship,
                    "age": d.age
                }))
                .collect::<Vec<_>>()
        }),
        output: serde_json::json!({
            "dependents": dependent_costs
                .iter()
                .map(|d| serde_json::json!({
                    "id": d.dependent_id,
                    "surcharge_applied": d.surcharge_applied,
                    "monthly_cost": d.monthly_cost.normalize().to_string()
                }))
                .collect::<Vec<_>>(),
            "cost_per_paycheck": cost_per_paycheck.normalize().to_string()
        }),
        reasoning,
    };

    DependentCostResult {
        cost_per_paycheck,
        dependent_costs,
        audit_step,
    }
}
