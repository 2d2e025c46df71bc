//! Employee age-based surcharge.
//!
//! Employees strictly older than the configured age threshold pay an
//! additional monthly cost, converted to a per-paycheck amount.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::BenefitsCostSettings;
use crate::models::{AuditStep, Employee};

use super::PaycheckConversion;

/// The result of the age-based surcharge calculation.
#[derive(Debug, Clone)]
pub struct AgeBasedCostResult {
    /// Per-paycheck surcharge, not yet floored to the cent.
    pub cost_per_paycheck: Decimal,
    /// The employee's age on the reference date.
    pub age: i32,
    /// Whether the age threshold was exceeded.
    pub surcharge_applied: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the employee's own age-based surcharge per paycheck.
///
/// An employee whose age equals the threshold does not pay the surcharge.
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::calculate_age_based_cost;
/// use benefits_engine::config::ConfigLoader;
/// use benefits_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let settings = ConfigLoader::load("./config/benefits.yaml").unwrap().into_settings();
/// let employee = Employee {
///     id: 3,
///     first_name: "Michael".to_string(),
///     last_name: "Jordan".to_string(),
///     salary: Decimal::new(14321112, 2),
///     date_of_birth: NaiveDate::from_ymd_opt(1963, 2, 17).unwrap(),
///     dependents: vec![],
/// };
///
/// let as_of = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let result = calculate_age_based_cost(&employee, &settings, as_of, 1);
/// assert!(result.surcharge_applied);
/// assert_eq!(result.age, 61);
/// ```
pub fn calculate_age_based_cost(
    employee: &Employee,
    settings: &BenefitsCostSettings,
    as_of: NaiveDate,
    step_number: u32,
) -> AgeBasedCostResult {
    let age_settings = &settings.age_based;
    let age = employee.age_on(as_of);
    let surcharge_applied = age > age_settings.age_threshold;

    let monthly_cost = if surcharge_applied {
        age_settings.additional_monthly_cost
    } else {
        Decimal::ZERO
    };
    let cost_per_paycheck =
        PaycheckConversion::from_settings(settings).monthly_to_paycheck(monthly_cost);

    let reasoning = if surcharge_applied {
        format!(
            "Age {} exceeds threshold {}: ${}/month x 12 / {} paychecks = ${}",
            age,
            age_settings.age_threshold,
            monthly_cost.normalize(),
            settings.paychecks_per_year,
            cost_per_paycheck.normalize()
        )
    } else {
        format!(
            "No age surcharge - age {} does not exceed threshold {}",
            age, age_settings.age_threshold
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "age_based_cost".to_string(),
        rule_name: "Age-Based Benefits Cost".to_string(),
        input: serde_json::json!({
            "date_of_birth": employee.date_of_birth.to_string(),
            "as_of": as_of.to_string(),
            "age": age,
            "age_threshold": age_settings.age_threshold
        }),
        output: serde_json::json!({
            "surcharge_applied": surcharge_applied,
            "monthly_cost": monthly_cost.normalize().to_string(),
            "cost_per_paycheck": cost_per_paycheck.normalize().to_string()
        }),
        reasoning,
    };

    AgeBasedCostResult {
        cost_per_paycheck,
        age,
        surcharge_applied,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::floor_to_cent;
    use crate::config::ConfigLoader;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn settings() -> BenefitsCostSettings {
        ConfigLoader::load("./config/benefits.yaml")
            .expect("Failed to load config")
            .into_settings()
    }

    fn create_test_employee(date_of_birth: NaiveDate) -> Employee {
        Employee {
            id: 1,
            first_name: "Test".to_string(),
            last_name: "Employee".to_string(),
            salary: dec("50000"),
            date_of_birth,
            dependents: vec![],
        }
    }

    #[test]
    fn test_over_threshold_pays_surcharge() {
        let employee = create_test_employee(date(1963, 2, 17));
        let result = calculate_age_based_cost(&employee, &settings(), date(2024, 6, 1), 4);

        assert!(result.surcharge_applied);
        assert_eq!(floor_to_cent(result.cost_per_paycheck), dec("92.30"));
        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(result.audit_step.rule_id, "age_based_cost");
        assert_eq!(result.audit_step.input["age"].as_i64().unwrap(), 61);
        assert!(result.audit_step.reasoning.contains("exceeds threshold 50"));
    }

    #[test]
    fn test_exactly_at_threshold_pays_nothing() {
        // Turns 50 on the reference date.
        let employee = create_test_employee(date(1974, 6, 1));
        let result = calculate_age_based_cost(&employee, &settings(), date(2024, 6, 1), 1);

        assert_eq!(result.age, 50);
        assert!(!result.surcharge_applied);
        assert!(result.cost_per_paycheck.is_zero());
        assert!(!result.audit_step.output["surcharge_applied"]
            .as_bool()
            .unwrap());
    }

    #[test]
    fn test_day_after_turning_51_pays_surcharge() {
        let employee = create_test_employee(date(1973, 6, 1));
        let result = calculate_age_based_cost(&employee, &settings(), date(2024, 6, 1), 1);

        assert_eq!(result.age, 51);
        assert!(result.surcharge_applied);
    }

    #[test]
    fn test_young_employee_pays_nothing() {
        let employee = create_test_employee(date(1999, 8, 10));
        let result = calculate_age_based_cost(&employee, &settings(), date(2024, 6, 1), 1);

        assert!(!result.surcharge_applied);
        assert!(result.cost_per_paycheck.is_zero());
        assert!(result.audit_step.reasoning.contains("does not exceed"));
    }

    proptest! {
        #[test]
        fn prop_surcharge_iff_age_strictly_over_threshold(
            age in 0i32..100,
            threshold in 0i32..100,
        ) {
            let mut s = settings();
            s.age_based.age_threshold = threshold;
            let as_of = date(2024, 6, 1);
            let employee = create_test_employee(date(2024 - age, 1, 1));

            let result = calculate_age_based_cost(&employee, &s, as_of, 1);
            prop_assert_eq!(result.age, age);
            prop_assert_eq!(result.surcharge_applied, age > threshold);
            prop_assert_eq!(result.cost_per_paycheck.is_zero(), age <= threshold);
        }
    }
}
