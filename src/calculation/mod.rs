//! Calculation logic for the Benefits Engine.
//!
//! This module contains the pure functions that turn an employee, the
//! benefits cost policy, and a reference date into a paycheck breakdown:
//! age calculation, paycheck conversion, cent flooring, the age-based,
//! dependent, and salary-based cost calculators, and the paycheck
//! calculator that composes them.

mod age;
mod age_based;
mod conversion;
mod dependents;
mod paycheck;
mod rounding;
mod salary_based;

pub use age::calculate_age;
pub use age_based::{AgeBasedCostResult, calculate_age_based_cost};
pub use conversion::{MONTHS_PER_YEAR, PaycheckConversion};
pub use dependents::{DependentCost, DependentCostResult, calculate_dependent_costs};
pub use paycheck::{calculate_paycheck, calculate_paycheck_with_audit, net_pay_from_components};
pub use rounding::{CENT_DECIMAL_PLACES, floor_to_cent};
pub use salary_based::{SalaryBasedCostResult, calculate_salary_based_cost};
