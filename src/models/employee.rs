//! Employee model and related types.
//!
//! This module defines the Employee struct, a fully resolved record with its
//! dependents, and the NewEmployee creation payload.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Dependent, NewDependent};
use crate::calculation::calculate_age;

/// Identifier assigned to an employee when it is created.
pub type EmployeeId = u32;

/// An employee with dependents resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique, stable identifier. Never reused.
    pub id: EmployeeId,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Yearly salary.
    pub salary: Decimal,
    /// Date of birth, used for the employee age surcharge.
    pub date_of_birth: NaiveDate,
    /// Covered dependents. Order is not significant.
    #[serde(default)]
    pub dependents: Vec<Dependent>,
}

impl Employee {
    /// Returns the employee's age in completed years on `as_of`.
    ///
    /// # Examples
    ///
    /// ```
    /// use benefits_engine::models::Employee;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: 1,
    ///     first_name: "LeBron".to_string(),
    ///     last_name: "James".to_string(),
    ///     salary: Decimal::new(7542099, 2),
    ///     date_of_birth: NaiveDate::from_ymd_opt(1984, 12, 30).unwrap(),
    ///     dependents: vec![],
    /// };
    /// assert_eq!(employee.age_on(NaiveDate::from_ymd_opt(2024, 12, 29).unwrap()), 39);
    /// assert_eq!(employee.age_on(NaiveDate::from_ymd_opt(2024, 12, 30).unwrap()), 40);
    /// ```
    pub fn age_on(&self, as_of: NaiveDate) -> i32 {
        calculate_age(self.date_of_birth, as_of)
    }
}

/// An unvalidated request to create an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// First name.
    #[serde(default)]
    pub first_name: String,
    /// Last name.
    #[serde(default)]
    pub last_name: String,
    /// Yearly salary.
    #[serde(default)]
    pub salary: Decimal,
    /// Date of birth.
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Dependents admitted together with the employee.
    #[serde(default)]
    pub dependents: Vec<NewDependent>,
}
