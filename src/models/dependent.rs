//! Dependent model and related types.
//!
//! This module defines the Dependent struct and the Relationship enum that
//! drives both the dependent cost and the single spouse-or-partner rule.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::EmployeeId;

/// Identifier assigned to a dependent when it is admitted.
pub type DependentId = u32;

/// How a dependent is related to the employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Relationship {
    /// Married spouse.
    Spouse,
    /// Domestic partner; counts against the same limit as a spouse.
    DomesticPartner,
    /// Child of the employee. Any number may be covered.
    Child,
    /// Any other covered relationship.
    Other,
}

impl Relationship {
    /// Returns true for the relationships limited to one per employee.
    ///
    /// # Examples
    ///
    /// ```
    /// use benefits_engine::models::Relationship;
    ///
    /// assert!(Relationship::Spouse.is_spouse_or_partner());
    /// assert!(Relationship::DomesticPartner.is_spouse_or_partner());
    /// assert!(!Relationship::Child.is_spouse_or_partner());
    /// ```
    pub fn is_spouse_or_partner(self) -> bool {
        matches!(self, Relationship::Spouse | Relationship::DomesticPartner)
    }
}

/// A dependent covered under an employee's benefits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependent {
    /// Unique, stable identifier.
    pub id: DependentId,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Date of birth, used for the dependent age surcharge.
    pub date_of_birth: NaiveDate,
    /// Relationship to the employee.
    pub relationship: Relationship,
    /// The owning employee.
    pub employee_id: EmployeeId,
}

/// An unvalidated request to admit a dependent.
///
/// Names default to empty and the date of birth is optional so that
/// missing fields are reported by validation rather than by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDependent {
    /// First name.
    #[serde(default)]
    pub first_name: String,
    /// Last name.
    #[serde(default)]
    pub last_name: String,
    /// Date of birth.
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Relationship to the employee.
    pub relationship: Relationship,
    /// The employee to attach to. Ignored when the dependent is submitted as
    /// part of a new employee.
    #[serde(default)]
    pub employee_id: Option<EmployeeId>,
}
