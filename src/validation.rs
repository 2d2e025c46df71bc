//! Admission checks for new employees and dependents.
//!
//! Two kinds of check gate creation: presence checks on required fields and
//! the single spouse-or-partner eligibility rule. The eligibility rule has
//! two call sites. A new employee's submitted dependent list may hold at most
//! one spouse or domestic partner. A dependent added later may not be a
//! spouse or domestic partner if the employee already has one.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{Dependent, Employee, NewDependent, NewEmployee, Relationship};

const SPOUSE_LIMIT_ON_CREATE: &str = "An employee may only have one spouse or domestic partner";
const SPOUSE_LIMIT_ON_ADD: &str = "Cannot add another spouse or domestic partner";

/// Checks whether a dependent with `relationship` may join `existing`.
///
/// # Errors
///
/// Returns `EligibilityViolation` when `relationship` is a spouse or domestic
/// partner and `existing` already holds one. Children are never limited.
///
/// # Examples
///
/// ```
/// use benefits_engine::models::Relationship;
/// use benefits_engine::validation::validate_dependent_eligibility;
///
/// assert!(validate_dependent_eligibility(Relationship::Spouse, &[]).is_ok());
/// assert!(validate_dependent_eligibility(Relationship::Child, &[]).is_ok());
/// ```
pub fn validate_dependent_eligibility(
    relationship: Relationship,
    existing: &[Dependent],
) -> EngineResult<()> {
    if relationship.is_spouse_or_partner()
        && existing
            .iter()
            .any(|d| d.relationship.is_spouse_or_partner())
    {
        return Err(EngineError::EligibilityViolation {
            message: SPOUSE_LIMIT_ON_ADD.to_string(),
        });
    }
    Ok(())
}

/// Counts the spouse-or-partner relationships in a list.
pub fn count_spouses_or_partners<I>(relationships: I) -> usize
where
    I: IntoIterator<Item = Relationship>,
{
    relationships
        .into_iter()
        .filter(|r| r.is_spouse_or_partner())
        .count()
}

/// Validates a new employee and the dependents submitted with it.
///
/// Checks run in this order: the spouse-or-partner limit across the submitted
/// dependents, first name, last name, salary, date of birth, and then the
/// required fields of each submitted dependent.
pub fn validate_new_employee(employee: &NewEmployee) -> EngineResult<()> {
    let spouse_count = count_spouses_or_partners(employee.dependents.iter().map(|d| d.relationship));
    if spouse_count > 1 {
        return Err(EngineError::EligibilityViolation {
            message: SPOUSE_LIMIT_ON_CREATE.to_string(),
        });
    }

    if employee.first_name.trim().is_empty() {
        return Err(invalid_employee("first_name", "First name is required"));
    }
    if employee.last_name.trim().is_empty() {
        return Err(invalid_employee("last_name", "Last name is required"));
    }
    if employee.salary <= Decimal::ZERO {
        return Err(invalid_employee("salary", "Salary must be greater than 0"));
    }
    if employee.date_of_birth.is_none() {
        return Err(invalid_employee("date_of_birth", "Date of birth is required"));
    }

    employee
        .dependents
        .iter()
        .try_for_each(validate_dependent_fields)
}

/// Validates a dependent being added to an existing employee.
///
/// `employee` is the result of looking up `dependent.employee_id`.
///
/// # Errors
///
/// - `InvalidDependent` for a missing name, date of birth, or employee id
/// - `EmployeeNotFound` when the employee id does not resolve
/// - `EligibilityViolation` for a second spouse or domestic partner
pub fn validate_new_dependent(
    dependent: &NewDependent,
    employee: Option<&Employee>,
) -> EngineResult<()> {
    validate_dependent_fields(dependent)?;

    let employee = match (employee, dependent.employee_id) {
        (Some(employee), _) => employee,
        (None, Some(id)) => return Err(EngineError::EmployeeNotFound { id }),
        (None, None) => {
            return Err(invalid_dependent("employee_id", "Employee id is required"));
        }
    };

    validate_dependent_eligibility(dependent.relationship, &employee.dependents)
}

fn validate_dependent_fields(dependent: &NewDependent) -> EngineResult<()> {
    if dependent.first_name.trim().is_empty() {
        return Err(invalid_dependent("first_name", "First name is required"));
    }
    if dependent.last_name.trim().is_empty() {
        return Err(invalid_dependent("last_name", "Last name is required"));
    }
    if dependent.date_of_birth.is_none() {
        return Err(invalid_dependent("date_of_birth", "Date of birth is required"));
    }
    Ok(())
}

fn invalid_employee(field: &str, message: &str) -> EngineError {
    EngineError::InvalidEmployee {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn invalid_dependent(field: &str, message: &str) -> EngineError {
    EngineError::InvalidDependent {
        field: field.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_dependent(relationship: Relationship) -> NewDependent {
        NewDependent {
            first_name: "Dep".to_string(),
            last_name: "Employee".to_string(),
            date_of_birth: Some(date(1990, 1, 1)),
            relationship,
            employee_id: Some(1),
        }
    }

    fn new_employee(dependents: Vec<NewDependent>) -> NewEmployee {
        NewEmployee {
            first_name: "Test".to_string(),
            last_name: "Employee".to_string(),
            salary: Decimal::new(100000, 0),
            date_of_birth: Some(date(1990, 1, 1)),
            dependents,
        }
    }

    fn existing_employee(relationships: &[Relationship]) -> Employee {
        Employee {
            id: 1,
            first_name: "Test".to_string(),
            last_name: "Employee".to_string(),
            salary: Decimal::new(100000, 0),
            date_of_birth: date(1990, 1, 1),
            dependents: relationships
                .iter()
                .enumerate()
                .map(|(i, r)| Dependent {
                    id: i as u32 + 1,
                    first_name: "Dep".to_string(),
                    last_name: "Employee".to_string(),
                    date_of_birth: date(1990, 1, 1),
                    relationship: *r,
                    employee_id: 1,
                })
                .collect(),
        }
    }

    fn assert_field_error(result: EngineResult<()>, expected_field: &str) {
        match result {
            Err(EngineError::InvalidEmployee { field, .. })
            | Err(EngineError::InvalidDependent { field, .. }) => {
                assert_eq!(field, expected_field)
            }
            other => panic!("Expected field error on {}, got {:?}", expected_field, other),
        }
    }

    #[test]
    fn test_valid_employee_passes() {
        let employee = new_employee(vec![
            new_dependent(Relationship::Spouse),
            new_dependent(Relationship::Child),
            new_dependent(Relationship::Child),
        ]);
        assert!(validate_new_employee(&employee).is_ok());
    }

    #[test]
    fn test_spouse_and_partner_on_create_rejected() {
        let employee = new_employee(vec![
            new_dependent(Relationship::Spouse),
            new_dependent(Relationship::DomesticPartner),
        ]);

        match validate_new_employee(&employee) {
            Err(EngineError::EligibilityViolation { message }) => {
                assert_eq!(message, SPOUSE_LIMIT_ON_CREATE);
            }
            other => panic!("Expected EligibilityViolation, got {:?}", other),
        }
    }

    #[test]
    fn test_spouse_rule_checked_before_fields() {
        let mut employee = new_employee(vec![
            new_dependent(Relationship::Spouse),
            new_dependent(Relationship::Spouse),
        ]);
        employee.salary = Decimal::new(-50, 0);

        assert!(matches!(
            validate_new_employee(&employee),
            Err(EngineError::EligibilityViolation { .. })
        ));
    }

    #[test]
    fn test_missing_employee_fields() {
        let mut e = new_employee(vec![]);
        e.first_name = "   ".to_string();
        assert_field_error(validate_new_employee(&e), "first_name");

        let mut e = new_employee(vec![]);
        e.last_name.clear();
        assert_field_error(validate_new_employee(&e), "last_name");

        let mut e = new_employee(vec![]);
        e.salary = Decimal::ZERO;
        assert_field_error(validate_new_employee(&e), "salary");

        let mut e = new_employee(vec![]);
        e.date_of_birth = None;
        assert_field_error(validate_new_employee(&e), "date_of_birth");
    }

    #[test]
    fn test_submitted_dependent_fields_are_checked() {
        let mut dependent = new_dependent(Relationship::Child);
        dependent.date_of_birth = None;
        let employee = new_employee(vec![dependent]);

        assert_field_error(validate_new_employee(&employee), "date_of_birth");
    }

    #[test]
    fn test_add_spouse_when_partner_exists_rejected() {
        let employee = existing_employee(&[Relationship::DomesticPartner, Relationship::Child]);

        match validate_new_dependent(&new_dependent(Relationship::Spouse), Some(&employee)) {
            Err(EngineError::EligibilityViolation { message }) => {
                assert_eq!(message, SPOUSE_LIMIT_ON_ADD);
            }
            other => panic!("Expected EligibilityViolation, got {:?}", other),
        }
    }

    #[test]
    fn test_add_first_spouse_allowed() {
        let employee = existing_employee(&[Relationship::Child]);
        assert!(validate_new_dependent(&new_dependent(Relationship::Spouse), Some(&employee)).is_ok());
    }

    #[test]
    fn test_add_child_when_spouse_exists_allowed() {
        let employee = existing_employee(&[Relationship::Spouse]);
        assert!(validate_new_dependent(&new_dependent(Relationship::Child), Some(&employee)).is_ok());
    }

    #[test]
    fn test_add_dependent_to_missing_employee() {
        let result = validate_new_dependent(&new_dependent(Relationship::Child), None);
        assert!(matches!(result, Err(EngineError::EmployeeNotFound { id: 1 })));

        let mut orphan = new_dependent(Relationship::Child);
        orphan.employee_id = None;
        assert_field_error(validate_new_dependent(&orphan, None), "employee_id");
    }

    #[test]
    fn test_dependent_fields_checked_before_employee_lookup() {
        let mut dependent = new_dependent(Relationship::Child);
        dependent.first_name.clear();
        assert_field_error(validate_new_dependent(&dependent, None), "first_name");
    }

    fn relationship_strategy() -> impl Strategy<Value = Relationship> {
        prop_oneof![
            Just(Relationship::Spouse),
            Just(Relationship::DomesticPartner),
            Just(Relationship::Child),
            Just(Relationship::Other),
        ]
    }

    proptest! {
        #[test]
        fn prop_second_spouse_or_partner_always_rejected_on_add(
            existing in prop::collection::vec(relationship_strategy(), 0..6),
            new in relationship_strategy(),
        ) {
            let employee = existing_employee(&existing);
            let has_partner = count_spouses_or_partners(existing.iter().copied()) > 0;

            let result = validate_dependent_eligibility(new, &employee.dependents);
            prop_assert_eq!(result.is_err(), has_partner && new.is_spouse_or_partner());
        }

        #[test]
        fn prop_create_accepts_at_most_one_spouse_or_partner(
            relationships in prop::collection::vec(relationship_strategy(), 0..6),
        ) {
            let employee = new_employee(relationships.iter().map(|r| new_dependent(*r)).collect());
            let spouses = count_spouses_or_partners(relationships.iter().copied());

            prop_assert_eq!(validate_new_employee(&employee).is_ok(), spouses <= 1);
        }
    }
}
