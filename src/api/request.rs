//! Request types for the Benefits Engine API.
//!
//! Request bodies use camelCase keys. Required fields default to empty values
//! so that a missing name or salary reaches validation and is reported with
//! the field that failed, rather than as a JSON parse error.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{EmployeeId, NewDependent, NewEmployee, Relationship};

/// Request body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    /// First name.
    #[serde(default)]
    pub first_name: String,
    /// Last name.
    #[serde(default)]
    pub last_name: String,
    /// Yearly salary.
    #[serde(default)]
    pub salary: Decimal,
    /// Date of birth (`YYYY-MM-DD`).
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Dependents to admit together with the employee.
    #[serde(default)]
    pub dependents: Vec<CreateDependentRequest>,
}

/// Request body for `POST /dependents`, also used for nested dependents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDependentRequest {
    /// First name.
    #[serde(default)]
    pub first_name: String,
    /// Last name.
    #[serde(default)]
    pub last_name: String,
    /// Date of birth (`YYYY-MM-DD`).
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Relationship to the employee.
    pub relationship: Relationship,
    /// The owning employee. Ignored for nested dependents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<EmployeeId>,
}

/// Query string for `GET /employees/:id/paycheck`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaycheckQuery {
    /// Reference date for age computations. Defaults to today.
    #[serde(rename = "asOf")]
    pub as_of: Option<NaiveDate>,
}

impl From<CreateEmployeeRequest> for NewEmployee {
    fn from(req: CreateEmployeeRequest) -> Self {
        NewEmployee {
            first_name: req.first_name,
            last_name: req.last_name,
            salary: req.salary,
            date_of_birth: req.date_of_birth,
            dependents: req.dependents.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<CreateDependentRequest> for NewDependent {
    fn from(req: CreateDependentRequest) -> Self {
        NewDependent {
            first_name: req.first_name,
            last_name: req.last_name,
            date_of_birth: req.date_of_birth,
            relationship: req.relationship,
            employee_id: req.employee_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_create_employee_request() {
        let json = r#"{
            "firstName": "Ja",
            "lastName": "Morant",
            "salary": 92365.22,
            "dateOfBirth": "1999-08-10",
            "dependents": [
                {
                    "firstName": "Spouse",
                    "lastName": "Morant",
                    "dateOfBirth": "1998-03-03",
                    "relationship": "spouse"
                },
                {
                    "firstName": "Child",
                    "lastName": "Morant",
                    "dateOfBirth": "2020-06-23",
                    "relationship": "child"
                }
            ]
        }"#;

        let request: CreateEmployeeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.salary, Decimal::new(9236522, 2));
        assert_eq!(request.dependents.len(), 2);
        assert_eq!(request.dependents[0].relationship, Relationship::Spouse);

        let employee: NewEmployee = request.into();
        assert_eq!(employee.date_of_birth, NaiveDate::from_ymd_opt(1999, 8, 10));
        assert_eq!(employee.dependents[1].relationship, Relationship::Child);
    }

    #[test]
    fn test_missing_fields_default_for_validation() {
        let request: CreateEmployeeRequest = serde_json::from_str("{}").unwrap();
        assert!(request.first_name.is_empty());
        assert!(request.salary.is_zero());
        assert!(request.date_of_birth.is_none());
    }

    #[test]
    fn test_dependent_request_requires_relationship() {
        let json = r#"{"firstName": "A", "lastName": "B", "dateOfBirth": "2020-01-01"}"#;
        let result: Result<CreateDependentRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_domestic_partner_with_employee_id() {
        let json = r#"{
            "firstName": "Partner",
            "lastName": "Jordan",
            "dateOfBirth": "1974-01-02",
            "relationship": "domesticPartner",
            "employeeId": 3
        }"#;

        let dependent: NewDependent = serde_json::from_str::<CreateDependentRequest>(json)
            .unwrap()
            .into();
        assert_eq!(dependent.relationship, Relationship::DomesticPartner);
        assert_eq!(dependent.employee_id, Some(3));
    }
}
