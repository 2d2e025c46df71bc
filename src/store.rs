//! In-memory employee store.
//!
//! The store resolves employees with their dependents for the paycheck
//! calculator and admits new records only after validation passes. Ids are
//! assigned from counters that only move forward, so an id is never reused.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::info;

use crate::config::SeedData;
use crate::error::{EngineError, EngineResult};
use crate::models::{Dependent, DependentId, Employee, EmployeeId, NewDependent, NewEmployee};
use crate::validation::{validate_new_dependent, validate_new_employee};

#[derive(Debug)]
struct StoreInner {
    employees: BTreeMap<EmployeeId, Employee>,
    next_employee_id: EmployeeId,
    next_dependent_id: DependentId,
}

impl StoreInner {
    fn take_dependent_id(&mut self) -> DependentId {
        let id = self.next_dependent_id;
        self.next_dependent_id += 1;
        id
    }

    fn build_dependent(
        &mut self,
        new: NewDependent,
        employee_id: EmployeeId,
    ) -> EngineResult<Dependent> {
        let date_of_birth = new.date_of_birth.ok_or_else(|| EngineError::InvalidDependent {
            field: "date_of_birth".to_string(),
            message: "Date of birth is required".to_string(),
        })?;

        Ok(Dependent {
            id: self.take_dependent_id(),
            first_name: new.first_name,
            last_name: new.last_name,
            date_of_birth,
            relationship: new.relationship,
            employee_id,
        })
    }
}

/// Thread-safe store of employees and their dependents.
#[derive(Debug)]
pub struct EmployeeStore {
    inner: RwLock<StoreInner>,
}

impl Default for EmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeStore {
    /// Creates an empty store. The first employee and dependent both get id 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                employees: BTreeMap::new(),
                next_employee_id: 1,
                next_dependent_id: 1,
            }),
        }
    }

    /// Creates every seeded employee in file order.
    ///
    /// Seed records go through the same validation as API requests; the first
    /// invalid record stops seeding and is returned as the error.
    pub async fn seed(&self, seed: SeedData) -> EngineResult<usize> {
        let count = seed.employees.len();
        for employee in seed.employees {
            self.create_employee(employee).await?;
        }
        info!(employees = count, "Seeded employee store");
        Ok(count)
    }

    /// Returns every employee ordered by id.
    pub async fn list_employees(&self) -> Vec<Employee> {
        self.inner.read().await.employees.values().cloned().collect()
    }

    /// Returns a snapshot of one employee with dependents resolved.
    pub async fn get_employee(&self, id: EmployeeId) -> EngineResult<Employee> {
        self.inner
            .read()
            .await
            .employees
            .get(&id)
            .cloned()
            .ok_or(EngineError::EmployeeNotFound { id })
    }

    /// Validates and stores a new employee together with its dependents.
    pub async fn create_employee(&self, new: NewEmployee) -> EngineResult<Employee> {
        validate_new_employee(&new)?;
        let date_of_birth = required_employee_date(new.date_of_birth)?;

        let mut inner = self.inner.write().await;
        let id = inner.next_employee_id;

        let dependents = new
            .dependents
            .into_iter()
            .map(|d| inner.build_dependent(d, id))
            .collect::<EngineResult<Vec<_>>>()?;

        let employee = Employee {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            salary: new.salary,
            date_of_birth,
            dependents,
        };

        inner.next_employee_id += 1;
        inner.employees.insert(id, employee.clone());
        Ok(employee)
    }

    /// Validates and attaches a dependent to an existing employee.
    ///
    /// The eligibility check and the insert happen under one write lock, so
    /// two concurrent requests cannot both add a spouse.
    pub async fn add_dependent(&self, new: NewDependent) -> EngineResult<Dependent> {
        let mut inner = self.inner.write().await;

        let employee = new.employee_id.and_then(|id| inner.employees.get(&id));
        validate_new_dependent(&new, employee)?;

        let employee_id = employee.map(|e| e.id).ok_or(EngineError::InvalidDependent {
            field: "employee_id".to_string(),
            message: "Employee id is required".to_string(),
        })?;

        let dependent = inner.build_dependent(new, employee_id)?;
        inner
            .employees
            .get_mut(&employee_id)
            .ok_or(EngineError::EmployeeNotFound { id: employee_id })?
            .dependents
            .push(dependent.clone());

        Ok(dependent)
    }

    /// Returns every dependent ordered by owning employee, then insertion.
    pub async fn list_dependents(&self) -> Vec<Dependent> {
        self.inner
            .read()
            .await
            .employees
            .values()
            .flat_map(|e| e.dependents.iter().cloned())
            .collect()
    }

    /// Returns one dependent.
    pub async fn get_dependent(&self, id: DependentId) -> EngineResult<Dependent> {
        self.inner
            .read()
            .await
            .employees
            .values()
            .flat_map(|e| e.dependents.iter())
            .find(|d| d.id == id)
            .cloned()
            .ok_or(EngineError::DependentNotFound { id })
    }
}

fn required_employee_date(date: Option<NaiveDate>) -> EngineResult<NaiveDate> {
    date.ok_or_else(|| EngineError::InvalidEmployee {
        field: "date_of_birth".to_string(),
        message: "Date of birth is required".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::Relationship;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_dependent(relationship: Relationship, employee_id: Option<EmployeeId>) -> NewDependent {
        NewDependent {
            first_name: "Dep".to_string(),
            last_name: "Test".to_string(),
            date_of_birth: Some(date(2015, 1, 1)),
            relationship,
            employee_id,
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

    async fn seeded_store() -> EmployeeStore {
        let store = EmployeeStore::new();
        let seed = ConfigLoader::load_seed("./config/seed.yaml").expect("Failed to load seed");
        store.seed(seed).await.expect("Failed to seed store");
        store
    }

    #[tokio::test]
    async fn test_seed_assigns_sequential_ids() {
        let store = seeded_store().await;

        let employees = store.list_employees().await;
        let ids: Vec<EmployeeId> = employees.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        let dependent_ids: Vec<DependentId> =
            store.list_dependents().await.iter().map(|d| d.id).collect();
        assert_eq!(dependent_ids, vec![1, 2, 3, 4, 5]);

        let jordan_partner = store.get_dependent(4).await.unwrap();
        assert_eq!(jordan_partner.relationship, Relationship::DomesticPartner);
        assert_eq!(jordan_partner.employee_id, 3);
    }

    #[tokio::test]
    async fn test_get_missing_employee() {
        let store = seeded_store().await;
        assert!(matches!(
            store.get_employee(99).await,
            Err(EngineError::EmployeeNotFound { id: 99 })
        ));
        assert!(matches!(
            store.get_dependent(99).await,
            Err(EngineError::DependentNotFound { id: 99 })
        ));
    }

    #[tokio::test]
    async fn test_create_employee_with_dependents() {
        let store = seeded_store().await;

        let created = store
            .create_employee(new_employee(vec![
                new_dependent(Relationship::Spouse, None),
                new_dependent(Relationship::Child, None),
            ]))
            .await
            .unwrap();

        assert_eq!(created.id, 5);
        assert_eq!(created.dependents.len(), 2);
        assert_eq!(created.dependents[0].id, 6);
        assert!(created.dependents.iter().all(|d| d.employee_id == 5));
        assert_eq!(store.get_employee(5).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_rejected_create_does_not_consume_id() {
        let store = EmployeeStore::new();

        let result = store
            .create_employee(new_employee(vec![
                new_dependent(Relationship::Spouse, None),
                new_dependent(Relationship::DomesticPartner, None),
            ]))
            .await;
        assert!(matches!(result, Err(EngineError::EligibilityViolation { .. })));
        assert!(store.list_employees().await.is_empty());

        let created = store.create_employee(new_employee(vec![])).await.unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_add_dependent_to_existing_employee() {
        let store = seeded_store().await;

        let added = store
            .add_dependent(new_dependent(Relationship::Child, Some(1)))
            .await
            .unwrap();

        assert_eq!(added.id, 6);
        assert_eq!(added.employee_id, 1);
        assert_eq!(store.get_employee(1).await.unwrap().dependents, vec![added]);
    }

    #[tokio::test]
    async fn test_add_second_spouse_rejected() {
        let store = seeded_store().await;

        let result = store
            .add_dependent(new_dependent(Relationship::DomesticPartner, Some(2)))
            .await;

        assert!(matches!(result, Err(EngineError::EligibilityViolation { .. })));
        assert_eq!(store.get_employee(2).await.unwrap().dependents.len(), 3);
    }

    #[tokio::test]
    async fn test_add_dependent_unknown_employee() {
        let store = seeded_store().await;

        let result = store
            .add_dependent(new_dependent(Relationship::Child, Some(42)))
            .await;
        assert!(matches!(result, Err(EngineError::EmployeeNotFound { id: 42 })));
    }

    #[tokio::test]
    async fn test_ids_never_reused_across_paths() {
        let store = EmployeeStore::new();
        let first = store
            .create_employee(new_employee(vec![new_dependent(Relationship::Child, None)]))
            .await
            .unwrap();
        let added = store
            .add_dependent(new_dependent(Relationship::Child, Some(first.id)))
            .await
            .unwrap();
        let second = store
            .create_employee(new_employee(vec![new_dependent(Relationship::Child, None)]))
            .await
            .unwrap();

        assert_eq!(first.dependents[0].id, 1);
        assert_eq!(added.id, 2);
        assert_eq!(second.dependents[0].id, 3);
        assert_eq!(second.id, 2);
    }
}
