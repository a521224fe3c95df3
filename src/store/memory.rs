//! In-memory employee store.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{Dependent, Employee};

use super::seed::{sample_dependents, sample_employees};
use super::{EmployeeStore, StoreError};

#[derive(Debug, Default)]
struct Records {
    employees: BTreeMap<i32, Employee>,
    // Insertion order, which is the order dependents reach the engine.
    dependents: Vec<Dependent>,
}

/// Thread-safe store holding employees and dependents in memory.
///
/// # Example
///
/// ```
/// use paycheck_engine::store::{EmployeeStore, InMemoryEmployeeStore};
///
/// let store = InMemoryEmployeeStore::seeded().unwrap();
/// assert_eq!(store.employees().unwrap().len(), 3);
/// assert_eq!(store.dependents_of(2).unwrap().len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEmployeeStore {
    records: RwLock<Records>,
}

impl InMemoryEmployeeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the sample roster.
    pub fn seeded() -> Result<Self, StoreError> {
        let store = Self::new();
        for employee in sample_employees() {
            store.insert_employee(employee)?;
        }
        for dependent in sample_dependents() {
            store.insert_dependent(dependent)?;
        }
        Ok(store)
    }

    /// Adds an employee, rejecting a duplicate id.
    pub fn insert_employee(&self, employee: Employee) -> Result<(), StoreError> {
        let mut records = self.write()?;
        if records.employees.contains_key(&employee.id) {
            return Err(StoreError::Conflict {
                entity: "employee",
                id: employee.id,
            });
        }
        records.employees.insert(employee.id, employee);
        Ok(())
    }

    /// Adds a dependent to an existing employee, rejecting a duplicate id.
    pub fn insert_dependent(&self, dependent: Dependent) -> Result<(), StoreError> {
        let mut records = self.write()?;
        if !records.employees.contains_key(&dependent.employee_id) {
            return Err(StoreError::UnknownEmployee {
                employee_id: dependent.employee_id,
            });
        }
        if records.dependents.iter().any(|d| d.id == dependent.id) {
            return Err(StoreError::Conflict {
                entity: "dependent",
                id: dependent.id,
            });
        }
        records.dependents.push(dependent);
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Records>, StoreError> {
        self.records
            .read()
            .map_err(|_| StoreError::Unavailable("record lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Records>, StoreError> {
        self.records
            .write()
            .map_err(|_| StoreError::Unavailable("record lock poisoned".to_string()))
    }
}

impl EmployeeStore for InMemoryEmployeeStore {
    fn employee(&self, id: i32) -> Result<Option<Employee>, StoreError> {
        Ok(self.read()?.employees.get(&id).cloned())
    }

    fn employees(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(self.read()?.employees.values().cloned().collect())
    }

    fn dependent(&self, id: i32) -> Result<Option<Dependent>, StoreError> {
        Ok(self.read()?.dependents.iter().find(|d| d.id == id).cloned())
    }

    fn dependents(&self) -> Result<Vec<Dependent>, StoreError> {
        Ok(self.read()?.dependents.clone())
    }

    fn dependents_of(&self, employee_id: i32) -> Result<Vec<Dependent>, StoreError> {
        Ok(self
            .read()?
            .dependents
            .iter()
            .filter(|d| d.employee_id == employee_id)
            .cloned()
            .collect())
    }
}
