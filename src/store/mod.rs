//! Employee store abstraction.
//!
//! The deduction engine never loads data itself. The orchestration layer
//! reads employees and dependents through [`EmployeeStore`], so the engine
//! can be driven by any backing store.

mod memory;
mod seed;

pub use memory::InMemoryEmployeeStore;
pub use seed::{sample_dependents, sample_employees};

use crate::models::{Dependent, Employee};

/// Read access to employee and dependent records.
pub trait EmployeeStore: Send + Sync {
    /// Fetches one employee, `None` when no employee has that id.
    fn employee(&self, id: i32) -> Result<Option<Employee>, StoreError>;
    /// Fetches every employee ordered by id.
    fn employees(&self) -> Result<Vec<Employee>, StoreError>;
    /// Fetches one dependent, `None` when no dependent has that id.
    fn dependent(&self, id: i32) -> Result<Option<Dependent>, StoreError>;
    /// Fetches every dependent.
    fn dependents(&self) -> Result<Vec<Dependent>, StoreError>;
    /// Fetches an employee's dependents, possibly none.
    fn dependents_of(&self, employee_id: i32) -> Result<Vec<Dependent>, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A record with the same id is already stored.
    #[error("{entity} {id} already exists")]
    Conflict {
        /// The kind of record, "employee" or "dependent".
        entity: &'static str,
        /// The duplicated id.
        id: i32,
    },
    /// A dependent referenced an employee the store does not hold.
    #[error("no employee {employee_id} to attach the dependent to")]
    UnknownEmployee {
        /// The missing employee id.
        employee_id: i32,
    },
    /// The store could not serve the request.
    #[error("employee store unavailable: {0}")]
    Unavailable(String),
}
