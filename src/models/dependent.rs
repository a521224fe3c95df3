//! Dependent model and relationship categories.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a dependent is related to the employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    /// The employee's spouse.
    Spouse,
    /// The employee's domestic partner.
    DomesticPartner,
    /// A child of the employee.
    Child,
}

/// A person associated with an employee who triggers additional deductions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependent {
    /// Unique identifier for the dependent.
    pub id: i32,
    /// Identifier of the owning employee.
    pub employee_id: i32,
    /// Relationship to the employee.
    pub relationship: Relationship,
    /// The dependent's first name.
    pub first_name: String,
    /// The dependent's last name.
    pub last_name: String,
    /// The dependent's date of birth.
    pub date_of_birth: NaiveDate,
}
