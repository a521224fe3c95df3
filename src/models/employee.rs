//! Employee model.
//!
//! This module defines the Employee struct supplied by the employee store
//! as input to the deduction engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee whose annual deductions are calculated.
///
/// The salary is the gross annual amount and is expected to be
/// non-negative. The engine does not validate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: i32,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// Gross annual salary.
    pub salary: Decimal,
    /// The employee's date of birth.
    pub date_of_birth: NaiveDate,
}

impl Employee {
    /// Returns the employee's first and last name separated by a space.
    ///
    /// # Examples
    ///
    /// ```
    /// use paycheck_engine::models::Employee;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: 1,
    ///     first_name: "LeBron".to_string(),
    ///     last_name: "James".to_string(),
    ///     salary: Decimal::new(7542099, 2),
    ///     date_of_birth: NaiveDate::from_ymd_opt(1984, 12, 30).unwrap(),
    /// };
    /// assert_eq!(employee.full_name(), "LeBron James");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn create_test_employee() -> Employee {
        Employee {
            id: 3,
            first_name: "Michael".to_string(),
            last_name: "Jordan".to_string(),
            salary: Decimal::from_str("143211.12").unwrap(),
            date_of_birth: NaiveDate::from_ymd_opt(1963, 2, 17).unwrap(),
        }
    }

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": 3,
            "first_name": "Michael",
            "last_name": "Jordan",
            "salary": "143211.12",
            "date_of_birth": "1963-02-17"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee, create_test_employee());
    }

    #[test]
    fn test_salary_serializes_as_string() {
        let json = serde_json::to_string(&create_test_employee()).unwrap();
        assert!(json.contains("\"salary\":\"143211.12\""));
        assert!(json.contains("\"date_of_birth\":\"1963-02-17\""));
    }

    #[test]
    fn test_full_name() {
        assert_eq!(create_test_employee().full_name(), "Michael Jordan");
    }
}
