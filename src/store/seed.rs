//! Sample roster used to seed a development store.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Dependent, Employee, Relationship};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn employee(id: i32, first_name: &str, last_name: &str, salary_cents: i64, dob: NaiveDate) -> Employee {
    Employee {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        salary: Decimal::new(salary_cents, 2),
        date_of_birth: dob,
    }
}

fn dependent(
    id: i32,
    employee_id: i32,
    relationship: Relationship,
    first_name: &str,
    last_name: &str,
    dob: NaiveDate,
) -> Dependent {
    Dependent {
        id,
        employee_id,
        relationship,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        date_of_birth: dob,
    }
}

/// Three sample employees: one below the high-salary threshold, two above.
pub fn sample_employees() -> Vec<Employee> {
    vec![
        employee(1, "LeBron", "James", 75_420_99, date(1984, 12, 30)),
        employee(2, "Ja", "Morant", 92_365_22, date(1999, 8, 10)),
        employee(3, "Michael", "Jordan", 143_211_12, date(1963, 2, 17)),
    ]
}

/// Dependents of the sample employees.
///
/// Employee 1 has none, employee 2 has a spouse and two children, employee
/// 3 has a domestic partner born in 1974.
pub fn sample_dependents() -> Vec<Dependent> {
    vec![
        dependent(1, 2, Relationship::Spouse, "Spouse", "Morant", date(1998, 3, 3)),
        dependent(2, 2, Relationship::Child, "Child1", "Morant", date(2020, 6, 23)),
        dependent(3, 2, Relationship::Child, "Child2", "Morant", date(2021, 5, 18)),
        dependent(4, 3, Relationship::DomesticPartner, "DP", "Jordan", date(1974, 1, 2)),
    ]
}
