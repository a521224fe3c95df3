//! Core data models for the Paycheck Deduction Engine.
//!
//! This module contains the employee and dependent inputs, the deductions
//! produced by the rules, and the pay statement built from them.

mod audit;
mod deduction;
mod dependent;
mod employee;
mod pay_statement;

pub use audit::{AuditStep, AuditTrace};
pub use deduction::{Deduction, DeductionType};
pub use dependent::{Dependent, Relationship};
pub use employee::Employee;
pub use pay_statement::{AnnualDeductionSummary, AnnualPayStatement, PAY_PERIODS_PER_YEAR};
