//! Deduction calculation logic for the Paycheck Deduction Engine.
//!
//! This module contains the individual deduction rules (high-salary
//! surcharge, base deduction, per-dependent deduction and the over-age
//! dependent surcharge), the engine that evaluates them in order, whole-year
//! age calculation, and pay statement assembly.

mod age;
mod base_deduction;
mod dependent_deduction;
mod dependent_over_age;
mod engine;
mod high_salary_surcharge;
mod rule;
mod statement;

pub use age::age_in_years;
pub use base_deduction::{BASE_DEDUCTION_RULE_ID, apply_base_deduction};
pub use dependent_deduction::{DEPENDENT_DEDUCTION_RULE_ID, apply_dependent_deduction};
pub use dependent_over_age::{DEPENDENT_OVER_AGE_RULE_ID, apply_dependent_over_age_surcharge};
pub use engine::{
    DEPENDENT_RULES, DeductionCalculation, SALARY_RULES, calculate_deductions,
    compute_deductions, compute_deductions_as_of,
};
pub use high_salary_surcharge::{HIGH_SALARY_SURCHARGE_RULE_ID, apply_high_salary_surcharge};
pub use rule::{DependentRule, RuleOutcome, RunningSalary, SalaryRule};
pub use statement::build_statement;
