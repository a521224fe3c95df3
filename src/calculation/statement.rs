//! Pay statement assembly.

use rust_decimal::Decimal;

use crate::models::{AnnualDeductionSummary, AnnualPayStatement, Deduction};

/// Packages an employee's salary and deductions into an annual statement.
///
/// Nothing is computed here: the statement derives its totals from the
/// stored salary and deductions whenever they are read.
///
/// # Examples
///
/// ```
/// use paycheck_engine::calculation::build_statement;
/// use paycheck_engine::models::{Deduction, DeductionType};
/// use rust_decimal::Decimal;
///
/// let statement = build_statement(
///     2,
///     Decimal::from(100_000),
///     vec![
///         Deduction::new(DeductionType::SalaryOver80k, Decimal::from(2000)),
///         Deduction::new(DeductionType::Base, Decimal::from(12000)),
///     ],
/// );
/// assert_eq!(statement.total_deductions(), Decimal::from(14000));
/// ```
pub fn build_statement(
    employee_id: i32,
    total_salary: Decimal,
    deductions: Vec<Deduction>,
) -> AnnualPayStatement {
    AnnualPayStatement::new(
        employee_id,
        total_salary,
        AnnualDeductionSummary::new(deductions),
    )
}
