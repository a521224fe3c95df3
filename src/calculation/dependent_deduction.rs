//! Per-dependent deduction.

use chrono::NaiveDate;

use crate::config::{DeductionRules, MONTHS_PER_YEAR};
use crate::models::{AuditStep, Deduction, DeductionType, Dependent};

use super::rule::{RuleOutcome, RunningSalary};

/// Rule identifier recorded in the audit trace.
pub const DEPENDENT_DEDUCTION_RULE_ID: &str = "dependent_deduction";

/// Applies the flat annual deduction for one dependent.
///
/// Every dependent is charged `dependent_monthly` for each month of the
/// year, whatever their relationship or age.
///
/// # Examples
///
/// ```
/// use paycheck_engine::calculation::{RunningSalary, apply_dependent_deduction};
/// use paycheck_engine::config::DeductionRules;
/// use paycheck_engine::models::{Dependent, Relationship};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let dependent = Dependent {
///     id: 1,
///     employee_id: 2,
///     relationship: Relationship::Child,
///     first_name: "Child1".to_string(),
///     last_name: "Morant".to_string(),
///     date_of_birth: NaiveDate::from_ymd_opt(2020, 6, 23).unwrap(),
/// };
///
/// let outcome = apply_dependent_deduction(
///     &dependent,
///     &RunningSalary::new(Decimal::from(50_000)),
///     NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     &DeductionRules::default(),
///     1,
/// );
/// assert_eq!(outcome.deduction.unwrap().amount, Decimal::from(7200));
/// ```
pub fn apply_dependent_deduction(
    dependent: &Dependent,
    salary: &RunningSalary,
    _as_of: NaiveDate,
    rules: &DeductionRules,
    step_number: u32,
) -> RuleOutcome {
    let amount = rules.annual_dependent();
    let remaining = salary.remaining() - amount;

    let audit_step = AuditStep {
        step_number,
        rule_id: DEPENDENT_DEDUCTION_RULE_ID.to_string(),
        rule_name: "Dependent Deduction".to_string(),
        input: serde_json::json!({
            "dependent_id": dependent.id,
            "monthly_amount": rules.dependent_monthly.to_string(),
            "months": MONTHS_PER_YEAR,
            "remaining_salary": salary.remaining().to_string()
        }),
        output: serde_json::json!({
            "applied": true,
            "amount": amount.to_string(),
            "remaining_salary": remaining.to_string()
        }),
        reasoning: format!(
            "Dependent {}: ${} x {} months = ${}",
            dependent.id,
            rules.dependent_monthly.normalize(),
            MONTHS_PER_YEAR,
            amount.normalize()
        ),
    };

    RuleOutcome {
        deduction: Some(Deduction::new(DeductionType::Dependent, amount)),
        audit_step,
    }
}
