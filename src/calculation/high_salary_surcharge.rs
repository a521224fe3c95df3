//! High-salary surcharge calculation.
//!
//! Employees earning more than the high-salary threshold pay an extra
//! percentage of their gross annual salary.

use crate::config::DeductionRules;
use crate::models::{AuditStep, Deduction, DeductionType};

use super::rule::{RuleOutcome, RunningSalary};

/// Rule identifier recorded in the audit trace.
pub const HIGH_SALARY_SURCHARGE_RULE_ID: &str = "high_salary_surcharge";

/// Applies the high-salary surcharge.
///
/// The surcharge is `high_salary_rate` of the original salary and only
/// applies when that salary is strictly greater than
/// `high_salary_threshold`.
///
/// # Examples
///
/// ```
/// use paycheck_engine::calculation::{RunningSalary, apply_high_salary_surcharge};
/// use paycheck_engine::config::DeductionRules;
/// use rust_decimal::Decimal;
///
/// let salary = RunningSalary::new(Decimal::from(100_000));
/// let outcome = apply_high_salary_surcharge(&salary, &DeductionRules::default(), 1);
///
/// assert_eq!(outcome.deduction.unwrap().amount, Decimal::from(2000));
/// ```
pub fn apply_high_salary_surcharge(
    salary: &RunningSalary,
    rules: &DeductionRules,
    step_number: u32,
) -> RuleOutcome {
    let original = salary.original();
    let threshold = rules.high_salary_threshold;
    let rate = rules.high_salary_rate;

    if original <= threshold {
        let audit_step = AuditStep {
            step_number,
            rule_id: HIGH_SALARY_SURCHARGE_RULE_ID.to_string(),
            rule_name: "High Salary Surcharge".to_string(),
            input: serde_json::json!({
                "salary": original.to_string(),
                "threshold": threshold.to_string()
            }),
            output: serde_json::json!({
                "applied": false,
                "remaining_salary": salary.remaining().to_string()
            }),
            reasoning: format!(
                "Salary ${} does not exceed ${} - no surcharge",
                original.normalize(),
                threshold.normalize()
            ),
        };

        return RuleOutcome {
            deduction: None,
            audit_step,
        };
    }

    let amount = original * rate;
    let remaining = salary.remaining() - amount;

    let audit_step = AuditStep {
        step_number,
        rule_id: HIGH_SALARY_SURCHARGE_RULE_ID.to_string(),
        rule_name: "High Salary Surcharge".to_string(),
        input: serde_json::json!({
            "salary": original.to_string(),
            "threshold": threshold.to_string(),
            "rate": rate.to_string()
        }),
        output: serde_json::json!({
            "applied": true,
            "amount": amount.to_string(),
            "remaining_salary": remaining.to_string()
        }),
        reasoning: format!(
            "${} x {} = ${} (salary exceeds ${})",
            original.normalize(),
            rate.normalize(),
            amount.normalize(),
            threshold.normalize()
        ),
    };

    RuleOutcome {
        deduction: Some(Deduction::new(DeductionType::SalaryOver80k, amount)),
        audit_step,
    }
}
