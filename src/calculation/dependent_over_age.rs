//! Surcharge for dependents older than the age threshold.

use chrono::NaiveDate;

use crate::config::{DeductionRules, MONTHS_PER_YEAR};
use crate::models::{AuditStep, Deduction, DeductionType, Dependent};

use super::age::age_in_years;
use super::rule::{RuleOutcome, RunningSalary};

/// Rule identifier recorded in the audit trace.
pub const DEPENDENT_OVER_AGE_RULE_ID: &str = "dependent_over_age_surcharge";

/// Applies the over-age surcharge for one dependent.
///
/// The dependent's age is counted in whole years on `as_of`. The surcharge
/// applies only when that age is strictly greater than
/// `dependent_age_threshold`, so a dependent on their 50th birthday does
/// not qualify.
pub fn apply_dependent_over_age_surcharge(
    dependent: &Dependent,
    salary: &RunningSalary,
    as_of: NaiveDate,
    rules: &DeductionRules,
    step_number: u32,
) -> RuleOutcome {
    let age = age_in_years(dependent.date_of_birth, as_of);
    let threshold = rules.dependent_age_threshold;

    if i64::from(age) <= i64::from(threshold) {
        let audit_step = AuditStep {
            step_number,
            rule_id: DEPENDENT_OVER_AGE_RULE_ID.to_string(),
            rule_name: "Dependent Over Age Surcharge".to_string(),
            input: serde_json::json!({
                "dependent_id": dependent.id,
                "date_of_birth": dependent.date_of_birth.to_string(),
                "as_of": as_of.to_string(),
                "age": age,
                "age_threshold": threshold
            }),
            output: serde_json::json!({
                "applied": false,
                "remaining_salary": salary.remaining().to_string()
            }),
            reasoning: format!(
                "Dependent {} is {} - not over {}, no surcharge",
                dependent.id, age, threshold
            ),
        };

        return RuleOutcome {
            deduction: None,
            audit_step,
        };
    }

    let amount = rules.annual_dependent_over_age();
    let remaining = salary.remaining() - amount;

    let audit_step = AuditStep {
        step_number,
        rule_id: DEPENDENT_OVER_AGE_RULE_ID.to_string(),
        rule_name: "Dependent Over Age Surcharge".to_string(),
        input: serde_json::json!({
            "dependent_id": dependent.id,
            "date_of_birth": dependent.date_of_birth.to_string(),
            "as_of": as_of.to_string(),
            "age": age,
            "age_threshold": threshold,
            "monthly_amount": rules.dependent_over_age_monthly.to_string()
        }),
        output: serde_json::json!({
            "applied": true,
            "amount": amount.to_string(),
            "remaining_salary": remaining.to_string()
        }),
        reasoning: format!(
            "Dependent {} is {} (over {}): ${} x {} months = ${}",
            dependent.id,
            age,
            threshold,
            rules.dependent_over_age_monthly.normalize(),
            MONTHS_PER_YEAR,
            amount.normalize()
        ),
    };

    RuleOutcome {
        deduction: Some(Deduction::new(DeductionType::DependentOver50, amount)),
        audit_step,
    }
}
