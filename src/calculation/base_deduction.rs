//! Base benefit deduction charged to every employee.

use crate::config::{DeductionRules, MONTHS_PER_YEAR};
use crate::models::{AuditStep, Deduction, DeductionType};

use super::rule::{RuleOutcome, RunningSalary};

/// Rule identifier recorded in the audit trace.
pub const BASE_DEDUCTION_RULE_ID: &str = "base_deduction";

/// Applies the base deduction: `base_monthly` for each month of the year.
///
/// Always applies, whatever the salary.
pub fn apply_base_deduction(
    salary: &RunningSalary,
    rules: &DeductionRules,
    step_number: u32,
) -> RuleOutcome {
    let amount = rules.annual_base();
    let remaining = salary.remaining() - amount;

    let audit_step = AuditStep {
        step_number,
        rule_id: BASE_DEDUCTION_RULE_ID.to_string(),
        rule_name: "Base Deduction".to_string(),
        input: serde_json::json!({
            "monthly_amount": rules.base_monthly.to_string(),
            "months": MONTHS_PER_YEAR,
            "remaining_salary": salary.remaining().to_string()
        }),
        output: serde_json::json!({
            "applied": true,
            "amount": amount.to_string(),
            "remaining_salary": remaining.to_string()
        }),
        reasoning: format!(
            "${} x {} months = ${}",
            rules.base_monthly.normalize(),
            MONTHS_PER_YEAR,
            amount.normalize()
        ),
    };

    RuleOutcome {
        deduction: Some(Deduction::new(DeductionType::Base, amount)),
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_base_deduction_is_twelve_thousand() {
        let outcome = apply_base_deduction(
            &RunningSalary::new(dec("50000")),
            &DeductionRules::default(),
            1,
        );
        let deduction = outcome.deduction.unwrap();

        assert_eq!(deduction.deduction_type, DeductionType::Base);
        assert_eq!(deduction.amount, dec("12000"));
        assert_eq!(outcome.audit_step.rule_id, BASE_DEDUCTION_RULE_ID);
        assert_eq!(outcome.audit_step.reasoning, "$1000 x 12 months = $12000");
    }

    #[test]
    fn test_base_deduction_applies_to_zero_salary() {
        let outcome = apply_base_deduction(
            &RunningSalary::new(Decimal::ZERO),
            &DeductionRules::default(),
            1,
        );

        assert_eq!(outcome.deduction.unwrap().amount, dec("12000"));
        assert_eq!(
            dec(outcome.audit_step.output["remaining_salary"].as_str().unwrap()),
            dec("-12000")
        );
    }

    #[test]
    fn test_base_deduction_follows_configured_amount() {
        let rules = DeductionRules {
            base_monthly: dec("250.50"),
            ..DeductionRules::default()
        };
        let outcome = apply_base_deduction(&RunningSalary::new(dec("40000")), &rules, 2);

        assert_eq!(outcome.deduction.unwrap().amount, dec("3006"));
        assert_eq!(outcome.audit_step.step_number, 2);
    }
}
