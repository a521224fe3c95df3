//! The deduction rule engine.
//!
//! Rules are evaluated in the order of [`SALARY_RULES`] and then, for each
//! dependent in input order, [`DEPENDENT_RULES`]. Each applied deduction
//! reduces a running salary local to the calculation. The order of the
//! tables is the order of the resulting deduction list.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::config::DeductionRules;
use crate::models::{AuditTrace, Deduction, Dependent};

use super::base_deduction::apply_base_deduction;
use super::dependent_deduction::apply_dependent_deduction;
use super::dependent_over_age::apply_dependent_over_age_surcharge;
use super::high_salary_surcharge::apply_high_salary_surcharge;
use super::rule::{DependentRule, RuleOutcome, RunningSalary, SalaryRule};

/// Salary rules, in evaluation order.
pub const SALARY_RULES: &[SalaryRule] = &[apply_high_salary_surcharge, apply_base_deduction];

/// Rules evaluated for each dependent, in evaluation order.
///
/// The over-age surcharge directly follows the dependent's own deduction.
pub const DEPENDENT_RULES: &[DependentRule] =
    &[apply_dependent_deduction, apply_dependent_over_age_surcharge];

/// The deductions and audit trace of one calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeductionCalculation {
    /// Deductions in rule-application order.
    pub deductions: Vec<Deduction>,
    /// One step per rule evaluation, including rules that did not apply.
    pub audit_trace: AuditTrace,
}

impl DeductionCalculation {
    fn record(&mut self, outcome: RuleOutcome, salary: &mut RunningSalary) {
        if let Some(deduction) = outcome.deduction {
            salary.deduct(deduction.amount);
            self.deductions.push(deduction);
        }
        self.audit_trace.steps.push(outcome.audit_step);
    }
}

/// Evaluates every deduction rule for a salary and its dependents.
///
/// `salary` is the gross annual salary and must not be negative; this is
/// not checked. Dependent ages are taken on `as_of`.
///
/// # Examples
///
/// ```
/// use paycheck_engine::calculation::calculate_deductions;
/// use paycheck_engine::config::DeductionRules;
/// use paycheck_engine::models::DeductionType;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let calculation = calculate_deductions(
///     Decimal::from(100_000),
///     &[],
///     NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     &DeductionRules::default(),
/// );
///
/// let types: Vec<DeductionType> = calculation
///     .deductions
///     .iter()
///     .map(|d| d.deduction_type)
///     .collect();
/// assert_eq!(types, vec![DeductionType::SalaryOver80k, DeductionType::Base]);
/// assert_eq!(calculation.audit_trace.steps.len(), 2);
/// ```
pub fn calculate_deductions(
    salary: Decimal,
    dependents: &[Dependent],
    as_of: NaiveDate,
    rules: &DeductionRules,
) -> DeductionCalculation {
    let mut running = RunningSalary::new(salary);
    let mut calculation = DeductionCalculation::default();
    let mut step_number: u32 = 1;

    for rule in SALARY_RULES {
        let outcome = rule(&running, rules, step_number);
        calculation.record(outcome, &mut running);
        step_number += 1;
    }

    for dependent in dependents {
        for rule in DEPENDENT_RULES {
            let outcome = rule(dependent, &running, as_of, rules, step_number);
            calculation.record(outcome, &mut running);
            step_number += 1;
        }
    }

    calculation
}

/// Computes the ordered deductions for a salary and its dependents on `as_of`.
pub fn compute_deductions_as_of(
    salary: Decimal,
    dependents: &[Dependent],
    as_of: NaiveDate,
    rules: &DeductionRules,
) -> Vec<Deduction> {
    calculate_deductions(salary, dependents, as_of, rules).deductions
}

/// Computes the ordered deductions using the default rules and today's date.
pub fn compute_deductions(salary: Decimal, dependents: &[Dependent]) -> Vec<Deduction> {
    compute_deductions_as_of(
        salary,
        dependents,
        Utc::now().date_naive(),
        &DeductionRules::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{
        BASE_DEDUCTION_RULE_ID, DEPENDENT_DEDUCTION_RULE_ID, DEPENDENT_OVER_AGE_RULE_ID,
        HIGH_SALARY_SURCHARGE_RULE_ID,
    };
    use crate::models::{DeductionType, Relationship};
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn as_of() -> NaiveDate {
        date(2026, 1, 15)
    }

    fn dependent(id: i32, dob: NaiveDate) -> Dependent {
        Dependent {
            id,
            employee_id: 1,
            relationship: Relationship::Child,
            first_name: format!("Dependent{}", id),
            last_name: "Test".to_string(),
            date_of_birth: dob,
        }
    }

    fn compute(salary: &str, dependents: &[Dependent]) -> Vec<Deduction> {
        compute_deductions_as_of(dec(salary), dependents, as_of(), &DeductionRules::default())
    }

    fn summary(deductions: &[Deduction]) -> Vec<(DeductionType, Decimal)> {
        deductions
            .iter()
            .map(|d| (d.deduction_type, d.amount))
            .collect()
    }

    fn total(deductions: &[Deduction]) -> Decimal {
        deductions.iter().map(|d| d.amount).sum()
    }

    #[test]
    fn test_low_salary_no_dependents_is_base_only() {
        let deductions = compute("50000", &[]);
        assert_eq!(summary(&deductions), vec![(DeductionType::Base, dec("12000"))]);
        assert_eq!(total(&deductions), dec("12000"));
    }

    #[test]
    fn test_salary_at_80k_is_base_only() {
        let deductions = compute("80000", &[]);
        assert_eq!(summary(&deductions), vec![(DeductionType::Base, dec("12000"))]);
    }

    #[test]
    fn test_100k_no_dependents() {
        let deductions = compute("100000", &[]);
        assert_eq!(
            summary(&deductions),
            vec![
                (DeductionType::SalaryOver80k, dec("2000")),
                (DeductionType::Base, dec("12000")),
            ]
        );
        assert_eq!(total(&deductions), dec("14000"));
    }

    #[test]
    fn test_50k_with_dependent_aged_30() {
        let deductions = compute("50000", &[dependent(1, date(1995, 6, 1))]);
        assert_eq!(
            summary(&deductions),
            vec![
                (DeductionType::Base, dec("12000")),
                (DeductionType::Dependent, dec("7200")),
            ]
        );
        assert_eq!(total(&deductions), dec("19200"));
    }

    #[test]
    fn test_dependent_exactly_50_has_no_surcharge() {
        let deductions = compute("50000", &[dependent(1, date(1976, 1, 15))]);
        assert!(
            deductions
                .iter()
                .all(|d| d.deduction_type != DeductionType::DependentOver50)
        );
    }

    #[test]
    fn test_dependent_aged_51_surcharge_is_adjacent() {
        let deductions = compute(
            "50000",
            &[
                dependent(1, date(1975, 1, 1)),
                dependent(2, date(2010, 1, 1)),
            ],
        );
        assert_eq!(
            summary(&deductions),
            vec![
                (DeductionType::Base, dec("12000")),
                (DeductionType::Dependent, dec("7200")),
                (DeductionType::DependentOver50, dec("2400")),
                (DeductionType::Dependent, dec("7200")),
            ]
        );
    }

    #[test]
    fn test_dependent_order_is_preserved() {
        let deductions = compute(
            "90000",
            &[
                dependent(1, date(2010, 1, 1)),
                dependent(2, date(1960, 1, 1)),
            ],
        );
        assert_eq!(
            summary(&deductions),
            vec![
                (DeductionType::SalaryOver80k, dec("1800")),
                (DeductionType::Base, dec("12000")),
                (DeductionType::Dependent, dec("7200")),
                (DeductionType::Dependent, dec("7200")),
                (DeductionType::DependentOver50, dec("2400")),
            ]
        );
    }

    #[test]
    fn test_deductions_exceeding_salary_are_not_clamped() {
        let deductions = compute(
            "10000",
            &[dependent(1, date(1960, 1, 1)), dependent(2, date(1961, 1, 1))],
        );
        assert_eq!(total(&deductions), dec("31200"));
    }

    #[test]
    fn test_audit_trace_records_every_evaluation() {
        let calculation = calculate_deductions(
            dec("50000"),
            &[dependent(1, date(2010, 1, 1))],
            as_of(),
            &DeductionRules::default(),
        );

        assert_eq!(
            calculation.audit_trace.rule_ids(),
            vec![
                HIGH_SALARY_SURCHARGE_RULE_ID,
                BASE_DEDUCTION_RULE_ID,
                DEPENDENT_DEDUCTION_RULE_ID,
                DEPENDENT_OVER_AGE_RULE_ID,
            ]
        );
        let step_numbers: Vec<u32> = calculation
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(step_numbers, vec![1, 2, 3, 4]);
        assert_eq!(calculation.deductions.len(), 2);
    }

    #[test]
    fn test_audit_trace_tracks_running_salary() {
        let calculation = calculate_deductions(
            dec("100000"),
            &[dependent(1, date(1960, 1, 1))],
            as_of(),
            &DeductionRules::default(),
        );
        let last = calculation.audit_trace.steps.last().unwrap();

        // 100000 - 2000 - 12000 - 7200 - 2400
        assert_eq!(
            dec(last.output["remaining_salary"].as_str().unwrap()),
            dec("76400")
        );
    }

    #[test]
    fn test_configured_rules_are_used() {
        let rules = DeductionRules {
            base_monthly: dec("500"),
            dependent_monthly: dec("100"),
            ..DeductionRules::default()
        };
        let deductions =
            compute_deductions_as_of(dec("50000"), &[dependent(1, date(2010, 1, 1))], as_of(), &rules);

        assert_eq!(
            summary(&deductions),
            vec![
                (DeductionType::Base, dec("6000")),
                (DeductionType::Dependent, dec("1200")),
            ]
        );
    }

    #[test]
    fn test_compute_deductions_uses_today() {
        let deductions = compute_deductions(dec("50000"), &[dependent(1, date(1950, 1, 1))]);

        assert_eq!(deductions.last().unwrap().deduction_type, DeductionType::DependentOver50);
    }

    fn arb_dependents() -> impl Strategy<Value = Vec<Dependent>> {
        proptest::collection::vec(0u64..36_500, 0..8).prop_map(|ages_in_days| {
            ages_in_days
                .into_iter()
                .enumerate()
                .map(|(i, days)| {
                    let dob = as_of().checked_sub_days(chrono::Days::new(days)).unwrap();
                    dependent(i as i32 + 1, dob)
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_engine_is_idempotent(
            salary_cents in 0i64..100_000_000,
            dependents in arb_dependents(),
        ) {
            let salary = Decimal::new(salary_cents, 2);
            let rules = DeductionRules::default();
            let first = compute_deductions_as_of(salary, &dependents, as_of(), &rules);
            let second = compute_deductions_as_of(salary, &dependents, as_of(), &rules);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_deduction_sequence_follows_rule_order(
            salary_cents in 0i64..100_000_000,
            dependents in arb_dependents(),
        ) {
            let salary = Decimal::new(salary_cents, 2);
            let deductions =
                compute_deductions_as_of(salary, &dependents, as_of(), &DeductionRules::default());
            let types: Vec<DeductionType> = deductions.iter().map(|d| d.deduction_type).collect();

            let mut expected = Vec::new();
            if salary > dec("80000") {
                expected.push(DeductionType::SalaryOver80k);
            }
            expected.push(DeductionType::Base);
            for dependent in &dependents {
                expected.push(DeductionType::Dependent);
                if crate::calculation::age_in_years(dependent.date_of_birth, as_of()) > 50 {
                    expected.push(DeductionType::DependentOver50);
                }
            }
            prop_assert_eq!(types, expected);
        }
    }
}
