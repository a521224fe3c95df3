//! Shared types for the deduction rules.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::DeductionRules;
use crate::models::{AuditStep, Deduction, Dependent};

/// The salary as successively reduced by each applied deduction.
///
/// Local to one calculation. Percentage rules read the original salary;
/// the remaining value is carried for the audit trace and is allowed to
/// go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunningSalary {
    original: Decimal,
    remaining: Decimal,
}

impl RunningSalary {
    /// Starts a running salary at the gross annual salary.
    pub fn new(salary: Decimal) -> Self {
        Self {
            original: salary,
            remaining: salary,
        }
    }

    /// The gross annual salary before any deduction.
    pub fn original(&self) -> Decimal {
        self.original
    }

    /// The salary left after the deductions applied so far.
    pub fn remaining(&self) -> Decimal {
        self.remaining
    }

    /// Reduces the remaining salary by `amount`.
    pub fn deduct(&mut self, amount: Decimal) {
        self.remaining -= amount;
    }
}

/// The result of evaluating one rule.
#[derive(Debug, Clone)]
pub struct RuleOutcome {
    /// The deduction produced, if the rule applied.
    pub deduction: Option<Deduction>,
    /// The audit step recording this evaluation.
    pub audit_step: AuditStep,
}

/// A rule evaluated once per calculation against the salary.
pub type SalaryRule = fn(&RunningSalary, &DeductionRules, u32) -> RuleOutcome;

/// A rule evaluated once per dependent, in dependent order.
pub type DependentRule = fn(&Dependent, &RunningSalary, NaiveDate, &DeductionRules, u32) -> RuleOutcome;
