//! Audit trace models recording each deduction rule evaluation.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a rule decision.
///
/// Each step captures the input, output, and reasoning for a rule
/// evaluation, including rules that did not apply.
///
/// # Example
///
/// ```
/// use paycheck_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "base_deduction".to_string(),
///     rule_name: "Base Deduction".to_string(),
///     input: serde_json::json!({"remaining_salary": "50000"}),
///     output: serde_json::json!({"applied": true, "amount": "12000.00"}),
///     reasoning: "$1000.00 x 12 months = $12000.00".to_string(),
/// };
/// assert_eq!(step.rule_id, "base_deduction");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was evaluated.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for one deduction calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of rule evaluations.
    pub steps: Vec<AuditStep>,
}

impl AuditTrace {
    /// Rule ids in evaluation order.
    pub fn rule_ids(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.rule_id.as_str()).collect()
    }
}
