//! Itemized deduction models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The cause of a single deduction.
///
/// # Example
///
/// ```
/// use paycheck_engine::models::DeductionType;
///
/// let json = serde_json::to_string(&DeductionType::SalaryOver80k).unwrap();
/// assert_eq!(json, "\"salary_over_80k\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionType {
    /// The flat annual employee benefit cost.
    Base,
    /// Percentage surcharge for salaries above the high-salary threshold.
    #[serde(rename = "salary_over_80k")]
    SalaryOver80k,
    /// Flat annual cost per dependent.
    Dependent,
    /// Additional cost for a dependent older than the age threshold.
    #[serde(rename = "dependent_over_50")]
    DependentOver50,
}

/// A single itemized annual deduction tagged with its cause.
///
/// Deductions are only built by the deduction rules and are not mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deduction {
    /// The annual amount deducted.
    pub amount: Decimal,
    /// What caused the deduction.
    pub deduction_type: DeductionType,
}

impl Deduction {
    /// Creates a deduction of `amount` for the given cause.
    pub fn new(deduction_type: DeductionType, amount: Decimal) -> Self {
        Self {
            amount,
            deduction_type,
        }
    }
}
