//! Configuration types for the deduction rules.
//!
//! Amounts are configured per month, as the benefits schedule quotes them,
//! and annualised by the accessors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of months that a monthly deduction is charged for each year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Amounts and thresholds used by the deduction rules.
///
/// Deserialized from `deductions.yaml`.
///
/// # Example
///
/// ```
/// use paycheck_engine::config::DeductionRules;
/// use rust_decimal::Decimal;
///
/// let rules = DeductionRules::default();
/// assert_eq!(rules.annual_base(), Decimal::from(12000));
/// assert_eq!(rules.annual_dependent(), Decimal::from(7200));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionRules {
    /// Monthly benefit cost charged to every employee.
    pub base_monthly: Decimal,
    /// Monthly cost per dependent.
    pub dependent_monthly: Decimal,
    /// Additional monthly cost per dependent older than the age threshold.
    pub dependent_over_age_monthly: Decimal,
    /// Age in whole years a dependent must exceed to incur the surcharge.
    pub dependent_age_threshold: u32,
    /// Annual salary a salary must exceed to incur the high-salary surcharge.
    pub high_salary_threshold: Decimal,
    /// Fraction of annual salary taken as the high-salary surcharge.
    pub high_salary_rate: Decimal,
}

impl Default for DeductionRules {
    fn default() -> Self {
        Self {
            base_monthly: Decimal::new(1000_00, 2),
            dependent_monthly: Decimal::new(600_00, 2),
            dependent_over_age_monthly: Decimal::new(200_00, 2),
            dependent_age_threshold: 50,
            high_salary_threshold: Decimal::new(80_000, 0),
            high_salary_rate: Decimal::new(2, 2),
        }
    }
}

impl DeductionRules {
    /// The base deduction for a full year.
    pub fn annual_base(&self) -> Decimal {
        self.base_monthly * Decimal::from(MONTHS_PER_YEAR)
    }

    /// The per-dependent deduction for a full year.
    pub fn annual_dependent(&self) -> Decimal {
        self.dependent_monthly * Decimal::from(MONTHS_PER_YEAR)
    }

    /// The over-age dependent surcharge for a full year.
    pub fn annual_dependent_over_age(&self) -> Decimal {
        self.dependent_over_age_monthly * Decimal::from(MONTHS_PER_YEAR)
    }
}
