//! Annual deduction summary and pay statement models.
//!
//! Both types store only their base inputs. Every total and per-check figure
//! is computed from those inputs when read, so a statement can never report
//! a total that disagrees with its itemized deductions. The JSON form
//! carries the derived figures alongside the stored fields.

use rust_decimal::Decimal;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use super::Deduction;

/// Number of pay checks issued per year.
pub const PAY_PERIODS_PER_YEAR: u32 = 26;

fn per_check(annual: Decimal) -> Decimal {
    annual / Decimal::from(PAY_PERIODS_PER_YEAR)
}

/// The ordered, itemized deductions for one employee-year.
///
/// # Example
///
/// ```
/// use paycheck_engine::models::{AnnualDeductionSummary, Deduction, DeductionType};
/// use rust_decimal::Decimal;
///
/// let summary = AnnualDeductionSummary::new(vec![
///     Deduction::new(DeductionType::SalaryOver80k, Decimal::from(2000)),
///     Deduction::new(DeductionType::Base, Decimal::from(12000)),
/// ]);
/// assert_eq!(summary.total_deductions(), Decimal::from(14000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AnnualDeductionSummary {
    deductions: Vec<Deduction>,
}

impl AnnualDeductionSummary {
    /// Wraps an ordered list of deductions.
    pub fn new(deductions: Vec<Deduction>) -> Self {
        Self { deductions }
    }

    /// The deductions in rule-application order.
    pub fn deductions(&self) -> &[Deduction] {
        &self.deductions
    }

    /// Sum of every deduction amount.
    pub fn total_deductions(&self) -> Decimal {
        self.deductions.iter().map(|d| d.amount).sum()
    }

    /// Total deductions spread over the year's pay checks.
    ///
    /// Exactly zero when there is nothing to deduct.
    pub fn deductions_per_check(&self) -> Decimal {
        let total = self.total_deductions();
        if total.is_zero() {
            Decimal::ZERO
        } else {
            per_check(total)
        }
    }
}

impl Serialize for AnnualDeductionSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AnnualDeductionSummary", 3)?;
        state.serialize_field("total_deductions", &self.total_deductions())?;
        state.serialize_field("deductions_per_check", &self.deductions_per_check())?;
        state.serialize_field("deductions", &self.deductions)?;
        state.end()
    }
}

/// One employee's annual pay statement.
///
/// Holds the employee id, the gross annual salary and the deduction
/// summary. Per-check salary, per-check deductions and net pay are derived.
///
/// # Example
///
/// ```
/// use paycheck_engine::models::{AnnualDeductionSummary, AnnualPayStatement, Deduction, DeductionType};
/// use rust_decimal::Decimal;
///
/// let statement = AnnualPayStatement::new(
///     1,
///     Decimal::from(52000),
///     AnnualDeductionSummary::new(vec![Deduction::new(DeductionType::Base, Decimal::from(12000))]),
/// );
/// assert_eq!(statement.salary_per_check(), Decimal::from(2000));
/// assert_eq!(
///     statement.net_pay_per_check(),
///     statement.salary_per_check() - statement.deductions_per_check()
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnnualPayStatement {
    employee_id: i32,
    total_salary: Decimal,
    annual_deduction_summary: AnnualDeductionSummary,
}

impl AnnualPayStatement {
    /// Creates a statement from its stored parts.
    pub fn new(
        employee_id: i32,
        total_salary: Decimal,
        annual_deduction_summary: AnnualDeductionSummary,
    ) -> Self {
        Self {
            employee_id,
            total_salary,
            annual_deduction_summary,
        }
    }

    /// The employee this statement belongs to.
    pub fn employee_id(&self) -> i32 {
        self.employee_id
    }

    /// Gross annual salary.
    pub fn total_salary(&self) -> Decimal {
        self.total_salary
    }

    /// The itemized deductions.
    pub fn annual_deduction_summary(&self) -> &AnnualDeductionSummary {
        &self.annual_deduction_summary
    }

    /// Sum of the summary's deductions.
    pub fn total_deductions(&self) -> Decimal {
        self.annual_deduction_summary.total_deductions()
    }

    /// Gross salary for a single pay check.
    pub fn salary_per_check(&self) -> Decimal {
        per_check(self.total_salary)
    }

    /// Deductions withheld from a single pay check.
    pub fn deductions_per_check(&self) -> Decimal {
        self.annual_deduction_summary.deductions_per_check()
    }

    /// Salary per check minus deductions per check.
    ///
    /// Not clamped: deductions larger than the salary yield a negative
    /// figure.
    pub fn net_pay_per_check(&self) -> Decimal {
        self.salary_per_check() - self.deductions_per_check()
    }
}

impl Serialize for AnnualPayStatement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AnnualPayStatement", 7)?;
        state.serialize_field("employee_id", &self.employee_id)?;
        state.serialize_field("total_salary", &self.total_salary)?;
        state.serialize_field("total_deductions", &self.total_deductions())?;
        state.serialize_field("salary_per_check", &self.salary_per_check())?;
        state.serialize_field("deductions_per_check", &self.deductions_per_check())?;
        state.serialize_field("net_pay_per_check", &self.net_pay_per_check())?;
        state.serialize_field("annual_deduction_summary", &self.annual_deduction_summary)?;
        state.end()
    }
}
