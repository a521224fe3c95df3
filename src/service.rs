//! Annual pay statement orchestration.
//!
//! [`PayService`] loads an employee and their dependents from an
//! [`EmployeeStore`], runs the deduction engine and assembles the
//! resulting [`AnnualPayStatement`].

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::calculation::{build_statement, calculate_deductions};
use crate::config::DeductionRules;
use crate::error::EngineResult;
use crate::models::{AnnualPayStatement, Employee};
use crate::store::EmployeeStore;

/// Builds annual pay statements for stored employees.
#[derive(Clone)]
pub struct PayService {
    store: Arc<dyn EmployeeStore>,
    rules: DeductionRules,
}

impl PayService {
    /// Creates a service reading from `store` and charging `rules`.
    pub fn new(store: Arc<dyn EmployeeStore>, rules: DeductionRules) -> Self {
        Self { store, rules }
    }

    /// Returns the deduction rules the service charges.
    pub fn rules(&self) -> &DeductionRules {
        &self.rules
    }

    /// Builds the statement for an employee as of today.
    ///
    /// Returns `Ok(None)` when the store holds no employee with that id.
    pub fn annual_pay_statement(&self, employee_id: i32) -> EngineResult<Option<AnnualPayStatement>> {
        self.annual_pay_statement_as_of(employee_id, Utc::now().date_naive())
    }

    /// Builds the statement for an employee, taking dependent ages on `as_of`.
    pub fn annual_pay_statement_as_of(
        &self,
        employee_id: i32,
        as_of: NaiveDate,
    ) -> EngineResult<Option<AnnualPayStatement>> {
        let Some(employee) = self.store.employee(employee_id)? else {
            warn!(employee_id, "Employee not found");
            return Ok(None);
        };

        self.annual_pay_statement_for(&employee, as_of).map(Some)
    }

    /// Builds the statement for an employee record already in hand.
    ///
    /// Dependents are still read from the store by the employee's id.
    pub fn annual_pay_statement_for(
        &self,
        employee: &Employee,
        as_of: NaiveDate,
    ) -> EngineResult<AnnualPayStatement> {
        let dependents = self.store.dependents_of(employee.id)?;
        let calculation = calculate_deductions(employee.salary, &dependents, as_of, &self.rules);

        for step in &calculation.audit_trace.steps {
            debug!(
                employee_id = employee.id,
                step = step.step_number,
                rule_id = %step.rule_id,
                reasoning = %step.reasoning,
                "Rule evaluated"
            );
        }

        let statement = build_statement(employee.id, employee.salary, calculation.deductions);
        info!(
            employee_id = employee.id,
            dependents = dependents.len(),
            deductions = statement.annual_deduction_summary().deductions().len(),
            total_deductions = %statement.total_deductions(),
            net_pay_per_check = %statement.net_pay_per_check(),
            "Annual pay statement built"
        );

        Ok(statement)
    }
}
