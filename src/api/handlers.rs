//! HTTP request handlers for the paycheck API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    routing::get,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::AnnualPayStatement;
use crate::store::StoreError;

use super::response::{ApiErrorResponse, ApiResponse, DependentView, EmployeeView};
use super::state::AppState;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/employees", get(list_employees_handler))
        .route("/api/v1/employees/:id", get(employee_handler))
        .route(
            "/api/v1/employees/:id/annual-summary",
            get(annual_summary_handler),
        )
        .route("/api/v1/dependents", get(list_dependents_handler))
        .route("/api/v1/dependents/:id", get(dependent_handler))
        .with_state(state)
}

/// Handler for GET /api/v1/employees.
async fn list_employees_handler(State(state): State<AppState>) -> ApiResult<Vec<EmployeeView>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Listing employees");

    let store = state.store();
    let employees = store
        .employees()
        .map_err(|err| store_failure(correlation_id, err))?;
    let dependents = store
        .dependents()
        .map_err(|err| store_failure(correlation_id, err))?;

    let views = employees
        .into_iter()
        .map(|employee| {
            let own = dependents
                .iter()
                .filter(|d| d.employee_id == employee.id)
                .cloned()
                .collect();
            EmployeeView::new(employee, own)
        })
        .collect();

    Ok(Json(ApiResponse::ok(views)))
}

/// Handler for GET /api/v1/employees/:id.
async fn employee_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<EmployeeView> {
    let correlation_id = Uuid::new_v4();
    let id = path_id(correlation_id, id)?;
    info!(correlation_id = %correlation_id, employee_id = id, "Fetching employee");

    let store = state.store();
    let Some(employee) = store
        .employee(id)
        .map_err(|err| store_failure(correlation_id, err))?
    else {
        warn!(correlation_id = %correlation_id, employee_id = id, "Employee not found");
        return Err(ApiErrorResponse::not_found("No employee found with that ID"));
    };
    let dependents = store
        .dependents_of(id)
        .map_err(|err| store_failure(correlation_id, err))?;

    Ok(Json(ApiResponse::ok(EmployeeView::new(employee, dependents))))
}

/// Handler for GET /api/v1/employees/:id/annual-summary.
///
/// Returns the employee's annual pay statement, dependent ages taken today.
async fn annual_summary_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<AnnualPayStatement> {
    let correlation_id = Uuid::new_v4();
    let id = path_id(correlation_id, id)?;
    info!(correlation_id = %correlation_id, employee_id = id, "Processing annual summary request");

    let start_time = Instant::now();
    match state.pay_service().annual_pay_statement(id) {
        Ok(Some(statement)) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = id,
                total_deductions = %statement.total_deductions(),
                duration_us = start_time.elapsed().as_micros(),
                "Annual summary completed successfully"
            );
            Ok(Json(ApiResponse::ok(statement)))
        }
        Ok(None) => {
            warn!(correlation_id = %correlation_id, employee_id = id, "No statement for employee");
            Err(ApiErrorResponse::not_found(
                "No statement found for that Employee ID",
            ))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Annual summary failed"
            );
            Err(err.into())
        }
    }
}

/// Handler for GET /api/v1/dependents.
///
/// An empty roster answers 404.
async fn list_dependents_handler(State(state): State<AppState>) -> ApiResult<Vec<DependentView>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Listing dependents");

    let dependents = state
        .store()
        .dependents()
        .map_err(|err| store_failure(correlation_id, err))?;
    if dependents.is_empty() {
        warn!(correlation_id = %correlation_id, "No dependents stored");
        return Err(ApiErrorResponse::not_found("No dependents found"));
    }

    Ok(Json(ApiResponse::ok(
        dependents.into_iter().map(Into::into).collect(),
    )))
}

/// Handler for GET /api/v1/dependents/:id.
async fn dependent_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<DependentView> {
    let correlation_id = Uuid::new_v4();
    let id = path_id(correlation_id, id)?;
    info!(correlation_id = %correlation_id, dependent_id = id, "Fetching dependent");

    match state
        .store()
        .dependent(id)
        .map_err(|err| store_failure(correlation_id, err))?
    {
        Some(dependent) => Ok(Json(ApiResponse::ok(dependent.into()))),
        None => {
            warn!(correlation_id = %correlation_id, dependent_id = id, "Dependent not found");
            Err(ApiErrorResponse::not_found(
                "Could not find dependent with that ID",
            ))
        }
    }
}

fn path_id(
    correlation_id: Uuid,
    id: Result<Path<i32>, PathRejection>,
) -> Result<i32, ApiErrorResponse> {
    match id {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Invalid path id"
            );
            Err(ApiErrorResponse::bad_request(body_text))
        }
    }
}

fn store_failure(correlation_id: Uuid, err: StoreError) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, error = %err, "Employee store failed");
    EngineError::from(err).into()
}
