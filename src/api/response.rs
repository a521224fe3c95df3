//! Response types for the paycheck API.
//!
//! This module defines the response envelope, the employee and dependent
//! views, and the mapping from engine errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{Dependent, Employee, Relationship};

/// Envelope wrapping every response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded.
    pub success: bool,
    /// The payload, present on success.
    pub data: Option<T>,
    /// Error description, present on failure.
    pub error: Option<String>,
    /// Optional informational message.
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Creates a successful response carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    /// Creates a failed response with an error description.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }
}

/// A dependent as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependentView {
    /// Dependent id.
    pub id: i32,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Relationship to the employee.
    pub relationship: Relationship,
}

impl From<Dependent> for DependentView {
    fn from(dependent: Dependent) -> Self {
        Self {
            id: dependent.id,
            first_name: dependent.first_name,
            last_name: dependent.last_name,
            date_of_birth: dependent.date_of_birth,
            relationship: dependent.relationship,
        }
    }
}

/// An employee with their dependents, as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeView {
    /// Employee id.
    pub id: i32,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Gross annual salary.
    pub salary: Decimal,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// The employee's dependents.
    pub dependents: Vec<DependentView>,
}

impl EmployeeView {
    /// Builds the view of `employee` with the given dependents.
    pub fn new(employee: Employee, dependents: Vec<Dependent>) -> Self {
        Self {
            id: employee.id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            salary: employee.salary,
            date_of_birth: employee.date_of_birth,
            dependents: dependents.into_iter().map(Into::into).collect(),
        }
    }
}

/// An error envelope with its HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiResponse<()>,
}

impl ApiErrorResponse {
    /// A 404 with the given description.
    pub fn not_found(error: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: ApiResponse::failure(error),
        }
    }

    /// A 400 with the given description.
    pub fn bad_request(error: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: ApiResponse::failure(error),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let status = match &error {
            EngineError::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            error: ApiResponse::failure(error.to_string()),
        }
    }
}
