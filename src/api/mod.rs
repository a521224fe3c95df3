//! HTTP API for the paycheck engine.
//!
//! Exposes employee and dependent lookups and the annual pay statement
//! under `/api/v1`, every body wrapped in an [`ApiResponse`] envelope.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiErrorResponse, ApiResponse, DependentView, EmployeeView};
pub use state::AppState;
