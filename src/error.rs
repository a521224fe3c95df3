//! Error types for the Paycheck Deduction Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The deduction rules themselves cannot fail; errors come from loading the
//! rule configuration or from the employee store.

use thiserror::Error;

use crate::store::StoreError;

/// The main error type for the Paycheck Deduction Engine.
///
/// An unknown employee is not an error: the orchestration layer reports it
/// as `Ok(None)`.
///
/// # Example
///
/// ```
/// use paycheck_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/deductions.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/deductions.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the rules cannot use.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The employee store failed to answer a query.
    #[error("Employee store error: {0}")]
    Store(#[from] StoreError),
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
