//! Application state for the paycheck API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::DeductionRules;
use crate::service::PayService;
use crate::store::EmployeeStore;

/// Shared application state.
///
/// Holds the employee store and the pay service reading from it.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn EmployeeStore>,
    pay_service: PayService,
}

impl AppState {
    /// Creates the application state over `store`, charging `rules`.
    pub fn new(store: Arc<dyn EmployeeStore>, rules: DeductionRules) -> Self {
        Self {
            pay_service: PayService::new(Arc::clone(&store), rules),
            store,
        }
    }

    /// Returns the employee store.
    pub fn store(&self) -> &dyn EmployeeStore {
        self.store.as_ref()
    }

    /// Returns the pay service.
    pub fn pay_service(&self) -> &PayService {
        &self.pay_service
    }
}
