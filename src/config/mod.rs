//! Configuration loading for the Paycheck Deduction Engine.
//!
//! This module loads the deduction amounts and thresholds from a YAML file.
//! There is a single active rule set; rules are not versioned by date.
//!
//! # Example
//!
//! ```no_run
//! use paycheck_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Age threshold: {}", config.rules().dependent_age_threshold);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, DEDUCTIONS_FILE};
pub use types::{DeductionRules, MONTHS_PER_YEAR};
