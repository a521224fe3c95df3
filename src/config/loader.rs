//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the deduction
//! rules from a YAML file.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::DeductionRules;

/// File name of the rules inside a configuration directory.
pub const DEDUCTIONS_FILE: &str = "deductions.yaml";

/// Loads and provides access to the deduction rule configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── deductions.yaml   # Deduction amounts and thresholds
/// ```
///
/// # Example
///
/// ```no_run
/// use paycheck_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Base deduction: ${}/month", loader.rules().base_monthly);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rules: DeductionRules,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `deductions.yaml` is missing
    /// - the file contains invalid YAML or is missing a field
    /// - an amount or rate is out of range
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let rules_path = path.as_ref().join(DEDUCTIONS_FILE);
        let rules = Self::load_yaml::<DeductionRules>(&rules_path)?;
        Self::validate(&rules)?;
        Ok(Self { rules })
    }

    /// Wraps an already-built rule set.
    pub fn from_rules(rules: DeductionRules) -> EngineResult<Self> {
        Self::validate(&rules)?;
        Ok(Self { rules })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(rules: &DeductionRules) -> EngineResult<()> {
        let amounts = [
            ("base_monthly", rules.base_monthly),
            ("dependent_monthly", rules.dependent_monthly),
            ("dependent_over_age_monthly", rules.dependent_over_age_monthly),
            ("high_salary_threshold", rules.high_salary_threshold),
        ];
        for (field, value) in amounts {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("must not be negative, got {}", value),
                });
            }
        }

        if rules.high_salary_rate < Decimal::ZERO || rules.high_salary_rate > Decimal::ONE {
            return Err(EngineError::InvalidConfig {
                field: "high_salary_rate".to_string(),
                message: format!("must be between 0 and 1, got {}", rules.high_salary_rate),
            });
        }

        Ok(())
    }

    /// Returns the loaded deduction rules.
    pub fn rules(&self) -> &DeductionRules {
        &self.rules
    }

    /// Consumes the loader, returning the rules.
    pub fn into_rules(self) -> DeductionRules {
        self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn write_config(contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("paycheck-config-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(DEDUCTIONS_FILE), contents).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.rules(), &DeductionRules::default());
    }

    #[test]
    fn test_loaded_amounts() {
        let rules = ConfigLoader::load(config_path()).unwrap().into_rules();
        assert_eq!(rules.annual_base(), dec("12000"));
        assert_eq!(rules.high_salary_rate, dec("0.02"));
        assert_eq!(rules.dependent_age_threshold, 50);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains(DEDUCTIONS_FILE));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = write_config("base_monthly: [not, a, number");
        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).ok();

        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_load_missing_field_returns_parse_error() {
        let dir = write_config("base_monthly: \"1000.00\"\n");
        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).ok();

        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("missing field"), "got: {}", message);
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let rules = DeductionRules {
            dependent_monthly: dec("-1"),
            ..DeductionRules::default()
        };

        match ConfigLoader::from_rules(rules) {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "dependent_monthly");
            }
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_rate_above_one_is_rejected() {
        let rules = DeductionRules {
            high_salary_rate: dec("1.5"),
            ..DeductionRules::default()
        };

        match ConfigLoader::from_rules(rules) {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "high_salary_rate");
            }
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_amounts_are_accepted() {
        let rules = DeductionRules {
            base_monthly: Decimal::ZERO,
            high_salary_rate: Decimal::ZERO,
            ..DeductionRules::default()
        };
        assert!(ConfigLoader::from_rules(rules).is_ok());
    }
}
