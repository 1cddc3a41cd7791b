//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the allocation
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::AllocationConfig;

/// Loads and validates the allocation configuration.
///
/// # File Format
///
/// ```text
/// billing_increment_minutes: 15   # must divide 60
/// rounding: half_up               # or half_even
/// max_range_days: 366
/// ```
///
/// # Example
///
/// ```no_run
/// use overhead_allocation::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/allocation.yaml").unwrap();
/// println!("Billing increment: {} minutes", loader.config().billing_increment_minutes);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AllocationConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - A value is out of range (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content).map_err(|err| match err {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses and validates configuration from a YAML string.
    pub fn from_yaml(content: &str) -> EngineResult<Self> {
        let config: AllocationConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        Self::from_config(config)
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: AllocationConfig) -> EngineResult<Self> {
        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn validate(config: &AllocationConfig) -> EngineResult<()> {
        let increment = config.billing_increment_minutes;
        if increment == 0 || 60 % increment != 0 {
            return Err(EngineError::InvalidConfig {
                field: "billing_increment_minutes".to_string(),
                message: format!("{} does not evenly divide an hour", increment),
            });
        }

        if config.max_range_days == 0 {
            return Err(EngineError::InvalidConfig {
                field: "max_range_days".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the validated configuration.
    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AllocationConfig {
        self.config
    }
}
