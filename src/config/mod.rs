//! Configuration loading and management for the Overhead Allocation Engine.
//!
//! This module provides functionality to load the allocation settings
//! (billing increment, tie rounding rule, range limits) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use overhead_allocation::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/allocation.yaml").unwrap();
//! println!("Rounding: {:?}", config.config().rounding);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AllocationConfig, DEFAULT_BILLING_INCREMENT_MINUTES, DEFAULT_MAX_RANGE_DAYS, RoundingPolicy,
};
