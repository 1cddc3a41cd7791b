//! Configuration types for overhead allocation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

/// Default billing increment: a quarter hour.
pub const DEFAULT_BILLING_INCREMENT_MINUTES: u32 = 15;

/// Default upper bound on the number of days in one range request.
pub const DEFAULT_MAX_RANGE_DAYS: u32 = 366;

/// How a billable-hour value exactly halfway between two increments is rounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Ties round up to the next increment.
    #[default]
    HalfUp,
    /// Ties round to the even increment.
    HalfEven,
}

impl RoundingPolicy {
    /// The decimal rounding strategy implementing this policy.
    ///
    /// Billable hours are never negative, so rounding away from zero on a
    /// tie is rounding up.
    pub fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingPolicy::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingPolicy::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

/// Settings for the allocation engine.
///
/// Every field has a default, so an empty YAML document is a valid
/// configuration.
///
/// # Example
///
/// ```
/// use overhead_allocation::config::{AllocationConfig, RoundingPolicy};
///
/// let config: AllocationConfig = serde_yaml::from_str("rounding: half_even").unwrap();
/// assert_eq!(config.rounding, RoundingPolicy::HalfEven);
/// assert_eq!(config.billing_increment_minutes, 15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    /// Billable hours are rounded to a multiple of this many minutes.
    pub billing_increment_minutes: u32,
    /// Tie rule for billable-hour rounding.
    pub rounding: RoundingPolicy,
    /// Maximum number of days one range request may cover.
    pub max_range_days: u32,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            billing_increment_minutes: DEFAULT_BILLING_INCREMENT_MINUTES,
            rounding: RoundingPolicy::default(),
            max_range_days: DEFAULT_MAX_RANGE_DAYS,
        }
    }
}
