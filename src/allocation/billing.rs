//! Billable-hour rounding.
//!
//! After a record receives its share of the overhead pool, its billable hours
//! become the hours worked plus the allocated minutes, rounded to the billing
//! increment (a quarter hour by default).

use rust_decimal::Decimal;

use crate::config::{AllocationConfig, RoundingPolicy};

const MINUTES_PER_HOUR: u32 = 60;

/// Rounds `hours` to the nearest multiple of `increment_minutes`.
///
/// The arithmetic is done in minutes so that quarter-hour ties are exact.
/// [`crate::config::ConfigLoader`] only accepts increments that divide an
/// hour, but any positive increment rounds correctly here.
///
/// # Examples
///
/// ```
/// use overhead_allocation::allocation::round_to_increment;
/// use overhead_allocation::config::RoundingPolicy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // 2h 07m 30s is exactly between 2.0 and 2.25.
/// let tie = Decimal::from_str("2.125").unwrap();
/// assert_eq!(round_to_increment(tie, 15, RoundingPolicy::HalfUp), Decimal::from_str("2.25").unwrap());
/// assert_eq!(round_to_increment(tie, 15, RoundingPolicy::HalfEven), Decimal::from_str("2.0").unwrap());
/// ```
pub fn round_to_increment(hours: Decimal, increment_minutes: u32, policy: RoundingPolicy) -> Decimal {
    round_minutes(hours * Decimal::from(MINUTES_PER_HOUR), increment_minutes, policy)
}

/// Rounds a duration in minutes to the increment and returns it in hours.
fn round_minutes(minutes: Decimal, increment_minutes: u32, policy: RoundingPolicy) -> Decimal {
    let increment = Decimal::from(increment_minutes.max(1));

    let steps = (minutes / increment).round_dp_with_strategy(0, policy.strategy());

    (steps * increment / Decimal::from(MINUTES_PER_HOUR)).normalize()
}

/// Computes a record's new billable hours from its hours worked and its
/// allocated overhead minutes.
///
/// # Examples
///
/// ```
/// use overhead_allocation::allocation::round_billable_hours;
/// use overhead_allocation::config::AllocationConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = AllocationConfig::default();
///
/// // 2h + 30m = 2.5h
/// assert_eq!(round_billable_hours(Decimal::from(2), 30, &config), Decimal::from_str("2.5").unwrap());
///
/// // 2h + 19m = 2.317h, nearest quarter is 2.25h
/// assert_eq!(round_billable_hours(Decimal::from(2), 19, &config), Decimal::from_str("2.25").unwrap());
/// ```
pub fn round_billable_hours(
    hours_worked: Decimal,
    allocated_minutes: u32,
    config: &AllocationConfig,
) -> Decimal {
    let minutes = hours_worked * Decimal::from(MINUTES_PER_HOUR) + Decimal::from(allocated_minutes);
    round_minutes(minutes, config.billing_increment_minutes, config.rounding)
}
