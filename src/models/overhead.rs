//! Overhead field selector.
//!
//! Travel time and break time share one allocation algorithm. [`OverheadField`]
//! picks which pair of record fields an allocation reads and writes, and which
//! JSON keys the result is published under.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::WorkRecord;

/// The kind of shared daily overhead being redistributed.
///
/// # Example
///
/// ```
/// use overhead_allocation::models::OverheadField;
///
/// let field: OverheadField = "break".parse().unwrap();
/// assert_eq!(field, OverheadField::Break);
/// assert_eq!(field.total_minutes_key(), "totalBreakMinutes");
/// assert_eq!(OverheadField::Travel.to_string(), "travel");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverheadField {
    /// Inter-site travel time.
    Travel,
    /// On-site break time.
    Break,
}

impl OverheadField {
    /// Returns the original overhead minutes for this kind, if recorded.
    pub fn original_minutes(self, record: &WorkRecord) -> Option<u32> {
        match self {
            OverheadField::Travel => record.travel_minutes,
            OverheadField::Break => record.break_minutes,
        }
    }

    /// Returns the minutes written by the last apply for this kind, if any.
    pub fn adjusted_minutes(self, record: &WorkRecord) -> Option<u32> {
        match self {
            OverheadField::Travel => record.adjusted_travel_minutes,
            OverheadField::Break => record.adjusted_break_minutes,
        }
    }

    /// Overwrites the adjusted minutes for this kind.
    pub fn set_adjusted_minutes(self, record: &mut WorkRecord, minutes: u32) {
        match self {
            OverheadField::Travel => record.adjusted_travel_minutes = Some(minutes),
            OverheadField::Break => record.adjusted_break_minutes = Some(minutes),
        }
    }

    /// JSON key for the day's pool total.
    pub fn total_minutes_key(self) -> &'static str {
        match self {
            OverheadField::Travel => "totalTravelMinutes",
            OverheadField::Break => "totalBreakMinutes",
        }
    }

    /// JSON key for an entry's original minutes.
    pub fn original_minutes_key(self) -> &'static str {
        match self {
            OverheadField::Travel => "originalTravelMinutes",
            OverheadField::Break => "originalBreakMinutes",
        }
    }

    /// JSON key for an entry's allocated minutes.
    pub fn allocated_minutes_key(self) -> &'static str {
        match self {
            OverheadField::Travel => "allocatedTravelMinutes",
            OverheadField::Break => "allocatedBreakMinutes",
        }
    }

    /// JSON key for an entry's zero-allocation flag.
    pub fn zero_allocation_key(self) -> &'static str {
        match self {
            OverheadField::Travel => "hasZeroTravel",
            OverheadField::Break => "hasZeroBreak",
        }
    }

    /// Human-readable noun used in warnings.
    pub fn label(self) -> &'static str {
        match self {
            OverheadField::Travel => "travel",
            OverheadField::Break => "break",
        }
    }
}

impl fmt::Display for OverheadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown overhead kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown overhead field '{0}', expected 'travel' or 'break'")]
pub struct ParseOverheadFieldError(pub String);

impl FromStr for OverheadField {
    type Err = ParseOverheadFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "travel" => Ok(OverheadField::Travel),
            "break" => Ok(OverheadField::Break),
            other => Err(ParseOverheadFieldError(other.to_string())),
        }
    }
}
