//! Error types for the Overhead Allocation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while allocating overhead time.
//! Empty overhead pools and zero-hour days are not errors; they are reported
//! as warnings on the allocation result.

use chrono::NaiveDate;
use thiserror::Error;

use crate::repository::RepositoryError;

/// The main error type for the Overhead Allocation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use overhead_allocation::error::EngineError;
/// use chrono::NaiveDate;
///
/// let error = EngineError::InvalidDateRange {
///     start_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Validation error: start date 2025-03-10 is after end date 2025-03-01"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Records passed to a single-day computation span more than one date.
    #[error("Validation error: mixed dates, record '{record_id}' is dated {found} but expected {expected}")]
    MixedDates {
        /// The date the computation was asked to allocate.
        expected: NaiveDate,
        /// The date carried by the offending record.
        found: NaiveDate,
        /// The ID of the offending record.
        record_id: String,
    },

    /// A date range whose start falls after its end.
    #[error("Validation error: start date {start_date} is after end date {end_date}")]
    InvalidDateRange {
        /// The requested start date.
        start_date: NaiveDate,
        /// The requested end date.
        end_date: NaiveDate,
    },

    /// A date range longer than the configured maximum.
    #[error("Validation error: range of {days} days exceeds the maximum of {max_days}")]
    RangeTooLong {
        /// The number of days requested.
        days: u32,
        /// The configured maximum.
        max_days: u32,
    },

    /// A work record carried values the engine cannot allocate against.
    #[error("Invalid record '{record_id}': {message}")]
    InvalidRecord {
        /// The ID of the invalid record.
        record_id: String,
        /// A description of what made the record invalid.
        message: String,
    },

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

    /// Configuration parsed but holds an unusable value.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of the problem.
        message: String,
    },

    /// The record repository failed to read or write.
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

impl EngineError {
    /// Returns true for errors caused by the caller's input rather than
    /// by storage or configuration.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EngineError::MixedDates { .. }
                | EngineError::InvalidDateRange { .. }
                | EngineError::RangeTooLong { .. }
                | EngineError::InvalidRecord { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
