//! Work record model.
//!
//! This module defines the [`WorkRecord`] struct, the unit of work the
//! engine redistributes shared overhead time across.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single piece of billable work performed on a calendar day.
///
/// Records are created and edited outside the engine. Allocation only reads
/// `hours_worked` and the original overhead minutes, and on apply writes back
/// the adjusted minutes and `billable_hours`.
///
/// # Example
///
/// ```
/// use overhead_allocation::models::WorkRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = WorkRecord::new("101", NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(), Decimal::from(2))
///     .with_client("Hawthorne Residence")
///     .with_travel_minutes(30);
///
/// assert_eq!(record.billable_hours, Decimal::from(2));
/// assert_eq!(record.travel_minutes, Some(30));
/// assert!(record.adjusted_travel_minutes.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The calendar day the work was performed.
    pub date: NaiveDate,
    /// The client the work was performed for, if any.
    #[serde(default)]
    pub client_name: Option<String>,
    /// Hours worked; the allocation weight.
    pub hours_worked: Decimal,
    /// Hours currently billed for this record.
    pub billable_hours: Decimal,
    /// Travel minutes recorded against this record before allocation.
    #[serde(default)]
    pub travel_minutes: Option<u32>,
    /// Travel minutes written by the last apply.
    #[serde(default)]
    pub adjusted_travel_minutes: Option<u32>,
    /// Break minutes recorded against this record before allocation.
    #[serde(default)]
    pub break_minutes: Option<u32>,
    /// Break minutes written by the last apply.
    #[serde(default)]
    pub adjusted_break_minutes: Option<u32>,
}

impl WorkRecord {
    /// Creates a record with no client and no overhead time.
    ///
    /// Billable hours start equal to the hours worked.
    pub fn new(id: impl Into<String>, date: NaiveDate, hours_worked: Decimal) -> Self {
        Self {
            id: id.into(),
            date,
            client_name: None,
            hours_worked,
            billable_hours: hours_worked,
            travel_minutes: None,
            adjusted_travel_minutes: None,
            break_minutes: None,
            adjusted_break_minutes: None,
        }
    }

    /// Sets the client name.
    pub fn with_client(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = Some(client_name.into());
        self
    }

    /// Sets the original travel minutes.
    pub fn with_travel_minutes(mut self, minutes: u32) -> Self {
        self.travel_minutes = Some(minutes);
        self
    }

    /// Sets the original break minutes.
    pub fn with_break_minutes(mut self, minutes: u32) -> Self {
        self.break_minutes = Some(minutes);
        self
    }

    /// Sets the currently billed hours.
    pub fn with_billable_hours(mut self, billable_hours: Decimal) -> Self {
        self.billable_hours = billable_hours;
        self
    }
}
