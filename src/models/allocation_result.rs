//! Allocation result models.
//!
//! This module contains [`AllocationEntry`], the per-record output of one
//! allocation, and [`DayAllocationResult`], the complete result for a single
//! calendar day. Both are rebuilt on every request and never persisted.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ClientSummary, OverheadField};

/// The allocation computed for one work record.
///
/// # Example
///
/// ```
/// use overhead_allocation::models::AllocationEntry;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let entry = AllocationEntry {
///     record_id: "101".to_string(),
///     client_name: Some("Hawthorne Residence".to_string()),
///     hours_worked: Decimal::from(2),
///     original_minutes: 30,
///     allocated_minutes: 30,
///     original_billable_hours: Decimal::from(2),
///     new_billable_hours: Decimal::from_str("2.5").unwrap(),
///     has_zero_allocation: false,
/// };
/// assert_eq!(entry.minute_change(), 0);
/// assert_eq!(entry.billable_hour_change(), Decimal::from_str("0.5").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationEntry {
    /// The ID of the record this entry was computed for.
    pub record_id: String,
    /// The record's client, if any.
    pub client_name: Option<String>,
    /// The record's hours worked (its allocation weight).
    pub hours_worked: Decimal,
    /// Overhead minutes originally recorded against the record (absent counts as zero).
    pub original_minutes: u32,
    /// The record's share of the day's pool, in whole minutes.
    pub allocated_minutes: u32,
    /// Billable hours before any overhead is added, which is the hours worked.
    pub original_billable_hours: Decimal,
    /// Billable hours after adding the allocated minutes, rounded to the billing increment.
    pub new_billable_hours: Decimal,
    /// True when this record's share is zero, for any reason.
    pub has_zero_allocation: bool,
}

impl AllocationEntry {
    /// Allocated minus original minutes.
    pub fn minute_change(&self) -> i64 {
        i64::from(self.allocated_minutes) - i64::from(self.original_minutes)
    }

    /// New minus original billable hours.
    pub fn billable_hour_change(&self) -> Decimal {
        self.new_billable_hours - self.original_billable_hours
    }
}

/// The result of allocating one day's overhead pool.
///
/// `total_overhead_minutes` and `total_work_hours` are the sums over the
/// day's records. Entries mirror the order the records were supplied in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAllocationResult {
    /// The calendar day allocated.
    pub date: NaiveDate,
    /// The overhead kind allocated.
    pub field: OverheadField,
    /// Sum of original overhead minutes for the day (the pool).
    pub total_overhead_minutes: u32,
    /// Sum of hours worked for the day.
    pub total_work_hours: Decimal,
    /// One entry per record, in input order.
    pub entries: Vec<AllocationEntry>,
    /// Records written by apply; always zero for a preview.
    pub updated_record_count: usize,
    /// Non-fatal conditions found while allocating.
    pub warnings: Vec<String>,
    /// Per-client totals for the day.
    pub client_summary: BTreeMap<String, ClientSummary>,
    /// Sum of billable-hour changes across every entry.
    pub total_billable_hour_change: Decimal,
}

impl DayAllocationResult {
    /// Sum of allocated minutes across entries.
    pub fn total_allocated_minutes(&self) -> u32 {
        self.entries.iter().map(|e| e.allocated_minutes).sum()
    }

    /// Returns true if any warning was raised for the day.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
