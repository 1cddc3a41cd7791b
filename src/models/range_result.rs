//! Date-range allocation result models.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ClientSummary, DayAllocationResult, OverheadField};

/// Aggregate totals across every day of a range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeSummary {
    /// Calendar days in the range, inclusive of both ends.
    pub total_days: u32,
    /// Sum of each included day's overhead pool.
    pub total_overhead_minutes: u64,
    /// Sum of each included day's hours worked.
    pub total_work_hours: Decimal,
    /// Number of entries across all included days.
    pub total_allocations: usize,
    /// Included days that raised at least one warning.
    pub days_with_warnings: u32,
    /// Days with no records; these are left out of `day_results`.
    pub days_with_no_data: u32,
}

/// The result of allocating every day in a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeAllocationResult {
    /// First day of the range.
    pub start_date: NaiveDate,
    /// Last day of the range.
    pub end_date: NaiveDate,
    /// The overhead kind allocated.
    pub field: OverheadField,
    /// Per-day results in date order; days without records are omitted.
    pub day_results: Vec<DayAllocationResult>,
    /// Aggregate totals.
    pub summary: RangeSummary,
    /// Per-client totals across the whole range.
    pub client_summary: BTreeMap<String, ClientSummary>,
    /// Sum of billable-hour changes across every included day.
    pub total_billable_hour_change: Decimal,
    /// Records written across the range; zero for a preview.
    pub updated_record_count: usize,
}

impl RangeAllocationResult {
    /// Creates an empty result for the given range.
    pub fn empty(start_date: NaiveDate, end_date: NaiveDate, field: OverheadField) -> Self {
        Self {
            start_date,
            end_date,
            field,
            day_results: Vec::new(),
            summary: RangeSummary::default(),
            client_summary: BTreeMap::new(),
            total_billable_hour_change: Decimal::ZERO,
            updated_record_count: 0,
        }
    }
}
