//! Date-range allocation.
//!
//! This module walks a date range one calendar day at a time, allocates each
//! day that has records, and folds the per-day results into range totals.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::AllocationConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{OverheadField, RangeAllocationResult};
use crate::repository::RecordRepository;

use super::computer::compute;
use super::persist::write_day;
use super::summary::ClientSummaryAggregator;

/// Whether a run only computes or also writes results back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationMode {
    /// Compute only; storage is never written.
    Preview,
    /// Compute and persist each day before moving to the next.
    Apply,
}

/// Allocates every day in a range against a repository.
///
/// Days are processed in order, one at a time. In apply mode each day is
/// written before the next is fetched, so stopping part-way (an error or a
/// dropped future) leaves the days already written in place.
pub struct DateRangeOrchestrator<'a, R> {
    repository: &'a R,
    config: &'a AllocationConfig,
}

impl<'a, R: RecordRepository> DateRangeOrchestrator<'a, R> {
    /// Creates an orchestrator over `repository`.
    pub fn new(repository: &'a R, config: &'a AllocationConfig) -> Self {
        Self { repository, config }
    }

    /// Allocates every day from `start_date` to `end_date` inclusive.
    ///
    /// Days with no records count toward `days_with_no_data` and are left
    /// out of `day_results`. Days with records but no overhead minutes are
    /// included, with their warning.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidDateRange`] if `start_date` is after `end_date`
    /// - [`EngineError::RangeTooLong`] if the range exceeds `max_range_days`
    /// - Any computation or storage error from a single day, unchanged
    pub async fn compute_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        field: OverheadField,
        mode: AllocationMode,
    ) -> EngineResult<RangeAllocationResult> {
        self.validate_range(start_date, end_date)?;

        let mut result = RangeAllocationResult::empty(start_date, end_date, field);
        let mut clients = ClientSummaryAggregator::for_range();

        for date in start_date.iter_days().take_while(|d| *d <= end_date) {
            result.summary.total_days += 1;

            let records = self.repository.fetch_records_for_date(date).await?;
            if records.is_empty() {
                debug!(%date, "No records, skipping day");
                result.summary.days_with_no_data += 1;
                continue;
            }

            let mut day = compute(date, &records, field, self.config)?;

            if mode == AllocationMode::Apply {
                day.updated_record_count = write_day(self.repository, &day).await?;
                result.updated_record_count += day.updated_record_count;
            }

            debug!(
                %date,
                pool_minutes = day.total_overhead_minutes,
                entries = day.entries.len(),
                warnings = day.warnings.len(),
                "Allocated day"
            );

            result.summary.total_overhead_minutes += u64::from(day.total_overhead_minutes);
            result.summary.total_work_hours += day.total_work_hours;
            result.summary.total_allocations += day.entries.len();
            if day.has_warnings() {
                result.summary.days_with_warnings += 1;
            }
            result.total_billable_hour_change += day.total_billable_hour_change;
            clients.add_day(&day);

            result.day_results.push(day);
        }

        result.client_summary = clients.finish();
        Ok(result)
    }

    fn validate_range(&self, start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<()> {
        if start_date > end_date {
            return Err(EngineError::InvalidDateRange {
                start_date,
                end_date,
            });
        }

        let days = (end_date - start_date).num_days() + 1;
        if days > i64::from(self.config.max_range_days) {
            return Err(EngineError::RangeTooLong {
                days: u32::try_from(days).unwrap_or(u32::MAX),
                max_days: self.config.max_range_days,
            });
        }

        Ok(())
    }
}
