//! The allocation entry point used by callers.
//!
//! [`AllocationService`] owns a repository and a configuration, and exposes
//! the four operations a caller needs: preview or apply, for one day or a
//! date range.

use std::time::Instant;

use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::AllocationConfig;
use crate::error::EngineResult;
use crate::models::{DayAllocationResult, OverheadField, RangeAllocationResult};
use crate::repository::RecordRepository;

use super::computer::compute;
use super::persist::write_day;
use super::range::{AllocationMode, DateRangeOrchestrator};

/// Previews and applies overhead allocations against a record repository.
///
/// # Example
///
/// ```
/// use overhead_allocation::allocation::AllocationService;
/// use overhead_allocation::config::AllocationConfig;
/// use overhead_allocation::models::{OverheadField, WorkRecord};
/// use overhead_allocation::repository::InMemoryRecordRepository;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// # #[tokio::main]
/// # async fn main() {
/// let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let repo = InMemoryRecordRepository::new(vec![
///     WorkRecord::new("A", date, Decimal::from(2)).with_travel_minutes(30),
///     WorkRecord::new("B", date, Decimal::from(6)).with_travel_minutes(45),
/// ]);
/// let service = AllocationService::new(repo, AllocationConfig::default());
///
/// let preview = service.preview(date, OverheadField::Travel).await.unwrap();
/// assert_eq!(preview.updated_record_count, 0);
///
/// let applied = service.apply(date, OverheadField::Travel).await.unwrap();
/// assert_eq!(applied.updated_record_count, 2);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AllocationService<R> {
    repository: R,
    config: AllocationConfig,
}

impl<R: RecordRepository> AllocationService<R> {
    /// Creates a service over `repository`.
    pub fn new(repository: R, config: AllocationConfig) -> Self {
        Self { repository, config }
    }

    /// Returns the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    /// Computes one day's allocation without writing anything.
    pub async fn preview(
        &self,
        date: NaiveDate,
        field: OverheadField,
    ) -> EngineResult<DayAllocationResult> {
        self.run_day(date, field, AllocationMode::Preview).await
    }

    /// Computes one day's allocation and writes it back.
    ///
    /// Applying the same day twice writes the same values both times.
    pub async fn apply(
        &self,
        date: NaiveDate,
        field: OverheadField,
    ) -> EngineResult<DayAllocationResult> {
        self.run_day(date, field, AllocationMode::Apply).await
    }

    /// Computes every day of a range without writing anything.
    pub async fn preview_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        field: OverheadField,
    ) -> EngineResult<RangeAllocationResult> {
        self.run_range(start_date, end_date, field, AllocationMode::Preview)
            .await
    }

    /// Computes and writes every day of a range, one day at a time.
    pub async fn apply_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        field: OverheadField,
    ) -> EngineResult<RangeAllocationResult> {
        self.run_range(start_date, end_date, field, AllocationMode::Apply)
            .await
    }

    async fn run_day(
        &self,
        date: NaiveDate,
        field: OverheadField,
        mode: AllocationMode,
    ) -> EngineResult<DayAllocationResult> {
        let correlation_id = Uuid::new_v4();
        info!(
            correlation_id = %correlation_id,
            %date,
            %field,
            ?mode,
            "Processing allocation request"
        );

        let start_time = Instant::now();
        let outcome = self.allocate_day(date, field, mode).await;

        match &outcome {
            Ok(day) => {
                for warning in &day.warnings {
                    warn!(correlation_id = %correlation_id, %date, warning = %warning, "Allocation warning");
                }
                info!(
                    correlation_id = %correlation_id,
                    pool_minutes = day.total_overhead_minutes,
                    records = day.entries.len(),
                    updated = day.updated_record_count,
                    billable_change = %day.total_billable_hour_change,
                    duration_us = start_time.elapsed().as_micros(),
                    "Allocation completed successfully"
                );
            }
            Err(err) => {
                warn!(correlation_id = %correlation_id, error = %err, "Allocation failed");
            }
        }

        outcome
    }

    async fn allocate_day(
        &self,
        date: NaiveDate,
        field: OverheadField,
        mode: AllocationMode,
    ) -> EngineResult<DayAllocationResult> {
        let records = self.repository.fetch_records_for_date(date).await?;
        let mut day = compute(date, &records, field, &self.config)?;
        if mode == AllocationMode::Apply {
            day.updated_record_count = write_day(&self.repository, &day).await?;
        }
        Ok(day)
    }

    async fn run_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        field: OverheadField,
        mode: AllocationMode,
    ) -> EngineResult<RangeAllocationResult> {
        let correlation_id = Uuid::new_v4();
        info!(
            correlation_id = %correlation_id,
            %start_date,
            %end_date,
            %field,
            ?mode,
            "Processing range allocation request"
        );

        let start_time = Instant::now();
        let outcome = DateRangeOrchestrator::new(&self.repository, &self.config)
            .compute_range(start_date, end_date, field, mode)
            .await;

        match &outcome {
            Ok(result) => info!(
                correlation_id = %correlation_id,
                days = result.summary.total_days,
                days_with_no_data = result.summary.days_with_no_data,
                days_with_warnings = result.summary.days_with_warnings,
                updated = result.updated_record_count,
                duration_us = start_time.elapsed().as_micros(),
                "Range allocation completed successfully"
            ),
            Err(err) => {
                warn!(correlation_id = %correlation_id, error = %err, "Range allocation failed");
            }
        }

        outcome
    }
}
