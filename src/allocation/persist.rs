//! Writing a computed day back to the repository.

use crate::error::EngineResult;
use crate::models::DayAllocationResult;
use crate::repository::{RecordRepository, RecordUpdate};

/// Builds the per-record updates for a computed day.
pub fn record_updates(day: &DayAllocationResult) -> Vec<RecordUpdate> {
    day.entries
        .iter()
        .map(|entry| RecordUpdate {
            record_id: entry.record_id.clone(),
            field: day.field,
            adjusted_minutes: entry.allocated_minutes,
            billable_hours: entry.new_billable_hours,
        })
        .collect()
}

/// Writes every entry of `day` as one batch and returns the number of
/// records written.
///
/// Storage failures are returned unchanged. The count is capped at the
/// number of updates sent.
pub(crate) async fn write_day<R: RecordRepository>(
    repository: &R,
    day: &DayAllocationResult,
) -> EngineResult<usize> {
    let updates = record_updates(day);
    if updates.is_empty() {
        return Ok(0);
    }

    let written = repository.update_records(&updates).await?;
    Ok(written.min(updates.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::compute;
    use crate::config::AllocationConfig;
    use crate::models::{OverheadField, WorkRecord};
    use crate::repository::InMemoryRecordRepository;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_write_day_persists_every_entry() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let records = vec![
            WorkRecord::new("A", date, Decimal::from(2)).with_break_minutes(30),
            WorkRecord::new("B", date, Decimal::from(6)).with_break_minutes(45),
        ];
        let repo = InMemoryRecordRepository::new(records.clone());
        let day = compute(date, &records, OverheadField::Break, &AllocationConfig::default()).unwrap();

        let written = write_day(&repo, &day).await.unwrap();

        assert_eq!(written, 2);
        let a = repo.get("A").await.unwrap();
        assert_eq!(a.adjusted_break_minutes, Some(19));
        assert_eq!(a.adjusted_travel_minutes, None);
        assert_eq!(a.billable_hours, Decimal::new(225, 2));
    }

    #[tokio::test]
    async fn test_write_empty_day_writes_nothing() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let repo = InMemoryRecordRepository::default();
        let day = compute(date, &[], OverheadField::Travel, &AllocationConfig::default()).unwrap();

        assert_eq!(write_day(&repo, &day).await.unwrap(), 0);
    }
}
