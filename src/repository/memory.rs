//! In-memory record repository.

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::models::WorkRecord;

use super::{RecordRepository, RecordUpdate, RepositoryError, RepositoryResult};

/// A [`RecordRepository`] held entirely in memory.
///
/// Records are returned in insertion order. Clones share the same storage,
/// so a clone handed to a service observes the service's writes.
///
/// # Example
///
/// ```
/// use overhead_allocation::models::WorkRecord;
/// use overhead_allocation::repository::{InMemoryRecordRepository, RecordRepository};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// # #[tokio::main]
/// # async fn main() {
/// let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let repo = InMemoryRecordRepository::new(vec![
///     WorkRecord::new("1", date, Decimal::from(2)).with_travel_minutes(30),
/// ]);
///
/// let records = repo.fetch_records_for_date(date).await.unwrap();
/// assert_eq!(records.len(), 1);
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordRepository {
    records: Arc<RwLock<Vec<WorkRecord>>>,
}

impl InMemoryRecordRepository {
    /// Creates a repository seeded with `records`.
    pub fn new(records: Vec<WorkRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Appends a record.
    pub async fn insert(&self, record: WorkRecord) {
        self.records.write().await.push(record);
    }

    /// Returns a copy of the record with the given ID.
    pub async fn get(&self, record_id: &str) -> Option<WorkRecord> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id == record_id)
            .cloned()
    }

    /// Returns a copy of every stored record.
    pub async fn all(&self) -> Vec<WorkRecord> {
        self.records.read().await.clone()
    }

    fn apply_update(record: &mut WorkRecord, update: &RecordUpdate) {
        update
            .field
            .set_adjusted_minutes(record, update.adjusted_minutes);
        record.billable_hours = update.billable_hours;
    }
}

impl RecordRepository for InMemoryRecordRepository {
    async fn fetch_records_for_date(&self, date: NaiveDate) -> RepositoryResult<Vec<WorkRecord>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.date == date)
            .cloned()
            .collect())
    }

    async fn update_record(&self, update: &RecordUpdate) -> RepositoryResult<()> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == update.record_id)
            .ok_or_else(|| RepositoryError::RecordNotFound {
                record_id: update.record_id.clone(),
            })?;

        Self::apply_update(record, update);
        Ok(())
    }

    /// Writes the whole batch under one lock, after checking every ID exists,
    /// so a day is either fully updated or untouched.
    async fn update_records(&self, updates: &[RecordUpdate]) -> RepositoryResult<usize> {
        let mut records = self.records.write().await;

        let mut positions = Vec::with_capacity(updates.len());
        for update in updates {
            let position = records
                .iter()
                .position(|r| r.id == update.record_id)
                .ok_or_else(|| RepositoryError::RecordNotFound {
                    record_id: update.record_id.clone(),
                })?;
            positions.push(position);
        }

        for (position, update) in positions.into_iter().zip(updates) {
            Self::apply_update(&mut records[position], update);
        }

        Ok(updates.len())
    }
}
