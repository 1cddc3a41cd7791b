//! Record storage seam for the Overhead Allocation Engine.
//!
//! The engine never talks to a database directly. It reads one day's records
//! and writes allocation results back through [`RecordRepository`]; the
//! persistence technology behind it is the embedder's choice.

mod memory;

use std::future::Future;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{OverheadField, WorkRecord};

pub use memory::InMemoryRecordRepository;

/// Errors raised by a record repository.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// An update targeted a record that does not exist.
    #[error("Storage error: record '{record_id}' not found")]
    RecordNotFound {
        /// The missing record's ID.
        record_id: String,
    },

    /// The backing store failed.
    #[error("Storage error: {message}")]
    Backend {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return RepositoryError.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// The values apply writes back to one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordUpdate {
    /// The record to update.
    pub record_id: String,
    /// Which adjusted-minutes field to overwrite.
    pub field: OverheadField,
    /// The record's share of the day's pool.
    pub adjusted_minutes: u32,
    /// The recomputed billable hours.
    pub billable_hours: Decimal,
}

/// Access to stored work records.
///
/// Implementations must return a date's records in a stable order, and an
/// empty list (not an error) for a day without records.
pub trait RecordRepository: Send + Sync {
    /// Fetches every record dated `date`.
    fn fetch_records_for_date(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = RepositoryResult<Vec<WorkRecord>>> + Send;

    /// Writes one record's allocation.
    fn update_record(
        &self,
        update: &RecordUpdate,
    ) -> impl Future<Output = RepositoryResult<()>> + Send;

    /// Writes one day's allocations and returns how many records were written.
    ///
    /// The default issues one `update_record` per entry and stops at the
    /// first failure, so the error is returned with earlier writes left in
    /// place. Stores that can update several rows atomically should override
    /// this.
    fn update_records(
        &self,
        updates: &[RecordUpdate],
    ) -> impl Future<Output = RepositoryResult<usize>> + Send {
        async move {
            let mut written = 0;
            for update in updates {
                self.update_record(update).await?;
                written += 1;
            }
            Ok(written)
        }
    }
}
