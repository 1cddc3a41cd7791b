//! Overhead allocation for the Overhead Allocation Engine.
//!
//! This module contains the largest-remainder apportionment, billable-hour
//! rounding, the single-day computation, per-client aggregation, date-range
//! orchestration and the [`AllocationService`] that ties them to a
//! [`crate::repository::RecordRepository`].

mod billing;
mod computer;
mod largest_remainder;
mod persist;
mod range;
mod service;
mod summary;

pub use billing::{round_billable_hours, round_to_increment};
pub use computer::compute;
pub use largest_remainder::apportion_largest_remainder;
pub use persist::record_updates;
pub use range::{AllocationMode, DateRangeOrchestrator};
pub use service::AllocationService;
pub use summary::ClientSummaryAggregator;
