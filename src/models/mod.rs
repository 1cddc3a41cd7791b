//! Core data models for the Overhead Allocation Engine.
//!
//! This module contains the work record the engine reads and the derived,
//! read-only result types it produces.

mod allocation_result;
mod client_summary;
mod overhead;
mod range_result;
mod work_record;

pub use allocation_result::{AllocationEntry, DayAllocationResult};
pub use client_summary::ClientSummary;
pub use overhead::{OverheadField, ParseOverheadFieldError};
pub use range_result::{RangeAllocationResult, RangeSummary};
pub use work_record::WorkRecord;
