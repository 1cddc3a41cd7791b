//! JSON surface for the Overhead Allocation Engine.
//!
//! This module provides the JSON shapes an HTTP-facing service returns for
//! allocation results and errors. Routing and request parsing belong to that
//! service.

mod response;
mod views;

pub use response::{ApiError, ApiErrorResponse, STATUS_BAD_REQUEST, STATUS_INTERNAL_SERVER_ERROR};
pub use views::{DayAllocationView, RangeAllocationView};
