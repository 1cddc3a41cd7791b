//! Per-client allocation totals.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals for one client across the entries of a day or a range.
///
/// `dates` is only populated at range scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    /// Number of entries for this client.
    pub activities_count: usize,
    /// Sum of new minus original billable hours.
    pub total_billable_hour_change: Decimal,
    /// Sum of allocated minus original overhead minutes.
    pub total_minute_change: i64,
    /// Sum of hours worked, the billable hours before allocation.
    pub original_billable_hours: Decimal,
    /// Sum of billable hours after allocation.
    pub new_billable_hours: Decimal,
    /// Distinct days this client appears on.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub dates: BTreeSet<NaiveDate>,
}
