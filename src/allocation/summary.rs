//! Per-client aggregation of allocation entries.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{AllocationEntry, ClientSummary, DayAllocationResult};

/// Folds allocation entries into per-client totals.
///
/// Entries without a client name are skipped here; they still count toward
/// day and range totals, which are kept elsewhere. At range scope the
/// aggregator also records the distinct days each client appears on.
///
/// # Example
///
/// ```
/// use overhead_allocation::allocation::ClientSummaryAggregator;
/// use overhead_allocation::models::AllocationEntry;
/// use rust_decimal::Decimal;
///
/// let entry = AllocationEntry {
///     record_id: "1".to_string(),
///     client_name: Some("Hawthorne".to_string()),
///     hours_worked: Decimal::from(2),
///     original_minutes: 45,
///     allocated_minutes: 30,
///     original_billable_hours: Decimal::from(2),
///     new_billable_hours: Decimal::new(25, 1),
///     has_zero_allocation: false,
/// };
///
/// let summary = ClientSummaryAggregator::summarize(&[entry]);
/// assert_eq!(summary["Hawthorne"].activities_count, 1);
/// assert_eq!(summary["Hawthorne"].total_minute_change, -15);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientSummaryAggregator {
    clients: BTreeMap<String, ClientSummary>,
    track_dates: bool,
}

impl ClientSummaryAggregator {
    /// Creates an aggregator for a single day.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an aggregator for a date range, which tracks the days each
    /// client appears on.
    pub fn for_range() -> Self {
        Self {
            clients: BTreeMap::new(),
            track_dates: true,
        }
    }

    /// Summarizes one day's entries.
    pub fn summarize(entries: &[AllocationEntry]) -> BTreeMap<String, ClientSummary> {
        let mut aggregator = Self::new();
        for entry in entries {
            aggregator.add_entry(entry, None);
        }
        aggregator.finish()
    }

    /// Adds one entry. `date` is only recorded at range scope.
    pub fn add_entry(&mut self, entry: &AllocationEntry, date: Option<NaiveDate>) {
        let Some(client_name) = &entry.client_name else {
            return;
        };

        let summary = self.clients.entry(client_name.clone()).or_default();
        summary.activities_count += 1;
        summary.total_billable_hour_change += entry.billable_hour_change();
        summary.total_minute_change += entry.minute_change();
        summary.original_billable_hours += entry.original_billable_hours;
        summary.new_billable_hours += entry.new_billable_hours;

        if self.track_dates {
            if let Some(date) = date {
                summary.dates.insert(date);
            }
        }
    }

    /// Adds every entry of a day's result.
    pub fn add_day(&mut self, day: &DayAllocationResult) {
        for entry in &day.entries {
            self.add_entry(entry, Some(day.date));
        }
    }

    /// Returns the accumulated per-client totals.
    pub fn finish(self) -> BTreeMap<String, ClientSummary> {
        self.clients
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OverheadField;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn entry(client: Option<&str>, original: u32, allocated: u32, old: &str, new: &str) -> AllocationEntry {
        AllocationEntry {
            record_id: "x".to_string(),
            client_name: client.map(str::to_string),
            hours_worked: dec(old),
            original_minutes: original,
            allocated_minutes: allocated,
            original_billable_hours: dec(old),
            new_billable_hours: dec(new),
            has_zero_allocation: allocated == 0,
        }
    }

    fn day(date: &str, entries: Vec<AllocationEntry>) -> DayAllocationResult {
        DayAllocationResult {
            date: make_date(date),
            field: OverheadField::Travel,
            total_overhead_minutes: 0,
            total_work_hours: Decimal::ZERO,
            entries,
            updated_record_count: 0,
            warnings: vec![],
            client_summary: BTreeMap::new(),
            total_billable_hour_change: Decimal::ZERO,
        }
    }

    #[test]
    fn test_accumulates_per_client() {
        let entries = vec![
            entry(Some("Hawthorne"), 30, 19, "2", "2.25"),
            entry(Some("Hawthorne"), 45, 56, "6", "7"),
            entry(Some("Elm Street"), 0, 15, "3", "3.25"),
        ];
        let summary = ClientSummaryAggregator::summarize(&entries);

        let hawthorne = &summary["Hawthorne"];
        assert_eq!(hawthorne.activities_count, 2);
        assert_eq!(hawthorne.total_minute_change, 0);
        assert_eq!(hawthorne.total_billable_hour_change, dec("1.25"));
        assert_eq!(hawthorne.original_billable_hours, dec("8"));
        assert_eq!(hawthorne.new_billable_hours, dec("9.25"));
        assert!(hawthorne.dates.is_empty());

        let elm = &summary["Elm Street"];
        assert_eq!(elm.activities_count, 1);
        assert_eq!(elm.total_minute_change, 15);
    }

    #[test]
    fn test_entries_without_client_are_excluded() {
        let entries = vec![
            entry(None, 30, 30, "2", "2.5"),
            entry(Some("Hawthorne"), 0, 0, "1", "1"),
        ];
        let summary = ClientSummaryAggregator::summarize(&entries);

        assert_eq!(summary.len(), 1);
        assert!(summary.contains_key("Hawthorne"));
    }

    #[test]
    fn test_range_scope_tracks_distinct_dates() {
        let mut aggregator = ClientSummaryAggregator::for_range();
        aggregator.add_day(&day(
            "2025-03-10",
            vec![
                entry(Some("Hawthorne"), 30, 19, "2", "2.25"),
                entry(Some("Hawthorne"), 45, 56, "6", "7"),
            ],
        ));
        aggregator.add_day(&day(
            "2025-03-12",
            vec![entry(Some("Hawthorne"), 15, 15, "1", "1.25")],
        ));

        let summary = aggregator.finish();
        let hawthorne = &summary["Hawthorne"];
        assert_eq!(hawthorne.activities_count, 3);
        assert_eq!(
            hawthorne.dates.iter().copied().collect::<Vec<_>>(),
            vec![make_date("2025-03-10"), make_date("2025-03-12")]
        );
    }

    #[test]
    fn test_day_scope_ignores_dates() {
        let mut aggregator = ClientSummaryAggregator::new();
        aggregator.add_day(&day(
            "2025-03-10",
            vec![entry(Some("Hawthorne"), 30, 19, "2", "2.25")],
        ));

        assert!(aggregator.finish()["Hawthorne"].dates.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(ClientSummaryAggregator::summarize(&[]).is_empty());
    }
}
