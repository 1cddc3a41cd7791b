//! JSON views of allocation results.
//!
//! The HTTP-facing layer exposes results under field names that depend on the
//! overhead kind (`totalTravelMinutes` or `totalBreakMinutes`, and so on), with
//! hour values as JSON numbers. These views borrow a result and serialize it
//! in that shape; the domain models keep their own kind-neutral serde form.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::models::{
    AllocationEntry, ClientSummary, DayAllocationResult, OverheadField, RangeAllocationResult,
};

/// A decimal written as a JSON number.
struct Number(Decimal);

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

struct EntryView<'a> {
    entry: &'a AllocationEntry,
    field: OverheadField,
}

impl Serialize for EntryView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entry = self.entry;
        let mut state = serializer.serialize_struct("Allocation", 7)?;
        state.serialize_field("workActivityId", &entry.record_id)?;
        state.serialize_field("clientName", &entry.client_name)?;
        state.serialize_field("hoursWorked", &Number(entry.hours_worked))?;
        state.serialize_field(self.field.original_minutes_key(), &entry.original_minutes)?;
        state.serialize_field(self.field.allocated_minutes_key(), &entry.allocated_minutes)?;
        state.serialize_field("newBillableHours", &Number(entry.new_billable_hours))?;
        state.serialize_field(self.field.zero_allocation_key(), &entry.has_zero_allocation)?;
        state.end()
    }
}

struct Entries<'a> {
    entries: &'a [AllocationEntry],
    field: OverheadField,
}

impl Serialize for Entries<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.iter().map(|entry| EntryView {
            entry,
            field: self.field,
        }))
    }
}

struct ClientSummaryView<'a>(&'a ClientSummary);

impl Serialize for ClientSummaryView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let summary = self.0;
        let mut state = serializer.serialize_struct("ClientSummary", 6)?;
        state.serialize_field("activitiesCount", &summary.activities_count)?;
        state.serialize_field(
            "totalBillableHourChange",
            &Number(summary.total_billable_hour_change),
        )?;
        state.serialize_field("totalMinuteChange", &summary.total_minute_change)?;
        state.serialize_field(
            "originalBillableHours",
            &Number(summary.original_billable_hours),
        )?;
        state.serialize_field("newBillableHours", &Number(summary.new_billable_hours))?;
        if summary.dates.is_empty() {
            state.skip_field("dates")?;
        } else {
            state.serialize_field("dates", &summary.dates)?;
        }
        state.end()
    }
}

struct ClientSummaries<'a>(&'a BTreeMap<String, ClientSummary>);

impl Serialize for ClientSummaries<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.0
                .iter()
                .map(|(client, summary)| (client, ClientSummaryView(summary))),
        )
    }
}

/// A single day's result in its JSON contract shape.
///
/// # Example
///
/// ```
/// use overhead_allocation::allocation::compute;
/// use overhead_allocation::api::DayAllocationView;
/// use overhead_allocation::config::AllocationConfig;
/// use overhead_allocation::models::{OverheadField, WorkRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let records = vec![WorkRecord::new("A", date, Decimal::from(2)).with_break_minutes(30)];
/// let day = compute(date, &records, OverheadField::Break, &AllocationConfig::default()).unwrap();
///
/// let json = serde_json::to_value(DayAllocationView(&day)).unwrap();
/// assert_eq!(json["totalBreakMinutes"], 30);
/// assert_eq!(json["allocations"][0]["allocatedBreakMinutes"], 30);
/// assert_eq!(json["allocations"][0]["newBillableHours"], 2.5);
/// ```
pub struct DayAllocationView<'a>(pub &'a DayAllocationResult);

impl Serialize for DayAllocationView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let day = self.0;
        let mut state = serializer.serialize_struct("DayAllocation", 8)?;
        state.serialize_field("date", &day.date)?;
        state.serialize_field(day.field.total_minutes_key(), &day.total_overhead_minutes)?;
        state.serialize_field("totalWorkHours", &Number(day.total_work_hours))?;
        state.serialize_field(
            "allocations",
            &Entries {
                entries: &day.entries,
                field: day.field,
            },
        )?;
        state.serialize_field("updatedActivities", &day.updated_record_count)?;
        state.serialize_field("warnings", &day.warnings)?;
        state.serialize_field("clientSummary", &ClientSummaries(&day.client_summary))?;
        state.serialize_field(
            "totalBillableHourChange",
            &Number(day.total_billable_hour_change),
        )?;
        state.end()
    }
}

struct OverallSummaryView<'a>(&'a RangeAllocationResult);

impl Serialize for OverallSummaryView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let summary = &self.0.summary;
        let mut state = serializer.serialize_struct("OverallSummary", 6)?;
        state.serialize_field("totalDays", &summary.total_days)?;
        state.serialize_field(
            self.0.field.total_minutes_key(),
            &summary.total_overhead_minutes,
        )?;
        state.serialize_field("totalWorkHours", &Number(summary.total_work_hours))?;
        state.serialize_field("totalAllocations", &summary.total_allocations)?;
        state.serialize_field("daysWithWarnings", &summary.days_with_warnings)?;
        state.serialize_field("daysWithNoData", &summary.days_with_no_data)?;
        state.end()
    }
}

/// A date-range result in its JSON contract shape.
pub struct RangeAllocationView<'a>(pub &'a RangeAllocationResult);

impl Serialize for RangeAllocationView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let range = self.0;
        let mut state = serializer.serialize_struct("RangeAllocation", 7)?;
        state.serialize_field("startDate", &range.start_date)?;
        state.serialize_field("endDate", &range.end_date)?;
        state.serialize_field(
            "dateResults",
            &range
                .day_results
                .iter()
                .map(DayAllocationView)
                .collect::<Vec<_>>(),
        )?;
        state.serialize_field("overallSummary", &OverallSummaryView(range))?;
        state.serialize_field("clientSummary", &ClientSummaries(&range.client_summary))?;
        state.serialize_field(
            "totalBillableHourChange",
            &Number(range.total_billable_hour_change),
        )?;
        state.serialize_field("updatedActivities", &range.updated_record_count)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RangeSummary;
    use chrono::NaiveDate;
    use serde_json::json;
    use std::collections::BTreeSet;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn travel_day() -> DayAllocationResult {
        let entry = AllocationEntry {
            record_id: "A".to_string(),
            client_name: Some("Hawthorne".to_string()),
            hours_worked: dec("2"),
            original_minutes: 30,
            allocated_minutes: 19,
            original_billable_hours: dec("2"),
            new_billable_hours: dec("2.25"),
            has_zero_allocation: false,
        };
        let mut client_summary = BTreeMap::new();
        client_summary.insert(
            "Hawthorne".to_string(),
            ClientSummary {
                activities_count: 1,
                total_billable_hour_change: dec("0.25"),
                total_minute_change: -11,
                original_billable_hours: dec("2"),
                new_billable_hours: dec("2.25"),
                dates: BTreeSet::new(),
            },
        );

        DayAllocationResult {
            date: make_date("2025-03-10"),
            field: OverheadField::Travel,
            total_overhead_minutes: 19,
            total_work_hours: dec("2"),
            entries: vec![entry],
            updated_record_count: 1,
            warnings: vec![],
            client_summary,
            total_billable_hour_change: dec("0.25"),
        }
    }

    #[test]
    fn test_day_view_uses_kind_specific_keys() {
        let json = serde_json::to_value(DayAllocationView(&travel_day())).unwrap();

        assert_eq!(json["date"], "2025-03-10");
        assert_eq!(json["totalTravelMinutes"], 19);
        assert_eq!(json["totalWorkHours"], 2.0);
        assert_eq!(json["updatedActivities"], 1);
        assert_eq!(json["totalBillableHourChange"], 0.25);
        assert!(json.get("totalBreakMinutes").is_none());

        assert_eq!(
            json["allocations"][0],
            json!({
                "workActivityId": "A",
                "clientName": "Hawthorne",
                "hoursWorked": 2.0,
                "originalTravelMinutes": 30,
                "allocatedTravelMinutes": 19,
                "newBillableHours": 2.25,
                "hasZeroTravel": false
            })
        );
    }

    #[test]
    fn test_break_day_uses_break_keys() {
        let mut day = travel_day();
        day.field = OverheadField::Break;
        let json = serde_json::to_value(DayAllocationView(&day)).unwrap();

        assert_eq!(json["totalBreakMinutes"], 19);
        assert_eq!(json["allocations"][0]["allocatedBreakMinutes"], 19);
        assert_eq!(json["allocations"][0]["hasZeroBreak"], false);
        assert!(json["allocations"][0].get("allocatedTravelMinutes").is_none());
    }

    #[test]
    fn test_client_summary_keyed_by_name() {
        let json = serde_json::to_value(DayAllocationView(&travel_day())).unwrap();
        let hawthorne = &json["clientSummary"]["Hawthorne"];

        assert_eq!(hawthorne["activitiesCount"], 1);
        assert_eq!(hawthorne["totalMinuteChange"], -11);
        assert_eq!(hawthorne["newBillableHours"], 2.25);
        assert!(hawthorne.get("dates").is_none());
    }

    #[test]
    fn test_range_view_shape() {
        let mut client_summary = travel_day().client_summary;
        if let Some(summary) = client_summary.get_mut("Hawthorne") {
            summary.dates.insert(make_date("2025-03-10"));
        }
        let range = RangeAllocationResult {
            start_date: make_date("2025-03-10"),
            end_date: make_date("2025-03-12"),
            field: OverheadField::Travel,
            day_results: vec![travel_day()],
            summary: RangeSummary {
                total_days: 3,
                total_overhead_minutes: 19,
                total_work_hours: dec("2"),
                total_allocations: 1,
                days_with_warnings: 0,
                days_with_no_data: 2,
            },
            client_summary,
            total_billable_hour_change: dec("0.25"),
            updated_record_count: 1,
        };

        let json = serde_json::to_value(RangeAllocationView(&range)).unwrap();

        assert_eq!(json["startDate"], "2025-03-10");
        assert_eq!(json["endDate"], "2025-03-12");
        assert_eq!(json["dateResults"].as_array().map(Vec::len), Some(1));
        assert_eq!(json["dateResults"][0]["totalTravelMinutes"], 19);
        assert_eq!(
            json["overallSummary"],
            json!({
                "totalDays": 3,
                "totalTravelMinutes": 19,
                "totalWorkHours": 2.0,
                "totalAllocations": 1,
                "daysWithWarnings": 0,
                "daysWithNoData": 2
            })
        );
        assert_eq!(
            json["clientSummary"]["Hawthorne"]["dates"],
            json!(["2025-03-10"])
        );
        assert_eq!(json["updatedActivities"], 1);
    }
}
