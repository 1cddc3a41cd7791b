//! Single-day overhead allocation.
//!
//! This module redistributes one day's pool of travel or break minutes across
//! that day's work records in proportion to their hours worked, and
//! recomputes each record's billable hours. It is a pure function over the
//! supplied records; nothing here reads or writes storage.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::AllocationConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AllocationEntry, DayAllocationResult, OverheadField, WorkRecord};

use super::billing::round_billable_hours;
use super::largest_remainder::apportion_largest_remainder;
use super::summary::ClientSummaryAggregator;

/// Computes the allocation of one day's overhead pool.
///
/// # Arguments
///
/// * `date` - The day being allocated; every record must carry this date
/// * `records` - The day's work records, in the order entries should appear
/// * `field` - Which overhead kind (travel or break) to redistribute
/// * `config` - Billing increment and rounding rule for new billable hours
///
/// # Algorithm
///
/// 1. The pool is the sum of each record's original minutes (absent counts as zero).
/// 2. If the pool is empty, or the day has no hours worked, every record is
///    allocated zero minutes, billable hours are left at hours worked, and a
///    warning is recorded. Neither case is an error.
/// 3. Otherwise the pool is split by hours worked using the largest-remainder
///    method, so the allocated minutes always sum to the pool exactly.
/// 4. New billable hours are hours worked plus allocated minutes, rounded to
///    the billing increment.
/// 5. A record whose previously applied minutes differ from the new share is
///    flagged with a warning, since apply will overwrite it.
///
/// # Errors
///
/// Returns [`EngineError::MixedDates`] if any record is dated other than
/// `date`, and [`EngineError::InvalidRecord`] for negative hours or a pool
/// larger than `u32::MAX` minutes.
///
/// # Examples
///
/// ```
/// use overhead_allocation::allocation::compute;
/// use overhead_allocation::config::AllocationConfig;
/// use overhead_allocation::models::{OverheadField, WorkRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let records = vec![
///     WorkRecord::new("A", date, Decimal::from(2)).with_travel_minutes(30),
///     WorkRecord::new("B", date, Decimal::from(6)).with_travel_minutes(45),
/// ];
///
/// let result = compute(date, &records, OverheadField::Travel, &AllocationConfig::default()).unwrap();
///
/// assert_eq!(result.total_overhead_minutes, 75);
/// assert_eq!(result.entries[0].allocated_minutes, 19);
/// assert_eq!(result.entries[1].allocated_minutes, 56);
/// assert_eq!(result.entries[0].new_billable_hours, Decimal::from_str("2.25").unwrap());
/// assert_eq!(result.entries[1].new_billable_hours, Decimal::from(7));
/// ```
pub fn compute(
    date: NaiveDate,
    records: &[WorkRecord],
    field: OverheadField,
    config: &AllocationConfig,
) -> EngineResult<DayAllocationResult> {
    validate_records(date, records)?;

    let total_overhead_minutes = pool_minutes(records, field)?;
    let total_work_hours: Decimal = records.iter().map(|r| r.hours_worked).sum();

    let mut warnings = Vec::new();

    let (allocations, rebill) = if records.is_empty() {
        warnings.push(format!("no work records found for {}", date));
        (Vec::new(), false)
    } else if total_overhead_minutes == 0 {
        warnings.push(format!("no {} time recorded for {}", field, date));
        (vec![0; records.len()], false)
    } else if total_work_hours.is_zero() {
        warnings.push(format!(
            "{}: total work hours is zero, cannot allocate {} minutes",
            date, total_overhead_minutes
        ));
        (vec![0; records.len()], false)
    } else {
        let weights: Vec<Decimal> = records.iter().map(|r| r.hours_worked).collect();
        (
            apportion_largest_remainder(total_overhead_minutes, &weights),
            true,
        )
    };

    let mut entries = Vec::with_capacity(records.len());
    for (record, allocated_minutes) in records.iter().zip(allocations) {
        if let Some(previous) = field.adjusted_minutes(record) {
            if previous != allocated_minutes {
                warnings.push(format!(
                    "record {} already allocated; recomputation will overwrite on apply",
                    record.id
                ));
            }
        }

        let new_billable_hours = if rebill {
            round_billable_hours(record.hours_worked, allocated_minutes, config)
        } else {
            record.hours_worked
        };

        entries.push(AllocationEntry {
            record_id: record.id.clone(),
            client_name: record.client_name.clone(),
            hours_worked: record.hours_worked,
            original_minutes: field.original_minutes(record).unwrap_or(0),
            allocated_minutes,
            original_billable_hours: record.hours_worked,
            new_billable_hours,
            has_zero_allocation: allocated_minutes == 0,
        });
    }

    let client_summary = ClientSummaryAggregator::summarize(&entries);
    let total_billable_hour_change = entries.iter().map(|e| e.billable_hour_change()).sum();

    Ok(DayAllocationResult {
        date,
        field,
        total_overhead_minutes,
        total_work_hours,
        entries,
        updated_record_count: 0,
        warnings,
        client_summary,
        total_billable_hour_change,
    })
}

/// Sums the day's original minutes, rejecting a pool too large to hold.
fn pool_minutes(records: &[WorkRecord], field: OverheadField) -> EngineResult<u32> {
    let mut total: u32 = 0;
    for record in records {
        let minutes = field.original_minutes(record).unwrap_or(0);
        total = total
            .checked_add(minutes)
            .ok_or_else(|| EngineError::InvalidRecord {
                record_id: record.id.clone(),
                message: format!("{} minutes overflow the day's {} pool", minutes, field),
            })?;
    }
    Ok(total)
}

/// Checks that every record belongs to `date` and has non-negative hours.
fn validate_records(date: NaiveDate, records: &[WorkRecord]) -> EngineResult<()> {
    for record in records {
        if record.date != date {
            return Err(EngineError::MixedDates {
                expected: date,
                found: record.date,
                record_id: record.id.clone(),
            });
        }

        if record.hours_worked < Decimal::ZERO {
            return Err(EngineError::InvalidRecord {
                record_id: record.id.clone(),
                message: format!("hours worked {} is negative", record.hours_worked),
            });
        }

        if record.billable_hours < Decimal::ZERO {
            return Err(EngineError::InvalidRecord {
                record_id: record.id.clone(),
                message: format!("billable hours {} is negative", record.billable_hours),
            });
        }
    }

    Ok(())
}
