//! Yearly payment-date consistency check.
//!
//! Multi-year policies repeat each installment on (roughly) the same calendar
//! date every year. Before a schedule edit is persisted, the rows sharing an
//! installment number are walked in year order and each row's due date is
//! compared against the previous row's date advanced by the year gap. Dates
//! drifting more than [`DRIFT_TOLERANCE_DAYS`] produce a warning; the caller
//! decides whether to proceed with the save.

use crate::domain::model::{
    GroupWarning, Inconsistency, PaymentRow, PaymentRowDraft, ValidationOutcome,
};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Flat allowance for leap-year and month-length drift when advancing a date
/// by whole calendar years. Applies regardless of the year gap magnitude.
pub const DRIFT_TOLERANCE_DAYS: i64 = 3;

/// Checks a policy's working row set for yearly-recurrence deviations.
///
/// Pure and total: drafts with missing fields are excluded rather than
/// errored, groups with fewer than two eligible rows are skipped, and no
/// input (duplicate years, decreasing years, extreme dates) panics.
pub fn validate(rows: &[PaymentRowDraft]) -> ValidationOutcome {
    let mut groups: BTreeMap<u32, Vec<PaymentRow>> = BTreeMap::new();
    for row in rows.iter().filter_map(PaymentRowDraft::eligible) {
        groups.entry(row.installment_number).or_default().push(row);
    }

    let mut warnings = Vec::new();
    for (installment_number, mut group) in groups {
        // A single data point never conflicts with anything.
        if group.len() < 2 {
            continue;
        }
        // Stable sort: duplicate year numbers keep their input order.
        group.sort_by_key(|row| row.year_number);

        let inconsistencies: Vec<Inconsistency> = group
            .windows(2)
            .filter_map(|pair| check_pair(&pair[0], &pair[1]))
            .collect();

        if !inconsistencies.is_empty() {
            warnings.push(GroupWarning {
                installment_number,
                inconsistencies,
            });
        }
    }

    if warnings.is_empty() {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::Invalid(warnings)
    }
}

/// Compares a row against its predecessor in the sorted group.
///
/// The baseline is the predecessor's *actual* date, not a fitted trend, so a
/// bad entry shifts the expectation for the row after it. That chaining is
/// the rule as shipped in the admin form.
fn check_pair(prev: &PaymentRow, current: &PaymentRow) -> Option<Inconsistency> {
    let gap = current.year_number - prev.year_number;
    let expected_date = shift_whole_years(prev.due_date, gap);
    let days_off = (current.due_date - expected_date).num_days().abs();

    if days_off <= DRIFT_TOLERANCE_DAYS {
        return None;
    }
    Some(Inconsistency {
        year_number: current.year_number,
        actual_date: current.due_date,
        expected_date,
        compared_to_year: prev.year_number,
        compared_to_date: prev.due_date,
        days_off,
    })
}

/// Advances a date by a signed number of calendar years.
///
/// Feb 29 landing in a non-leap year rolls over to Mar 1, matching the
/// date-overflow behavior the original form script relied on. Years pushed
/// outside chrono's representable range leave the date unchanged, which at
/// worst produces an oversized warning rather than a panic.
fn shift_whole_years(date: NaiveDate, years: i32) -> NaiveDate {
    let target = date.year().saturating_add(years);
    date.with_year(target)
        .or_else(|| NaiveDate::from_ymd_opt(target, 3, 1))
        .unwrap_or(date)
}
