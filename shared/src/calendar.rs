//! Calendar arithmetic for recurring schedules and budget periods
//!
//! All functions are pure and timezone-free: they operate on `NaiveDate`
//! values supplied by the caller and never consult the system clock.
//!
//! # Design Principles
//!
//! 1. **Month-safe addition**: day-of-month clamps to shorter target
//!    months instead of rolling over (Jan 31 + 1 month lands in February)
//! 2. **Explicit errors**: out-of-range arithmetic and invalid anchors
//!    return `DomainError`, never a silently wrapped date
//! 3. **No "today"**: reference dates are always parameters

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::errors::DomainError;

/// True for Gregorian leap years.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month (1-12).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!((1..=12).contains(&month), "month out of range: {month}");
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Build a date from a year, month and *preferred* day, clamping the day
/// to the month's length (day 31 in February becomes the 28th/29th).
pub fn clamped_ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, DomainError> {
    if !(1..=12).contains(&month) {
        return Err(DomainError::InvalidArgument(format!(
            "month must be between 1 and 12, got {month}"
        )));
    }
    if !(1..=31).contains(&day) {
        return Err(DomainError::InvalidArgument(format!(
            "day must be between 1 and 31, got {day}"
        )));
    }

    let day = day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DomainError::OutOfRange(format!("{year}-{month:02}-{day:02}")))
}

/// Add `months` calendar months to `date`.
///
/// When the target month is shorter than `date`'s day-of-month, the result
/// clamps to the last day of the target month: Jan 31 + 1 month is Feb 29
/// in a leap year and Feb 28 otherwise, never March 3. Negative `months`
/// subtracts with the same clamping.
pub fn add_months(date: NaiveDate, months: i32) -> Result<NaiveDate, DomainError> {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };

    shifted.ok_or_else(|| DomainError::OutOfRange(format!("{date} {months:+} months")))
}

/// Add `years` calendar years to `date`.
///
/// Feb 29 clamps to Feb 28 when the target year is not a leap year.
pub fn add_years(date: NaiveDate, years: i32) -> Result<NaiveDate, DomainError> {
    let months = years
        .checked_mul(12)
        .ok_or_else(|| DomainError::OutOfRange(format!("{date} {years:+} years")))?;
    add_months(date, months)
}

/// The Monday-anchored week containing `date`, as `(monday, sunday)`.
///
/// Used for weekly budget periods and for deciding when a weekday scan has
/// crossed into the following week.
pub fn week_range(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let days_from_monday = date.weekday().num_days_from_monday() as i64;
    let monday = date - Duration::days(days_from_monday);
    (monday, monday + Duration::days(6))
}

/// The financial year containing `reference`, anchored at
/// `start_month`/`start_day`.
///
/// `start` is the most recent occurrence of the anchor on or before
/// `reference`; `end` is one year later minus a day. With an anchor of
/// Jan 1 this degenerates to the calendar year containing `reference`.
/// An anchor day beyond the anchor month's length clamps (Feb 30 → Feb 28).
pub fn financial_year_range(
    reference: NaiveDate,
    start_month: u32,
    start_day: u32,
) -> Result<(NaiveDate, NaiveDate), DomainError> {
    let this_year = clamped_ymd(reference.year(), start_month, start_day)?;
    let start = if this_year <= reference {
        this_year
    } else {
        clamped_ymd(reference.year() - 1, start_month, start_day)?
    };

    let end = add_years(start, 1)? - Duration::days(1);
    Ok((start, end))
}
