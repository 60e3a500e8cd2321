//! Pocket-money schedule enumeration
//!
//! Payout dates are a pure function of the rule and the window end; the
//! caller decides the window, and the anchor date's weekday and
//! day-of-month are authoritative for the whole series.

use chrono::{Datelike, Duration, NaiveDate};
use homehub_shared::calendar::{add_months, clamped_ymd};
use homehub_shared::models::{Frequency, PocketMoneyRule};
use homehub_shared::DomainError;
use tracing::debug;
use validator::Validate;

use crate::error::ServiceResult;

/// Allowance schedule computations.
pub struct PocketMoneyService;

impl PocketMoneyService {
    /// All payout dates from the rule's start date through `window_end`,
    /// ascending. Empty when the start date is already past the window.
    pub fn payout_dates(
        rule: &PocketMoneyRule,
        window_end: NaiveDate,
    ) -> ServiceResult<Vec<NaiveDate>> {
        rule.validate()?;

        if rule.start_date > window_end {
            return Ok(Vec::new());
        }

        let dates = match rule.frequency {
            Frequency::Weekly => Self::fixed_step(rule.start_date, 7, window_end),
            Frequency::Fortnightly => Self::fixed_step(rule.start_date, 14, window_end),
            Frequency::Monthly => Self::monthly_series(rule, window_end)?,
            other => {
                return Err(DomainError::UnsupportedFrequency(format!(
                    "{other} is not a pocket-money frequency"
                ))
                .into())
            }
        };

        debug!(
            member_id = %rule.member_id,
            payouts = dates.len(),
            "enumerated pocket-money schedule"
        );
        Ok(dates)
    }

    /// Fixed-length steps anchored at `start`. The anchor itself is always
    /// the first payout; its weekday is never re-derived from a canonical
    /// day, and the step size keeps the series correct across year
    /// boundaries.
    fn fixed_step(start: NaiveDate, step_days: i64, window_end: NaiveDate) -> Vec<NaiveDate> {
        let mut dates = Vec::new();
        let mut current = start;
        while current <= window_end {
            dates.push(current);
            current += Duration::days(step_days);
        }
        dates
    }

    /// Monthly payouts on the preferred day, clamped to each month's
    /// length. Stepping always re-derives from the first payout so a
    /// clamp through February never drags later months off the 31st.
    fn monthly_series(
        rule: &PocketMoneyRule,
        window_end: NaiveDate,
    ) -> ServiceResult<Vec<NaiveDate>> {
        let day = rule.day_of_month.unwrap_or_else(|| rule.start_date.day());

        // First payout: the anchor month's date moved to the preferred
        // day, or the following month when that already lies behind the
        // anchor.
        let mut first = clamped_ymd(rule.start_date.year(), rule.start_date.month(), day)?;
        if first < rule.start_date {
            let base = add_months(first, 1)?;
            first = clamped_ymd(base.year(), base.month(), day)?;
        }

        let mut dates = Vec::new();
        let mut months_out = 0;
        loop {
            let base = add_months(first, months_out)?;
            let payout = clamped_ymd(base.year(), base.month(), day)?;
            if payout > window_end {
                break;
            }
            dates.push(payout);
            months_out += 1;
        }
        Ok(dates)
    }
}
