//! Recurrence engine - next-occurrence computation for recurring rules
//!
//! Dates are computed purely from the rule and a reference date supplied
//! by the caller; "today" never enters the calculation. The rule's start
//! date is the anchor: its weekday and day-of-month fix the series.

use chrono::{Datelike, Duration, NaiveDate};
use homehub_shared::calendar::{add_months, add_years, clamped_ymd, week_range};
use homehub_shared::models::{Frequency, RecurrenceRule, WeekdaySet};
use tracing::trace;
use validator::Validate;

use crate::error::ServiceResult;

/// Days in one fortnight step. The rule's `interval` never scales this.
const FORTNIGHT_DAYS: i64 = 14;

/// Recurrence computations for tasks and reminders.
pub struct RecurrenceService;

impl RecurrenceService {
    /// The next occurrence strictly after `from`.
    ///
    /// Monthly and yearly steps clamp the day to the target month's
    /// length, so a rule anchored on the 31st lands on Feb 28/29 rather
    /// than rolling into March.
    pub fn next_occurrence(from: NaiveDate, rule: &RecurrenceRule) -> ServiceResult<NaiveDate> {
        rule.validate()?;

        let next = match rule.frequency {
            Frequency::Daily => from + Duration::days(i64::from(rule.interval)),
            Frequency::Weekly => match &rule.weekdays {
                Some(days) if !days.is_empty() => {
                    Self::next_weekday_match(from, days, rule.interval)
                }
                _ => from + Duration::days(i64::from(rule.interval) * 7),
            },
            // A fortnight is a fixed two-week step; the anchor weekday is
            // authoritative, so any weekday set is ignored as well.
            Frequency::Fortnightly => from + Duration::days(FORTNIGHT_DAYS),
            Frequency::Monthly => {
                let base = add_months(from, rule.interval as i32)?;
                let day = rule.day_of_month.unwrap_or_else(|| from.day());
                clamped_ymd(base.year(), base.month(), day)?
            }
            Frequency::Yearly => {
                let base = add_years(from, rule.interval as i32)?;
                let day = rule.day_of_month.unwrap_or_else(|| from.day());
                clamped_ymd(base.year(), base.month(), day)?
            }
        };

        trace!(%from, %next, frequency = %rule.frequency, "computed next occurrence");
        Ok(next)
    }

    /// All occurrences from the rule's start date through `window_end`,
    /// ascending. The rule's own end date, when set, caps the window.
    pub fn occurrences_between(
        rule: &RecurrenceRule,
        window_end: NaiveDate,
    ) -> ServiceResult<Vec<NaiveDate>> {
        rule.validate()?;

        let cutoff = match rule.end_date {
            Some(end) => end.min(window_end),
            None => window_end,
        };

        let mut dates = Vec::new();
        let mut current = rule.start_date;
        while current <= cutoff {
            dates.push(current);
            current = Self::next_occurrence(current, rule)?;
        }
        Ok(dates)
    }

    /// The smallest date strictly after `from` whose weekday is in `days`,
    /// scanning forward day by day. When the scan wraps past the anchor's
    /// week, `interval > 1` pushes the result forward by the remaining
    /// week skips.
    fn next_weekday_match(from: NaiveDate, days: &WeekdaySet, interval: u32) -> NaiveDate {
        let (anchor_week, _) = week_range(from);
        for offset in 1..=7 {
            let candidate = from + Duration::days(offset);
            if days.contains(candidate.weekday()) {
                let (candidate_week, _) = week_range(candidate);
                return if candidate_week == anchor_week || interval <= 1 {
                    candidate
                } else {
                    candidate + Duration::days(i64::from(interval - 1) * 7)
                };
            }
        }

        // Unreachable for a non-empty set: any weekday recurs within
        // seven days. Fall back to a plain weekly step.
        from + Duration::days(i64::from(interval) * 7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homehub_shared::DomainError;
    use proptest::prelude::*;
    use rstest::rstest;

    use crate::error::ServiceError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rule(frequency: Frequency, interval: u32) -> RecurrenceRule {
        RecurrenceRule::new(date(2024, 1, 1), frequency, interval)
    }

    #[rstest]
    #[case(date(2024, 1, 15), Frequency::Daily, 1, date(2024, 1, 16))]
    #[case(date(2024, 1, 15), Frequency::Daily, 3, date(2024, 1, 18))]
    #[case(date(2024, 1, 15), Frequency::Weekly, 1, date(2024, 1, 22))]
    #[case(date(2024, 1, 15), Frequency::Weekly, 2, date(2024, 1, 29))]
    #[case(date(2024, 12, 27), Frequency::Fortnightly, 1, date(2025, 1, 10))]
    #[case(date(2024, 1, 31), Frequency::Monthly, 1, date(2024, 2, 29))]
    #[case(date(2023, 1, 31), Frequency::Monthly, 1, date(2023, 2, 28))]
    #[case(date(2024, 2, 29), Frequency::Yearly, 1, date(2025, 2, 28))]
    #[case(date(2024, 5, 10), Frequency::Yearly, 2, date(2026, 5, 10))]
    fn test_next_occurrence(
        #[case] from: NaiveDate,
        #[case] frequency: Frequency,
        #[case] interval: u32,
        #[case] expected: NaiveDate,
    ) {
        let rule = rule(frequency, interval);
        assert_eq!(RecurrenceService::next_occurrence(from, &rule).unwrap(), expected);
    }

    #[test]
    fn test_fortnightly_ignores_interval() {
        let mut r = rule(Frequency::Fortnightly, 3);
        r.weekdays = Some(WeekdaySet::from_indices([0]).unwrap());
        let next = RecurrenceService::next_occurrence(date(2024, 6, 5), &r).unwrap();
        assert_eq!(next, date(2024, 6, 19));
    }

    #[test]
    fn test_weekly_with_weekdays_same_week() {
        // 2026-01-05 is a Monday; Wed/Fri selected -> Wednesday the 7th.
        let mut r = rule(Frequency::Weekly, 1);
        r.weekdays = Some(WeekdaySet::from_indices([2, 4]).unwrap());
        let next = RecurrenceService::next_occurrence(date(2026, 1, 5), &r).unwrap();
        assert_eq!(next, date(2026, 1, 7));
    }

    #[test]
    fn test_weekly_with_weekdays_wraps_to_next_week() {
        // 2026-01-09 is a Friday; only Wednesday selected -> wraps to the 14th.
        let mut r = rule(Frequency::Weekly, 1);
        r.weekdays = Some(WeekdaySet::from_indices([2]).unwrap());
        let next = RecurrenceService::next_occurrence(date(2026, 1, 9), &r).unwrap();
        assert_eq!(next, date(2026, 1, 14));
    }

    #[test]
    fn test_weekly_interval_skip_applies_only_across_weeks() {
        let mut r = rule(Frequency::Weekly, 2);
        r.weekdays = Some(WeekdaySet::from_indices([2, 4]).unwrap());

        // Monday -> Wednesday stays inside the anchor week: no skip.
        let next = RecurrenceService::next_occurrence(date(2026, 1, 5), &r).unwrap();
        assert_eq!(next, date(2026, 1, 7));

        // Friday -> the Wednesday match is in the next week, so one extra
        // week is skipped on top.
        let next = RecurrenceService::next_occurrence(date(2026, 1, 9), &r).unwrap();
        assert_eq!(next, date(2026, 1, 21));
    }

    #[test]
    fn test_monthly_reclamps_to_day_of_month() {
        let mut r = rule(Frequency::Monthly, 1);
        r.day_of_month = Some(31);

        let next = RecurrenceService::next_occurrence(date(2024, 2, 29), &r).unwrap();
        assert_eq!(next, date(2024, 3, 31));

        r.day_of_month = Some(1);
        let next = RecurrenceService::next_occurrence(date(2024, 1, 31), &r).unwrap();
        assert_eq!(next, date(2024, 2, 1));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let r = rule(Frequency::Daily, 0);
        let err = RecurrenceService::next_occurrence(date(2024, 1, 1), &r).unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::InvalidArgument(_))));
    }

    #[test]
    fn test_day_of_month_out_of_range_rejected() {
        let mut r = rule(Frequency::Monthly, 1);
        r.day_of_month = Some(32);
        let err = RecurrenceService::next_occurrence(date(2024, 1, 1), &r).unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::InvalidArgument(_))));
    }

    #[test]
    fn test_occurrences_between_respects_rule_end_date() {
        let mut r = RecurrenceRule::new(date(2024, 3, 1), Frequency::Weekly, 1);
        r.end_date = Some(date(2024, 3, 10));

        let dates = RecurrenceService::occurrences_between(&r, date(2024, 4, 1)).unwrap();
        assert_eq!(dates, vec![date(2024, 3, 1), date(2024, 3, 8)]);
    }

    #[test]
    fn test_occurrences_between_empty_when_start_past_window() {
        let r = RecurrenceRule::new(date(2024, 6, 1), Frequency::Daily, 1);
        let dates = RecurrenceService::occurrences_between(&r, date(2024, 5, 1)).unwrap();
        assert!(dates.is_empty());
    }

    // =========================================================================
    // Property Tests
    // =========================================================================

    fn frequency_strategy() -> impl Strategy<Value = Frequency> {
        prop_oneof![
            Just(Frequency::Daily),
            Just(Frequency::Weekly),
            Just(Frequency::Fortnightly),
            Just(Frequency::Monthly),
            Just(Frequency::Yearly),
        ]
    }

    fn rule_strategy() -> impl Strategy<Value = RecurrenceRule> {
        (
            frequency_strategy(),
            1u32..24,
            proptest::option::of(proptest::collection::btree_set(0u8..=6, 1..=7)),
            proptest::option::of(1u32..=31),
        )
            .prop_map(|(frequency, interval, weekdays, day_of_month)| RecurrenceRule {
                start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                frequency,
                interval,
                weekdays: weekdays.map(|set| WeekdaySet::from_indices(set).unwrap()),
                day_of_month,
                end_date: None,
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property: re-applying the engine to its own output always
        /// advances strictly forward (no cycles, no repeated dates).
        #[test]
        fn prop_next_occurrence_strictly_advances(
            rule in rule_strategy(),
            offset in 0i64..7300
        ) {
            let from = date(2020, 1, 1) + Duration::days(offset);
            let first = RecurrenceService::next_occurrence(from, &rule).unwrap();
            let second = RecurrenceService::next_occurrence(first, &rule).unwrap();

            prop_assert!(first > from, "first {} not after from {}", first, from);
            prop_assert!(second > first, "second {} not after first {}", second, first);
        }

        /// Property: a weekly rule with weekdays always lands on a
        /// selected weekday.
        #[test]
        fn prop_weekday_rules_land_on_selected_days(
            days in proptest::collection::btree_set(0u8..=6, 1..=7),
            interval in 1u32..5,
            offset in 0i64..3650
        ) {
            let mut rule = RecurrenceRule::new(date(2020, 1, 1), Frequency::Weekly, interval);
            rule.weekdays = Some(WeekdaySet::from_indices(days).unwrap());

            let from = date(2020, 1, 1) + Duration::days(offset);
            let next = RecurrenceService::next_occurrence(from, &rule).unwrap();

            let set = rule.weekdays.as_ref().unwrap();
            prop_assert!(set.contains(next.weekday()));
        }

        /// Property: monthly rules never skip past the expected month.
        #[test]
        fn prop_monthly_lands_in_expected_month(
            interval in 1u32..12,
            day_of_month in proptest::option::of(1u32..=31),
            offset in 0i64..3650
        ) {
            let mut rule = RecurrenceRule::new(date(2020, 1, 1), Frequency::Monthly, interval);
            rule.day_of_month = day_of_month;

            let from = date(2020, 1, 1) + Duration::days(offset);
            let next = RecurrenceService::next_occurrence(from, &rule).unwrap();

            let expected = from.year() * 12 + from.month0() as i32 + interval as i32;
            let actual = next.year() * 12 + next.month0() as i32;
            prop_assert_eq!(actual, expected);
        }
    }
}
