//! Domain value types for recurring schedules and goals
//!
//! These are transient parameter bundles: the web layer loads them from
//! storage (or maps them from request payloads) and hands them to the
//! calculation services. Nothing here is persisted by this crate.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::errors::DomainError;

// ============================================================================
// Frequency
// ============================================================================

/// How often a recurring item repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    /// Always a fixed two-week step from the anchor date.
    Fortnightly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Fortnightly => "fortnightly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "fortnightly" => Ok(Frequency::Fortnightly),
            "monthly" => Ok(Frequency::Monthly),
            "yearly" => Ok(Frequency::Yearly),
            other => Err(DomainError::UnsupportedFrequency(other.to_string())),
        }
    }
}

// ============================================================================
// Weekday Set
// ============================================================================

/// A set of weekday indices, 0 = Monday .. 6 = Sunday.
///
/// Serialized as a plain array of indices, matching the stored form of
/// weekly task rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekdaySet(BTreeSet<u8>);

impl WeekdaySet {
    /// Build a set from weekday indices, rejecting anything above 6.
    pub fn from_indices<I>(indices: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = u8>,
    {
        let days: BTreeSet<u8> = indices.into_iter().collect();
        if let Some(bad) = days.iter().find(|d| **d > 6) {
            return Err(DomainError::InvalidArgument(format!(
                "weekday index must be 0-6 (Monday-Sunday), got {bad}"
            )));
        }
        Ok(Self(days))
    }

    pub fn contains(&self, weekday: Weekday) -> bool {
        self.0.contains(&(weekday.num_days_from_monday() as u8))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn indices(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }
}

/// Deserialized sets bypass `from_indices`, so rules re-check on validate().
fn validate_weekday_set(set: &WeekdaySet) -> Result<(), ValidationError> {
    if set.0.iter().any(|d| *d > 6) {
        return Err(ValidationError::new("weekday_index_out_of_range"));
    }
    Ok(())
}

// ============================================================================
// Recurrence Rule
// ============================================================================

/// A recurring-schedule rule for tasks and reminders.
///
/// `start_date` is the anchor: it fixes the weekday and day-of-month
/// reference for every future occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RecurrenceRule {
    pub start_date: NaiveDate,
    pub frequency: Frequency,
    /// Number of frequency units between occurrences (every 2 weeks, etc.).
    #[validate(range(min = 1))]
    pub interval: u32,
    /// Explicit weekday selection, only meaningful for weekly rules.
    #[validate(custom(function = "validate_weekday_set"))]
    pub weekdays: Option<WeekdaySet>,
    /// Preferred day of month for monthly/yearly rules; clamped to the
    /// last valid day of shorter months.
    #[validate(range(min = 1, max = 31))]
    pub day_of_month: Option<u32>,
    /// Optional end of the rule's life; enumeration also accepts an
    /// explicit window cutoff.
    pub end_date: Option<NaiveDate>,
}

impl RecurrenceRule {
    /// A plain rule with no weekday or day-of-month refinement.
    pub fn new(start_date: NaiveDate, frequency: Frequency, interval: u32) -> Self {
        Self {
            start_date,
            frequency,
            interval,
            weekdays: None,
            day_of_month: None,
            end_date: None,
        }
    }
}

// ============================================================================
// Pocket Money
// ============================================================================

/// A pocket-money allowance rule for one household member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PocketMoneyRule {
    pub id: Uuid,
    pub member_id: Uuid,
    /// Anchor date of the first payout; its weekday and day are
    /// authoritative for the whole series.
    pub start_date: NaiveDate,
    /// Weekly, fortnightly or monthly.
    pub frequency: Frequency,
    /// Preferred payout day for monthly rules, clamped to month length.
    #[validate(range(min = 1, max = 31))]
    pub day_of_month: Option<u32>,
    pub amount: Decimal,
}

// ============================================================================
// Goals
// ============================================================================

/// Direction of a body-weight goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    Lose,
    Maintain,
    Gain,
}
