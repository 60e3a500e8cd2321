//! Nutrition aggregation - daily totals and weekly summaries
//!
//! All quantities are `Decimal` so sums and the step-burn product stay
//! exact; the web layer rounds for display if it wants to.

use chrono::NaiveDate;
use homehub_shared::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ServiceResult;

/// One logged food entry, already resolved to per-serving values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub calories_per_serving: Decimal,
    pub protein_per_serving: Decimal,
    pub quantity: Decimal,
}

/// Daily calorie/protein targets from the member's settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTargets {
    pub daily_calories: Decimal,
    pub protein_min: Decimal,
    pub protein_max: Decimal,
}

/// Computed totals and remaining budgets for a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    pub total_calories: Decimal,
    pub total_protein: Decimal,
    pub calories_burned_from_steps: Decimal,
    pub net_calories: Decimal,
    pub remaining_calories: Decimal,
    pub remaining_protein_min: Decimal,
    pub remaining_protein_max: Decimal,
}

/// Per-day roll-up fed into the weekly summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_calories: Decimal,
    pub total_protein: Decimal,
    pub steps: i64,
}

/// Field-wise sums over the days present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTotals {
    pub total_calories: Decimal,
    pub total_protein: Decimal,
    pub total_steps: i64,
}

/// Arithmetic means over the days present (not a fixed seven).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyAverages {
    pub average_calories: Decimal,
    pub average_protein: Decimal,
    pub average_steps: Decimal,
}

/// Weekly roll-up of 1-7 daily summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub days: usize,
    pub totals: WeeklyTotals,
    pub averages: WeeklyAverages,
}

/// Nutrition aggregation for the food-log endpoints.
pub struct NutritionService;

impl NutritionService {
    /// Totals and remaining budgets for one day of entries.
    ///
    /// Remaining calories are measured against *net* intake, so step
    /// activity earns budget back.
    pub fn calculate_daily_totals(
        entries: &[FoodEntry],
        steps: i64,
        step_kcal_factor: Decimal,
        targets: &DailyTargets,
    ) -> ServiceResult<DailyTotals> {
        if steps < 0 {
            return Err(
                DomainError::InvalidArgument(format!("steps cannot be negative, got {steps}"))
                    .into(),
            );
        }

        let (total_calories, total_protein) = entries.iter().fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(calories, protein), entry| {
                (
                    calories + entry.calories_per_serving * entry.quantity,
                    protein + entry.protein_per_serving * entry.quantity,
                )
            },
        );

        let calories_burned_from_steps = Decimal::from(steps) * step_kcal_factor;
        let net_calories = total_calories - calories_burned_from_steps;

        Ok(DailyTotals {
            total_calories,
            total_protein,
            calories_burned_from_steps,
            net_calories,
            remaining_calories: targets.daily_calories - net_calories,
            remaining_protein_min: targets.protein_min - total_protein,
            remaining_protein_max: targets.protein_max - total_protein,
        })
    }

    /// Field-wise totals and per-day averages over the supplied
    /// summaries, so partial weeks average correctly.
    pub fn calculate_weekly_summary(summaries: &[DailySummary]) -> ServiceResult<WeeklySummary> {
        if summaries.is_empty() {
            return Err(DomainError::InvalidArgument(
                "weekly summary requires at least one day".to_string(),
            )
            .into());
        }

        let totals = summaries.iter().fold(
            WeeklyTotals {
                total_calories: Decimal::ZERO,
                total_protein: Decimal::ZERO,
                total_steps: 0,
            },
            |acc, day| WeeklyTotals {
                total_calories: acc.total_calories + day.total_calories,
                total_protein: acc.total_protein + day.total_protein,
                total_steps: acc.total_steps + day.steps,
            },
        );

        let day_count = Decimal::from(summaries.len() as u64);
        let averages = WeeklyAverages {
            average_calories: totals.total_calories / day_count,
            average_protein: totals.total_protein / day_count,
            average_steps: Decimal::from(totals.total_steps) / day_count,
        };

        Ok(WeeklySummary {
            days: summaries.len(),
            totals,
            averages,
        })
    }
}
