//! Goal projection - target derivation and linear calorie planning
//!
//! A plan fixes the target BMI/weight up front and spreads the required
//! caloric deficit or surplus evenly over the plan window. Evaluating a
//! fresh weight measurement against the plan is the caller's concern;
//! this module only projects along the plan itself.

use chrono::NaiveDate;
use homehub_shared::health;
use homehub_shared::health::ActivityLevel;
use homehub_shared::models::GoalType;
use homehub_shared::validation::{
    validate_bmi_bounds, validate_height_cm, validate_plan_window, validate_weight_kg,
};
use homehub_shared::DomainError;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GoalsConfig;
use crate::error::ServiceResult;

/// Tolerance for floating-point BMI comparisons.
const BMI_EPSILON: f64 = 1e-9;

/// Inputs for building a goal plan, as loaded from the member's profile
/// and the goal request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalPlanInput {
    pub goal_type: GoalType,
    /// Healthy-BMI range the target is derived from (defaults come from
    /// [`GoalsConfig`]).
    pub bmi_min: f64,
    pub bmi_max: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub current_weight_kg: f64,
    pub height_cm: f64,
    pub age_years: i32,
    pub activity_level: ActivityLevel,
    /// Explicit target; authoritative and deliberately not clamped to
    /// the healthy range.
    pub target_bmi_override: Option<f64>,
}

/// A computed goal plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalPlan {
    pub goal_type: GoalType,
    pub bmi_min: f64,
    pub bmi_max: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub current_weight_kg: f64,
    pub height_cm: f64,
    pub age_years: i32,
    pub activity_level: ActivityLevel,
    pub current_bmi: f64,
    pub target_bmi: f64,
    pub target_weight_kg: f64,
    /// Positive for gain plans, negative for loss plans.
    pub weight_delta_kg: f64,
    /// Daily caloric surplus (positive) or deficit (negative) needed to
    /// reach the target by the end date; zero for maintenance.
    pub daily_calorie_delta: f64,
}

impl GoalPlan {
    /// Absolute daily calorie target, given a maintenance estimate such
    /// as [`health::maintenance_calories`].
    pub fn recommended_daily_calories(&self, maintenance_calories: f64) -> f64 {
        maintenance_calories + self.daily_calorie_delta
    }
}

/// Goal planning and completion checks.
pub struct GoalsService;

impl GoalsService {
    /// Build a plan from current body metrics and the goal window.
    pub fn build_plan(input: GoalPlanInput, config: &GoalsConfig) -> ServiceResult<GoalPlan> {
        validate_height_cm(input.height_cm).map_err(DomainError::InvalidArgument)?;
        validate_weight_kg(input.current_weight_kg).map_err(DomainError::InvalidArgument)?;
        validate_bmi_bounds(input.bmi_min, input.bmi_max).map_err(DomainError::InvalidArgument)?;
        validate_plan_window(input.start_date, input.end_date)
            .map_err(DomainError::InvalidArgument)?;

        let current_bmi = health::bmi(input.current_weight_kg, input.height_cm);

        let target_bmi = match input.target_bmi_override {
            Some(bmi) => bmi,
            None => match input.goal_type {
                // Loss plans aim for the top of the healthy range, gain
                // plans for the bottom; maintenance holds the line.
                GoalType::Lose => input.bmi_max,
                GoalType::Gain => input.bmi_min,
                GoalType::Maintain => current_bmi,
            },
        };

        let target_weight_kg = health::weight_for_bmi(target_bmi, input.height_cm);
        let weight_delta_kg = target_weight_kg - input.current_weight_kg;

        let daily_calorie_delta = match input.goal_type {
            GoalType::Maintain => 0.0,
            GoalType::Lose | GoalType::Gain => {
                let plan_days = (input.end_date - input.start_date).num_days() as f64;
                weight_delta_kg * config.kcal_per_kg / plan_days
            }
        };

        debug!(
            goal_type = ?input.goal_type,
            current_bmi,
            target_bmi,
            daily_calorie_delta,
            "built goal plan"
        );

        Ok(GoalPlan {
            goal_type: input.goal_type,
            bmi_min: input.bmi_min,
            bmi_max: input.bmi_max,
            start_date: input.start_date,
            end_date: input.end_date,
            current_weight_kg: input.current_weight_kg,
            height_cm: input.height_cm,
            age_years: input.age_years,
            activity_level: input.activity_level,
            current_bmi,
            target_bmi,
            target_weight_kg,
            weight_delta_kg,
            daily_calorie_delta,
        })
    }

    /// BMI the plan projects for `as_of`: linear interpolation from the
    /// current BMI at the start date to the target at the end date,
    /// clamped to the plan bounds.
    pub fn projected_bmi(plan: &GoalPlan, as_of: NaiveDate) -> f64 {
        if as_of <= plan.start_date {
            return plan.current_bmi;
        }
        if as_of >= plan.end_date {
            return plan.target_bmi;
        }

        let total_days = (plan.end_date - plan.start_date).num_days() as f64;
        let elapsed_days = (as_of - plan.start_date).num_days() as f64;
        plan.current_bmi + (plan.target_bmi - plan.current_bmi) * (elapsed_days / total_days)
    }

    /// Whether the plan counts as met on `as_of`.
    ///
    /// Maintenance is "held until the end date", never instantaneously
    /// true. Loss and gain plans are met once the projected BMI reaches
    /// the target in the plan's direction; checking an actual fresh
    /// measurement is the caller's concern.
    pub fn is_goal_met(plan: &GoalPlan, as_of: NaiveDate) -> bool {
        match plan.goal_type {
            GoalType::Maintain => as_of >= plan.end_date,
            GoalType::Lose | GoalType::Gain => {
                let projected = Self::projected_bmi(plan, as_of);
                if plan.target_bmi <= plan.current_bmi {
                    projected <= plan.target_bmi + BMI_EPSILON
                } else {
                    projected >= plan.target_bmi - BMI_EPSILON
                }
            }
        }
    }
}
