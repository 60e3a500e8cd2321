//! Body-metric calculations
//!
//! BMI arithmetic and the energy-expenditure lookup shared by goal
//! planning and the profile endpoints. All functions are pure; the
//! activity factors are fixed lookup values, not mutable globals.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Activity level used to scale energy-expenditure estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    #[default]
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise or physical job
    ExtraActive,
}

impl ActivityLevel {
    /// Multiplier applied to the basal metabolic rate.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "lightly_active" => Ok(ActivityLevel::LightlyActive),
            "moderately_active" => Ok(ActivityLevel::ModeratelyActive),
            "very_active" => Ok(ActivityLevel::VeryActive),
            "extra_active" => Ok(ActivityLevel::ExtraActive),
            other => Err(DomainError::InvalidArgument(format!(
                "unknown activity level: {other}"
            ))),
        }
    }
}

/// Biological sex, used only for the basal-metabolic-rate estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

/// Body Mass Index: `weight(kg) / height(m)²`.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// The weight that produces `bmi` at the given height, the inverse of
/// [`bmi`]. Used to turn a target BMI into a target weight.
pub fn weight_for_bmi(bmi: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    bmi * height_m * height_m
}

/// Daily maintenance calories: Mifflin-St Jeor basal rate scaled by the
/// activity multiplier.
pub fn maintenance_calories(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: BiologicalSex,
    activity: ActivityLevel,
) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    let bmr = match sex {
        BiologicalSex::Male => base + 5.0,
        BiologicalSex::Female => base - 161.0,
    };
    bmr * activity.multiplier()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bmi() {
        // 70kg at 175cm -> BMI ~22.86
        assert!((bmi(70.0, 175.0) - 22.86).abs() < 0.01);
    }

    #[test]
    fn test_weight_for_bmi_inverts_bmi() {
        let weight = weight_for_bmi(25.0, 175.0);
        assert!((weight - 76.5625).abs() < 1e-9);
        assert!((bmi(weight, 175.0) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_activity_parse() {
        assert_eq!(
            "moderately_active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::ModeratelyActive
        );
        assert!("couch_potato".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn test_maintenance_calories() {
        // 30yo male, 80kg, 180cm, moderately active -> ~2760 kcal
        let kcal = maintenance_calories(
            80.0,
            180.0,
            30,
            BiologicalSex::Male,
            ActivityLevel::ModeratelyActive,
        );
        assert!(kcal > 2600.0 && kcal < 3000.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: weight_for_bmi is the exact inverse of bmi.
        #[test]
        fn prop_bmi_inverse(
            weight in 20.0f64..300.0,
            height in 100.0f64..220.0
        ) {
            let b = bmi(weight, height);
            prop_assert!((weight_for_bmi(b, height) - weight).abs() < 1e-6);
        }

        /// Property: activity multipliers strictly increase with activity.
        #[test]
        fn prop_activity_multiplier_ordering(
            weight in 40.0f64..150.0,
            height in 140.0f64..210.0,
            age in 18i32..80
        ) {
            let levels = [
                ActivityLevel::Sedentary,
                ActivityLevel::LightlyActive,
                ActivityLevel::ModeratelyActive,
                ActivityLevel::VeryActive,
                ActivityLevel::ExtraActive,
            ];
            for pair in levels.windows(2) {
                let lower = maintenance_calories(weight, height, age, BiologicalSex::Female, pair[0]);
                let upper = maintenance_calories(weight, height, age, BiologicalSex::Female, pair[1]);
                prop_assert!(upper > lower);
            }
        }
    }
}
