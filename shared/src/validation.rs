//! Input validation helpers for the domain services
//!
//! Checks the `validator` derives cannot express. Helpers return plain
//! `Result<(), String>`; services wrap the message in the appropriate
//! error variant.

use chrono::NaiveDate;

/// Validate a day-of-month value (1-31).
pub fn validate_day_of_month(day: u32) -> Result<(), String> {
    if (1..=31).contains(&day) {
        Ok(())
    } else {
        Err(format!("day_of_month must be between 1 and 31, got {day}"))
    }
}

/// Validate a recurrence interval (at least 1).
pub fn validate_interval(interval: u32) -> Result<(), String> {
    if interval >= 1 {
        Ok(())
    } else {
        Err("interval must be at least 1".to_string())
    }
}

/// Validate a height measurement for BMI arithmetic.
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("height must be a valid number".to_string());
    }
    if height_cm <= 0.0 {
        return Err(format!("height must be positive, got {height_cm}"));
    }
    Ok(())
}

/// Validate a weight measurement for BMI arithmetic.
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("weight must be a valid number".to_string());
    }
    if weight_kg <= 0.0 {
        return Err(format!("weight must be positive, got {weight_kg}"));
    }
    Ok(())
}

/// Validate healthy-BMI bounds: both positive, min strictly below max.
pub fn validate_bmi_bounds(bmi_min: f64, bmi_max: f64) -> Result<(), String> {
    if bmi_min.is_nan() || bmi_max.is_nan() {
        return Err("BMI bounds must be valid numbers".to_string());
    }
    if bmi_min <= 0.0 {
        return Err(format!("BMI lower bound must be positive, got {bmi_min}"));
    }
    if bmi_max <= bmi_min {
        return Err(format!(
            "BMI upper bound must exceed the lower bound ({bmi_min} >= {bmi_max})"
        ));
    }
    Ok(())
}

/// Validate a plan window: the end date must lie strictly after the start.
pub fn validate_plan_window(start: NaiveDate, end: NaiveDate) -> Result<(), String> {
    if end <= start {
        return Err(format!("end date {end} must be after start date {start}"));
    }
    Ok(())
}
