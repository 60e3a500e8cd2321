//! Domain configuration
//!
//! Calculation constants and lookup values are loaded once at process
//! start and passed into the services as immutable state, never mutable
//! module globals. Loading is hierarchical:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: HH__)

use anyhow::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::env;

/// Domain-layer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainConfig {
    pub fiscal: FiscalConfig,
    pub nutrition: NutritionConfig,
    pub goals: GoalsConfig,
}

/// Financial-year anchor used for budget ranges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiscalConfig {
    /// Month the financial year starts in (1-12).
    pub start_month: u32,
    /// Day the financial year starts on (1-31, clamped to month length).
    pub start_day: u32,
}

/// Nutrition calculation constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Calories burned per step.
    pub step_kcal_factor: Decimal,
}

/// Goal-projection constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalsConfig {
    /// Energy density of body mass, kcal per kilogram.
    pub kcal_per_kg: f64,
    /// Default healthy-BMI range used to derive targets.
    pub bmi_min: f64,
    pub bmi_max: f64,
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            fiscal: FiscalConfig {
                start_month: 1,
                start_day: 1,
            },
            nutrition: NutritionConfig {
                // 0.04 kcal per step
                step_kcal_factor: Decimal::new(4, 2),
            },
            goals: GoalsConfig {
                kcal_per_kg: 7700.0,
                bmi_min: 18.5,
                bmi_max: 25.0,
            },
        }
    }
}

impl DomainConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with HH__ prefix
    ///    e.g., HH__FISCAL__START_MONTH=7 sets fiscal.start_month
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&DomainConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            .add_source(config::Environment::with_prefix("HH").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
