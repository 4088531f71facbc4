// ABOUTME: Nutrition engine coefficients with defaults, environment overrides, and validation
// ABOUTME: Holds Mifflin-St Jeor constants, activity factors, goal multipliers, macro splits, meal shares
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Engine Configuration
//!
//! Every number the recommendation engine uses lives here instead of being
//! scattered through the calculator as literals. `Default` yields the
//! production tables; [`NutritionConfig::load`] layers `DIETDELISH_*`
//! environment overrides on top and validates the result.
//!
//! Overrides replace the published tables (activity factors, the weight-loss,
//! weight-gain and muscle-gain multipliers, meal shares), so a deployment that
//! sets any of them no longer reproduces the reference recommendations. The
//! general multiplier is fixed at 1.0 and cannot be overridden.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use crate::constants::tolerances::SHARE_SUM_EPSILON;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable held an unparsable value
    #[error("Parse error: {0}")]
    Parse(String),

    /// A multiplier or share was not a finite positive number
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// A set of shares did not sum to one
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(
            crate::errors::ErrorCode::ConfigInvalid,
            format!("Nutrition configuration rejected: {error}"),
        )
        .with_source(error)
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for daily calorie need
    pub activity_factors: ActivityFactorsConfig,
    /// Goal-based calorie adjustments
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Goal-based macronutrient splits
    pub macro_ratios: MacroRatioConfig,
    /// Per-meal share of the daily calorie target
    pub meal_distribution: MealDistributionConfig,
}

/// Mifflin-St Jeor coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Constant for everyone else (-161)
    pub msj_other_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_other_constant: -161.0,
        }
    }
}

/// Activity factor multipliers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light (1-3 days/week): 1.375
    pub light: f64,
    /// Moderate (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Very active (hard training 2x/day): 1.9
    pub very_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

/// Calorie target multiplier per goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// 20% deficit
    pub weight_loss: f64,
    /// 20% surplus
    pub weight_gain: f64,
    /// 15% surplus
    pub muscle_gain: f64,
    /// Maintenance
    pub general: f64,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            weight_loss: 0.80,
            weight_gain: 1.20,
            muscle_gain: 1.15,
            general: 1.00,
        }
    }
}

/// Share of calories assigned to each macronutrient
///
/// The three shares must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein share of calories
    pub protein: f64,
    /// Carbohydrate share of calories
    pub carbs: f64,
    /// Fat share of calories
    pub fat: f64,
}

impl MacroSplit {
    /// Create a new split
    #[must_use]
    pub const fn new(protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            protein,
            carbs,
            fat,
        }
    }

    /// Sum of the three shares
    #[must_use]
    pub fn total(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }
}

/// Macro splits keyed by goal
///
/// Weight gain and general share the default split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroRatioConfig {
    /// Higher protein and carbs, lower fat
    pub muscle_gain: MacroSplit,
    /// Highest protein for muscle preservation in a deficit
    pub weight_loss: MacroSplit,
    /// Everything else
    pub default: MacroSplit,
}

impl Default for MacroRatioConfig {
    fn default() -> Self {
        Self {
            muscle_gain: MacroSplit::new(0.35, 0.45, 0.20),
            weight_loss: MacroSplit::new(0.40, 0.30, 0.30),
            default: MacroSplit::new(0.30, 0.40, 0.30),
        }
    }
}

/// Share of the daily target allocated to each meal slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealDistributionConfig {
    /// Breakfast share (0.25)
    pub breakfast: f64,
    /// Lunch share (0.35)
    pub lunch: f64,
    /// Dinner share (0.30)
    pub dinner: f64,
    /// Snacks share (0.10)
    pub snacks: f64,
}

impl Default for MealDistributionConfig {
    fn default() -> Self {
        Self {
            breakfast: 0.25,
            lunch: 0.35,
            dinner: 0.30,
            snacks: 0.10,
        }
    }
}

impl MealDistributionConfig {
    /// Sum of all slot shares
    #[must_use]
    pub fn total(&self) -> f64 {
        self.breakfast + self.lunch + self.dinner + self.snacks
    }
}

impl NutritionConfig {
    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or the final values fail validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate multipliers and share tables
    ///
    /// # Errors
    ///
    /// Returns an error if a multiplier is not finite and positive, or a share table does not sum to 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = &self.activity_factors;
        for factor in [
            factors.sedentary,
            factors.light,
            factors.moderate,
            factors.active,
            factors.very_active,
        ] {
            ensure_positive(factor, "activity factors must be finite and > 0")?;
        }

        let goals = &self.goal_adjustments;
        for multiplier in [
            goals.weight_loss,
            goals.weight_gain,
            goals.muscle_gain,
            goals.general,
        ] {
            ensure_positive(multiplier, "goal multipliers must be finite and > 0")?;
        }
        // Unknown goals resolve to the general plan, which must equal the maintenance need.
        if (goals.general - 1.0).abs() > f64::EPSILON {
            return Err(ConfigError::ValueOutOfRange(
                "general goal multiplier must be 1.0",
            ));
        }

        for split in [
            &self.macro_ratios.muscle_gain,
            &self.macro_ratios.weight_loss,
            &self.macro_ratios.default,
        ] {
            for share in [split.protein, split.carbs, split.fat] {
                if !share.is_finite() || share < 0.0 {
                    return Err(ConfigError::ValueOutOfRange(
                        "macro shares must be finite and >= 0",
                    ));
                }
            }
            if (split.total() - 1.0).abs() > SHARE_SUM_EPSILON {
                return Err(ConfigError::InvalidWeights("macro split must sum to 1.0"));
            }
        }

        let meals = &self.meal_distribution;
        for share in [meals.breakfast, meals.lunch, meals.dinner, meals.snacks] {
            if !share.is_finite() || share < 0.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "meal shares must be finite and >= 0",
                ));
            }
        }
        if (meals.total() - 1.0).abs() > SHARE_SUM_EPSILON {
            return Err(ConfigError::InvalidWeights(
                "meal distribution must sum to 1.0",
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        override_from_env(
            "DIETDELISH_ACTIVITY_SEDENTARY",
            &mut self.activity_factors.sedentary,
        )?;
        override_from_env("DIETDELISH_ACTIVITY_LIGHT", &mut self.activity_factors.light)?;
        override_from_env(
            "DIETDELISH_ACTIVITY_MODERATE",
            &mut self.activity_factors.moderate,
        )?;
        override_from_env("DIETDELISH_ACTIVITY_ACTIVE", &mut self.activity_factors.active)?;
        override_from_env(
            "DIETDELISH_ACTIVITY_VERY_ACTIVE",
            &mut self.activity_factors.very_active,
        )?;

        override_from_env(
            "DIETDELISH_GOAL_WEIGHT_LOSS",
            &mut self.goal_adjustments.weight_loss,
        )?;
        override_from_env(
            "DIETDELISH_GOAL_WEIGHT_GAIN",
            &mut self.goal_adjustments.weight_gain,
        )?;
        override_from_env(
            "DIETDELISH_GOAL_MUSCLE_GAIN",
            &mut self.goal_adjustments.muscle_gain,
        )?;

        override_from_env(
            "DIETDELISH_MEAL_BREAKFAST",
            &mut self.meal_distribution.breakfast,
        )?;
        override_from_env("DIETDELISH_MEAL_LUNCH", &mut self.meal_distribution.lunch)?;
        override_from_env("DIETDELISH_MEAL_DINNER", &mut self.meal_distribution.dinner)?;
        override_from_env("DIETDELISH_MEAL_SNACKS", &mut self.meal_distribution.snacks)?;

        Ok(self)
    }
}

fn ensure_positive(value: f64, reason: &'static str) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange(reason))
    }
}

fn override_from_env<T: FromStr>(name: &str, target: &mut T) -> Result<(), ConfigError> {
    if let Ok(val) = env::var(name) {
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {name}: '{val}'")))?;
    }
    Ok(())
}
