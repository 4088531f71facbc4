// ABOUTME: Calorie and macronutrient recommendation engine built on Mifflin-St Jeor
// ABOUTME: BMR, activity-scaled calorie need, goal adjustment, macro grams, and meal-slot split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Turns a biometric profile, a goal, and a diet preference into a daily
//! calorie target, macronutrient grams, and a per-meal calorie allocation.
//! Every function here is pure: identical inputs always give identical output.
//!
//! Pipeline:
//!
//! 1. [`compute_bmr`]: Mifflin-St Jeor basal metabolic rate
//! 2. [`compute_daily_calorie_need`]: BMR scaled by the activity factor
//! 3. [`build_recommendation`]: goal multiplier, macro split, meal split, rounding
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MacroRatioConfig, MacroSplit,
    MealDistributionConfig, NutritionConfig,
};
use crate::constants::energy::{CARB_KCAL_PER_GRAM, FAT_KCAL_PER_GRAM, PROTEIN_KCAL_PER_GRAM};
use crate::errors::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

/// Failures of the recommendation engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NutritionError {
    /// A numeric profile field is missing, non-numeric, or not positive
    #[error("invalid profile field '{field}': {reason}")]
    InvalidProfile {
        /// Offending field
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },
    /// Activity level is absent or not one of the recognized values
    #[error("unknown activity level '{0}' (expected one of sedentary, light, moderate, active, very_active)")]
    UnknownActivityLevel(String),
    /// Diet preference is not one of the recognized values
    #[error("unknown diet type '{0}' (expected one of veg, non_veg, vegan)")]
    UnknownDietType(String),
}

impl NutritionError {
    /// Build an [`NutritionError::InvalidProfile`]
    pub fn invalid_profile(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidProfile {
            field,
            reason: reason.into(),
        }
    }

    /// Machine-readable error kind
    #[must_use]
    pub const fn kind(&self) -> ErrorCode {
        match self {
            Self::InvalidProfile { .. } => ErrorCode::InvalidProfile,
            Self::UnknownActivityLevel(_) => ErrorCode::UnknownActivityLevel,
            Self::UnknownDietType(_) => ErrorCode::InvalidInput,
        }
    }
}

impl From<NutritionError> for AppError {
    fn from(error: NutritionError) -> Self {
        let details = match &error {
            NutritionError::InvalidProfile { field, .. } => serde_json::json!({ "field": field }),
            NutritionError::UnknownActivityLevel(level) => {
                serde_json::json!({ "activity_level": level })
            }
            NutritionError::UnknownDietType(diet) => serde_json::json!({ "diet_type": diet }),
        };
        Self::new(error.kind(), error.to_string()).with_details(details)
    }
}

/// Biological sex term of the BMR formula
///
/// Only male versus not-male changes the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// +5 kcal offset
    Male,
    /// -161 kcal offset
    Other,
}

impl Sex {
    /// Interpret a free-form label; anything other than "male" is [`Sex::Other`]
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("male") {
            Self::Male
        } else {
            Self::Other
        }
    }
}

/// Activity level for the calorie-need multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Exercise 1-3 days/week
    Light,
    /// Exercise 3-5 days/week
    Moderate,
    /// Exercise 6-7 days/week
    Active,
    /// Hard training, physical job
    VeryActive,
}

impl ActivityLevel {
    /// Every recognized level, least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Wire name of the level
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| NutritionError::UnknownActivityLevel(s.to_owned()))
    }
}

/// Parse an activity level label
///
/// # Errors
///
/// Returns [`NutritionError::UnknownActivityLevel`] for anything outside the five recognized values
pub fn parse_activity_level(label: &str) -> Result<ActivityLevel, NutritionError> {
    label.parse()
}

/// Plan goal selecting the calorie adjustment and macro split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// 20% deficit, protein-heavy split
    WeightLoss,
    /// 20% surplus, default split
    WeightGain,
    /// 15% surplus, protein and carb heavy split
    MuscleGain,
    /// Maintenance, default split
    General,
}

impl GoalType {
    /// Wire name of the goal
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::WeightGain => "weight_gain",
            Self::MuscleGain => "muscle_gain",
            Self::General => "general",
        }
    }

    /// Parse a goal label, falling back to [`GoalType::General`] when unrecognized
    #[must_use]
    pub fn from_str_or_default(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "weight_loss" => Self::WeightLoss,
            "weight_gain" => Self::WeightGain,
            "muscle_gain" => Self::MuscleGain,
            "general" => Self::General,
            other => {
                warn!(goal_type = other, "Unrecognized goal type, using general plan");
                Self::General
            }
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diet preference
///
/// Carried with the request for catalog filtering by the caller; it never changes the numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    /// Vegetarian
    Veg,
    /// Non-vegetarian
    #[serde(alias = "non-veg")]
    NonVeg,
    /// Vegan
    Vegan,
}

impl DietType {
    /// Wire name of the diet type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Veg => "veg",
            Self::NonVeg => "non_veg",
            Self::Vegan => "vegan",
        }
    }
}

impl FromStr for DietType {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "veg" => Ok(Self::Veg),
            "non_veg" => Ok(Self::NonVeg),
            "vegan" => Ok(Self::Vegan),
            _ => Err(NutritionError::UnknownDietType(s.to_owned())),
        }
    }
}

/// Validated biometric profile
///
/// Construction through [`UserBiometricProfile::new`] guarantees finite, positive
/// weight and height and a positive age.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UserBiometricProfile {
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: Sex,
    activity_level: ActivityLevel,
}

impl UserBiometricProfile {
    /// Validate and build a profile
    ///
    /// # Errors
    ///
    /// Returns [`NutritionError::InvalidProfile`] if weight or height is not finite and positive, or age is zero
    pub fn new(
        weight_kg: f64,
        height_cm: f64,
        age_years: u32,
        sex: Sex,
        activity_level: ActivityLevel,
    ) -> Result<Self, NutritionError> {
        ensure_positive("weight_kg", weight_kg)?;
        ensure_positive("height_cm", height_cm)?;
        if age_years == 0 {
            return Err(NutritionError::invalid_profile(
                "age_years",
                "must be greater than 0",
            ));
        }

        Ok(Self {
            weight_kg,
            height_cm,
            age_years,
            sex,
            activity_level,
        })
    }

    /// Body weight in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Age in whole years
    #[must_use]
    pub const fn age_years(&self) -> u32 {
        self.age_years
    }

    /// Sex term of the BMR formula
    #[must_use]
    pub const fn sex(&self) -> Sex {
        self.sex
    }

    /// Activity level
    #[must_use]
    pub const fn activity_level(&self) -> ActivityLevel {
        self.activity_level
    }
}

fn ensure_positive(field: &'static str, value: f64) -> Result<(), NutritionError> {
    if !value.is_finite() {
        return Err(NutritionError::invalid_profile(field, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(NutritionError::invalid_profile(
            field,
            format!("must be greater than 0, got {value}"),
        ));
    }
    Ok(())
}

/// Everything the engine needs for one recommendation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecommendationRequest {
    /// Biometric profile
    pub profile: UserBiometricProfile,
    /// Plan goal
    pub goal_type: GoalType,
    /// Diet preference, carried through untouched
    pub diet_type: Option<DietType>,
}

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Protein grams
    pub protein_grams: u32,
    /// Carbohydrate grams
    pub carb_grams: u32,
    /// Fat grams
    pub fat_grams: u32,
}

/// Calories allocated to each meal slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MealDistribution {
    /// Breakfast kcal
    pub breakfast: u32,
    /// Lunch kcal
    pub lunch: u32,
    /// Dinner kcal
    pub dinner: u32,
    /// Snacks kcal
    pub snacks: u32,
}

impl MealDistribution {
    /// Sum across all slots
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.breakfast
            .saturating_add(self.lunch)
            .saturating_add(self.dinner)
            .saturating_add(self.snacks)
    }
}

/// Computed nutrition target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Rounded daily calorie target
    pub daily_calories: u32,
    /// Rounded macro grams
    pub macros: MacroTargets,
    /// Rounded per-slot calories
    pub meal_distribution: MealDistribution,
}

/// Round half-up to the nearest non-negative integer
///
/// Inputs are always positive here, where `f64::round` (half away from zero)
/// coincides with half-up.
#[must_use]
pub fn round_half_up(value: f64) -> u32 {
    value.max(0.0).round() as u32
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_offset`
/// - Male: +5
/// - Everyone else: -161
///
/// The value is not rounded.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn compute_bmr(profile: &UserBiometricProfile, config: &BmrConfig) -> f64 {
    let weight_component = config.msj_weight_coef * profile.weight_kg;
    let height_component = config.msj_height_coef * profile.height_cm;
    let age_component = config.msj_age_coef * f64::from(profile.age_years);

    let sex_constant = match profile.sex {
        Sex::Male => config.msj_male_constant,
        Sex::Other => config.msj_other_constant,
    };

    weight_component + height_component + age_component + sex_constant
}

/// Scale BMR by the activity factor
///
/// - Sedentary: 1.2
/// - Light: 1.375
/// - Moderate: 1.55
/// - Active: 1.725
/// - Very active: 1.9
#[must_use]
pub fn compute_daily_calorie_need(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> f64 {
    let activity_factor = match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Light => config.light,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::Active => config.active,
        ActivityLevel::VeryActive => config.very_active,
    };

    bmr * activity_factor
}

/// Apply the goal multiplier to the daily calorie need
#[must_use]
pub fn target_calories(
    goal_type: GoalType,
    daily_calorie_need: f64,
    config: &GoalAdjustmentConfig,
) -> f64 {
    let multiplier = match goal_type {
        GoalType::WeightLoss => config.weight_loss,
        GoalType::WeightGain => config.weight_gain,
        GoalType::MuscleGain => config.muscle_gain,
        GoalType::General => config.general,
    };

    daily_calorie_need * multiplier
}

/// Select the macro split for a goal
#[must_use]
pub const fn macro_split_for_goal(goal_type: GoalType, config: &MacroRatioConfig) -> MacroSplit {
    match goal_type {
        GoalType::MuscleGain => config.muscle_gain,
        GoalType::WeightLoss => config.weight_loss,
        GoalType::WeightGain | GoalType::General => config.default,
    }
}

fn macro_targets(target: f64, split: MacroSplit) -> MacroTargets {
    MacroTargets {
        protein_grams: round_half_up(target * split.protein / PROTEIN_KCAL_PER_GRAM),
        carb_grams: round_half_up(target * split.carbs / CARB_KCAL_PER_GRAM),
        fat_grams: round_half_up(target * split.fat / FAT_KCAL_PER_GRAM),
    }
}

fn meal_distribution(target: f64, config: &MealDistributionConfig) -> MealDistribution {
    // Each slot is rounded on its own; the total may drift a few kcal from daily_calories.
    MealDistribution {
        breakfast: round_half_up(target * config.breakfast),
        lunch: round_half_up(target * config.lunch),
        dinner: round_half_up(target * config.dinner),
        snacks: round_half_up(target * config.snacks),
    }
}

/// Build the rounded recommendation from a daily calorie need
///
/// # Errors
///
/// Returns [`NutritionError::InvalidProfile`] if the calorie need is not finite and positive,
/// which happens when a profile's BMR falls to zero or below, or if the goal-adjusted
/// target does not fit the integer outputs
pub fn build_recommendation(
    goal_type: GoalType,
    daily_calorie_need: f64,
    config: &NutritionConfig,
) -> Result<RecommendationResult, NutritionError> {
    if !daily_calorie_need.is_finite() || daily_calorie_need <= 0.0 {
        return Err(NutritionError::invalid_profile(
            "daily_calorie_need",
            format!("profile yields a non-positive energy need ({daily_calorie_need})"),
        ));
    }

    let target = target_calories(goal_type, daily_calorie_need, &config.goal_adjustments);
    if !target.is_finite() || target >= f64::from(u32::MAX) {
        return Err(NutritionError::invalid_profile(
            "daily_calorie_need",
            format!("profile yields an implausibly large energy target ({target})"),
        ));
    }

    let split = macro_split_for_goal(goal_type, &config.macro_ratios);

    Ok(RecommendationResult {
        daily_calories: round_half_up(target),
        macros: macro_targets(target, split),
        meal_distribution: meal_distribution(target, &config.meal_distribution),
    })
}

/// Run the full pipeline for one request
///
/// # Errors
///
/// Returns an error if the profile produces a non-positive energy need
pub fn recommend(
    request: &RecommendationRequest,
    config: &NutritionConfig,
) -> Result<RecommendationResult, NutritionError> {
    let profile = &request.profile;
    let bmr = compute_bmr(profile, &config.bmr);
    let daily_calorie_need =
        compute_daily_calorie_need(bmr, profile.activity_level, &config.activity_factors);
    let result = build_recommendation(request.goal_type, daily_calorie_need, config)?;

    debug!(
        goal_type = %request.goal_type,
        activity_level = %profile.activity_level,
        diet_type = request.diet_type.map(DietType::as_str),
        bmr,
        daily_calorie_need,
        daily_calories = result.daily_calories,
        "Computed nutrition recommendation"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(sex: Sex, activity_level: ActivityLevel) -> UserBiometricProfile {
        UserBiometricProfile::new(70.0, 175.0, 28, sex, activity_level).unwrap()
    }

    #[test]
    fn test_bmr_male_and_other_offsets() {
        let config = BmrConfig::default();
        let male = compute_bmr(&profile(Sex::Male, ActivityLevel::Moderate), &config);
        let other = compute_bmr(&profile(Sex::Other, ActivityLevel::Moderate), &config);

        assert!((male - 1658.75).abs() < 1e-9);
        assert!((male - other - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_activity_level_parsing() {
        assert_eq!(parse_activity_level("very_active"), Ok(ActivityLevel::VeryActive));
        assert_eq!(parse_activity_level(" Moderate "), Ok(ActivityLevel::Moderate));
        assert_eq!(parse_activity_level("very-active"), Ok(ActivityLevel::VeryActive));
        assert_eq!(
            parse_activity_level("extreme"),
            Err(NutritionError::UnknownActivityLevel("extreme".into()))
        );
        assert!(parse_activity_level("").is_err());
    }

    #[test]
    fn test_goal_fallback_is_general() {
        assert_eq!(GoalType::from_str_or_default("muscle_gain"), GoalType::MuscleGain);
        assert_eq!(GoalType::from_str_or_default("keto"), GoalType::General);
    }

    #[test]
    fn test_diet_type_accepts_legacy_spelling() {
        assert_eq!("non-veg".parse::<DietType>(), Ok(DietType::NonVeg));
        assert_eq!("non_veg".parse::<DietType>(), Ok(DietType::NonVeg));
        assert!("pescatarian".parse::<DietType>().is_err());
    }

    #[test]
    fn test_profile_rejects_zero_values() {
        let zero_weight = UserBiometricProfile::new(0.0, 175.0, 28, Sex::Male, ActivityLevel::Light);
        assert!(matches!(
            zero_weight,
            Err(NutritionError::InvalidProfile { field: "weight_kg", .. })
        ));

        let zero_age = UserBiometricProfile::new(70.0, 175.0, 0, Sex::Male, ActivityLevel::Light);
        assert!(matches!(
            zero_age,
            Err(NutritionError::InvalidProfile { field: "age_years", .. })
        ));

        let nan_height =
            UserBiometricProfile::new(70.0, f64::NAN, 28, Sex::Male, ActivityLevel::Light);
        assert!(nan_height.is_err());
    }

    #[test]
    fn test_build_recommendation_rejects_non_positive_need() {
        let config = NutritionConfig::default();
        assert!(build_recommendation(GoalType::General, 0.0, &config).is_err());
        assert!(build_recommendation(GoalType::General, -12.0, &config).is_err());
        assert!(build_recommendation(GoalType::General, f64::NAN, &config).is_err());
    }

    #[test]
    fn test_build_recommendation_rejects_unrepresentable_target() {
        let config = NutritionConfig::default();
        assert!(build_recommendation(GoalType::WeightGain, 4.0e9, &config).is_err());
        assert!(build_recommendation(GoalType::General, f64::INFINITY, &config).is_err());
    }

    #[test]
    fn test_meal_total_saturates() {
        let meals = MealDistribution {
            breakfast: u32::MAX,
            lunch: 1,
            dinner: 1,
            snacks: 1,
        };
        assert_eq!(meals.total(), u32::MAX);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(205.5), 206);
        assert_eq!(round_half_up(205.49), 205);
        assert_eq!(round_half_up(0.0), 0);
    }

    #[test]
    fn test_error_kind_mapping() {
        let app: AppError = NutritionError::UnknownActivityLevel("extreme".into()).into();
        assert_eq!(app.code, ErrorCode::UnknownActivityLevel);
        assert_eq!(app.context.details["activity_level"], "extreme");

        let app: AppError = NutritionError::invalid_profile("weight_kg", "must be > 0").into();
        assert_eq!(app.code, ErrorCode::InvalidProfile);
        assert_eq!(app.context.details["field"], "weight_kg");
    }
}
