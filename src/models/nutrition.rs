// ABOUTME: Wire payloads for nutrition requests and their conversion into validated engine input
// ABOUTME: Accepts numbers or numeric strings and the legacy storefront field names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Request payloads as they arrive over the wire.
//!
//! Fields are deliberately loose (`serde_json::Value`) so that a missing or
//! non-numeric profile value becomes an `INVALID_PROFILE` failure naming the
//! field, rather than a generic body parse error.

use crate::intelligence::nutrition_calculator::{
    ActivityLevel, DietType, GoalType, NutritionError, RecommendationRequest, Sex,
    UserBiometricProfile,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Profile section of a recommendation request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfilePayload {
    /// Body weight (kg)
    #[serde(default, alias = "weight", alias = "weightKg")]
    pub weight_kg: Option<Value>,
    /// Height (cm)
    #[serde(default, alias = "height", alias = "heightCm")]
    pub height_cm: Option<Value>,
    /// Age (whole years)
    #[serde(default, alias = "age", alias = "ageYears")]
    pub age_years: Option<Value>,
    /// "male" or anything else
    #[serde(default, alias = "gender")]
    pub sex: Option<String>,
    /// One of the five activity levels
    #[serde(default, alias = "activityLevel")]
    pub activity_level: Option<Value>,
}

/// Body of `POST /meal-recommendations`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationPayload {
    /// Biometric profile
    #[serde(default)]
    pub profile: Option<ProfilePayload>,
    /// Plan goal; unknown values of any JSON type fall back to the general plan
    #[serde(default, alias = "plan_type", alias = "goalType")]
    pub goal_type: Option<Value>,
    /// Diet preference
    #[serde(default, alias = "dietType")]
    pub diet_type: Option<String>,
}

/// Body of `POST /bmi`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BmiPayload {
    /// Body weight (kg)
    #[serde(default, alias = "weight", alias = "weightKg")]
    pub weight_kg: Option<Value>,
    /// Height (cm)
    #[serde(default, alias = "height", alias = "heightCm")]
    pub height_cm: Option<Value>,
}

impl ProfilePayload {
    /// Validate into a [`UserBiometricProfile`]
    ///
    /// Numeric fields are checked before the activity level.
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` for missing or non-positive numbers and
    /// `UnknownActivityLevel` for an absent or unrecognized level
    pub fn into_profile(self) -> Result<UserBiometricProfile, NutritionError> {
        let weight_kg = numeric_field("weight_kg", self.weight_kg.as_ref())?;
        let height_cm = numeric_field("height_cm", self.height_cm.as_ref())?;
        let age_years = whole_years(numeric_field("age_years", self.age_years.as_ref())?)?;

        let activity_level = match self.activity_level {
            Some(Value::String(label)) => label.parse::<ActivityLevel>()?,
            Some(Value::Null) | None => {
                return Err(NutritionError::UnknownActivityLevel(String::new()))
            }
            Some(other) => return Err(NutritionError::UnknownActivityLevel(other.to_string())),
        };

        let sex = self
            .sex
            .as_deref()
            .map_or(Sex::Other, Sex::from_label);

        UserBiometricProfile::new(weight_kg, height_cm, age_years, sex, activity_level)
    }
}

impl RecommendationPayload {
    /// Validate into a [`RecommendationRequest`]
    ///
    /// # Errors
    ///
    /// Returns an error if the profile is missing or invalid, or the diet type is unrecognized
    pub fn into_request(self) -> Result<RecommendationRequest, NutritionError> {
        let profile = self
            .profile
            .ok_or_else(|| NutritionError::invalid_profile("profile", "is required"))?
            .into_profile()?;

        let goal_type = match self.goal_type {
            Some(Value::String(label)) => GoalType::from_str_or_default(&label),
            Some(Value::Null) | None => GoalType::General,
            Some(other) => GoalType::from_str_or_default(&other.to_string()),
        };

        let diet_type = self
            .diet_type
            .as_deref()
            .map(str::parse::<DietType>)
            .transpose()?;

        Ok(RecommendationRequest {
            profile,
            goal_type,
            diet_type,
        })
    }
}

impl BmiPayload {
    /// Extract weight and height as positive numbers
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` naming the first missing or non-positive field
    pub fn into_measurements(self) -> Result<(f64, f64), NutritionError> {
        Ok((
            numeric_field("weight_kg", self.weight_kg.as_ref())?,
            numeric_field("height_cm", self.height_cm.as_ref())?,
        ))
    }
}

fn numeric_field(field: &'static str, value: Option<&Value>) -> Result<f64, NutritionError> {
    let number = match value {
        None | Some(Value::Null) => {
            return Err(NutritionError::invalid_profile(field, "is required"))
        }
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    }
    .ok_or_else(|| NutritionError::invalid_profile(field, "must be a number"))?;

    if !number.is_finite() || number <= 0.0 {
        return Err(NutritionError::invalid_profile(
            field,
            format!("must be greater than 0, got {number}"),
        ));
    }

    Ok(number)
}

fn whole_years(age: f64) -> Result<u32, NutritionError> {
    if age.fract() != 0.0 || age > f64::from(u32::MAX) {
        return Err(NutritionError::invalid_profile(
            "age_years",
            format!("must be a whole number of years, got {age}"),
        ));
    }
    Ok(age as u32)
}
