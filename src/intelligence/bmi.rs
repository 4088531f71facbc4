// ABOUTME: Body Mass Index calculator with WHO adult weight categories
// ABOUTME: Backs the profile page BMI readout with the storefront's advisory messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::nutrition_calculator::NutritionError;
use serde::{Deserialize, Serialize};

/// WHO adult BMI category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI < 18.5
    Underweight,
    /// 18.5 <= BMI < 25
    Normal,
    /// 25 <= BMI < 30
    Overweight,
    /// BMI >= 30
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Advisory text shown next to the value
    #[must_use]
    pub const fn advice(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight - Our nutritionist will help you gain healthy weight",
            Self::Normal => "Normal weight - We'll help you maintain your healthy weight",
            Self::Overweight => "Overweight - Our plans can help you reach a healthier weight",
            Self::Obese => "Obese - We recommend consulting with a healthcare professional",
        }
    }
}

/// BMI value with its category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiAssessment {
    /// BMI rounded to two decimals
    pub bmi: f64,
    /// Category derived from the rounded value
    pub category: BmiCategory,
    /// Advisory text for the category
    pub advice: String,
}

/// Calculate BMI as weight / height(m)^2, rounded to two decimals
///
/// # Errors
///
/// Returns [`NutritionError::InvalidProfile`] if weight or height is not finite and positive
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<BmiAssessment, NutritionError> {
    for (field, value) in [("weight_kg", weight_kg), ("height_cm", height_cm)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(NutritionError::invalid_profile(
                field,
                "must be a finite number greater than 0",
            ));
        }
    }

    let height_m = height_cm / 100.0;
    let bmi = (weight_kg / (height_m * height_m) * 100.0).round() / 100.0;
    let category = BmiCategory::from_bmi(bmi);

    Ok(BmiAssessment {
        bmi,
        category,
        advice: category.advice().to_owned(),
    })
}
