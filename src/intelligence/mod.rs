// ABOUTME: Nutrition intelligence: calorie and macro recommendation plus BMI assessment
// ABOUTME: Pure computation with no I/O or shared state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// BMI value and weight category
pub mod bmi;
/// Mifflin-St Jeor based recommendation engine
pub mod nutrition_calculator;

pub use bmi::{calculate_bmi, BmiAssessment, BmiCategory};
pub use nutrition_calculator::{
    build_recommendation, compute_bmr, compute_daily_calorie_need, parse_activity_level,
    recommend, ActivityLevel, DietType, GoalType, MacroTargets, MealDistribution,
    NutritionError, RecommendationRequest, RecommendationResult, Sex, UserBiometricProfile,
};
