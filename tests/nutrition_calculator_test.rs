// ABOUTME: Integration tests for the meal recommendation engine
// ABOUTME: Checks the worked weight-loss example, rounding tolerances, and validation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use dietdelish::config::nutrition::NutritionConfig;
use dietdelish::intelligence::{
    build_recommendation, compute_bmr, compute_daily_calorie_need, recommend, ActivityLevel,
    GoalType, NutritionError, RecommendationRequest, RecommendationResult, Sex,
    UserBiometricProfile,
};

const ALL_GOALS: [GoalType; 4] = [
    GoalType::WeightLoss,
    GoalType::WeightGain,
    GoalType::MuscleGain,
    GoalType::General,
];

fn reference_profile() -> UserBiometricProfile {
    UserBiometricProfile::new(70.0, 175.0, 28, Sex::Male, ActivityLevel::Moderate).unwrap()
}

fn sample_profiles() -> Vec<UserBiometricProfile> {
    let mut profiles = Vec::new();
    for (weight, height, age) in [
        (48.0, 152.0, 19),
        (70.0, 175.0, 28),
        (82.5, 168.0, 45),
        (120.0, 190.0, 63),
    ] {
        for sex in [Sex::Male, Sex::Other] {
            for activity_level in ActivityLevel::ALL {
                profiles.push(
                    UserBiometricProfile::new(weight, height, age, sex, activity_level).unwrap(),
                );
            }
        }
    }
    profiles
}

fn run(profile: UserBiometricProfile, goal_type: GoalType) -> RecommendationResult {
    let request = RecommendationRequest {
        profile,
        goal_type,
        diet_type: None,
    };
    recommend(&request, &NutritionConfig::default()).unwrap()
}

#[test]
fn test_weight_loss_worked_example() {
    let result = run(reference_profile(), GoalType::WeightLoss);

    assert_eq!(result.daily_calories, 2057);
    assert_eq!(result.macros.protein_grams, 206);
    assert_eq!(result.macros.carb_grams, 154);
    assert_eq!(result.macros.fat_grams, 69);
    assert_eq!(result.meal_distribution.breakfast, 514);
    assert_eq!(result.meal_distribution.lunch, 720);
    assert_eq!(result.meal_distribution.dinner, 617);
    assert_eq!(result.meal_distribution.snacks, 206);
}

#[test]
fn test_intermediate_values_for_worked_example() {
    let config = NutritionConfig::default();
    let profile = reference_profile();

    let bmr = compute_bmr(&profile, &config.bmr);
    assert!((bmr - 1658.75).abs() < 1e-9);

    let need = compute_daily_calorie_need(bmr, profile.activity_level(), &config.activity_factors);
    assert!((need - 2_571.062_5).abs() < 1e-9);
}

#[test]
fn test_moderate_general_matches_bmr_times_factor() {
    let config = NutritionConfig::default();

    for profile in sample_profiles()
        .into_iter()
        .filter(|p| p.activity_level() == ActivityLevel::Moderate)
    {
        let expected = (compute_bmr(&profile, &config.bmr) * 1.55).round() as u32;
        assert_eq!(run(profile, GoalType::General).daily_calories, expected);
    }
}

#[test]
fn test_macro_energy_close_to_daily_calories() {
    // Three independently rounded grams; fat carries up to 4.5 kcal of rounding error.
    for profile in sample_profiles() {
        for goal_type in ALL_GOALS {
            let result = run(profile, goal_type);
            let macro_kcal = result.macros.protein_grams * 4
                + result.macros.carb_grams * 4
                + result.macros.fat_grams * 9;

            let drift = i64::from(macro_kcal) - i64::from(result.daily_calories);
            assert!(
                drift.abs() <= 9,
                "{goal_type}: macros {macro_kcal} kcal vs {} kcal",
                result.daily_calories
            );
        }
    }
}

#[test]
fn test_meal_slots_close_to_daily_calories() {
    for profile in sample_profiles() {
        for goal_type in ALL_GOALS {
            let result = run(profile, goal_type);
            let drift =
                i64::from(result.meal_distribution.total()) - i64::from(result.daily_calories);
            assert!(drift.abs() <= 4, "{goal_type}: meal drift {drift}");
        }
    }
}

#[test]
fn test_engine_is_idempotent() {
    let first = serde_json::to_vec(&run(reference_profile(), GoalType::MuscleGain)).unwrap();
    let second = serde_json::to_vec(&run(reference_profile(), GoalType::MuscleGain)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_goal_ordering_of_calories() {
    let loss = run(reference_profile(), GoalType::WeightLoss).daily_calories;
    let general = run(reference_profile(), GoalType::General).daily_calories;
    let muscle = run(reference_profile(), GoalType::MuscleGain).daily_calories;
    let gain = run(reference_profile(), GoalType::WeightGain).daily_calories;

    assert!(loss < general);
    assert!(general < muscle);
    assert!(muscle < gain);
}

#[test]
fn test_unknown_goal_uses_general_plan() {
    let fallback = run(reference_profile(), GoalType::from_str_or_default("keto"));
    let general = run(reference_profile(), GoalType::General);
    assert_eq!(fallback, general);
}

#[test]
fn test_zero_age_or_weight_is_invalid_profile() {
    let zero_age = UserBiometricProfile::new(70.0, 175.0, 0, Sex::Male, ActivityLevel::Moderate);
    assert!(matches!(
        zero_age,
        Err(NutritionError::InvalidProfile { field: "age_years", .. })
    ));

    let zero_weight = UserBiometricProfile::new(0.0, 175.0, 28, Sex::Male, ActivityLevel::Moderate);
    assert!(matches!(
        zero_weight,
        Err(NutritionError::InvalidProfile { field: "weight_kg", .. })
    ));
}

#[test]
fn test_unknown_activity_level_is_rejected() {
    let err = "extreme".parse::<ActivityLevel>().unwrap_err();
    assert_eq!(err, NutritionError::UnknownActivityLevel("extreme".into()));
}

#[test]
fn test_implausible_profile_does_not_produce_zero_plan() {
    // Tiny, very old profile: BMR goes negative rather than producing a zero plan.
    let profile =
        UserBiometricProfile::new(1.0, 30.0, 120, Sex::Other, ActivityLevel::Sedentary).unwrap();
    let config = NutritionConfig::default();
    let need = compute_daily_calorie_need(
        compute_bmr(&profile, &config.bmr),
        profile.activity_level(),
        &config.activity_factors,
    );

    assert!(need < 0.0);
    assert!(matches!(
        build_recommendation(GoalType::General, need, &config),
        Err(NutritionError::InvalidProfile { .. })
    ));
}

#[test]
fn test_enormous_profile_is_rejected_instead_of_saturating() {
    let profile =
        UserBiometricProfile::new(1.0e10, 175.0, 28, Sex::Male, ActivityLevel::Moderate).unwrap();
    let request = RecommendationRequest {
        profile,
        goal_type: GoalType::WeightGain,
        diet_type: None,
    };

    assert!(matches!(
        recommend(&request, &NutritionConfig::default()),
        Err(NutritionError::InvalidProfile { field: "daily_calorie_need", .. })
    ));
}
