// ABOUTME: Tests for environment-driven server and nutrition configuration
// ABOUTME: Serialized because they mutate process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use dietdelish::config::environment::ServerConfig;
use dietdelish::config::nutrition::{ConfigError, NutritionConfig};
use dietdelish::errors::{AppError, ErrorCode};
use serial_test::serial;
use std::env;

const SERVER_VARS: [&str; 5] = [
    "HOST",
    "HTTP_PORT",
    "CORS_ALLOWED_ORIGINS",
    "REQUEST_TIMEOUT_SECS",
    "MAX_REQUEST_BODY_BYTES",
];

const NUTRITION_VARS: [&str; 4] = [
    "DIETDELISH_ACTIVITY_MODERATE",
    "DIETDELISH_GOAL_WEIGHT_LOSS",
    "DIETDELISH_GOAL_GENERAL",
    "DIETDELISH_MEAL_SNACKS",
];

fn clear(vars: &[&str]) {
    for var in vars {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_server_defaults() {
    clear(&SERVER_VARS);

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 8081);
    assert_eq!(config.bind_address(), "0.0.0.0:8081");
    assert!(config.cors.allows_any_origin());
    assert_eq!(config.request_timeout().as_secs(), 30);
    assert_eq!(config.max_request_body_bytes, 64 * 1024);
}

#[test]
#[serial]
fn test_server_env_overrides() {
    clear(&SERVER_VARS);
    env::set_var("HOST", "127.0.0.1");
    env::set_var("HTTP_PORT", "9090");
    env::set_var(
        "CORS_ALLOWED_ORIGINS",
        "https://shop.example.com, https://admin.example.com",
    );

    let config = ServerConfig::from_env().unwrap();
    clear(&SERVER_VARS);

    assert_eq!(config.bind_address(), "127.0.0.1:9090");
    assert!(!config.cors.allows_any_origin());
    assert_eq!(config.cors.allowed_origins.len(), 2);
    assert!(config.summary().contains("https://admin.example.com"));
}

#[test]
#[serial]
fn test_server_rejects_unparsable_port() {
    clear(&SERVER_VARS);
    env::set_var("HTTP_PORT", "eighty");

    let result = ServerConfig::from_env();
    clear(&SERVER_VARS);

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_nutrition_defaults_validate() {
    clear(&NUTRITION_VARS);

    let config = NutritionConfig::load().unwrap();
    assert_eq!(config, NutritionConfig::default());
    assert!((config.activity_factors.moderate - 1.55).abs() < f64::EPSILON);
    assert!((config.goal_adjustments.weight_loss - 0.80).abs() < f64::EPSILON);
    assert!((config.meal_distribution.total() - 1.0).abs() < 1e-9);
}

#[test]
#[serial]
fn test_nutrition_env_override_applied() {
    clear(&NUTRITION_VARS);
    env::set_var("DIETDELISH_GOAL_WEIGHT_LOSS", "0.85");

    let config = NutritionConfig::load();
    clear(&NUTRITION_VARS);

    assert!((config.unwrap().goal_adjustments.weight_loss - 0.85).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_nutrition_env_override_must_parse() {
    clear(&NUTRITION_VARS);
    env::set_var("DIETDELISH_ACTIVITY_MODERATE", "fast");

    let result = NutritionConfig::load();
    clear(&NUTRITION_VARS);

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_meal_shares_must_sum_to_one() {
    clear(&NUTRITION_VARS);
    env::set_var("DIETDELISH_MEAL_SNACKS", "0.20");

    let result = NutritionConfig::load();
    clear(&NUTRITION_VARS);

    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::InvalidWeights(_)));

    let app: AppError = err.into();
    assert_eq!(app.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_general_goal_multiplier_not_overridable() {
    clear(&NUTRITION_VARS);
    env::set_var("DIETDELISH_GOAL_GENERAL", "1.05");

    let config = NutritionConfig::load();
    clear(&NUTRITION_VARS);

    assert!((config.unwrap().goal_adjustments.general - 1.0).abs() < f64::EPSILON);
}
