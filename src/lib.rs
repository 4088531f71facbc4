// ABOUTME: Main library entry point for the DietDelish nutrition service
// ABOUTME: Exposes the recommendation engine, its configuration, and the HTTP transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `DietDelish`
//!
//! Nutrition targets for a meal-subscription storefront. Given a biometric
//! profile, a plan goal, and a diet preference, the engine returns a daily
//! calorie target, macronutrient grams, and a breakfast/lunch/dinner/snacks
//! calorie split.
//!
//! ## Architecture
//!
//! - **Intelligence**: the pure recommendation engine and BMI calculator
//! - **Config**: validated engine coefficients and server settings
//! - **Models**: loose wire payloads and their validation
//! - **Routes / Server**: axum transport with CORS preflight support
//!
//! ## Example Usage
//!
//! ```rust
//! use dietdelish::config::nutrition::NutritionConfig;
//! use dietdelish::intelligence::{
//!     recommend, ActivityLevel, GoalType, RecommendationRequest, Sex, UserBiometricProfile,
//! };
//!
//! let profile = UserBiometricProfile::new(70.0, 175.0, 28, Sex::Male, ActivityLevel::Moderate)?;
//! let request = RecommendationRequest { profile, goal_type: GoalType::WeightLoss, diet_type: None };
//! let result = recommend(&request, &NutritionConfig::default())?;
//! assert_eq!(result.daily_calories, 2057);
//! # Ok::<(), dietdelish::intelligence::NutritionError>(())
//! ```

/// Error types and constants shared with the core crate
pub use dietdelish_core::{constants, errors};

/// Configuration management
pub mod config;

/// Recommendation engine and BMI calculator
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Wire payloads
pub mod models;

/// HTTP routes
pub mod routes;

/// Server assembly and lifecycle
pub mod server;
