// ABOUTME: Wire-level data models for HTTP payloads
// ABOUTME: Loose request shapes converted into validated engine types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Recommendation and BMI request payloads
pub mod nutrition;

pub use nutrition::{BmiPayload, ProfilePayload, RecommendationPayload};
