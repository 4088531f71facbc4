// ABOUTME: HTTP handlers exposing the recommendation engine and BMI calculator
// ABOUTME: Parses loose JSON payloads, runs the pure engine, and maps failures to structured errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition routes
//!
//! Bodies are read as raw bytes and parsed here so that malformed or oversized
//! bodies are reported with the same `ErrorResponse` envelope as every other failure.

use crate::constants::endpoints;
use crate::errors::{AppError, AppResult};
use crate::intelligence::bmi::{calculate_bmi, BmiAssessment};
use crate::intelligence::nutrition_calculator::{recommend, RecommendationResult};
use crate::middleware::request_id_from;
use crate::models::nutrition::{BmiPayload, RecommendationPayload};
use crate::server::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::info;

/// Nutrition routes implementation
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create the recommendation and BMI routes
    pub fn routes() -> Router<Arc<AppState>> {
        Router::new()
            .route(
                endpoints::MEAL_RECOMMENDATIONS,
                post(handle_meal_recommendations),
            )
            .route(endpoints::BMI, post(handle_bmi))
    }
}

async fn handle_meal_recommendations(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Json<RecommendationResult>> {
    let payload: RecommendationPayload =
        parse_body(body, &headers, state.server.max_request_body_bytes)?;
    let request = payload
        .into_request()
        .map_err(|e| attach_request_id(e.into(), &headers))?;

    let result =
        recommend(&request, &state.nutrition).map_err(|e| attach_request_id(e.into(), &headers))?;

    info!(
        goal_type = %request.goal_type,
        daily_calories = result.daily_calories,
        "Meal recommendation served"
    );

    Ok(Json(result))
}

async fn handle_bmi(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Json<BmiAssessment>> {
    let payload: BmiPayload = parse_body(body, &headers, state.server.max_request_body_bytes)?;
    let (weight_kg, height_cm) = payload
        .into_measurements()
        .map_err(|e| attach_request_id(e.into(), &headers))?;

    calculate_bmi(weight_kg, height_cm)
        .map(Json)
        .map_err(|e| attach_request_id(e.into(), &headers))
}

fn parse_body<T: DeserializeOwned>(
    body: Result<Bytes, BytesRejection>,
    headers: &HeaderMap,
    limit_bytes: usize,
) -> AppResult<T> {
    let body = body.map_err(|rejection| {
        let error = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::payload_too_large(limit_bytes)
        } else {
            AppError::invalid_format(rejection.body_text())
        };
        attach_request_id(error, headers)
    })?;

    serde_json::from_slice(&body).map_err(|e| attach_request_id(AppError::from(e), headers))
}

fn attach_request_id(error: AppError, headers: &HeaderMap) -> AppError {
    match request_id_from(headers) {
        Some(request_id) => error.with_request_id(request_id),
        None => error,
    }
}
