// ABOUTME: Route assembly for the HTTP API
// ABOUTME: Combines health and nutrition routes and installs the structured 404 fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Liveness and readiness probes
pub mod health;
/// Recommendation engine and BMI endpoints
pub mod nutrition;

pub use health::HealthRoutes;
pub use nutrition::NutritionRoutes;

use crate::errors::AppError;
use crate::server::AppState;
use axum::{http::Uri, Router};
use std::sync::Arc;

/// All application routes bound to their state, without middleware
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(NutritionRoutes::routes())
        .fallback(route_not_found)
        .with_state(state)
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}
