// ABOUTME: HTTP server assembly: shared state, middleware stack, listener, and graceful shutdown
// ABOUTME: Wraps the routes with request IDs, tracing, CORS, timeout, and body limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP server
//!
//! Application state is built once at startup and handed to every handler
//! through axum's `State` extractor; nothing is read from globals at request time.

use crate::config::environment::ServerConfig;
use crate::config::nutrition::NutritionConfig;
use crate::errors::{AppError, AppResult};
use crate::middleware::{create_request_span, setup_cors, RequestIdGenerator};
use crate::routes;
use axum::{body::Body, extract::DefaultBodyLimit, http::Request, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

/// State shared by all handlers
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Engine coefficients
    pub nutrition: NutritionConfig,
    /// Server settings
    pub server: ServerConfig,
}

impl AppState {
    /// Bundle configuration into shared state
    #[must_use]
    pub fn new(nutrition: NutritionConfig, server: ServerConfig) -> Self {
        Self { nutrition, server }
    }
}

/// Build the full application with middleware
///
/// The body limit is enforced by axum's extractors so an oversized body is
/// rejected inside the handler and reported with the usual error envelope.
pub fn build_app(state: Arc<AppState>) -> Router {
    let server = state.server.clone();

    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(RequestIdGenerator))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| create_request_span(request)),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(setup_cors(&server.cors))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(DefaultBodyLimit::max(server.max_request_body_bytes));

    routes::router(state).layer(middleware)
}

/// Bind the listener and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn serve(state: Arc<AppState>) -> AppResult<()> {
    let address = state.server.bind_address();
    let listener = TcpListener::bind(&address).await.map_err(|e| {
        AppError::internal(format!("Failed to bind {address}")).with_source(e)
    })?;

    info!(address = %address, "HTTP server listening");

    axum::serve(listener, build_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal("HTTP server terminated unexpectedly").with_source(e))?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
