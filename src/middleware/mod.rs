// ABOUTME: HTTP middleware for CORS, request IDs, and request tracing
// ABOUTME: Provides request ID generation and span creation for structured logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Cross-origin resource sharing
pub mod cors;
/// Request correlation IDs
pub mod request_id;

pub use cors::setup_cors;
pub use request_id::{create_request_span, request_id_from, RequestIdGenerator, REQUEST_ID_HEADER};
