// ABOUTME: Application-wide constants organized by domain
// ABOUTME: Energy densities, network defaults, endpoint paths, and request limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than a single flat list.

/// Energy density of macronutrients (Atwater general factors)
pub mod energy {
    /// Protein: 4 kcal per gram
    pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
    /// Carbohydrate: 4 kcal per gram
    pub const CARB_KCAL_PER_GRAM: f64 = 4.0;
    /// Fat: 9 kcal per gram
    pub const FAT_KCAL_PER_GRAM: f64 = 9.0;
}

/// Tolerances used when validating ratio tables
pub mod tolerances {
    /// Maximum deviation from 1.0 for a set of shares that must sum to one
    pub const SHARE_SUM_EPSILON: f64 = 0.001;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Default service name
    pub const DIETDELISH_SERVER: &str = "dietdelish-server";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// API endpoints
pub mod endpoints {
    /// Liveness probe
    pub const HEALTH_CHECK: &str = "/health";
    /// Readiness probe
    pub const READY_CHECK: &str = "/ready";
    /// Nutrition recommendation endpoint
    pub const MEAL_RECOMMENDATIONS: &str = "/meal-recommendations";
    /// BMI calculator endpoint
    pub const BMI: &str = "/bmi";
}

/// Request handling limits
pub mod limits {
    /// Default request timeout in seconds
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Default maximum request body size (64 KiB)
    pub const DEFAULT_MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;
}
