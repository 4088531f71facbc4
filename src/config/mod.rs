// ABOUTME: Configuration management for the server and the nutrition engine
// ABOUTME: Environment-driven settings with defaults and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// HTTP server settings from the environment
pub mod environment;
/// Engine coefficients, overrides, and validation
pub mod nutrition;
