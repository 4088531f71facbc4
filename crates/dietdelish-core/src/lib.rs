// ABOUTME: Core types and constants for the DietDelish nutrition service
// ABOUTME: Foundation crate with error handling and nutrition constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `DietDelish` Core
//!
//! Foundation crate providing shared types and constants for the `DietDelish`
//! nutrition service. It changes rarely, which keeps incremental builds of the
//! main crate cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ErrorResponse`
//! - **constants**: Energy densities, network defaults, and endpoint paths

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;
