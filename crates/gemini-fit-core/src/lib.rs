// ABOUTME: Core types and constants for the GeminiFit workout routine generator
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Gemini Fit Core
//!
//! Foundation crate providing shared types and constants for the `GeminiFit`
//! routine generator. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Model identifiers, storage names, and preference defaults
//! - **models**: Preferences, exercises, day routines, and workout plans

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (preferences, exercises, plans)
pub mod models;
