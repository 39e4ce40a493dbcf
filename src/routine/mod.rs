// ABOUTME: Routine orchestration module: prompts, response schemas, and the service
// ABOUTME: Turns preferences into validated plans, alternatives, and images
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Routine orchestration
//!
//! [`RoutineService`] is the single entry point for talking to the model.
//! Prompts and response schemas live in their own modules so they can be
//! inspected and tested without a network.

/// Prompt builders
pub mod prompts;
/// Response schemas
pub mod schema;
mod service;

pub use service::RoutineService;
