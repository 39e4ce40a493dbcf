// ABOUTME: Main library entry point for the GeminiFit routine generator
// ABOUTME: Wires configuration, logging, the model client, image caching, and orchestration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Gemini Fit
//!
//! Generates weekly gym routines from a handful of training preferences using
//! schema-constrained prompts against Google's Gemini models.
//!
//! ## Features
//!
//! - **Typed plans**: model output is constrained by a response schema and parsed
//!   into [`models::WorkoutPlan`]
//! - **Exercise swaps**: injury-aware alternatives with a rationale per exercise
//! - **Exercise photos**: generated on demand and cached in memory and in SQLite
//!
//! ## Architecture
//!
//! - **`llm`**: the [`llm::GenerativeModel`] boundary and its Gemini implementation
//! - **`routine`**: prompts, response schemas, and [`routine::RoutineService`]
//! - **`cache`**: the two-tier [`cache::ExerciseImageCache`]
//! - **`preferences`**: last-used preferences on disk
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use gemini_fit::config::AppConfig;
//! use gemini_fit::errors::AppResult;
//! use gemini_fit::llm::GeminiProvider;
//! use gemini_fit::models::UserPreferences;
//! use gemini_fit::routine::RoutineService;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let provider = GeminiProvider::from_config(&config)?;
//!     let service = RoutineService::new(Arc::new(provider), config.models.clone());
//!
//!     let plan = service.generate_plan(&UserPreferences::default()).await?;
//!     println!("{}: {} days", plan.plan_name, plan.schedule.len());
//!     Ok(())
//! }
//! ```

/// Two-tier exercise image cache
pub mod cache;

/// Environment-based configuration
pub mod config;

/// Generative model client abstraction
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Saved user preferences
pub mod preferences;

/// Prompt building and plan orchestration
pub mod routine;

pub use gemini_fit_core::{constants, errors, models};
