// ABOUTME: Configuration management module for generation, caching, and logging settings
// ABOUTME: Environment-only configuration with typed defaults for every setting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for `GeminiFit`
//!
//! All settings come from environment variables; there is no config file.
//!
//! - **Environment**: API key, model identifiers, and local storage paths
//! - **Types**: Log level and deployment environment enums

/// Environment-driven application configuration
pub mod environment;
/// Core configuration type definitions
pub mod types;

pub use environment::{AppConfig, ImageCacheConfig, ModelConfig};
pub use types::{Environment, LogLevel};
