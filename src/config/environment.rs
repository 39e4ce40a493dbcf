// ABOUTME: Environment configuration for model selection, API access, and local storage paths
// ABOUTME: Reads GEMINI_* variables once at startup into a typed AppConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! | Variable | Default |
//! |----------|---------|
//! | `GEMINI_API_KEY` | required by the Gemini provider |
//! | `GEMINI_FIT_TEXT_MODEL` | `gemini-3-flash-preview` |
//! | `GEMINI_FIT_IMAGE_MODEL` | `gemini-2.5-flash-image` |
//! | `GEMINI_FIT_API_BASE_URL` | Generative Language `v1beta` |
//! | `GEMINI_FIT_IMAGE_DB` | `<data dir>/gemini-fit/images.db` |
//! | `GEMINI_FIT_PREFERENCES` | `<data dir>/gemini-fit/preferences.json` |
//! | `GEMINI_FIT_DISABLE_PERSISTENT_CACHE` | `false` |

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::path::PathBuf;

use gemini_fit_core::constants::{env_vars, models, storage};
use gemini_fit_core::errors::{AppError, AppResult};
use tracing::{debug, warn};

/// Model identifiers for text and image generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    /// Model used for plans and alternatives
    pub text_model: String,
    /// Model used for exercise photos
    pub image_model: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            text_model: models::DEFAULT_TEXT_MODEL.to_owned(),
            image_model: models::DEFAULT_IMAGE_MODEL.to_owned(),
        }
    }
}

/// Settings for the persistent image tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCacheConfig {
    /// SQLite file backing the persistent tier
    pub db_path: PathBuf,
    /// When false the cache runs memory-only
    pub persistent_enabled: bool,
}

/// Application configuration loaded from the environment
#[derive(Clone)]
pub struct AppConfig {
    /// API key for the Generative Language API
    pub api_key: Option<String>,
    /// Base URL of the Generative Language API
    pub api_base_url: String,
    /// Text and image model identifiers
    pub models: ModelConfig,
    /// Persistent image tier settings
    pub image_cache: ImageCacheConfig,
    /// Saved preferences file
    pub preferences_path: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a boolean flag holds an unparseable value.
    pub fn from_env() -> AppResult<Self> {
        let data_dir = default_data_dir();

        let persistent_disabled = parse_bool_env(env_vars::DISABLE_PERSISTENT_CACHE)?;

        let config = Self {
            api_key: env::var(env_vars::GEMINI_API_KEY)
                .ok()
                .filter(|key| !key.trim().is_empty()),
            api_base_url: env_var_or(env_vars::API_BASE_URL, models::API_BASE_URL),
            models: ModelConfig {
                text_model: env_var_or(env_vars::TEXT_MODEL, models::DEFAULT_TEXT_MODEL),
                image_model: env_var_or(env_vars::IMAGE_MODEL, models::DEFAULT_IMAGE_MODEL),
            },
            image_cache: ImageCacheConfig {
                db_path: env::var(env_vars::IMAGE_DB)
                    .map_or_else(|_| data_dir.join(storage::IMAGE_DB_FILE), PathBuf::from),
                persistent_enabled: !persistent_disabled,
            },
            preferences_path: env::var(env_vars::PREFERENCES)
                .map_or_else(|_| data_dir.join(storage::PREFERENCES_FILE), PathBuf::from),
        };

        debug!(
            text_model = %config.models.text_model,
            image_model = %config.models.image_model,
            image_db = %config.image_cache.db_path.display(),
            persistent_cache = config.image_cache.persistent_enabled,
            "Configuration loaded from environment"
        );

        Ok(config)
    }

    /// API key, or a `ConfigMissing` error naming the variable
    ///
    /// # Errors
    ///
    /// Returns an error if `GEMINI_API_KEY` was not set.
    pub fn require_api_key(&self) -> AppResult<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            AppError::config_missing(format!(
                "{} environment variable not set",
                env_vars::GEMINI_API_KEY
            ))
        })
    }
}

impl Debug for AppConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_base_url", &self.api_base_url)
            .field("models", &self.models)
            .field("image_cache", &self.image_cache)
            .field("preferences_path", &self.preferences_path)
            .finish()
    }
}

/// Platform data directory for `GeminiFit`, falling back to the working directory
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir().map_or_else(
        || {
            warn!("No platform data directory available, using current directory");
            PathBuf::from(".").join(storage::APP_DIR_NAME)
        },
        |dir| dir.join(storage::APP_DIR_NAME),
    )
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_bool_env(key: &str) -> AppResult<bool> {
    match env::var(key) {
        Err(_) => Ok(false),
        Ok(value) => match value.trim().to_lowercase().as_str() {
            "" | "0" | "false" | "no" => Ok(false),
            "1" | "true" | "yes" => Ok(true),
            other => Err(AppError::config_invalid(format!(
                "{key} must be a boolean, got '{other}'"
            ))),
        },
    }
}
