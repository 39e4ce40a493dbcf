// ABOUTME: Application constants for model identifiers, storage names, and defaults
// ABOUTME: Centralizes values shared between the generation client, caches, and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Generation model identifiers and endpoints
pub mod models {
    /// Default text model for plan and alternatives generation
    pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";

    /// Default image-capable model for exercise photos
    pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

    /// Base URL for the Generative Language API
    pub const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

    /// Aspect ratio requested for exercise photos
    pub const IMAGE_ASPECT_RATIO: &str = "1:1";

    /// MIME type assumed when an inline image part omits one
    pub const DEFAULT_IMAGE_MIME_TYPE: &str = "image/png";

    /// Number of alternatives requested per swap
    pub const ALTERNATIVES_COUNT: usize = 3;
}

/// Local storage names
pub mod storage {
    /// Application directory name under the platform data directory
    pub const APP_DIR_NAME: &str = "gemini-fit";

    /// File name of the persistent image cache
    pub const IMAGE_DB_FILE: &str = "images.db";

    /// File name of the saved preferences
    pub const PREFERENCES_FILE: &str = "preferences.json";
}

/// Environment variable names
pub mod env_vars {
    /// API key for the Generative Language API
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";

    /// Text model override
    pub const TEXT_MODEL: &str = "GEMINI_FIT_TEXT_MODEL";

    /// Image model override
    pub const IMAGE_MODEL: &str = "GEMINI_FIT_IMAGE_MODEL";

    /// API base URL override
    pub const API_BASE_URL: &str = "GEMINI_FIT_API_BASE_URL";

    /// Persistent image cache path override
    pub const IMAGE_DB: &str = "GEMINI_FIT_IMAGE_DB";

    /// Preferences file path override
    pub const PREFERENCES: &str = "GEMINI_FIT_PREFERENCES";

    /// Disable the persistent image tier
    pub const DISABLE_PERSISTENT_CACHE: &str = "GEMINI_FIT_DISABLE_PERSISTENT_CACHE";
}

/// Default training preferences
pub mod preferences {
    /// Default training days per week
    pub const DEFAULT_DAYS_PER_WEEK: u8 = 4;

    /// Default maximum consecutive rest days
    pub const DEFAULT_MAX_CONSECUTIVE_REST_DAYS: u8 = 2;

    /// Lowest training days per week offered by the input surface
    pub const MIN_DAYS_PER_WEEK: u8 = 1;

    /// Highest training days per week offered by the input surface
    pub const MAX_DAYS_PER_WEEK: u8 = 7;

    /// Lowest consecutive rest days offered by the input surface
    pub const MIN_REST_DAYS: u8 = 1;

    /// Highest consecutive rest days offered by the input surface
    pub const MAX_REST_DAYS: u8 = 3;
}

/// Service names used in structured logs
pub mod service_names {
    /// Main service name
    pub const GEMINI_FIT: &str = "gemini-fit";
}
