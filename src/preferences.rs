// ABOUTME: Persists the last-used training preferences as a JSON file
// ABOUTME: Missing or unreadable files fall back to defaults with a warning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use gemini_fit_core::errors::{AppError, AppResult};
use gemini_fit_core::models::UserPreferences;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// JSON file holding the user's most recent preferences
#[derive(Debug, Clone)]
pub struct PreferencesStore {
    path: PathBuf,
}

impl PreferencesStore {
    /// Store backed by the file at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load saved preferences
    ///
    /// Saved fields are merged one by one over the defaults, so a field that
    /// is absent or invalid keeps its default while the others are kept. A
    /// missing file yields defaults silently; an unreadable or malformed one
    /// yields defaults with a warning.
    pub async fn load(&self) -> UserPreferences {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No saved preferences, using defaults");
                return UserPreferences::default();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read preferences");
                return UserPreferences::default();
            }
        };

        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(saved)) => self.merge_over_defaults(saved),
            Ok(_) => {
                warn!(path = %self.path.display(), "Preferences file is not a JSON object");
                UserPreferences::default()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring malformed preferences file");
                UserPreferences::default()
            }
        }
    }

    fn merge_over_defaults(&self, saved: Map<String, Value>) -> UserPreferences {
        let defaults = UserPreferences::default();
        let Ok(Value::Object(mut merged)) = serde_json::to_value(&defaults) else {
            return defaults;
        };

        for (field, value) in saved {
            let mut candidate = merged.clone();
            candidate.insert(field.clone(), value);
            match serde_json::from_value::<UserPreferences>(Value::Object(candidate.clone())) {
                Ok(_) => merged = candidate,
                Err(e) => warn!(
                    path = %self.path.display(),
                    field = %field,
                    error = %e,
                    "Ignoring invalid saved preference"
                ),
            }
        }

        serde_json::from_value(Value::Object(merged)).unwrap_or(defaults)
    }

    /// Save preferences, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be written
    pub async fn save(&self, prefs: &UserPreferences) -> AppResult<()> {
        let json = serde_json::to_string_pretty(prefs)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                AppError::storage(format!(
                    "Failed to create preferences directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        tokio::fs::write(&self.path, json).await.map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "Failed to save preferences");
            AppError::storage(format!("Failed to save preferences: {e}")).with_source(e)
        })?;

        debug!(path = %self.path.display(), "Saved preferences");
        Ok(())
    }
}
