// ABOUTME: SQLite-backed persistent image store surviving process restarts
// ABOUTME: Upserts data URI payloads keyed by exercise name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ImageStore;
use async_trait::async_trait;
use chrono::Utc;
use gemini_fit_core::errors::{AppError, AppResult};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Row, SqlitePool};
use std::path::Path;
use tracing::debug;

/// Persistent image store backed by a local SQLite file
#[derive(Clone, Debug)]
pub struct SqliteImageStore {
    pool: SqlitePool,
}

impl SqliteImageStore {
    /// Open (creating if needed) the image database at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// database cannot be opened or migrated
    pub async fn open(path: &Path) -> AppResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                AppError::storage(format!(
                    "Failed to create image cache directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(|e| AppError::storage(format!("Failed to open image cache: {e}")))?;

        let store = Self::from_pool(pool);
        store.migrate().await?;
        debug!(path = %path.display(), "Opened persistent image store");
        Ok(store)
    }

    /// Wrap an existing pool; call [`Self::migrate`] before use
    #[must_use]
    pub const fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the image table if it does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the schema statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercise_images (
                name TEXT PRIMARY KEY,
                payload TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::storage(format!("Failed to create image table: {e}")))?;

        Ok(())
    }

    /// Number of stored images
    ///
    /// # Errors
    ///
    /// Returns an error if the count query fails
    pub async fn count(&self) -> AppResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM exercise_images")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::storage(format!("Failed to count cached images: {e}")))?;

        Ok(row.get("total"))
    }

    /// Close the underlying pool
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ImageStore for SqliteImageStore {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let row = sqlx::query(
            r"
            SELECT payload
            FROM exercise_images
            WHERE name = ?1
            ",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::storage(format!("Failed to read cached image: {e}")))?;

        Ok(row.map(|row| row.get("payload")))
    }

    async fn put(&self, key: &str, value: &str) -> AppResult<()> {
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r"
            INSERT INTO exercise_images (name, payload, created_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(name) DO UPDATE SET
                payload = ?2,
                created_at = ?3
            ",
        )
        .bind(key)
        .bind(value)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::storage(format!("Failed to write cached image: {e}")))?;

        Ok(())
    }
}
