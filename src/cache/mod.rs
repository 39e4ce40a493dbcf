// ABOUTME: Image cache abstraction layer with pluggable storage tiers
// ABOUTME: Memory and SQLite stores composed by the exercise image cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Cache factory for building the image cache from configuration
pub mod factory;
/// In-memory image store
pub mod memory;
/// SQLite-backed persistent image store
pub mod sqlite;
/// Two-tier exercise image cache
pub mod tiered;

use async_trait::async_trait;
use gemini_fit_core::errors::AppResult;
use serde::{Deserialize, Serialize};

pub use memory::InMemoryImageStore;
pub use sqlite::SqliteImageStore;
pub use tiered::{ExerciseImageCache, ImageGenerator, NoImageGenerator};

/// Key-value store for generated exercise images
///
/// Keys are exercise names, values are data URI payloads. Both operations may
/// fail when the backing store is unavailable; a failed `put` must leave any
/// previously stored value intact.
///
/// # Examples
///
/// ```rust,no_run
/// use gemini_fit::cache::{ImageStore, InMemoryImageStore};
/// # async fn example() -> Result<(), gemini_fit::errors::AppError> {
/// let store = InMemoryImageStore::new();
/// store.put("Goblet Squat", "data:image/png;base64,QUJD").await?;
///
/// if let Some(payload) = store.get("Goblet Squat").await? {
///     println!("cached payload is {} bytes", payload.len());
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Short backend name used in logs
    fn backend(&self) -> &'static str;

    /// Retrieve a stored payload
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store a payload, replacing any previous value for the key
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    async fn put(&self, key: &str, value: &str) -> AppResult<()>;
}

/// Snapshot of image cache counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Lookups answered by the in-memory tier
    pub memory_hits: u64,
    /// Lookups answered by the persistent tier
    pub persistent_hits: u64,
    /// Successful image generations
    pub generations: u64,
    /// Generations that produced no image
    pub generation_failures: u64,
}

impl CacheStats {
    /// Total lookups served without calling the generator
    #[must_use]
    pub const fn hits(&self) -> u64 {
        self.memory_hits + self.persistent_hits
    }

    /// Total lookups that fell through to the generator
    #[must_use]
    pub const fn misses(&self) -> u64 {
        self.generations + self.generation_failures
    }
}
