// ABOUTME: Image cache factory selecting tiers from configuration
// ABOUTME: Degrades to a memory-only cache when the persistent store cannot open
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ExerciseImageCache, ImageGenerator, SqliteImageStore};
use crate::config::ImageCacheConfig;
use std::sync::Arc;
use tracing::{info, warn};

/// Build the exercise image cache described by `config`
///
/// A persistent store that fails to open is logged and skipped; the returned
/// cache then runs memory-only for the rest of the process.
pub async fn build_image_cache(
    config: &ImageCacheConfig,
    generator: Arc<dyn ImageGenerator>,
) -> ExerciseImageCache {
    if !config.persistent_enabled {
        info!("Persistent image cache disabled, using memory only");
        return ExerciseImageCache::memory_only(generator);
    }

    match SqliteImageStore::open(&config.db_path).await {
        Ok(store) => {
            info!(path = %config.db_path.display(), "Initializing two-tier image cache");
            ExerciseImageCache::new(generator, Arc::new(store))
        }
        Err(e) => {
            warn!(
                path = %config.db_path.display(),
                error = %e,
                "Persistent image cache unavailable, falling back to memory only"
            );
            ExerciseImageCache::memory_only(generator)
        }
    }
}
