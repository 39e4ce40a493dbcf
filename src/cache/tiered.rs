// ABOUTME: Two-tier exercise image cache over memory and persistent stores
// ABOUTME: Falls through to image generation and persists results in the background
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{CacheStats, ImageStore, InMemoryImageStore};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Source of freshly generated exercise images
///
/// Implementations never fail loudly: any problem yields `None`.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate an image payload (data URI) for an exercise
    async fn generate_image(&self, exercise_name: &str) -> Option<String>;
}

/// Generator used when no image model is reachable
///
/// Every lookup past the cached tiers yields `None`, so previously stored
/// images are still served.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImageGenerator;

#[async_trait]
impl ImageGenerator for NoImageGenerator {
    async fn generate_image(&self, _exercise_name: &str) -> Option<String> {
        None
    }
}

#[derive(Default)]
struct Counters {
    memory_hits: AtomicU64,
    persistent_hits: AtomicU64,
    generations: AtomicU64,
    generation_failures: AtomicU64,
}

/// Exercise image cache: memory tier, optional persistent tier, then generation
///
/// Lookup order is memory, persistent, generator. A persistent hit populates
/// the memory tier. A generated image is written to memory immediately and to
/// the persistent tier by a spawned task the caller never waits on. Persistent
/// tier failures are logged and otherwise ignored.
///
/// Concurrent lookups for the same uncached name may each call the generator.
pub struct ExerciseImageCache {
    memory: InMemoryImageStore,
    persistent: Option<Arc<dyn ImageStore>>,
    generator: Arc<dyn ImageGenerator>,
    pending: Mutex<Vec<JoinHandle<()>>>,
    counters: Counters,
}

impl ExerciseImageCache {
    /// Create a cache with both tiers
    #[must_use]
    pub fn new(generator: Arc<dyn ImageGenerator>, persistent: Arc<dyn ImageStore>) -> Self {
        Self::with_tiers(generator, InMemoryImageStore::new(), Some(persistent))
    }

    /// Create a cache without a persistent tier
    #[must_use]
    pub fn memory_only(generator: Arc<dyn ImageGenerator>) -> Self {
        Self::with_tiers(generator, InMemoryImageStore::new(), None)
    }

    /// Create a cache from explicit tiers
    #[must_use]
    pub fn with_tiers(
        generator: Arc<dyn ImageGenerator>,
        memory: InMemoryImageStore,
        persistent: Option<Arc<dyn ImageStore>>,
    ) -> Self {
        Self {
            memory,
            persistent,
            generator,
            pending: Mutex::new(Vec::new()),
            counters: Counters::default(),
        }
    }

    /// Whether a persistent tier is attached
    #[must_use]
    pub fn has_persistent_tier(&self) -> bool {
        self.persistent.is_some()
    }

    /// Resolve the image for an exercise, generating it on a full miss
    ///
    /// Returns `None` when nothing is cached and generation fails; nothing is
    /// cached in that case so a later call retries.
    pub async fn get_image(&self, exercise_name: &str) -> Option<String> {
        if let Some(payload) = self.memory.lookup(exercise_name).await {
            self.counters.memory_hits.fetch_add(1, Ordering::Relaxed);
            debug!(exercise = %exercise_name, "Image served from memory");
            return Some(payload);
        }

        if let Some(payload) = self.read_persistent(exercise_name).await {
            self.memory.insert(exercise_name, &payload).await;
            self.counters.persistent_hits.fetch_add(1, Ordering::Relaxed);
            debug!(exercise = %exercise_name, "Image served from persistent store");
            return Some(payload);
        }

        let Some(payload) = self.generator.generate_image(exercise_name).await else {
            self.counters
                .generation_failures
                .fetch_add(1, Ordering::Relaxed);
            debug!(exercise = %exercise_name, "No image available");
            return None;
        };

        self.memory.insert(exercise_name, &payload).await;
        self.counters.generations.fetch_add(1, Ordering::Relaxed);
        self.persist_in_background(exercise_name, &payload);
        debug!(exercise = %exercise_name, stats = ?self.stats(), "Generated new image");

        Some(payload)
    }

    async fn read_persistent(&self, exercise_name: &str) -> Option<String> {
        let store = self.persistent.as_ref()?;
        match store.get(exercise_name).await {
            Ok(found) => found,
            Err(e) => {
                warn!(
                    exercise = %exercise_name,
                    backend = store.backend(),
                    error = %e,
                    "Persistent image read failed"
                );
                None
            }
        }
    }

    fn persist_in_background(&self, exercise_name: &str, payload: &str) {
        let Some(store) = self.persistent.clone() else {
            return;
        };
        let key = exercise_name.to_owned();
        let value = payload.to_owned();

        let handle = tokio::spawn(async move {
            if let Err(e) = store.put(&key, &value).await {
                warn!(
                    exercise = %key,
                    backend = store.backend(),
                    error = %e,
                    "Persistent image write failed"
                );
            }
        });

        let mut pending = self.lock_pending();
        pending.retain(|h| !h.is_finished());
        pending.push(handle);
    }

    /// Wait for every background persistent write started so far
    pub async fn flush_pending(&self) {
        let handles = std::mem::take(&mut *self.lock_pending());
        for handle in handles {
            if let Err(e) = handle.await {
                warn!(error = %e, "Background image write task failed");
            }
        }
    }

    /// Current counter snapshot
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            memory_hits: self.counters.memory_hits.load(Ordering::Relaxed),
            persistent_hits: self.counters.persistent_hits.load(Ordering::Relaxed),
            generations: self.counters.generations.load(Ordering::Relaxed),
            generation_failures: self.counters.generation_failures.load(Ordering::Relaxed),
        }
    }

    fn lock_pending(&self) -> MutexGuard<'_, Vec<JoinHandle<()>>> {
        self.pending
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
