// ABOUTME: In-memory image store backed by a shared hash map
// ABOUTME: Process-lifetime tier with no eviction policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ImageStore;
use async_trait::async_trait;
use gemini_fit_core::errors::AppResult;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory image store
///
/// Uses `Arc<RwLock<HashMap>>` so clones share one map. Entries live for the
/// lifetime of the process; the map is unbounded.
#[derive(Clone, Default)]
pub struct InMemoryImageStore {
    store: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryImageStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a payload, replacing any previous value
    pub async fn insert(&self, key: &str, value: &str) {
        self.store
            .write()
            .await
            .insert(key.to_owned(), value.to_owned());
    }

    /// Cached payload for a key
    pub async fn lookup(&self, key: &str) -> Option<String> {
        self.store.read().await.get(key).cloned()
    }

    /// Number of cached images
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Whether the store holds no images
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

#[async_trait]
impl ImageStore for InMemoryImageStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.lookup(key).await)
    }

    async fn put(&self, key: &str, value: &str) -> AppResult<()> {
        self.insert(key, value).await;
        Ok(())
    }
}
