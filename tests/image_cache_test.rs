// ABOUTME: Integration tests for the two-tier exercise image cache
// ABOUTME: Covers tier fall-through, background persistence, and degraded stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{CountingGenerator, UnavailableStore};
use gemini_fit::cache::factory::build_image_cache;
use gemini_fit::cache::{
    CacheStats, ExerciseImageCache, ImageStore, InMemoryImageStore, NoImageGenerator,
    SqliteImageStore,
};
use gemini_fit::config::ImageCacheConfig;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

const PAYLOAD: &str = "data:image/png;base64,QUJD";

#[tokio::test]
async fn test_second_lookup_served_from_memory() -> Result<()> {
    common::init_test_logging();
    let generator = Arc::new(CountingGenerator::returning(PAYLOAD));
    let cache = ExerciseImageCache::memory_only(generator.clone());

    let first = cache.get_image("Goblet Squat").await;
    let second = cache.get_image("Goblet Squat").await;

    assert_eq!(first.as_deref(), Some(PAYLOAD));
    assert_eq!(second, first);
    assert_eq!(generator.calls(), 1);
    assert_eq!(
        cache.stats(),
        CacheStats {
            memory_hits: 1,
            persistent_hits: 0,
            generations: 1,
            generation_failures: 0,
        }
    );
    Ok(())
}

#[tokio::test]
async fn test_persistent_hit_populates_memory_without_generation() -> Result<()> {
    let persistent = Arc::new(InMemoryImageStore::new());
    persistent.put("Face Pull", PAYLOAD).await?;
    let memory = InMemoryImageStore::new();
    let generator = Arc::new(CountingGenerator::returning("data:image/png;base64,other"));
    let cache = ExerciseImageCache::with_tiers(generator.clone(), memory.clone(), Some(persistent));

    assert_eq!(cache.get_image("Face Pull").await.as_deref(), Some(PAYLOAD));
    assert_eq!(memory.get("Face Pull").await?.as_deref(), Some(PAYLOAD));
    assert_eq!(cache.get_image("Face Pull").await.as_deref(), Some(PAYLOAD));

    assert_eq!(generator.calls(), 0);
    let stats = cache.stats();
    assert_eq!(stats.persistent_hits, 1);
    assert_eq!(stats.memory_hits, 1);
    assert_eq!(stats.misses(), 0);
    Ok(())
}

#[tokio::test]
async fn test_generated_image_persisted_in_background() -> Result<()> {
    let persistent = Arc::new(InMemoryImageStore::new());
    let generator = Arc::new(CountingGenerator::returning(PAYLOAD));
    let cache = ExerciseImageCache::new(generator, persistent.clone());

    assert_eq!(cache.get_image("Cable Row").await.as_deref(), Some(PAYLOAD));
    cache.flush_pending().await;

    assert_eq!(persistent.get("Cable Row").await?.as_deref(), Some(PAYLOAD));
    Ok(())
}

#[tokio::test]
async fn test_failed_generation_caches_nothing() -> Result<()> {
    let persistent = Arc::new(InMemoryImageStore::new());
    let memory = InMemoryImageStore::new();
    let generator = Arc::new(CountingGenerator::failing());
    let cache =
        ExerciseImageCache::with_tiers(generator.clone(), memory.clone(), Some(persistent.clone()));

    assert!(cache.get_image("Turkish Get-Up").await.is_none());
    assert!(cache.get_image("Turkish Get-Up").await.is_none());
    cache.flush_pending().await;

    assert_eq!(generator.calls(), 2);
    assert!(memory.is_empty().await);
    assert!(persistent.is_empty().await);
    assert_eq!(cache.stats().generation_failures, 2);
    Ok(())
}

#[tokio::test]
async fn test_unavailable_persistent_store_degrades_to_memory() -> Result<()> {
    common::init_test_logging();
    let store = Arc::new(UnavailableStore::new());
    let generator = Arc::new(CountingGenerator::returning(PAYLOAD));
    let cache = ExerciseImageCache::new(generator.clone(), store.clone());

    assert_eq!(cache.get_image("Dip").await.as_deref(), Some(PAYLOAD));
    cache.flush_pending().await;
    assert_eq!(cache.get_image("Dip").await.as_deref(), Some(PAYLOAD));

    assert_eq!(generator.calls(), 1);
    assert_eq!(store.puts.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn test_lookup_does_not_wait_for_persistent_write() -> Result<()> {
    struct SlowStore(InMemoryImageStore);

    #[async_trait::async_trait]
    impl ImageStore for SlowStore {
        fn backend(&self) -> &'static str {
            "slow"
        }

        async fn get(&self, key: &str) -> gemini_fit::errors::AppResult<Option<String>> {
            self.0.get(key).await
        }

        async fn put(&self, key: &str, value: &str) -> gemini_fit::errors::AppResult<()> {
            tokio::time::sleep(Duration::from_millis(200)).await;
            self.0.put(key, value).await
        }
    }

    let backing = InMemoryImageStore::new();
    let store = Arc::new(SlowStore(backing.clone()));
    let cache = ExerciseImageCache::new(Arc::new(CountingGenerator::returning(PAYLOAD)), store);

    assert!(cache.get_image("Pallof Press").await.is_some());
    assert!(backing.get("Pallof Press").await?.is_none());

    cache.flush_pending().await;
    assert_eq!(backing.get("Pallof Press").await?.as_deref(), Some(PAYLOAD));
    Ok(())
}

#[tokio::test]
async fn test_concurrent_misses_may_each_generate() -> Result<()> {
    let generator =
        Arc::new(CountingGenerator::returning(PAYLOAD).with_delay(Duration::from_millis(50)));
    let cache = Arc::new(ExerciseImageCache::memory_only(generator.clone()));

    let (a, b) = tokio::join!(cache.get_image("Lat Pulldown"), cache.get_image("Lat Pulldown"));

    assert_eq!(a, b);
    assert!((1..=2).contains(&generator.calls()));
    Ok(())
}

#[tokio::test]
async fn test_payload_survives_fresh_memory_tier() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("images.db");

    {
        let store = Arc::new(SqliteImageStore::open(&db_path).await?);
        let cache = ExerciseImageCache::new(Arc::new(CountingGenerator::returning(PAYLOAD)), store);
        assert!(cache.get_image("Bulgarian Split Squat").await.is_some());
        cache.flush_pending().await;
    }

    let generator = Arc::new(CountingGenerator::returning("data:image/png;base64,new"));
    let store = Arc::new(SqliteImageStore::open(&db_path).await?);
    let cache = ExerciseImageCache::new(generator.clone(), store);

    assert_eq!(
        cache.get_image("Bulgarian Split Squat").await.as_deref(),
        Some(PAYLOAD)
    );
    assert_eq!(generator.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn test_factory_respects_disabled_persistence() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = ImageCacheConfig {
        db_path: temp_dir.path().join("images.db"),
        persistent_enabled: false,
    };
    let cache = build_image_cache(&config, Arc::new(CountingGenerator::returning(PAYLOAD))).await;

    assert!(!cache.has_persistent_tier());
    assert!(!config.db_path.exists());
    Ok(())
}

#[tokio::test]
async fn test_factory_falls_back_when_store_cannot_open() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let blocker = temp_dir.path().join("not-a-dir");
    std::fs::write(&blocker, "file in the way")?;

    let config = ImageCacheConfig {
        db_path: blocker.join("images.db"),
        persistent_enabled: true,
    };
    let generator = Arc::new(CountingGenerator::returning(PAYLOAD));
    let cache = build_image_cache(&config, generator.clone()).await;

    assert!(!cache.has_persistent_tier());
    assert_eq!(cache.get_image("Hammer Curl").await.as_deref(), Some(PAYLOAD));
    assert_eq!(generator.calls(), 1);
    Ok(())
}

#[tokio::test]
async fn test_factory_opens_sqlite_store() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = ImageCacheConfig {
        db_path: temp_dir.path().join("nested").join("images.db"),
        persistent_enabled: true,
    };
    let cache = build_image_cache(&config, Arc::new(CountingGenerator::returning(PAYLOAD))).await;

    assert!(cache.has_persistent_tier());
    assert!(config.db_path.exists());
    Ok(())
}

#[tokio::test]
async fn test_stored_images_served_without_generator() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = ImageCacheConfig {
        db_path: temp_dir.path().join("images.db"),
        persistent_enabled: true,
    };
    let seed = SqliteImageStore::open(&config.db_path).await?;
    seed.put("Plank", PAYLOAD).await?;
    seed.close().await;

    let cache = build_image_cache(&config, Arc::new(NoImageGenerator)).await;

    assert_eq!(cache.get_image("Plank").await.as_deref(), Some(PAYLOAD));
    assert!(cache.get_image("Side Plank").await.is_none());
    assert_eq!(cache.stats().persistent_hits, 1);
    assert_eq!(cache.stats().generation_failures, 1);
    Ok(())
}
