// ABOUTME: Image command for gemini-fit
// ABOUTME: Resolves an exercise photo through the two-tier cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use gemini_fit::cache::factory::build_image_cache;
use gemini_fit::cache::{ImageGenerator, NoImageGenerator};
use gemini_fit::config::AppConfig;
use gemini_fit::errors::AppResult;
use tracing::{debug, warn};

use super::routine::routine_service;

/// Look up (or generate) the photo for `name` and describe it
pub async fn resolve(config: &AppConfig, name: &str) -> AppResult<()> {
    // Stored images stay available without an API key
    let generator: Arc<dyn ImageGenerator> = match routine_service(config) {
        Ok(service) => Arc::new(service),
        Err(e) => {
            warn!(error = %e, "Image generation unavailable, serving cached images only");
            Arc::new(NoImageGenerator)
        }
    };
    let cache = build_image_cache(&config.image_cache, generator).await;

    match cache.get_image(name).await {
        Some(payload) => {
            let mime_type = payload
                .strip_prefix("data:")
                .and_then(|rest| rest.split(';').next())
                .unwrap_or("unknown");
            println!("{name}: {mime_type}, {} bytes", payload.len());
        }
        None => println!("{name}: no visual available"),
    }

    // Process exit would otherwise cut the background write short
    cache.flush_pending().await;
    debug!(stats = ?cache.stats(), "Image cache stats");
    Ok(())
}
