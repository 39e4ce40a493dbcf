// ABOUTME: Shared test utilities and doubles for integration tests
// ABOUTME: Scripted generative model, counting image generator, and failing image store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `gemini_fit`

use async_trait::async_trait;
use gemini_fit::cache::{ImageGenerator, ImageStore};
use gemini_fit::config::LogLevel;
use gemini_fit::errors::{AppError, AppResult};
use gemini_fit::llm::{ContentPart, GenerationRequest, GenerativeModel, InlineData, LlmCapabilities};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Quiet unless TEST_LOG asks for more
        let log_level = std::env::var("TEST_LOG")
            .ok()
            .and_then(|level| level.parse::<LogLevel>().ok())
            .unwrap_or(LogLevel::Warn);

        tracing_subscriber::fmt()
            .with_env_filter(log_level.as_str())
            .with_test_writer()
            .init();
    });
}

/// Generative model double answering from a script of canned responses
///
/// Every call pops the next scripted response and records the request.
/// Running out of script is an error.
pub struct ScriptedModel {
    responses: Mutex<VecDeque<AppResult<Vec<ContentPart>>>>,
    requests: Mutex<Vec<GenerationRequest>>,
    capabilities: LlmCapabilities,
}

impl ScriptedModel {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            capabilities: LlmCapabilities::full_featured(),
        }
    }

    pub fn with_capabilities(mut self, capabilities: LlmCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Queue a single text part
    pub fn then_text(self, text: impl Into<String>) -> Self {
        self.then_parts(vec![ContentPart::Text(text.into())])
    }

    /// Queue a JSON value rendered as text
    pub fn then_json(self, value: &Value) -> Self {
        self.then_text(value.to_string())
    }

    /// Queue an inline image part
    pub fn then_image(self, mime_type: Option<&str>, data: &str) -> Self {
        self.then_parts(vec![ContentPart::InlineData(InlineData {
            mime_type: mime_type.map(str::to_owned),
            data: data.to_owned(),
        })])
    }

    pub fn then_parts(self, parts: Vec<ContentPart>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(parts));
        self
    }

    pub fn then_error(self, error: AppError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> GenerationRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn capabilities(&self) -> LlmCapabilities {
        self.capabilities
    }

    async fn generate_content(&self, request: &GenerationRequest) -> AppResult<Vec<ContentPart>> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::internal("scripted model ran out of responses")))
    }
}

/// Image generator double that counts calls
pub struct CountingGenerator {
    payload: Option<String>,
    delay: Duration,
    calls: AtomicUsize,
}

impl CountingGenerator {
    pub fn returning(payload: &str) -> Self {
        Self {
            payload: Some(payload.to_owned()),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            payload: None,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageGenerator for CountingGenerator {
    async fn generate_image(&self, _exercise_name: &str) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.payload.clone()
    }
}

/// Persistent store double whose every operation fails
pub struct UnavailableStore {
    pub puts: AtomicUsize,
}

impl UnavailableStore {
    pub fn new() -> Self {
        Self {
            puts: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ImageStore for UnavailableStore {
    fn backend(&self) -> &'static str {
        "unavailable"
    }

    async fn get(&self, _key: &str) -> AppResult<Option<String>> {
        Err(AppError::storage("store unavailable"))
    }

    async fn put(&self, _key: &str, _value: &str) -> AppResult<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        Err(AppError::storage("store unavailable"))
    }
}

/// One exercise as the model would return it
pub fn exercise_json(name: &str, muscle_group: &str, notes: &str) -> Value {
    json!({
        "name": name,
        "sets": "3",
        "reps": "10-12",
        "muscleGroup": muscle_group,
        "notes": notes,
        "instructions": ["Set up", "Move under control", "Return to start"]
    })
}

/// A 7-day plan with four training days and three rest days
pub fn sample_plan_json() -> Value {
    let rest = |day: &str| {
        json!({"dayName": day, "focus": "Rest", "isRestDay": true, "exercises": []})
    };
    json!({
        "planName": "Upper/Lower Builder",
        "description": "Four-day upper/lower split",
        "schedule": [
            {
                "dayName": "Day 1",
                "focus": "Upper A",
                "isRestDay": false,
                "exercises": [
                    exercise_json("Bench Press", "Chest", ""),
                    exercise_json("Barbell Row", "Back", "")
                ]
            },
            {
                "dayName": "Day 2",
                "focus": "Lower A",
                "isRestDay": false,
                "exercises": [
                    exercise_json("Leg Press", "Quadriceps", "injury-friendly variation"),
                    exercise_json("Romanian Deadlift", "Hamstrings", "")
                ]
            },
            rest("Day 3"),
            {
                "dayName": "Day 4",
                "focus": "Upper B",
                "isRestDay": false,
                "exercises": [exercise_json("Overhead Press", "Shoulders", "")]
            },
            {
                "dayName": "Day 5",
                "focus": "Lower B",
                "isRestDay": false,
                "exercises": [exercise_json("Reverse Lunge", "Glutes", "")]
            },
            rest("Day 6"),
            rest("Day 7")
        ]
    })
}
