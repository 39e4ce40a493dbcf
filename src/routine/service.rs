// ABOUTME: Routine orchestration over a generative model
// ABOUTME: Generates plans, alternatives, and exercise images with typed validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use async_trait::async_trait;
use gemini_fit_core::constants::models::{
    ALTERNATIVES_COUNT, DEFAULT_IMAGE_MIME_TYPE, IMAGE_ASPECT_RATIO,
};
use gemini_fit_core::errors::{AppError, AppResult, ErrorCode};
use gemini_fit_core::models::{Exercise, UserPreferences, WorkoutPlan};
use tracing::{debug, error, info, instrument, warn};

use super::{prompts, schema};
use crate::cache::ImageGenerator;
use crate::config::ModelConfig;
use crate::llm::{ContentPart, GenerationRequest, GenerativeModel};

/// Generates workout plans, exercise alternatives, and exercise photos
#[derive(Clone)]
pub struct RoutineService {
    model: Arc<dyn GenerativeModel>,
    models: ModelConfig,
}

impl RoutineService {
    /// Create a service over `model` using the given model identifiers
    #[must_use]
    pub fn new(model: Arc<dyn GenerativeModel>, models: ModelConfig) -> Self {
        Self { model, models }
    }

    /// Model identifiers in use
    #[must_use]
    pub const fn models(&self) -> &ModelConfig {
        &self.models
    }

    /// Generate a weekly plan for `prefs`
    ///
    /// Every exercise in the returned plan carries a fresh transient id.
    ///
    /// # Errors
    ///
    /// Returns `GenerationFailed` if the model cannot honour a response schema,
    /// returns no text, text that does not parse as a plan, or a plan with an
    /// empty schedule. Transport errors from the model are returned unchanged.
    #[instrument(skip(self, prefs), fields(days = prefs.days_per_week, goal = %prefs.goal))]
    pub async fn generate_plan(&self, prefs: &UserPreferences) -> AppResult<WorkoutPlan> {
        if !self.supports_schema() {
            return Err(AppError::generation(format!(
                "Model provider '{}' does not support schema-constrained output",
                self.model.name()
            )));
        }

        let request = GenerationRequest::text(&self.models.text_model, prompts::plan_prompt(prefs))
            .with_schema(schema::plan_schema());

        let text = self
            .model
            .generate_text(&request)
            .await
            .inspect_err(|e| error!(error = %e, "Plan generation request failed"))?
            .ok_or_else(|| AppError::generation("No response from the model"))?;

        let plan: WorkoutPlan = serde_json::from_str(text.trim()).map_err(|e| {
            error!(error = %e, "Plan response did not match the plan schema");
            AppError::generation(format!("Malformed plan response: {e}")).with_source(e)
        })?;

        if plan.schedule.is_empty() {
            return Err(AppError::generation("Plan response has an empty schedule"));
        }

        info!(
            plan = %plan.plan_name,
            days = plan.schedule.len(),
            exercises = plan.exercise_count(),
            "Generated workout plan"
        );
        Ok(plan.with_transient_ids())
    }

    /// Suggest up to three alternatives for `original`
    ///
    /// An empty response is not an error and yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `AlternativesFailed` when the model cannot honour a response
    /// schema, on transport failure, on a response that does not parse as a
    /// list of exercises, or when any alternative lacks a rationale in `notes`.
    #[instrument(skip(self, original, injuries), fields(exercise = %original.name))]
    pub async fn generate_alternatives(
        &self,
        original: &Exercise,
        injuries: &str,
    ) -> AppResult<Vec<Exercise>> {
        if !self.supports_schema() {
            return Err(AppError::alternatives(format!(
                "Model provider '{}' does not support schema-constrained output",
                self.model.name()
            )));
        }

        let request = GenerationRequest::text(
            &self.models.text_model,
            prompts::alternatives_prompt(original, injuries),
        )
        .with_schema(schema::alternatives_schema());

        let text = self.model.generate_text(&request).await.map_err(|e| {
            error!(error = %e, "Alternatives request failed");
            e.recode(ErrorCode::AlternativesFailed)
        })?;

        let Some(text) = text else {
            debug!("Model returned no alternatives");
            return Ok(Vec::new());
        };

        let mut alternatives: Vec<Exercise> = serde_json::from_str(text.trim()).map_err(|e| {
            error!(error = %e, "Alternatives response did not match the schema");
            AppError::alternatives(format!("Malformed alternatives response: {e}")).with_source(e)
        })?;

        if let Some(missing) = alternatives.iter().find(|alt| alt.notes.trim().is_empty()) {
            return Err(AppError::alternatives(format!(
                "Alternative '{}' has no rationale",
                missing.name
            )));
        }

        if alternatives.len() > ALTERNATIVES_COUNT {
            warn!(
                returned = alternatives.len(),
                kept = ALTERNATIVES_COUNT,
                "Model returned extra alternatives, truncating"
            );
            alternatives.truncate(ALTERNATIVES_COUNT);
        }

        Ok(alternatives
            .into_iter()
            .map(Exercise::with_transient_id)
            .collect())
    }

    fn supports_schema(&self) -> bool {
        let supported = self.model.capabilities().supports_response_schema();
        if !supported {
            warn!(provider = self.model.name(), "Provider cannot honour a response schema");
        }
        supported
    }

    /// Generate a photo of `exercise_name` as a data URI
    ///
    /// Never fails: transport errors, models without image output, and
    /// responses without an inline image all yield `None`.
    #[instrument(skip(self))]
    pub async fn generate_image(&self, exercise_name: &str) -> Option<String> {
        if !self.model.capabilities().supports_image_output() {
            warn!(provider = self.model.name(), "Provider cannot produce images");
            return None;
        }

        let request = GenerationRequest::image(
            &self.models.image_model,
            prompts::image_prompt(exercise_name),
            IMAGE_ASPECT_RATIO,
        );

        let parts = match self.model.generate_content(&request).await {
            Ok(parts) => parts,
            Err(e) => {
                warn!(error = %e, "Image generation failed");
                return None;
            }
        };

        let image = parts.iter().find_map(ContentPart::as_inline_data);
        if image.is_none() {
            warn!(parts = parts.len(), "Image response contained no inline image");
        }

        image.map(|inline| {
            let mime_type = inline
                .mime_type
                .as_deref()
                .filter(|m| !m.is_empty())
                .unwrap_or(DEFAULT_IMAGE_MIME_TYPE);
            format!("data:{mime_type};base64,{}", inline.data)
        })
    }
}

#[async_trait]
impl ImageGenerator for RoutineService {
    async fn generate_image(&self, exercise_name: &str) -> Option<String> {
        Self::generate_image(self, exercise_name).await
    }
}

impl Debug for RoutineService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("RoutineService")
            .field("provider", &self.model.name())
            .field("models", &self.models)
            .finish()
    }
}
