// ABOUTME: Google Gemini provider for schema-constrained JSON and inline image generation
// ABOUTME: Talks to the Generative Language generateContent endpoint over reqwest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Gemini Provider
//!
//! Implementation of the [`GenerativeModel`] trait for Google's Gemini models.
//!
//! ## Configuration
//!
//! Set the `GEMINI_API_KEY` environment variable with your API key from
//! Google AI Studio: <https://aistudio.google.com/app/apikey>
//!
//! ## Models
//!
//! - `gemini-3-flash-preview` (default text model): structured JSON output
//! - `gemini-2.5-flash-image` (default image model): inline PNG output

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use gemini_fit_core::constants::{env_vars, models::API_BASE_URL};
use gemini_fit_core::errors::{AppError, AppResult, ErrorCode};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, instrument, warn};

use super::{ContentPart, GenerationRequest, GenerativeModel, InlineData, LlmCapabilities};
use crate::config::AppConfig;

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-goog-api-key";

/// MIME type requested whenever a response schema is attached
const JSON_MIME_TYPE: &str = "application/json";

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Gemini API request structure
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

/// Content structure for Gemini API requests
#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    role: &'static str,
    parts: Vec<TextPart<'a>>,
}

/// Prompt text part
#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

/// Generation configuration
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_config: Option<ImageConfig<'a>>,
}

/// Image output configuration
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig<'a> {
    aspect_ratio: &'a str,
}

/// Gemini API response structure
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    prompt_feedback: Option<PromptFeedback>,
    usage_metadata: Option<UsageMetadata>,
    error: Option<GeminiError>,
}

/// Response candidate
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

/// Candidate content
#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

/// A response part; text and inline data are the only kinds we consume
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    text: Option<String>,
    inline_data: Option<ResponseInlineData>,
    #[serde(default)]
    thought: bool,
}

/// Inline binary data in a response part
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseInlineData {
    mime_type: Option<String>,
    data: String,
}

/// Safety feedback on the prompt
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Usage metadata from Gemini API response
#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount")]
    prompt: Option<u32>,
    #[serde(rename = "candidatesTokenCount")]
    candidates: Option<u32>,
    #[serde(rename = "totalTokenCount")]
    total: Option<u32>,
}

/// API error response from Gemini
#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Google Gemini generation provider
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    client: Client,
}

impl GeminiProvider {
    /// Create a new Gemini provider with an API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: API_BASE_URL.to_owned(),
            client: Client::new(),
        }
    }

    /// Create a provider from the `GEMINI_API_KEY` environment variable
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> AppResult<Self> {
        let api_key = env::var(env_vars::GEMINI_API_KEY).map_err(|_| {
            AppError::config_missing(format!(
                "{} environment variable not set",
                env_vars::GEMINI_API_KEY
            ))
        })?;
        Ok(Self::new(api_key))
    }

    /// Create a provider from loaded configuration
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        Ok(Self::new(config.require_api_key()?).with_base_url(&config.api_base_url))
    }

    /// Point the provider at a different API base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Build the API URL for a model and method
    fn build_url(&self, model: &str, method: &str) -> String {
        format!("{}/models/{model}:{method}", self.base_url)
    }

    /// Build a Gemini API request from a `GenerationRequest`
    fn build_gemini_request(request: &GenerationRequest) -> GeminiRequest<'_> {
        let image_config = request
            .image_aspect_ratio
            .as_deref()
            .map(|aspect_ratio| ImageConfig { aspect_ratio });

        let generation_config = if request.response_schema.is_some() || image_config.is_some() {
            Some(GenerationConfig {
                response_mime_type: request.response_schema.as_ref().map(|_| JSON_MIME_TYPE),
                response_schema: request.response_schema.as_ref(),
                image_config,
            })
        } else {
            None
        };

        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user",
                parts: vec![TextPart {
                    text: &request.prompt,
                }],
            }],
            generation_config,
        }
    }

    /// Parse a successful response body into content parts
    fn parse_response(response_text: &str) -> AppResult<Vec<ContentPart>> {
        let gemini_response: GeminiResponse =
            serde_json::from_str(response_text).map_err(|e| {
                error!(error = %e, "Failed to parse Gemini response envelope");
                AppError::external_service("Gemini", format!("Malformed response: {e}"))
            })?;

        if let Some(error) = gemini_response.error {
            return Err(AppError::external_service("Gemini", error.message));
        }

        if let Some(reason) = gemini_response
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref())
        {
            warn!(block_reason = %reason, "Gemini blocked the prompt");
        }

        if let Some(usage) = &gemini_response.usage_metadata {
            debug!(
                prompt_tokens = usage.prompt.unwrap_or(0),
                completion_tokens = usage.candidates.unwrap_or(0),
                total_tokens = usage.total.unwrap_or(0),
                "Gemini token usage"
            );
        }

        let Some(candidate) = gemini_response
            .candidates
            .and_then(|candidates| candidates.into_iter().next())
        else {
            return Ok(Vec::new());
        };

        if let Some(reason) = candidate.finish_reason.as_deref() {
            if reason != "STOP" {
                warn!(finish_reason = %reason, "Gemini finished without STOP");
            }
        }

        Ok(candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter(|part| !part.thought)
                    .filter_map(|part| {
                        if let Some(inline) = part.inline_data {
                            Some(ContentPart::InlineData(InlineData {
                                mime_type: inline.mime_type,
                                data: inline.data,
                            }))
                        } else {
                            part.text.map(ContentPart::Text)
                        }
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Map API error status to appropriate error type
    ///
    /// For rate limit (429) and quota errors, returns a user-friendly error
    /// that exposes the retry hint from Gemini.
    fn map_api_error(status: u16, response_text: &str) -> AppError {
        let message = serde_json::from_str::<GeminiResponse>(response_text)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| response_text.to_owned(), |e| e.message);

        match status {
            429 => AppError::new(
                ErrorCode::ExternalRateLimited,
                Self::extract_quota_message(&message),
            ),
            500..=599 => AppError::new(
                ErrorCode::ExternalServiceUnavailable,
                format!("Gemini API error ({status}): {message}"),
            ),
            _ => AppError::external_service("Gemini", format!("API error ({status}): {message}")),
        }
    }

    /// Extract a user-friendly quota/rate limit message from Gemini error
    fn extract_quota_message(message: &str) -> String {
        // Example: "Please retry in 6.406453963s."
        const RETRY_PREFIX: &str = "Please retry in ";
        if let Some(retry_pos) = message.find(RETRY_PREFIX) {
            let after_prefix = &message[retry_pos + RETRY_PREFIX.len()..];
            if let Some(s_pos) = after_prefix.find('s') {
                if let Ok(seconds) = after_prefix[..s_pos].parse::<f64>() {
                    let seconds_int = seconds.ceil() as u64;
                    return format!(
                        "AI service quota exceeded. Please try again in {seconds_int} seconds."
                    );
                }
            }
        }
        "AI service quota exceeded. Please wait a moment and try again.".to_owned()
    }
}

#[async_trait]
impl GenerativeModel for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::full_featured()
    }

    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn generate_content(&self, request: &GenerationRequest) -> AppResult<Vec<ContentPart>> {
        let url = self.build_url(&request.model, "generateContent");
        let gemini_request = Self::build_gemini_request(request);

        debug!(
            schema = request.response_schema.is_some(),
            image = request.image_aspect_ratio.is_some(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&gemini_request)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(Self::map_api_error(status.as_u16(), &response_text));
        }

        let parts = Self::parse_response(&response_text)?;
        debug!(parts = parts.len(), "Received Gemini response");
        Ok(parts)
    }
}

impl Debug for GeminiProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiProvider")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            // Omit `client` field as HTTP clients are not useful to debug
            .finish_non_exhaustive()
    }
}
