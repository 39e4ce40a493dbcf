// ABOUTME: Generative model abstraction for schema-constrained text and inline image generation
// ABOUTME: Defines the request/response contract the routine service talks to
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Generative Model Interface
//!
//! The external model is a black box reachable through [`GenerativeModel`]:
//! a prompt plus an optional response schema goes in, text or content parts
//! come out. [`GeminiProvider`] is the production implementation; tests
//! substitute scripted doubles.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gemini_fit::llm::{GeminiProvider, GenerationRequest, GenerativeModel};
//! use gemini_fit::errors::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let provider = GeminiProvider::from_env()?;
//!     let request = GenerationRequest::text("gemini-3-flash-preview", "Name one compound lift.");
//!     let text = provider.generate_text(&request).await?;
//!     println!("{text:?}");
//!     Ok(())
//! }
//! ```

mod gemini;

pub use gemini::GeminiProvider;

use async_trait::async_trait;
use gemini_fit_core::errors::AppResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Capability Flags
// ============================================================================

bitflags::bitflags! {
    /// Generation capability flags
    ///
    /// The routine service checks these before issuing requests a model
    /// cannot serve: plan and alternatives requests need a response schema,
    /// and an image lookup against a text-only model degrades to "no image"
    /// without a network round trip.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct LlmCapabilities: u8 {
        /// Model honours a declared response schema with JSON output
        const RESPONSE_SCHEMA = 0b0000_0001;
        /// Model can return inline images
        const IMAGE_OUTPUT = 0b0000_0010;
    }
}

impl LlmCapabilities {
    /// Capabilities of a text-only structured-output model
    #[must_use]
    pub const fn structured_text() -> Self {
        Self::RESPONSE_SCHEMA
    }

    /// Capabilities of a provider serving both text and image models
    #[must_use]
    pub const fn full_featured() -> Self {
        Self::RESPONSE_SCHEMA.union(Self::IMAGE_OUTPUT)
    }

    /// Check if schema-constrained output is supported
    #[must_use]
    pub const fn supports_response_schema(&self) -> bool {
        self.contains(Self::RESPONSE_SCHEMA)
    }

    /// Check if image output is supported
    #[must_use]
    pub const fn supports_image_output(&self) -> bool {
        self.contains(Self::IMAGE_OUTPUT)
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// A single generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Model identifier
    pub model: String,
    /// Prompt text
    pub prompt: String,
    /// Declared output schema; implies JSON output when present
    pub response_schema: Option<Value>,
    /// Requested image aspect ratio for image models
    pub image_aspect_ratio: Option<String>,
}

impl GenerationRequest {
    /// Plain text request
    #[must_use]
    pub fn text(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            response_schema: None,
            image_aspect_ratio: None,
        }
    }

    /// Image request with the given aspect ratio
    #[must_use]
    pub fn image(
        model: impl Into<String>,
        prompt: impl Into<String>,
        aspect_ratio: impl Into<String>,
    ) -> Self {
        Self {
            image_aspect_ratio: Some(aspect_ratio.into()),
            ..Self::text(model, prompt)
        }
    }

    /// Attach a response schema
    #[must_use]
    pub fn with_schema(mut self, schema: Value) -> Self {
        self.response_schema = Some(schema);
        self
    }
}

/// Inline binary payload returned by an image model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineData {
    /// MIME type, when the model reports one
    pub mime_type: Option<String>,
    /// Base64-encoded bytes
    pub data: String,
}

/// One part of a model response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentPart {
    /// Text output
    Text(String),
    /// Inline binary output
    InlineData(InlineData),
}

impl ContentPart {
    /// Text of this part, if it is text
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::InlineData(_) => None,
        }
    }

    /// Inline payload of this part, if it is binary
    #[must_use]
    pub const fn as_inline_data(&self) -> Option<&InlineData> {
        match self {
            Self::InlineData(data) => Some(data),
            Self::Text(_) => None,
        }
    }
}

// ============================================================================
// Provider Trait
// ============================================================================

/// External generation capability
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Unique provider identifier (e.g., "gemini")
    fn name(&self) -> &'static str;

    /// Provider capabilities
    fn capabilities(&self) -> LlmCapabilities;

    /// Generate content parts for a request
    ///
    /// Returns the parts of the first candidate; an empty vector means the
    /// model produced nothing.
    async fn generate_content(&self, request: &GenerationRequest) -> AppResult<Vec<ContentPart>>;

    /// Generate text for a request
    ///
    /// Concatenates the text parts of the response. `None` means the model
    /// returned no text at all.
    async fn generate_text(&self, request: &GenerationRequest) -> AppResult<Option<String>> {
        let parts = self.generate_content(request).await?;
        let text: String = parts.iter().filter_map(ContentPart::as_text).collect();
        Ok(if text.trim().is_empty() { None } else { Some(text) })
    }
}
