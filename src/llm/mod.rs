// ABOUTME: LLM provider abstraction layer for the generation pipeline
// ABOUTME: Defines the transport contract implemented by Gemini and test doubles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Fitness

//! # Text Provider Service Provider Interface
//!
//! This module defines the contract the generation pipeline uses to reach a
//! generative-language service. The pipeline never talks HTTP directly; it
//! holds a [`TextProvider`] so tests can substitute a counting double and a
//! future second provider slots in without touching pipeline code.
//!
//! ## Key Concepts
//!
//! - **`LlmCapabilities`**: Bitflags describing provider features (JSON
//!   mode, system messages)
//! - **`TextProvider`**: Async trait for one-shot text generation
//! - **`GenerationRequest`**: Request configuration including model,
//!   temperature, and the JSON-constrained output flag
//!
//! ## Example: Using a Provider
//!
//! ```rust,no_run
//! use forja_fitness::llm::{GenerationRequest, PromptMessage, TextProvider};
//!
//! async fn example(provider: &dyn TextProvider) {
//!     let request = GenerationRequest::new(vec![
//!         PromptMessage::user("Monte um aquecimento de 10 minutos."),
//!     ]);
//!     let response = provider.complete(&request).await;
//! }
//! ```
//!
//! There is no retry and no timeout at this layer; a hung call hangs the
//! invocation. Callers needing a bound should wrap [`TextProvider::complete`]
//! in `tokio::time::timeout`.

mod gemini;

pub use gemini::GeminiProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

// ============================================================================
// Capability Flags
// ============================================================================

bitflags::bitflags! {
    /// Provider capability flags using bitflags for efficient storage
    ///
    /// Used by the pipeline to decide whether to request JSON-constrained
    /// output or fall back to sanitizing fenced text.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct LlmCapabilities: u8 {
        /// Provider can constrain its own output to machine-parseable JSON
        const JSON_MODE = 0b0000_0001;
        /// Provider supports system messages
        const SYSTEM_MESSAGES = 0b0000_0010;
    }
}

impl LlmCapabilities {
    /// Capabilities of a plain text-only provider
    #[must_use]
    pub const fn text_only() -> Self {
        Self::SYSTEM_MESSAGES
    }

    /// Capabilities of a provider with native JSON-constrained output
    #[must_use]
    pub const fn json_capable() -> Self {
        Self::JSON_MODE.union(Self::SYSTEM_MESSAGES)
    }

    /// Check if JSON-constrained output is supported
    #[must_use]
    pub const fn supports_json_mode(&self) -> bool {
        self.contains(Self::JSON_MODE)
    }

    /// Check if system messages are supported
    #[must_use]
    pub const fn supports_system_messages(&self) -> bool {
        self.contains(Self::SYSTEM_MESSAGES)
    }
}

// ============================================================================
// Message Types
// ============================================================================

/// Role of a message in the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction message
    System,
    /// User input message
    User,
    /// Assistant response message
    Assistant,
}

impl MessageRole {
    /// Convert to string representation for API calls
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single message sent to the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Content of the message
    pub content: String,
}

impl PromptMessage {
    /// Create a new prompt message
    #[must_use]
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create an assistant message
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Configuration for a text generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Prompt messages
    pub messages: Vec<PromptMessage>,
    /// Model identifier (provider-specific)
    pub model: Option<String>,
    /// Temperature for response randomness (0.0 - 2.0)
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Ask the provider to constrain its output to machine-parseable JSON
    pub json_output: bool,
}

impl GenerationRequest {
    /// Create a new generation request with messages
    #[must_use]
    pub const fn new(messages: Vec<PromptMessage>) -> Self {
        Self {
            messages,
            model: None,
            temperature: None,
            max_tokens: None,
            json_output: false,
        }
    }

    /// Set the model to use
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum tokens
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Request JSON-constrained output
    #[must_use]
    pub const fn with_json_output(mut self) -> Self {
        self.json_output = true;
        self
    }
}

/// Response from a text generation call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Generated text content
    pub content: String,
    /// Model used for generation
    pub model: String,
    /// Token usage statistics
    pub usage: Option<TokenUsage>,
    /// Finish reason (stop, length, etc.)
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,
    /// Number of tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

// ============================================================================
// Provider Trait
// ============================================================================

/// Text provider trait for one-shot generation
///
/// Implement this trait to add a new provider. Each `complete` call is an
/// independent request/response cycle with no cross-call memory, so a single
/// provider instance may serve concurrent invocations.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Unique provider identifier (e.g. "gemini")
    fn name(&self) -> &'static str;

    /// Human-readable display name for the provider
    fn display_name(&self) -> &'static str;

    /// Provider capabilities (JSON mode, system messages)
    fn capabilities(&self) -> LlmCapabilities;

    /// Default model to use if not specified in request
    fn default_model(&self) -> &str;

    /// Available models for this provider
    fn available_models(&self) -> &'static [&'static str];

    /// Whether the credential was present when the provider was constructed
    ///
    /// The credential is read once from the environment at startup; its
    /// absence is a permanent precondition the pipeline checks before every
    /// call, never an exception path. When this returns `false`, `complete`
    /// must not be invoked.
    fn credentials_present(&self) -> bool;

    /// Perform a one-shot text generation
    async fn complete(&self, request: &GenerationRequest) -> Result<GenerationResponse, AppError>;
}
