// ABOUTME: The plan-generation pipeline service for the Forja Fitness product
// ABOUTME: Prompt-build, provider call, sanitize, and normalize per request kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Fitness

//! # Generation Pipeline
//!
//! One [`CoachService`] method per request kind, each an independent
//! prompt-build → transport-call → sanitize → normalize cycle. The service
//! is stateless between calls and holds no shared mutable state, so
//! concurrent invocations are safe by construction. There is no
//! cancellation, no retry, and no timeout at this layer; callers that need
//! a bound should wrap calls in `tokio::time::timeout`.
//!
//! ## Outcome policy
//!
//! Two outcomes exist at this boundary:
//!
//! - **Unavailable**: missing credential (checked before every call, zero
//!   outbound requests), transport error, non-success response, empty body,
//!   or an unparseable payload. Plan-shaped kinds surface this as `None`;
//!   the UI owns messaging and retry. The two text-returning kinds
//!   (marketing copy, chat) instead return a user-facing pt-BR literal,
//!   because their call sites require a string unconditionally. The
//!   asymmetry is intentional.
//! - **Degraded**: the payload parses but misses fields. Never surfaced;
//!   the normalizer silently substitutes defaults.

/// Schema-aware payload normalization with named per-field defaults
pub mod normalize;

/// Prompt builders for the five request kinds
pub mod prompts;

/// Code-fence sanitization of raw model output
pub mod sanitize;

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::errors::AppResult;
use crate::llm::{GeminiProvider, GenerationRequest, PromptMessage, TextProvider};
use crate::models::{
    DietPeriod, DietPlan, Exercise, MarketingChannel, UserProfile, WeeklyWorkoutPlan,
};

/// Literal returned by marketing-copy generation without a credential
pub const COPY_UNAVAILABLE_MESSAGE: &str = "Erro: API Key não configurada.";

/// Literal returned when marketing-copy generation fails
pub const COPY_FAILURE_MESSAGE: &str = "Erro ao gerar copy. Tente novamente.";

/// Literal returned by chat without a credential
pub const CHAT_UNAVAILABLE_MESSAGE: &str =
    "Erro: Conexão com a IA não configurada (Verifique GEMINI_API_KEY).";

/// Literal returned when the chat call fails
pub const CHAT_FAILURE_MESSAGE: &str = "Erro de conexão com a IA.";

/// Literal returned when the chat reply comes back empty
pub const CHAT_EMPTY_MESSAGE: &str = "Desculpe, não consegui processar sua solicitação.";

/// The plan-generation service
///
/// Owns a [`TextProvider`] and nothing else. Construct once at startup and
/// share; every method is an independent request/response cycle.
#[derive(Clone)]
pub struct CoachService {
    provider: Arc<dyn TextProvider>,
}

impl CoachService {
    /// Create a service backed by Gemini, configured from the environment
    ///
    /// Reads `GEMINI_API_KEY` and `FORJA_LLM_MODEL` once. A missing key is
    /// tolerated: every generation reports unavailable until it is set.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(Arc::new(GeminiProvider::from_env()))
    }

    /// Create a service backed by an explicit provider
    #[must_use]
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    /// Generate a full weekly training split for a profile
    ///
    /// `None` means the generation was unavailable. An empty `split` inside
    /// `Some` is valid "no data", distinct from unavailability.
    #[instrument(skip_all, fields(goal = profile.goal.as_str(), level = profile.level.as_str()))]
    pub async fn generate_weekly_workout(&self, profile: &UserProfile) -> Option<WeeklyWorkoutPlan> {
        let prompt = prompts::weekly_workout(profile);
        let payload = self.request_json(prompt, "workout").await?;
        Some(normalize::weekly_workout_plan(&payload))
    }

    /// Suggest a biomechanically equivalent replacement for an exercise
    ///
    /// The replacement keeps the original's sets, reps, and rest; any field
    /// the model omits falls back to the original's value.
    #[instrument(skip_all, fields(exercise = %original.name))]
    pub async fn swap_exercise(&self, original: &Exercise, goal: &str) -> Option<Exercise> {
        // The freshness identifier is the pipeline's only source of
        // non-determinism fed into a prompt
        let fresh_id = format!("swap_{}", Utc::now().timestamp_millis());
        let prompt = prompts::exercise_swap(original, goal, &fresh_id);
        let payload = self.request_json(prompt, "swap").await?;
        Some(normalize::replacement_exercise(&payload, original))
    }

    /// Generate a budget-aware diet plan
    #[instrument(skip_all, fields(budget = budget, period = period.as_str()))]
    pub async fn generate_diet(
        &self,
        profile: &UserProfile,
        budget: f64,
        period: DietPeriod,
    ) -> Option<DietPlan> {
        let prompt = prompts::diet(profile, budget, period);
        let payload = self.request_json(prompt, "diet").await?;
        Some(normalize::diet_plan(&payload, period))
    }

    /// Generate affiliate marketing copy for a channel
    ///
    /// Always returns a string: failures of any kind map to a user-facing
    /// literal because the call site renders the result directly.
    #[instrument(skip_all, fields(channel = channel.as_str()))]
    pub async fn generate_marketing_copy(&self, channel: MarketingChannel) -> String {
        if !self.provider.credentials_present() {
            warn!("Skipping copy generation: credential not configured");
            return COPY_UNAVAILABLE_MESSAGE.to_owned();
        }
        match self.request_text(prompts::marketing_copy(channel)).await {
            Ok(text) if text.trim().is_empty() => {
                warn!("Copy generation returned an empty body");
                COPY_FAILURE_MESSAGE.to_owned()
            }
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Copy generation failed");
                COPY_FAILURE_MESSAGE.to_owned()
            }
        }
    }

    /// Answer a chat question with conversation context
    ///
    /// Always returns a string, with the same literal-on-failure policy as
    /// marketing copy.
    #[instrument(skip_all)]
    pub async fn chat_reply(&self, message: &str, context: &str) -> String {
        if !self.provider.credentials_present() {
            warn!("Skipping chat reply: credential not configured");
            return CHAT_UNAVAILABLE_MESSAGE.to_owned();
        }
        match self.request_text(prompts::chat(message, context)).await {
            Ok(text) if text.trim().is_empty() => CHAT_EMPTY_MESSAGE.to_owned(),
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Chat reply failed");
                CHAT_FAILURE_MESSAGE.to_owned()
            }
        }
    }

    /// Shared JSON funnel for the plan-shaped request kinds
    ///
    /// Collapses every failure class into `None`: absent credential (zero
    /// outbound calls), transport error, non-success status, empty body,
    /// and unparseable payload.
    async fn request_json(&self, prompt: String, kind: &'static str) -> Option<Value> {
        if !self.provider.credentials_present() {
            warn!(kind, "Skipping generation: credential not configured");
            return None;
        }

        let mut request = GenerationRequest::new(vec![PromptMessage::user(prompt)]);
        if self.provider.capabilities().supports_json_mode() {
            request = request.with_json_output();
        }

        let response = match self.provider.complete(&request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(kind, error = %e, "Generation failed");
                return None;
            }
        };

        if response.content.trim().is_empty() {
            warn!(kind, "Generation returned an empty body");
            return None;
        }

        let cleaned = sanitize::strip_code_fences(&response.content);
        match normalize::parse_json(&cleaned) {
            Ok(payload) => {
                debug!(kind, "Generation payload parsed");
                Some(payload)
            }
            Err(e) => {
                warn!(kind, error = %e, "Generation payload was not valid JSON");
                None
            }
        }
    }

    /// Shared free-text call for the string-returning request kinds
    async fn request_text(&self, prompt: String) -> AppResult<String> {
        let request = GenerationRequest::new(vec![PromptMessage::user(prompt)]);
        let response = self.provider.complete(&request).await?;
        Ok(response.content)
    }
}

impl std::fmt::Debug for CoachService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoachService")
            .field("provider", &self.provider.name())
            .finish()
    }
}
