// ABOUTME: Environment-only configuration for credential and model selection
// ABOUTME: Read once at startup; the credential may legitimately be absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Fitness

//! # Configuration
//!
//! All configuration comes from the process environment, read once when the
//! owning object is constructed. There are no config files.
//!
//! | Variable          | Meaning                                  | Default            |
//! |-------------------|------------------------------------------|--------------------|
//! | `GEMINI_API_KEY`  | Generative Language API credential       | absent             |
//! | `FORJA_LLM_MODEL` | Model used for every generation request  | `gemini-2.5-flash` |
//!
//! An absent credential is not a startup error: the pipeline checks for it
//! before every call and reports the generation as unavailable instead.

use std::env;

/// Environment variable for the Gemini API key
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable for model selection
pub const LLM_MODEL_ENV: &str = "FORJA_LLM_MODEL";

/// Default model when `FORJA_LLM_MODEL` is not set
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Model selection for generation requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmModelConfig {
    /// Model used unless a request overrides it
    pub default_model: String,
    /// Model used when the default is rejected by the service
    pub fallback_model: String,
}

impl Default for LlmModelConfig {
    fn default() -> Self {
        Self {
            default_model: DEFAULT_MODEL.to_owned(),
            fallback_model: DEFAULT_MODEL.to_owned(),
        }
    }
}

impl LlmModelConfig {
    /// Load model selection from the environment
    ///
    /// Reads `FORJA_LLM_MODEL`; empty or unset falls back to
    /// [`DEFAULT_MODEL`] for both slots.
    #[must_use]
    pub fn from_env() -> Self {
        let model = env::var(LLM_MODEL_ENV)
            .ok()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_owned());
        Self {
            fallback_model: model.clone(),
            default_model: model,
        }
    }
}

/// Read the Gemini credential from the environment
///
/// Returns `None` when the variable is unset or empty. Callers treat the
/// absence as a per-call precondition, not an error.
#[must_use]
pub fn api_key_from_env() -> Option<String> {
    env::var(GEMINI_API_KEY_ENV).ok().filter(|k| !k.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_model_config_default_when_unset() {
        env::remove_var(LLM_MODEL_ENV);
        let config = LlmModelConfig::from_env();
        assert_eq!(config.default_model, DEFAULT_MODEL);
        assert_eq!(config.fallback_model, DEFAULT_MODEL);
    }

    #[test]
    #[serial]
    fn test_model_config_from_env() {
        env::set_var(LLM_MODEL_ENV, "gemini-1.5-pro");
        let config = LlmModelConfig::from_env();
        assert_eq!(config.default_model, "gemini-1.5-pro");
        env::remove_var(LLM_MODEL_ENV);
    }

    #[test]
    #[serial]
    fn test_api_key_empty_is_absent() {
        env::set_var(GEMINI_API_KEY_ENV, "");
        assert!(api_key_from_env().is_none());
        env::remove_var(GEMINI_API_KEY_ENV);
    }
}
