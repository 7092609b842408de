// ABOUTME: Unified error handling system for the Forja Fitness engine
// ABOUTME: Defines standard error codes and the AppError type used across modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Fitness

//! # Unified Error Handling System
//!
//! Centralized error handling for the coaching engine. Every fallible path
//! funnels into [`AppError`], tagged with an [`ErrorCode`] so callers can
//! react to classes of failure without string matching. The generation
//! pipeline itself collapses all of these into a single "generation failed"
//! outcome at its public boundary; the codes exist for logging and for
//! embedding applications that call the transport layer directly.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Configuration (1000-1999)
    /// Required configuration is missing (e.g. the API credential)
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing = 1000,
    /// Configuration is present but invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 1001,

    // External service (2000-2999)
    /// The generative-language service returned an error response
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 2000,
    /// The generative-language service rate limit or quota was exceeded
    #[serde(rename = "EXTERNAL_RATE_LIMITED")]
    ExternalRateLimited = 2001,

    // Payload handling (3000-3999)
    /// The service payload could not be parsed as the expected shape
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 3000,

    // Internal (9000-9999)
    /// Transport or other internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::ExternalServiceError => "The AI service encountered an error",
            Self::ExternalRateLimited => "The AI service rate limit was exceeded",
            Self::SerializationError => "Data serialization/deserialization failed",
            Self::InternalError => "An internal error occurred",
        }
    }
}

/// Unified error type for the crate
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Missing configuration (credential, model selection)
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigMissing, message)
    }

    /// External service error
    #[must_use]
    pub fn external_service(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExternalServiceError, message)
    }

    /// Payload could not be decoded into the expected shape
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Internal error (transport failures, unreadable responses)
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let error = AppError::config("GEMINI_API_KEY not set");
        assert_eq!(error.code, ErrorCode::ConfigMissing);
        let rendered = error.to_string();
        assert!(rendered.contains("Required configuration is missing"));
        assert!(rendered.contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::ExternalRateLimited).unwrap();
        assert_eq!(json, "\"EXTERNAL_RATE_LIMITED\"");
    }

    #[test]
    fn test_error_source_chaining() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = AppError::serialization("bad payload").with_source(parse_err);
        assert!(std::error::Error::source(&error).is_some());
    }
}
