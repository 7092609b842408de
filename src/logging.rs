// ABOUTME: Structured logging setup for applications embedding the engine
// ABOUTME: Configures log level, output format, and HTTP-client noise reduction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Fitness

//! Production-ready logging configuration with structured output
//!
//! The crate itself only emits `tracing` events; installing a subscriber is
//! the embedding application's job. [`LoggingConfig::init`] wires up a
//! sensible one: `RUST_LOG`-driven filtering with HTTP-client noise
//! reduction, and JSON, pretty, or compact output selected via `LOG_FORMAT`.

use std::env;
use std::io;

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::errors::{AppError, AppResult};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Error level - only critical errors
    Error,
    /// Warning level - potential issues
    Warn,
    /// Info level - normal operational messages (default)
    #[default]
    Info,
    /// Debug level - detailed debugging information
    Debug,
    /// Trace level - very verbose tracing
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info, // Default fallback (including "info")
        }
    }

    /// String form accepted by `EnvFilter` directives
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development (default)
    #[default]
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// Log level applied to this crate's events
    pub level: LogLevel,
    /// Output format
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// Reads `RUST_LOG` for the level and `LOG_FORMAT` (`json`, `compact`,
    /// anything else is pretty) for the format.
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG")
            .map(|s| LogLevel::from_str_or_default(&s))
            .unwrap_or_default();

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        Self { level, format }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn init(&self) -> AppResult<()> {
        let base = env::var("RUST_LOG")
            .map_or_else(|_| EnvFilter::new(self.level.as_str()), EnvFilter::new);

        // HTTP-client internals are noisy at debug level
        let env_filter = base
            .add_directive(
                "hyper=warn"
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::WARN.into()),
            )
            .add_directive(
                "reqwest=warn"
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::WARN.into()),
            )
            .add_directive(
                format!("forja_fitness={}", self.level.as_str())
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::INFO.into()),
            );

        let registry = tracing_subscriber::registry().with(env_filter);

        let result = match self.format {
            LogFormat::Json => {
                let layer = fmt::layer()
                    .with_target(true)
                    .with_writer(io::stdout)
                    .json();
                registry.with(layer).try_init()
            }
            LogFormat::Pretty => {
                let layer = fmt::layer().with_target(true).with_writer(io::stdout);
                registry.with(layer).try_init()
            }
            LogFormat::Compact => {
                let layer = fmt::layer()
                    .with_target(true)
                    .with_writer(io::stdout)
                    .compact();
                registry.with(layer).try_init()
            }
        };

        result.map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_str() {
        assert_eq!(LogLevel::from_str_or_default("debug"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("TRACE"), LogLevel::Trace);
        // Unknown values fall back to Info
        assert_eq!(LogLevel::from_str_or_default("verbose"), LogLevel::Info);
    }

    #[test]
    fn test_log_level_as_str_round_trip() {
        for level in [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ] {
            assert_eq!(LogLevel::from_str_or_default(level.as_str()), level);
        }
    }
}
