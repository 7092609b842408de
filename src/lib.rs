// ABOUTME: Main library entry point for the Forja Fitness coaching engine
// ABOUTME: Exposes the Gemini-backed plan-generation pipeline and its domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Fitness

#![deny(unsafe_code)]

//! # Forja Fitness
//!
//! AI coaching engine for the Forja Fitness product. The crate turns a typed
//! user profile into workout splits, budget-aware diet plans, exercise
//! substitutions, marketing copy, and chat replies by prompting Google's
//! Generative Language API and normalizing its JSON output into strict
//! domain types.
//!
//! ## Architecture
//!
//! - **Models**: plain value records (profile, workout, diet, conversation)
//! - **Llm**: provider abstraction and the Gemini transport client
//! - **Generation**: the prompt-build → call → sanitize → normalize pipeline
//! - **Config**: environment-only configuration
//! - **Errors**: unified error handling with standard error codes
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use forja_fitness::generation::CoachService;
//! use forja_fitness::models::{TrainingLocation, UserGoal, UserLevel, UserProfile};
//!
//! #[tokio::main]
//! async fn main() {
//!     // Reads GEMINI_API_KEY and FORJA_LLM_MODEL once at startup
//!     let coach = CoachService::from_env();
//!
//!     let profile = UserProfile {
//!         name: "Rafa".to_owned(),
//!         age: 29,
//!         weight: 82.0,
//!         height: 178.0,
//!         goal: UserGoal::MuscleGain,
//!         level: UserLevel::Intermediate,
//!         location: TrainingLocation::Gym,
//!         budget: None,
//!     };
//!
//!     // None means the generation was unavailable; the UI offers a retry
//!     if let Some(plan) = coach.generate_weekly_workout(&profile).await {
//!         println!("{}: {} training days", plan.title, plan.split.len());
//!     }
//! }
//! ```

/// Environment-only configuration (credential, model selection)
pub mod config;

/// Unified error handling system with standard error codes
pub mod errors;

/// Plan-generation pipeline: prompts, sanitization, normalization, service
pub mod generation;

/// LLM provider abstraction and the Gemini transport client
pub mod llm;

/// Structured logging setup for embedding applications
pub mod logging;

/// Domain value records shared across the pipeline
pub mod models;
