// ABOUTME: Core data models for the Forja Fitness coaching engine
// ABOUTME: Re-exports profile, workout, diet, conversation, and affiliate types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Fitness

//! # Data Models
//!
//! Plain value records shared across the generation pipeline. Every entity
//! is immutable after construction and owned by the request/response cycle
//! that produced it; the pipeline keeps no shared mutable state and no
//! cross-request cache.
//!
//! ## Design Principles
//!
//! - **Closed enums with lenient parsing**: goal, level, location, and
//!   period are fixed sets; unrecognized input falls back to a default
//!   instead of erroring
//! - **Serializable**: camelCase JSON names matching the payload schema the
//!   prompts request from the model
//! - **Fully populated**: normalized records never carry null/absent
//!   display fields, so consumers never null-check

// Domain modules
mod affiliate;
mod conversation;
mod diet;
mod profile;
mod workout;

// Re-export all public types for convenience
// Profile domain
pub use profile::{TrainingLocation, UserGoal, UserLevel, UserProfile};

// Workout domain
pub use workout::{Exercise, WeeklyWorkoutPlan, WorkoutDay};

// Diet domain
pub use diet::{DietPeriod, DietPlan, Meal};

// Conversation domain
pub use conversation::{ChatMessage, ChatRole, Conversation};

// Affiliate domain (mock data, no real payment processing)
pub use affiliate::{AffiliateStats, MarketingChannel};
