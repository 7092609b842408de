// ABOUTME: Schema-aware normalization of loosely-typed model payloads
// ABOUTME: Maps serde_json::Value into fully-populated domain records with named defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Fitness

//! # Schema Normalizer
//!
//! The single chokepoint where the untrusted, semi-structured payload from
//! the model (held as `serde_json::Value`) becomes a strict domain type.
//! Nothing loosely typed leaks past this module.
//!
//! Every field has a named default applied when the payload omits it, types
//! it wrongly, or malforms it: ordered sequences become empty, numerics
//! become zero, label-like strings become domain-appropriate fallbacks, and
//! detail strings become empty. Array elements that are not JSON objects
//! are skipped; object elements are normalized field-by-field. The
//! substitution normalizer is the one context-dependent case: it falls back
//! to the original exercise's values rather than the global defaults.
//!
//! Normalization itself never fails; only the initial [`parse_json`] can,
//! and the owning pipeline collapses that into its single "generation
//! failed" outcome.

use serde_json::Value;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::{DietPeriod, DietPlan, Exercise, Meal, WeeklyWorkoutPlan, WorkoutDay};

/// Fallback program title when the payload omits one
pub const FALLBACK_PLAN_TITLE: &str = "Protocolo Personalizado Forja";

/// Fallback program overview when the payload omits one
pub const FALLBACK_PLAN_OVERVIEW: &str = "Foco total nos resultados.";

const FALLBACK_DAY_NAME: &str = "Treino";
const FALLBACK_DAY_FOCUS: &str = "Geral";
const FALLBACK_EXERCISE_NAME: &str = "Exercício";
const FALLBACK_MUSCLE_GROUP: &str = "Geral";
const FALLBACK_MEAL_NAME: &str = "Refeição";

/// Parse a sanitized string as JSON
///
/// # Errors
///
/// Returns a serialization error when the string is not valid JSON. The
/// raw parse error is kept as the source for logging; callers never
/// propagate it past the pipeline boundary.
pub fn parse_json(sanitized: &str) -> AppResult<Value> {
    serde_json::from_str(sanitized)
        .map_err(|e| AppError::serialization("Payload is not valid JSON").with_source(e))
}

// ============================================================================
// Field helpers
// ============================================================================

/// User-facing label: non-blank payload string or the named fallback
fn label_or(value: &Value, key: &str, fallback: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map_or_else(|| fallback.to_owned(), ToOwned::to_owned)
}

/// Detail text: payload string or empty
fn text_or_empty(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default()
        .to_owned()
}

/// Numeric field as f64, defaulting when absent or non-numeric
fn f64_or(value: &Value, key: &str, fallback: f64) -> f64 {
    value.get(key).and_then(Value::as_f64).unwrap_or(fallback)
}

/// Non-negative integer field, accepting integral floats, defaulting otherwise
fn u32_or(value: &Value, key: &str, fallback: u32) -> u32 {
    let Some(number) = value.get(key) else {
        return fallback;
    };
    number
        .as_u64()
        .or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.round() as u64)
        })
        .map_or(fallback, |n| u32::try_from(n).unwrap_or(u32::MAX))
}

/// String array field; non-string elements are skipped, absence is empty
fn string_list(value: &Value, key: &str) -> Vec<String> {
    value.get(key).and_then(Value::as_array).map_or_else(
        Vec::new,
        |items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(ToOwned::to_owned)
                .collect()
        },
    )
}

/// Object array field; non-object elements are skipped, absence is empty
fn object_list<'a>(value: &'a Value, key: &str) -> Vec<&'a Value> {
    value.get(key).and_then(Value::as_array).map_or_else(
        Vec::new,
        |items| items.iter().filter(|item| item.is_object()).collect(),
    )
}

// ============================================================================
// Entity normalizers
// ============================================================================

/// Normalize a weekly workout plan payload
///
/// Total: any JSON value maps to a plan whose `title` and `overview` are
/// non-blank and whose `split` is an array, possibly empty.
#[must_use]
pub fn weekly_workout_plan(payload: &Value) -> WeeklyWorkoutPlan {
    WeeklyWorkoutPlan {
        title: label_or(payload, "title", FALLBACK_PLAN_TITLE),
        overview: label_or(payload, "overview", FALLBACK_PLAN_OVERVIEW),
        split: object_list(payload, "split")
            .into_iter()
            .map(workout_day)
            .collect(),
    }
}

fn workout_day(payload: &Value) -> WorkoutDay {
    WorkoutDay {
        day_name: label_or(payload, "dayName", FALLBACK_DAY_NAME),
        focus: label_or(payload, "focus", FALLBACK_DAY_FOCUS),
        duration: text_or_empty(payload, "duration"),
        exercises: object_list(payload, "exercises")
            .into_iter()
            .map(plan_exercise)
            .collect(),
    }
}

fn plan_exercise(payload: &Value) -> Exercise {
    Exercise {
        // Identifiers are list keys, not user-facing text; mint one when absent
        id: payload
            .get("id")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map_or_else(|| Uuid::new_v4().to_string(), ToOwned::to_owned),
        name: label_or(payload, "name", FALLBACK_EXERCISE_NAME),
        muscle_group: label_or(payload, "muscleGroup", FALLBACK_MUSCLE_GROUP),
        sets: u32_or(payload, "sets", 0),
        reps: text_or_empty(payload, "reps"),
        rest_seconds: u32_or(payload, "restSeconds", 0),
        instructions: text_or_empty(payload, "instructions"),
        tips: text_or_empty(payload, "tips"),
    }
}

/// Normalize a diet plan payload
///
/// `requested_period` wins whenever the payload's `period` is absent or
/// unrecognized.
#[must_use]
pub fn diet_plan(payload: &Value, requested_period: DietPeriod) -> DietPlan {
    DietPlan {
        total_cost: f64_or(payload, "totalCost", 0.0),
        period: payload
            .get("period")
            .and_then(Value::as_str)
            .and_then(DietPeriod::parse)
            .unwrap_or(requested_period),
        meals: object_list(payload, "meals").into_iter().map(meal).collect(),
        shopping_list: string_list(payload, "shoppingList"),
        savings_tips: string_list(payload, "savingsTips"),
    }
}

fn meal(payload: &Value) -> Meal {
    Meal {
        name: label_or(payload, "name", FALLBACK_MEAL_NAME),
        cost_estimate: f64_or(payload, "costEstimate", 0.0),
        calories: f64_or(payload, "calories", 0.0),
        protein: text_or_empty(payload, "protein"),
        carbs: text_or_empty(payload, "carbs"),
        fats: text_or_empty(payload, "fats"),
        ingredients: string_list(payload, "ingredients"),
        preparation: text_or_empty(payload, "preparation"),
    }
}

/// Normalize an exercise-substitution payload
///
/// Context-dependent defaults: every field the model fails to supply falls
/// back to the original exercise's value, never the generic plan defaults.
#[must_use]
pub fn replacement_exercise(payload: &Value, original: &Exercise) -> Exercise {
    Exercise {
        id: label_or(payload, "id", &original.id),
        name: label_or(payload, "name", &original.name),
        muscle_group: label_or(payload, "muscleGroup", &original.muscle_group),
        sets: u32_or(payload, "sets", original.sets),
        reps: label_or(payload, "reps", &original.reps),
        rest_seconds: u32_or(payload, "restSeconds", original.rest_seconds),
        instructions: label_or(payload, "instructions", &original.instructions),
        tips: label_or(payload, "tips", &original.tips),
    }
}
