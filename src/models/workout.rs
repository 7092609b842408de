// ABOUTME: Workout plan types produced by the generation pipeline
// ABOUTME: Exercise, WorkoutDay, and WeeklyWorkoutPlan value records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Fitness

use serde::{Deserialize, Serialize};

/// A single exercise inside a training day
///
/// Produced by the external model and normalized with safe defaults for any
/// field it fails to supply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Stable identifier, used as a list key by the UI
    pub id: String,
    /// Exercise name
    pub name: String,
    /// Target muscle group
    pub muscle_group: String,
    /// Number of sets
    pub sets: u32,
    /// Rep descriptor, free-form (e.g. "10-12", "até a falha")
    pub reps: String,
    /// Rest between sets, in seconds
    pub rest_seconds: u32,
    /// Execution instructions
    pub instructions: String,
    /// Coaching tip
    pub tips: String,
}

/// One training day of the weekly split
///
/// Exercise order is execution order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDay {
    /// Day label (e.g. "Treino A - Peito e Tríceps")
    pub day_name: String,
    /// Training focus for the day
    pub focus: String,
    /// Expected session duration descriptor (e.g. "60 min")
    pub duration: String,
    /// Exercises in execution order
    pub exercises: Vec<Exercise>,
}

/// A full weekly training program
///
/// An empty `split` is a valid "no data" state, not a defect; consumers
/// render it as such rather than treating it as an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyWorkoutPlan {
    /// Program name
    pub title: String,
    /// Short methodology summary
    pub overview: String,
    /// Ordered training days
    pub split: Vec<WorkoutDay>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_camel_case() {
        let exercise = Exercise {
            id: "ex_1".to_owned(),
            name: "Supino reto".to_owned(),
            muscle_group: "Peito".to_owned(),
            sets: 4,
            reps: "10-12".to_owned(),
            rest_seconds: 60,
            instructions: String::new(),
            tips: String::new(),
        };
        let json = serde_json::to_string(&exercise).unwrap();
        assert!(json.contains("\"muscleGroup\""));
        assert!(json.contains("\"restSeconds\""));
    }

    #[test]
    fn test_empty_split_round_trips() {
        let plan = WeeklyWorkoutPlan {
            title: "Protocolo".to_owned(),
            overview: "Base".to_owned(),
            split: Vec::new(),
        };
        let json = serde_json::to_string(&plan).unwrap();
        let back: WeeklyWorkoutPlan = serde_json::from_str(&json).unwrap();
        assert!(back.split.is_empty());
    }
}
