// ABOUTME: User profile types collected by the onboarding flow
// ABOUTME: UserProfile plus the closed goal/level/location enums with lenient parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Fitness

use serde::{Deserialize, Serialize};

/// Training objective selected during onboarding
///
/// Display labels are pt-BR because prompts and UI copy are pt-BR.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserGoal {
    /// Fat loss ("Emagrecer") - default for unrecognized input
    #[default]
    WeightLoss,
    /// Hypertrophy ("Hipertrofia")
    MuscleGain,
    /// Extreme definition ("Definição Extrema")
    Definition,
    /// General conditioning ("Condicionamento")
    Conditioning,
}

impl UserGoal {
    /// Display label embedded in prompts and shown in the UI
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "Emagrecer",
            Self::MuscleGain => "Hipertrofia",
            Self::Definition => "Definição Extrema",
            Self::Conditioning => "Condicionamento",
        }
    }

    /// Parse goal from string with fallback
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hipertrofia" | "muscle_gain" => Self::MuscleGain,
            "definição extrema" | "definicao extrema" | "definition" => Self::Definition,
            "condicionamento" | "conditioning" => Self::Conditioning,
            _ => Self::WeightLoss,
        }
    }
}

/// Self-reported experience level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserLevel {
    /// "Iniciante" - default for unrecognized input
    #[default]
    Beginner,
    /// "Intermediário"
    Intermediate,
    /// "Avançado"
    Advanced,
}

impl UserLevel {
    /// Display label embedded in prompts and shown in the UI
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Iniciante",
            Self::Intermediate => "Intermediário",
            Self::Advanced => "Avançado",
        }
    }

    /// Parse level from string with fallback
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "intermediário" | "intermediario" | "intermediate" => Self::Intermediate,
            "avançado" | "avancado" | "advanced" => Self::Advanced,
            _ => Self::Beginner,
        }
    }
}

/// Where the user trains
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrainingLocation {
    /// "Casa" - default for unrecognized input
    #[default]
    Home,
    /// "Academia"
    Gym,
    /// "Ar Livre"
    Outdoors,
}

impl TrainingLocation {
    /// Display label embedded in prompts and shown in the UI
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "Casa",
            Self::Gym => "Academia",
            Self::Outdoors => "Ar Livre",
        }
    }

    /// Parse location from string with fallback
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "academia" | "gym" => Self::Gym,
            "ar livre" | "outdoors" => Self::Outdoors,
            _ => Self::Home,
        }
    }
}

/// User profile collected by the onboarding form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Body weight in kilograms
    pub weight: f64,
    /// Height in centimeters
    pub height: f64,
    /// Training objective
    pub goal: UserGoal,
    /// Experience level
    pub level: UserLevel,
    /// Where the user trains
    pub location: TrainingLocation,
    /// Optional food budget in BRL, used by diet generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_lossy_parse_falls_back() {
        assert_eq!(UserGoal::from_str_lossy("Hipertrofia"), UserGoal::MuscleGain);
        assert_eq!(UserGoal::from_str_lossy("powerlifting"), UserGoal::WeightLoss);
        assert_eq!(UserGoal::from_str_lossy(""), UserGoal::WeightLoss);
    }

    #[test]
    fn test_level_lossy_parse_accepts_unaccented() {
        assert_eq!(
            UserLevel::from_str_lossy("intermediario"),
            UserLevel::Intermediate
        );
        assert_eq!(UserLevel::from_str_lossy("Avançado"), UserLevel::Advanced);
        assert_eq!(UserLevel::from_str_lossy("ninja"), UserLevel::Beginner);
    }

    #[test]
    fn test_location_lossy_parse() {
        assert_eq!(
            TrainingLocation::from_str_lossy("Ar Livre"),
            TrainingLocation::Outdoors
        );
        assert_eq!(
            TrainingLocation::from_str_lossy("garage"),
            TrainingLocation::Home
        );
    }
}
