// ABOUTME: Integration tests for the prompt builders across the input domain
// ABOUTME: Asserts goal/level embedding, determinism, and totality for all enum values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Fitness

// Test files don't require documentation - this is a rustc lint (not clippy)
#![allow(missing_docs)]

use forja_fitness::generation::prompts;
use forja_fitness::models::{
    DietPeriod, Exercise, MarketingChannel, TrainingLocation, UserGoal, UserLevel, UserProfile,
};

const ALL_GOALS: [UserGoal; 4] = [
    UserGoal::WeightLoss,
    UserGoal::MuscleGain,
    UserGoal::Definition,
    UserGoal::Conditioning,
];

const ALL_LEVELS: [UserLevel; 3] = [
    UserLevel::Beginner,
    UserLevel::Intermediate,
    UserLevel::Advanced,
];

const ALL_LOCATIONS: [TrainingLocation; 3] = [
    TrainingLocation::Home,
    TrainingLocation::Gym,
    TrainingLocation::Outdoors,
];

fn profile_with(goal: UserGoal, level: UserLevel, location: TrainingLocation) -> UserProfile {
    UserProfile {
        name: "Teste".to_owned(),
        age: 30,
        weight: 75.0,
        height: 175.0,
        goal,
        level,
        location,
        budget: None,
    }
}

#[test]
fn test_workout_prompt_embeds_goal_and_level_for_every_combination() {
    for goal in ALL_GOALS {
        for level in ALL_LEVELS {
            for location in ALL_LOCATIONS {
                let profile = profile_with(goal, level, location);
                let prompt = prompts::weekly_workout(&profile);
                assert!(!prompt.is_empty());
                assert!(
                    prompt.contains(goal.as_str()),
                    "goal {goal:?} missing from prompt"
                );
                assert!(
                    prompt.contains(level.as_str()),
                    "level {level:?} missing from prompt"
                );
                assert!(prompt.contains(location.as_str()));
            }
        }
    }
}

#[test]
fn test_diet_prompt_embeds_every_period() {
    let profile = profile_with(
        UserGoal::WeightLoss,
        UserLevel::Beginner,
        TrainingLocation::Home,
    );
    for period in [DietPeriod::Daily, DietPeriod::Weekly, DietPeriod::Monthly] {
        let prompt = prompts::diet(&profile, 250.0, period);
        assert!(prompt.contains(period.as_str()));
        assert!(prompt.contains("R$ 250"));
    }
}

#[test]
fn test_marketing_prompt_embeds_every_channel() {
    for channel in [
        MarketingChannel::Whatsapp,
        MarketingChannel::Instagram,
        MarketingChannel::Email,
    ] {
        let prompt = prompts::marketing_copy(channel);
        assert!(prompt.contains(channel.as_str()));
    }
}

#[test]
fn test_builders_are_deterministic_given_input() {
    let profile = profile_with(
        UserGoal::Conditioning,
        UserLevel::Intermediate,
        TrainingLocation::Outdoors,
    );
    assert_eq!(
        prompts::weekly_workout(&profile),
        prompts::weekly_workout(&profile)
    );
    assert_eq!(
        prompts::diet(&profile, 99.9, DietPeriod::Weekly),
        prompts::diet(&profile, 99.9, DietPeriod::Weekly)
    );
    assert_eq!(
        prompts::chat("pergunta", "contexto"),
        prompts::chat("pergunta", "contexto")
    );

    // The swap builder is deterministic given the caller-supplied id
    let exercise = Exercise {
        id: "ex_1".to_owned(),
        name: "Remada curvada".to_owned(),
        muscle_group: "Costas".to_owned(),
        sets: 3,
        reps: "8-10".to_owned(),
        rest_seconds: 90,
        instructions: String::new(),
        tips: String::new(),
    };
    assert_eq!(
        prompts::exercise_swap(&exercise, "Hipertrofia", "swap_42"),
        prompts::exercise_swap(&exercise, "Hipertrofia", "swap_42")
    );
}

#[test]
fn test_chat_prompt_embeds_message_and_context() {
    let prompt = prompts::chat("Posso treinar em jejum?", "objetivo: Emagrecer");
    assert!(prompt.contains("Posso treinar em jejum?"));
    assert!(prompt.contains("objetivo: Emagrecer"));
}
