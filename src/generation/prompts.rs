// ABOUTME: Prompt builders for the five generation request kinds
// ABOUTME: Pure functions rendering pt-BR instructions with inline JSON schemas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Fitness

//! # Prompt Builders
//!
//! Deterministically render the instruction string for each request kind.
//! The required output schema is embedded inline so the model's response is
//! self-describing; the normalizer expects exactly these camelCase keys.
//!
//! Every builder is a pure function: no side effects, same output for the
//! same input, and no failure mode for any in-domain value including empty
//! strings and zero numerics. The one permitted source of non-determinism -
//! the freshness identifier embedded in the substitution prompt - is
//! supplied by the caller rather than generated here.

use crate::models::{DietPeriod, Exercise, MarketingChannel, UserProfile};

/// Output schema embedded in the weekly workout prompt
const WORKOUT_SCHEMA: &str = r#"{
  "title": "Nome do Programa (ex: Protocolo Hipertrofia Avançada)",
  "overview": "Breve resumo da metodologia",
  "split": [
    {
      "dayName": "Ex: Treino A - Peito e Tríceps",
      "focus": "Ex: Força e Hipertrofia",
      "duration": "Ex: 60 min",
      "exercises": [
        {
          "id": "unique_id_1",
          "name": "Nome do exercício",
          "muscleGroup": "Músculo alvo",
          "sets": 4,
          "reps": "10-12",
          "restSeconds": 60,
          "instructions": "Como fazer",
          "tips": "Dica pro"
        }
      ]
    }
  ]
}"#;

/// Prompt for generating a full weekly training split
#[must_use]
pub fn weekly_workout(profile: &UserProfile) -> String {
    format!(
        "Atue como um treinador de elite do Forja Fitness PRO.\n\
         Crie uma divisão de treino completa (Split) baseada nestes dados:\n\
         Peso: {weight}kg, Idade: {age}, Nível: {level}, Local: {location}, Objetivo: {goal}.\n\
         \n\
         Se for iniciante, faça treino Full Body ou AB. Se avançado, ABC ou ABCD.\n\
         \n\
         Retorne JSON ESTRITO seguindo este schema exato, SEM texto antes ou depois:\n\
         {schema}",
        weight = profile.weight,
        age = profile.age,
        level = profile.level.as_str(),
        location = profile.location.as_str(),
        goal = profile.goal.as_str(),
        schema = WORKOUT_SCHEMA,
    )
}

/// Prompt for substituting a single exercise
///
/// The original's set count, rep descriptor, and rest duration are pinned in
/// the requested schema so the model varies only the movement and its
/// coaching text. `fresh_id` is the caller-derived freshness identifier for
/// the replacement.
#[must_use]
pub fn exercise_swap(original: &Exercise, goal: &str, fresh_id: &str) -> String {
    format!(
        "O usuário precisa substituir o exercício \"{name}\" (Grupo: {muscle_group}).\n\
         Objetivo do usuário: {goal}.\n\
         Motivo: máquina ocupada ou desconforto.\n\
         \n\
         Sugira UM exercício equivalente biomecanicamente, mantendo séries, repetições e descanso.\n\
         Retorne APENAS o JSON do novo exercício:\n\
         {{\n\
           \"id\": \"{fresh_id}\",\n\
           \"name\": \"Novo Nome\",\n\
           \"muscleGroup\": \"{muscle_group}\",\n\
           \"sets\": {sets},\n\
           \"reps\": \"{reps}\",\n\
           \"restSeconds\": {rest_seconds},\n\
           \"instructions\": \"Breve instrução\",\n\
           \"tips\": \"Dica rápida\"\n\
         }}",
        name = original.name,
        muscle_group = original.muscle_group,
        sets = original.sets,
        reps = original.reps,
        rest_seconds = original.rest_seconds,
    )
}

/// Prompt for generating a budget-aware diet plan
#[must_use]
pub fn diet(profile: &UserProfile, budget: f64, period: DietPeriod) -> String {
    format!(
        "Crie um plano alimentar econômico para um orçamento de R$ {budget} ({period}).\n\
         Perfil: {weight}kg, Objetivo: {goal}.\n\
         \n\
         Foque em alimentos baratos disponíveis no Brasil.\n\
         Retorne um JSON estrito com:\n\
         - totalCost (custo estimado numérico)\n\
         - period (string igual ao input)\n\
         - meals (array: name, costEstimate, calories, protein, carbs, fats, ingredients (array de strings), preparation)\n\
         - shoppingList (array de strings)\n\
         - savingsTips (array de strings: dicas de economia e substituição)",
        period = period.as_str(),
        weight = profile.weight,
        goal = profile.goal.as_str(),
    )
}

/// Prompt for generating affiliate marketing copy
#[must_use]
pub fn marketing_copy(channel: MarketingChannel) -> String {
    format!(
        "Escreva um texto de marketing (copy) persuasivo para vender o \"Forja Fitness PRO\".\n\
         Canal: {channel}.\n\
         \n\
         Pontos chave:\n\
         - IA que monta treinos e dietas pelo orçamento.\n\
         - Design futurista.\n\
         - Resultados rápidos.\n\
         - Use emojis.\n\
         - Inclua um placeholder [SEU LINK] para o link de afiliado.\n\
         \n\
         Apenas retorne o texto cru.",
        channel = channel.as_str(),
    )
}

/// Prompt for answering a chat question with conversation context
#[must_use]
pub fn chat(message: &str, context: &str) -> String {
    format!(
        "Você é o Personal Trainer IA do Forja Fitness PRO.\n\
         Contexto do usuário: {context}.\n\
         \n\
         Responda à pergunta do usuário: \"{message}\"\n\
         \n\
         Diretrizes:\n\
         - Seja motivador mas técnico.\n\
         - Se for sobre dieta, sugira opções baratas.\n\
         - Se for sobre treino, explique a biomecânica de forma simples.\n\
         - Responda em Markdown formatado.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TrainingLocation, UserGoal, UserLevel};

    fn test_profile() -> UserProfile {
        UserProfile {
            name: "Bia".to_owned(),
            age: 31,
            weight: 63.5,
            height: 165.0,
            goal: UserGoal::Definition,
            level: UserLevel::Advanced,
            location: TrainingLocation::Gym,
            budget: Some(400.0),
        }
    }

    #[test]
    fn test_workout_prompt_embeds_goal_and_level() {
        let prompt = weekly_workout(&test_profile());
        assert!(!prompt.is_empty());
        assert!(prompt.contains("Definição Extrema"));
        assert!(prompt.contains("Avançado"));
        assert!(prompt.contains("restSeconds"));
    }

    #[test]
    fn test_workout_prompt_is_deterministic() {
        let profile = test_profile();
        assert_eq!(weekly_workout(&profile), weekly_workout(&profile));
    }

    #[test]
    fn test_swap_prompt_pins_original_prescription() {
        let original = Exercise {
            id: "ex_9".to_owned(),
            name: "Supino reto".to_owned(),
            muscle_group: "Peito".to_owned(),
            sets: 4,
            reps: "10-12".to_owned(),
            rest_seconds: 60,
            instructions: String::new(),
            tips: String::new(),
        };
        let prompt = exercise_swap(&original, "Hipertrofia", "swap_1");
        assert!(prompt.contains("\"sets\": 4"));
        assert!(prompt.contains("\"reps\": \"10-12\""));
        assert!(prompt.contains("\"restSeconds\": 60"));
        assert!(prompt.contains("\"muscleGroup\": \"Peito\""));
        assert!(prompt.contains("swap_1"));
    }

    #[test]
    fn test_builders_accept_degenerate_input() {
        let profile = UserProfile {
            name: String::new(),
            age: 0,
            weight: 0.0,
            height: 0.0,
            goal: UserGoal::WeightLoss,
            level: UserLevel::Beginner,
            location: TrainingLocation::Home,
            budget: None,
        };
        assert!(!weekly_workout(&profile).is_empty());
        assert!(!diet(&profile, 0.0, DietPeriod::Daily).is_empty());
        assert!(!chat("", "").is_empty());
    }

    #[test]
    fn test_diet_prompt_embeds_budget_and_period() {
        let prompt = diet(&test_profile(), 350.0, DietPeriod::Monthly);
        assert!(prompt.contains("R$ 350"));
        assert!(prompt.contains("Mensal"));
        assert!(prompt.contains("savingsTips"));
    }

    #[test]
    fn test_marketing_prompt_names_channel() {
        let prompt = marketing_copy(MarketingChannel::Instagram);
        assert!(prompt.contains("Instagram"));
        assert!(prompt.contains("[SEU LINK]"));
    }
}
