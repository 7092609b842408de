// ABOUTME: Diet plan types produced by the generation pipeline
// ABOUTME: Meal, DietPlan, and the DietPeriod enum with lenient parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Fitness

use serde::{Deserialize, Serialize};

/// Budget period for a diet plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum DietPeriod {
    /// "Diário" - default for unrecognized input
    #[default]
    Daily,
    /// "Semanal"
    Weekly,
    /// "Mensal"
    Monthly,
}

impl DietPeriod {
    /// Display label embedded in prompts and shown in the UI
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "Diário",
            Self::Weekly => "Semanal",
            Self::Monthly => "Mensal",
        }
    }

    /// Parse period from string, returning `None` for unrecognized input
    ///
    /// The normalizer resolves `None` against the caller-supplied period
    /// rather than a global default.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "diário" | "diario" | "daily" => Some(Self::Daily),
            "semanal" | "weekly" => Some(Self::Weekly),
            "mensal" | "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }
}

/// A single meal of the plan
///
/// Macro descriptors are free-form strings; the source service is not
/// constrained to numeric macros.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Meal name
    pub name: String,
    /// Estimated cost in BRL
    pub cost_estimate: f64,
    /// Estimated calories
    pub calories: f64,
    /// Protein descriptor (e.g. "30g")
    pub protein: String,
    /// Carbohydrate descriptor
    pub carbs: String,
    /// Fat descriptor
    pub fats: String,
    /// Ingredients in listed order
    pub ingredients: Vec<String>,
    /// Preparation text
    pub preparation: String,
}

/// A budget-aware meal plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    /// Estimated total cost in BRL for the period
    pub total_cost: f64,
    /// Budget period the plan covers
    pub period: DietPeriod,
    /// Meals in listed order
    pub meals: Vec<Meal>,
    /// Shopping list; duplicates are possible and preserved
    pub shopping_list: Vec<String>,
    /// Saving and substitution tips
    pub savings_tips: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_parse_is_lenient() {
        assert_eq!(DietPeriod::parse("Semanal"), Some(DietPeriod::Weekly));
        assert_eq!(DietPeriod::parse("diario"), Some(DietPeriod::Daily));
        assert_eq!(DietPeriod::parse("quinzenal"), None);
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let plan = DietPlan {
            total_cost: 120.0,
            period: DietPeriod::Weekly,
            meals: Vec::new(),
            shopping_list: vec!["arroz".to_owned(), "arroz".to_owned()],
            savings_tips: Vec::new(),
        };
        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.contains("\"totalCost\""));
        assert!(json.contains("\"shoppingList\""));
        assert!(json.contains("\"savingsTips\""));
    }
}
