use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Structured record recovered from one raw recipe text.
///
/// Built once per generated recipe and never mutated afterwards; derived
/// values live in [`crate::derived::RecipeDetails`] and scaled quantities are
/// recomputed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRecipe {
    pub title: String,
    /// Cleaned "quantity unit name" phrases, in appearance order
    pub ingredients: Vec<String>,
    /// One entry per step, in execution order
    pub instructions: Vec<String>,
    /// `None` when the section was not found (distinct from found but empty)
    pub substitutions: Option<Vec<String>>,
    pub tips: Option<Vec<String>>,
    /// Nutrition block kept verbatim, one source line per line
    pub nutrition: Option<String>,
    pub servings: Option<String>,
    pub serving_size: Option<String>,
    pub total_time: Option<String>,
}

impl Default for ParsedRecipe {
    fn default() -> Self {
        ParsedRecipe {
            title: crate::segmenter::UNTITLED.to_string(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            substitutions: None,
            tips: None,
            nutrition: None,
            servings: None,
            serving_size: None,
            total_time: None,
        }
    }
}

/// Labelled facts read from a nutrition block.
///
/// Keys are canonical labels ("Calories", "Protein", "Carbs", "Fat") or the
/// label as written for extras ("Sodium", "Vitamin C").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub facts: HashMap<String, String>,
    pub note: Option<String>,
}

impl NutritionFacts {
    pub fn get(&self, label: &str) -> Option<&str> {
        self.facts.get(label).map(String::as_str)
    }
}

/// Time sub-fields found inside a nutrition block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeFields {
    pub prep: Option<String>,
    pub cook: Option<String>,
    pub total: Option<String>,
}

/// Ready-to-show strings; every field is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayBundle {
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub prep_time: String,
    pub cook_time: String,
    pub total_time: String,
    pub serving_size: String,
}

/// What a user asks the generator for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipePreferences {
    /// Ingredients on hand
    pub ingredients: Vec<String>,
    pub cuisine: Option<String>,
    pub diet: Option<String>,
    pub servings: Option<u32>,
    /// Upper bound on total time, in minutes
    pub max_minutes: Option<u32>,
}
