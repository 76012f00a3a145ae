//! Read-only values computed from a [`ParsedRecipe`]: nutrition facts with a
//! calorie estimate fallback, times, serving size, and the incomplete-nutrition
//! warning.

use crate::extractors::parse_nutrition;
use crate::model::{DisplayBundle, NutritionFacts, ParsedRecipe, TimeFields};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod calories;
pub mod servings;
pub mod time;

pub use calories::estimate_calories;
pub use servings::{serving_size_text, stated_servings};
pub use time::{display_time, parse_minutes, total_time};

/// Shown for any value that could not be determined.
pub const UNKNOWN: &str = "—";

/// Where the Calories value came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "value", rename_all = "snake_case")]
pub enum Calories {
    Parsed(String),
    Estimated(u32),
    Unknown,
}

impl fmt::Display for Calories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Calories::Parsed(value) => write!(f, "{value}"),
            Calories::Estimated(kcal) => write!(f, "~{kcal} (estimated)"),
            Calories::Unknown => write!(f, "{UNKNOWN}"),
        }
    }
}

/// Advisory: the recipe parsed, but Calories and/or Protein are unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionWarning {
    pub missing: Vec<String>,
}

impl fmt::Display for NutritionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Incomplete nutrition data: missing {}", self.missing.join(", "))
    }
}

/// Derived view layered over a [`ParsedRecipe`]; the recipe itself is untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetails {
    pub nutrition: NutritionFacts,
    pub calories: Calories,
    /// Time sub-fields found in the nutrition block
    pub times: TimeFields,
    pub total_time: Option<String>,
    pub serving_size: String,
    /// Portions the recipe is written for; 1 when not stated
    pub original_servings: u32,
    pub warning: Option<NutritionWarning>,
}

impl RecipeDetails {
    pub fn derive(recipe: &ParsedRecipe) -> Self {
        let (nutrition, times) = recipe
            .nutrition
            .as_deref()
            .map(parse_nutrition)
            .unwrap_or_default();

        let calories = match nutrition.get("Calories") {
            Some(value) => Calories::Parsed(value.to_string()),
            None => estimate_calories(&recipe.ingredients)
                .map(Calories::Estimated)
                .unwrap_or(Calories::Unknown),
        };

        let total_time = total_time(
            times.prep.as_deref(),
            times.cook.as_deref(),
            recipe.total_time.as_deref(),
            times.total.as_deref(),
        );

        let serving_size =
            serving_size_text(recipe.serving_size.as_deref(), recipe.servings.as_deref());
        let original_servings =
            stated_servings(recipe.servings.as_deref(), recipe.serving_size.as_deref())
                .unwrap_or(1);

        let mut missing = Vec::new();
        if calories == Calories::Unknown {
            missing.push("Calories".to_string());
        }
        if nutrition.get("Protein").is_none() {
            missing.push("Protein".to_string());
        }
        let warning = (!missing.is_empty()).then_some(NutritionWarning { missing });

        RecipeDetails {
            nutrition,
            calories,
            times,
            total_time,
            serving_size,
            original_servings,
            warning,
        }
    }

    fn fact_or_unknown(&self, label: &str) -> String {
        self.nutrition
            .get(label)
            .unwrap_or(UNKNOWN)
            .to_string()
    }

    pub fn display(&self) -> DisplayBundle {
        DisplayBundle {
            calories: self.calories.to_string(),
            protein: self.fact_or_unknown("Protein"),
            carbs: self.fact_or_unknown("Carbs"),
            fat: self.fact_or_unknown("Fat"),
            prep_time: display_time(self.times.prep.as_deref()),
            cook_time: display_time(self.times.cook.as_deref()),
            total_time: display_time(self.total_time.as_deref()),
            serving_size: self.serving_size.clone(),
        }
    }
}
