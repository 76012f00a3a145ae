pub mod generate;
pub mod text;

use crate::derived::{NutritionWarning, RecipeDetails};
use crate::model::{DisplayBundle, ParsedRecipe};
use crate::scale::{scale_factor, scale_ingredients};
use serde::Serialize;

/// A parsed recipe with everything needed to show it.
///
/// Cheap to rebuild: a new raw text simply replaces the whole card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCard {
    pub recipe: ParsedRecipe,
    pub details: RecipeDetails,
    /// Illustration URL; `None` when no image was requested or generation failed
    pub image_url: Option<String>,
}

/// One rendering of a card at a chosen serving count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServingView {
    pub title: String,
    pub servings: u32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub substitutions: Option<Vec<String>>,
    pub tips: Option<Vec<String>>,
    pub nutrition: DisplayBundle,
    pub nutrition_note: Option<String>,
    pub image_url: Option<String>,
    pub warning: Option<String>,
}

impl RecipeCard {
    pub fn new(recipe: ParsedRecipe) -> Self {
        let details = RecipeDetails::derive(&recipe);
        RecipeCard {
            recipe,
            details,
            image_url: None,
        }
    }

    pub fn with_image(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }

    pub fn original_servings(&self) -> u32 {
        self.details.original_servings
    }

    pub fn warning(&self) -> Option<&NutritionWarning> {
        self.details.warning.as_ref()
    }

    /// Ingredients for `desired` servings, computed fresh from the parsed list.
    pub fn scaled_ingredients(&self, desired: u32) -> Vec<String> {
        let factor = scale_factor(desired.max(1), self.original_servings());
        scale_ingredients(&self.recipe.ingredients, factor)
    }

    pub fn view(&self, desired: u32) -> ServingView {
        ServingView {
            title: self.recipe.title.clone(),
            servings: desired.max(1),
            ingredients: self.scaled_ingredients(desired),
            instructions: self.recipe.instructions.clone(),
            substitutions: self.recipe.substitutions.clone(),
            tips: self.recipe.tips.clone(),
            nutrition: self.details.display(),
            nutrition_note: self.details.nutrition.note.clone(),
            image_url: self.image_url.clone(),
            warning: self.warning().map(ToString::to_string),
        }
    }
}
