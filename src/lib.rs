//! Turn free-form, AI-generated recipe text into a structured recipe card.
//!
//! The parsing core ([`parse_recipe`], [`recipe_card`]) is synchronous and
//! never fails: missing or malformed sections degrade to empty fields and
//! neutral placeholders. Generation goes through [`RecipeAssistant`].
//!
//! ```
//! let card = recipe_scribe::recipe_card(
//!     "Veggie Fried Rice\nIngredients:\n- 2 cups rice\nServes: 2",
//! );
//! assert_eq!(card.view(4).ingredients, vec!["4 cups rice"]);
//! ```

pub mod builder;
pub mod config;
pub mod derived;
pub mod display;
pub mod error;
pub mod extractors;
pub mod model;
pub mod pipelines;
pub mod providers;
pub mod scale;
pub mod segmenter;
pub mod text;

pub use builder::{RecipeAssistant, RecipeAssistantBuilder};
pub use config::{AppConfig, ProviderConfig};
pub use derived::{Calories, NutritionWarning, RecipeDetails};
pub use error::RecipeError;
pub use extractors::parse_recipe;
pub use model::{DisplayBundle, NutritionFacts, ParsedRecipe, RecipePreferences, TimeFields};
pub use pipelines::{RecipeCard, ServingView};
pub use providers::{ImageGenerator, OpenAIProvider, TextGenerator};
pub use scale::scale_line;

/// Parse raw recipe text and compute everything needed to display it.
pub fn recipe_card(raw: &str) -> RecipeCard {
    pipelines::text::process(raw)
}

/// Generate a recipe with the configured provider and parse it.
///
/// Loads [`AppConfig`] from `config.toml` and `RECIPE__` environment variables.
pub async fn generate_recipe(preferences: RecipePreferences) -> Result<RecipeCard, RecipeError> {
    RecipeAssistant::builder()
        .generate(preferences)
        .build()
        .await
}
