mod open_ai;
mod prompt;

pub use open_ai::OpenAIProvider;
pub use prompt::{build_image_prompt, build_recipe_prompt, RECIPE_GENERATOR_PROMPT};

use crate::error::RecipeError;
use async_trait::async_trait;

/// Produces raw recipe text for a user prompt
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Get the provider name (e.g., "openai")
    fn provider_name(&self) -> &str;

    /// Generate a recipe in the section layout described by the system prompt
    async fn generate(&self, prompt: &str) -> Result<String, RecipeError>;
}

/// Produces an illustration for a recipe.
///
/// Illustrations are optional, so failures surface as `None` rather than an error.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate_image(&self, prompt: &str) -> Option<String>;
}
