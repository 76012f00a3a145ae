use std::time::Duration;

use log::debug;

use crate::config::AppConfig;
use crate::model::RecipePreferences;
use crate::pipelines::{self, RecipeCard};
use crate::providers::{ImageGenerator, OpenAIProvider};
use crate::RecipeError;

/// Where the recipe text comes from
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Recipe text that was already generated
    Text(String),
    /// Ask the generation provider for a new recipe
    Generate(RecipePreferences),
}

/// Builder for parsing or generating a recipe card
#[derive(Debug, Default)]
pub struct RecipeAssistantBuilder {
    source: Option<InputSource>,
    with_image: Option<bool>,
    timeout: Option<Duration>,
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
}

impl RecipeAssistantBuilder {
    /// Use recipe text you already have
    ///
    /// # Example
    /// ```
    /// use recipe_scribe::RecipeAssistant;
    ///
    /// let builder = RecipeAssistant::builder()
    ///     .text("Pancakes\nIngredients:\n2 eggs\n1 cup flour");
    /// ```
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.source = Some(InputSource::Text(text.into()));
        self
    }

    /// Generate a new recipe from the given preferences
    ///
    /// # Example
    /// ```
    /// use recipe_scribe::{RecipeAssistant, RecipePreferences};
    ///
    /// let builder = RecipeAssistant::builder().generate(RecipePreferences {
    ///     ingredients: vec!["rice".to_string(), "egg".to_string()],
    ///     servings: Some(2),
    ///     ..Default::default()
    /// });
    /// ```
    pub fn generate(mut self, preferences: RecipePreferences) -> Self {
        self.source = Some(InputSource::Generate(preferences));
        self
    }

    /// Request an illustration after generation (overrides `generate_images` from config)
    pub fn with_image(mut self, enabled: bool) -> Self {
        self.with_image = Some(enabled);
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use recipe_scribe::{RecipeAssistant, RecipePreferences};
    /// use std::time::Duration;
    ///
    /// let builder = RecipeAssistant::builder()
    ///     .generate(RecipePreferences::default())
    ///     .timeout(Duration::from_secs(30));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set the API key instead of relying on the environment or config file
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the chat model used for generation
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    #[doc(hidden)]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Build the recipe card
    ///
    /// # Errors
    /// Returns `RecipeError` if:
    /// - No input source was specified
    /// - The text is empty
    /// - Configuration cannot be loaded or has no API key
    /// - The provider request fails
    ///
    /// Parsing itself never fails; an image that cannot be generated only
    /// leaves `image_url` empty.
    ///
    /// # Example
    /// ```
    /// # use recipe_scribe::RecipeAssistant;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let card = RecipeAssistant::builder()
    ///     .text("Pancakes\nIngredients:\n2 eggs\nServes: 2")
    ///     .build()
    ///     .await?;
    /// assert_eq!(card.recipe.title, "Pancakes");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<RecipeCard, RecipeError> {
        let source = self.source.ok_or_else(|| {
            RecipeError::BuilderError(
                "No input source specified. Use .text() or .generate()".to_string(),
            )
        })?;

        match source {
            InputSource::Text(text) => {
                if text.trim().is_empty() {
                    return Err(RecipeError::EmptyInput(
                        "Recipe text cannot be empty".to_string(),
                    ));
                }
                Ok(pipelines::text::process(&text))
            }
            InputSource::Generate(preferences) => {
                let mut config = AppConfig::load()?;
                if let Some(key) = self.api_key {
                    config.provider.api_key = Some(key);
                }
                if let Some(model) = self.model {
                    config.provider.model = model;
                }
                if let Some(base_url) = self.base_url {
                    config.provider.base_url = Some(base_url);
                }
                let timeout = self
                    .timeout
                    .unwrap_or_else(|| Duration::from_secs(config.timeout));

                let provider = OpenAIProvider::new(&config.provider)?.with_timeout(timeout)?;
                let with_image = self.with_image.unwrap_or(config.generate_images);
                debug!("Generating with model {} (image: {})", config.provider.model, with_image);

                let images: Option<&dyn ImageGenerator> = if with_image {
                    Some(&provider)
                } else {
                    None
                };
                pipelines::generate::process(&provider, images, &preferences).await
            }
        }
    }
}

/// Main entry point for the builder API
pub struct RecipeAssistant;

impl RecipeAssistant {
    /// Creates a new builder
    ///
    /// # Example
    /// ```
    /// use recipe_scribe::RecipeAssistant;
    ///
    /// let builder = RecipeAssistant::builder();
    /// ```
    pub fn builder() -> RecipeAssistantBuilder {
        RecipeAssistantBuilder::default()
    }
}
