use super::{text, RecipeCard};
use crate::error::RecipeError;
use crate::model::RecipePreferences;
use crate::providers::{build_image_prompt, build_recipe_prompt, ImageGenerator, TextGenerator};
use log::{debug, info};

/// Ask the generator for a recipe, parse it, then try for an illustration.
///
/// Generation errors propagate. A missing image never fails the card.
pub async fn process(
    generator: &dyn TextGenerator,
    image_generator: Option<&dyn ImageGenerator>,
    preferences: &RecipePreferences,
) -> Result<RecipeCard, RecipeError> {
    let prompt = build_recipe_prompt(preferences);
    debug!("Requesting recipe from {}: {}", generator.provider_name(), prompt);

    let raw = generator.generate(&prompt).await?;
    if raw.trim().is_empty() {
        return Err(RecipeError::EmptyInput(format!(
            "{} returned no recipe text",
            generator.provider_name()
        )));
    }

    let card = text::process(&raw);

    let image_url = match image_generator {
        Some(images) => {
            let url = images
                .generate_image(&build_image_prompt(&card.recipe.title))
                .await;
            info!("Illustration for {:?}: {:?}", card.recipe.title, url);
            url
        }
        None => None,
    };

    Ok(card.with_image(image_url))
}
