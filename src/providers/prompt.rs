use crate::model::RecipePreferences;

/// The system prompt sent with every recipe request.
///
/// It asks for exactly the section layout the parser understands. Loaded from
/// `prompt.txt` at compile time so it can be edited without Rust string syntax.
pub const RECIPE_GENERATOR_PROMPT: &str = include_str!("prompt.txt");

/// Build the user message from the collected preferences.
pub fn build_recipe_prompt(preferences: &RecipePreferences) -> String {
    let mut parts = Vec::new();

    let ingredients: Vec<&str> = preferences
        .ingredients
        .iter()
        .map(|i| i.trim())
        .filter(|i| !i.is_empty())
        .collect();
    if ingredients.is_empty() {
        parts.push("Suggest a recipe with common pantry ingredients.".to_string());
    } else {
        parts.push(format!(
            "Create a recipe using: {}.",
            ingredients.join(", ")
        ));
    }

    let non_empty = |value: &Option<String>| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };
    if let Some(cuisine) = non_empty(&preferences.cuisine) {
        parts.push(format!("Cuisine: {cuisine}."));
    }
    if let Some(diet) = non_empty(&preferences.diet) {
        parts.push(format!("Dietary restrictions: {diet}."));
    }
    if let Some(servings) = preferences.servings.filter(|s| *s > 0) {
        parts.push(format!("It should serve {servings}."));
    }
    if let Some(minutes) = preferences.max_minutes.filter(|m| *m > 0) {
        parts.push(format!("Total time must not exceed {minutes} minutes."));
    }

    parts.join(" ")
}

/// Short prompt for the illustration of a parsed recipe.
pub fn build_image_prompt(title: &str) -> String {
    format!("A realistic, appetizing photo of {title}, plated, natural light")
}
