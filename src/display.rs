use crate::pipelines::ServingView;
use std::fmt;

const NO_INGREDIENTS: &str = "No ingredients listed.";
const NO_INSTRUCTIONS: &str = "No instructions provided.";

/// Render a view as plain text, using neutral placeholders for anything missing.
pub fn render(view: &ServingView) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", view.title));
    output.push_str(&format!("Serves {}\n", view.servings));
    if let Some(url) = &view.image_url {
        output.push_str(&format!("Image: {url}\n"));
    }

    output.push_str("\nIngredients:\n");
    if view.ingredients.is_empty() {
        output.push_str(&format!("{NO_INGREDIENTS}\n"));
    }
    for ingredient in &view.ingredients {
        output.push_str(&format!("- {ingredient}\n"));
    }

    output.push_str("\nInstructions:\n");
    if view.instructions.is_empty() {
        output.push_str(&format!("{NO_INSTRUCTIONS}\n"));
    }
    for (i, step) in view.instructions.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, step));
    }

    // optional sections are omitted entirely when absent or empty
    push_list(&mut output, "Substitutions", view.substitutions.as_deref());
    push_list(&mut output, "Tips", view.tips.as_deref());

    let n = &view.nutrition;
    output.push_str("\nNutrition (per serving):\n");
    output.push_str(&format!("Calories: {}\n", n.calories));
    output.push_str(&format!("Protein: {}\n", n.protein));
    output.push_str(&format!("Carbs: {}\n", n.carbs));
    output.push_str(&format!("Fat: {}\n", n.fat));
    if let Some(note) = &view.nutrition_note {
        output.push_str(&format!("Note: {note}\n"));
    }

    output.push_str(&format!("\nPrep time: {}\n", n.prep_time));
    output.push_str(&format!("Cook time: {}\n", n.cook_time));
    output.push_str(&format!("Total time: {}\n", n.total_time));
    output.push_str(&format!("Serving size: {}\n", n.serving_size));

    if let Some(warning) = &view.warning {
        output.push_str(&format!("\n{warning}\n"));
    }

    output
}

fn push_list(output: &mut String, heading: &str, entries: Option<&[String]>) {
    let Some(entries) = entries.filter(|e| !e.is_empty()) else {
        return;
    };
    output.push_str(&format!("\n{heading}:\n"));
    for entry in entries {
        output.push_str(&format!("- {entry}\n"));
    }
}

impl fmt::Display for ServingView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
