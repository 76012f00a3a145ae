use super::RecipeCard;
use crate::extractors::parse_recipe;
use log::{info, warn};

/// Parse raw generator output into a card.
///
/// Never fails; a missing section only leaves its fields empty. Incomplete
/// nutrition is logged and carried on the card as a warning.
pub fn process(raw: &str) -> RecipeCard {
    let card = RecipeCard::new(parse_recipe(raw));
    info!(
        "Parsed recipe {:?} ({} ingredients, {} steps)",
        card.recipe.title,
        card.recipe.ingredients.len(),
        card.recipe.instructions.len()
    );
    if let Some(warning) = card.warning() {
        warn!("{}", warning);
    }
    card
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_is_stateless() {
        let first = process("Soup\nIngredients:\n1 leek\nServes: 2");
        let second = process("Salad\nIngredients:\n1 lettuce");
        // a later parse does not see anything from an earlier one
        assert_eq!(second.recipe.title, "Salad");
        assert_eq!(second.original_servings(), 1);
        assert_eq!(first, process("Soup\nIngredients:\n1 leek\nServes: 2"));
    }

    #[test]
    fn test_view_scales_from_original() {
        let card = process("Soup\nIngredients:\n2 leeks\n1/2 cup cream\nServes: 2");
        assert_eq!(card.view(4).ingredients, vec!["4 leeks", "1 cup cream"]);
        assert_eq!(card.view(1).ingredients, vec!["1 leeks", "1/4 cup cream"]);
        assert_eq!(card.view(2).ingredients, card.recipe.ingredients);
        assert_eq!(card.view(0).servings, 1);
    }
}
