//! Calorie estimate for recipes whose nutrition block has no Calories line.
//!
//! Deliberately rough: each ingredient is matched against a fixed table by
//! substring, the first matching entry wins, and its leading quantity is read
//! as a count of the entry's unit regardless of the unit actually written.

use crate::text::leading_quantity;
use regex::Regex;
use std::sync::LazyLock;

static GRAMS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:g|grams?)\b").unwrap());

/// How the quantity of a matched ingredient is read.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Portion {
    /// Leading quantity, defaulting to 1
    Count,
    /// Grams found anywhere in the line, divided by this many grams per unit
    Grams(f64),
}

struct CalorieEntry {
    name: &'static str,
    kcal: f64,
    portion: Portion,
}

const fn per_unit(name: &'static str, kcal: f64) -> CalorieEntry {
    CalorieEntry {
        name,
        kcal,
        portion: Portion::Count,
    }
}

/// Specific names precede generic ones ("olive oil" before "oil").
static CALORIE_TABLE: &[CalorieEntry] = &[
    per_unit("olive oil", 120.0),      // tablespoon
    per_unit("vegetable oil", 120.0),  // tablespoon
    per_unit("sesame oil", 120.0),     // tablespoon
    per_unit("butter", 100.0),         // tablespoon
    CalorieEntry {
        name: "goat cheese",
        kcal: 75.0,
        portion: Portion::Grams(30.0),
    },
    per_unit("cheddar", 115.0),        // 30 g slice
    per_unit("parmesan", 22.0),        // tablespoon grated
    per_unit("onion", 45.0),           // medium
    per_unit("garlic", 4.0),           // clove
    per_unit("tomato", 22.0),          // medium
    per_unit("bell pepper", 30.0),     // medium
    per_unit("carrot", 25.0),          // medium
    per_unit("potato", 160.0),         // medium
    per_unit("egg", 70.0),             // large
    per_unit("chicken breast", 165.0), // breast
    per_unit("brown rice", 215.0),     // cup cooked
    per_unit("rice", 205.0),           // cup cooked
    per_unit("pasta", 200.0),          // cup cooked
    per_unit("quinoa", 220.0),         // cup cooked
    per_unit("milk", 120.0),           // cup
    per_unit("sugar", 48.0),           // tablespoon
    per_unit("flour", 455.0),          // cup
    per_unit("avocado", 240.0),        // whole
    per_unit("banana", 105.0),         // medium
];

fn portions(entry: &CalorieEntry, ingredient: &str) -> f64 {
    match entry.portion {
        Portion::Count => leading_quantity(ingredient).unwrap_or(1.0),
        Portion::Grams(per) => GRAMS_RE
            .captures(ingredient)
            .and_then(|caps| caps[1].parse::<f64>().ok())
            .map_or(1.0, |grams| grams / per),
    }
}

/// Calories contributed by one ingredient line, if it names a table entry.
pub fn ingredient_calories(ingredient: &str) -> Option<f64> {
    let lower = ingredient.to_lowercase();
    CALORIE_TABLE
        .iter()
        .find(|entry| lower.contains(entry.name))
        .map(|entry| portions(entry, &lower) * entry.kcal)
}

/// Summed estimate over all ingredients, `None` unless positive.
pub fn estimate_calories(ingredients: &[String]) -> Option<u32> {
    let total: f64 = ingredients
        .iter()
        .filter_map(|ingredient| ingredient_calories(ingredient))
        .sum();
    (total > 0.0).then(|| total.round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_olive_oil_and_onion() {
        let ingredients = owned(&["2 tablespoons olive oil", "1 medium onion"]);
        assert_eq!(estimate_calories(&ingredients), Some(285));
    }

    #[test]
    fn test_missing_quantity_defaults_to_one() {
        assert_eq!(ingredient_calories("Onion, diced"), Some(45.0));
    }

    #[test]
    fn test_goat_cheese_uses_grams() {
        assert_eq!(ingredient_calories("60g crumbled goat cheese"), Some(150.0));
        assert_eq!(ingredient_calories("goat cheese, to taste"), Some(75.0));
    }

    #[test]
    fn test_first_entry_wins() {
        // "olive oil" is listed before "butter"
        assert_eq!(ingredient_calories("1 tbsp olive oil or butter"), Some(120.0));
        // "brown rice" is listed before "rice"
        assert_eq!(ingredient_calories("1 cup brown rice"), Some(215.0));
    }

    #[test]
    fn test_unit_is_not_converted() {
        // the heuristic reads "2" as two tablespoons even though cups were written
        assert_eq!(ingredient_calories("2 cups olive oil"), Some(240.0));
    }

    #[test]
    fn test_no_matches() {
        assert_eq!(estimate_calories(&owned(&["1 pinch salt", "water"])), None);
        assert_eq!(estimate_calories(&[]), None);
    }
}
