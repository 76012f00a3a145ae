use crate::model::ParsedRecipe;
use crate::segmenter::{segment, split_lines, title_or_default, Line, SectionKind, SectionMap, Strategy};
use log::debug;

mod field;
mod list;
pub mod nutrition;
mod substitutions;

pub use field::extract_field;
pub use list::extract;
pub use nutrition::parse_nutrition;
pub use substitutions::extract_blocks;

/// A segmented document, ready for per-section extraction.
pub struct ParsingContext {
    pub lines: Vec<Line>,
    pub sections: SectionMap,
}

/// Value produced by a section's strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionValue {
    Entries(Vec<String>),
    Text(String),
}

impl ParsingContext {
    pub fn new(raw: &str) -> Self {
        let lines = split_lines(raw);
        let sections = segment(&lines);
        ParsingContext { lines, sections }
    }

    /// Extract `kind` with its strategy; `None` when the section is absent.
    pub fn section(&self, kind: SectionKind) -> Option<SectionValue> {
        let start = self.sections.start(kind)?;
        let end = self.sections.end(kind);

        let value = match kind.strategy() {
            Strategy::List => SectionValue::Entries(extract(&self.lines, start, end)),
            Strategy::Blocks => SectionValue::Entries(extract_blocks(&self.lines, start, end)),
            Strategy::Verbatim => SectionValue::Text(
                self.sections
                    .content_range(kind)
                    .and_then(|range| self.lines.get(range))
                    .unwrap_or_default()
                    .iter()
                    .map(|line| line.text.as_str())
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            Strategy::Field => SectionValue::Text(extract_field(&self.lines, kind, start, end)?),
        };
        Some(value)
    }

    pub fn entries(&self, kind: SectionKind) -> Option<Vec<String>> {
        match self.section(kind)? {
            SectionValue::Entries(entries) => Some(entries),
            SectionValue::Text(text) => Some(vec![text]),
        }
    }

    pub fn text(&self, kind: SectionKind) -> Option<String> {
        match self.section(kind)? {
            SectionValue::Text(text) => Some(text),
            SectionValue::Entries(entries) => Some(entries.join("\n")),
        }
    }

    pub fn into_recipe(self) -> ParsedRecipe {
        let recipe = ParsedRecipe {
            title: title_or_default(&self.sections),
            ingredients: self.entries(SectionKind::Ingredients).unwrap_or_default(),
            instructions: self.entries(SectionKind::Instructions).unwrap_or_default(),
            substitutions: self.entries(SectionKind::Substitutions),
            tips: self.entries(SectionKind::Tips),
            nutrition: self.text(SectionKind::Nutrition),
            servings: self.text(SectionKind::Serves),
            serving_size: self.text(SectionKind::ServingSize),
            total_time: self.text(SectionKind::TotalTime),
        };
        debug!(
            "Parsed {:?}: {} ingredients, {} instructions, sections {:?}",
            recipe.title,
            recipe.ingredients.len(),
            recipe.instructions.len(),
            self.sections.found()
        );
        recipe
    }
}

/// Parse raw generator output into a [`ParsedRecipe`]. Never fails.
pub fn parse_recipe(raw: &str) -> ParsedRecipe {
    ParsingContext::new(raw).into_recipe()
}
