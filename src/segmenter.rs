//! Locates the recognized sections of a raw recipe text.
//!
//! The generator output is a title followed by loosely headed blocks
//! ("Ingredients:", "2. Instructions", "**Nutrition (per serving)**", ...).
//! [`segment`] records, for each [`SectionKind`], the index of the first line
//! that heads it; everything between two found headers belongs to the earlier one.

use crate::text::{clean_line, normalize};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub const UNTITLED: &str = "Untitled Recipe";

/// A recognized section, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Ingredients,
    Instructions,
    Substitutions,
    Tips,
    Nutrition,
    TotalTime,
    Serves,
    ServingSize,
}

/// How the content of a section is turned into values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// One entry per cleaned line
    List,
    /// Like `List`, but "Label:" lines absorb what follows until a blank line
    Blocks,
    /// Raw lines kept verbatim for a later parser
    Verbatim,
    /// A single value, usually inline on the header line
    Field,
}

static INGREDIENTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bingredients?\b").unwrap());
static INSTRUCTIONS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:instructions?|directions)\b").unwrap());
static SUBSTITUTIONS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bsubstitut(?:ions?|es?)\b").unwrap());
static TIPS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\btips?\b").unwrap());
static NUTRITION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bnutrition\b|\bnutritional\s+(?:info\w*|facts|values?|breakdown|estimates?)\b")
        .unwrap()
});
static TOTAL_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\btotal\s+time\b").unwrap());
static SERVES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:serves|servings)\b").unwrap());
static SERVING_SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:serving\s+size|portion\s+size|yield)\b").unwrap());

static TITLE_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(?:recipe\s+)?(?:title|name)|recipe)\s*(?::\s*(.*))?$").unwrap()
});
static PARENTHETICAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([^)]*\)").unwrap());

impl SectionKind {
    pub const ALL: [SectionKind; 8] = [
        SectionKind::Ingredients,
        SectionKind::Instructions,
        SectionKind::Substitutions,
        SectionKind::Tips,
        SectionKind::Nutrition,
        SectionKind::TotalTime,
        SectionKind::Serves,
        SectionKind::ServingSize,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            SectionKind::Ingredients => &INGREDIENTS_RE,
            SectionKind::Instructions => &INSTRUCTIONS_RE,
            SectionKind::Substitutions => &SUBSTITUTIONS_RE,
            SectionKind::Tips => &TIPS_RE,
            SectionKind::Nutrition => &NUTRITION_RE,
            SectionKind::TotalTime => &TOTAL_TIME_RE,
            SectionKind::Serves => &SERVES_RE,
            SectionKind::ServingSize => &SERVING_SIZE_RE,
        }
    }

    pub fn strategy(self) -> Strategy {
        match self {
            SectionKind::Ingredients | SectionKind::Instructions | SectionKind::Tips => {
                Strategy::List
            }
            SectionKind::Substitutions => Strategy::Blocks,
            SectionKind::Nutrition => Strategy::Verbatim,
            SectionKind::TotalTime | SectionKind::Serves | SectionKind::ServingSize => {
                Strategy::Field
            }
        }
    }

    /// Whether `line` reads as a header for this kind.
    ///
    /// The keyword must sit in the label part of the line: anywhere before the
    /// first colon, or within the first few words of a colon-less line. Lines
    /// that open with a quantity ("1 cup nutritional yeast") are content.
    pub fn heads(self, line: &str) -> bool {
        let cleaned = clean_line(line);
        if cleaned.starts_with(|c: char| c.is_ascii_digit()) {
            return false;
        }
        let label = header_label(&cleaned, self.label_words());
        !label.is_empty() && self.pattern().is_match(&label)
    }

    /// Words of a colon-less line searched for the keyword. Nutrition headers
    /// tend to carry a qualifier first ("Approximate Nutritional Information").
    fn label_words(self) -> usize {
        match self {
            SectionKind::Nutrition => 4,
            _ => 2,
        }
    }

    /// Byte offset just past the keyword in `line`.
    pub(crate) fn keyword_end(self, line: &str) -> Option<usize> {
        self.pattern().find(line).map(|m| m.end())
    }
}

fn header_label(cleaned: &str, words: usize) -> String {
    match cleaned.split_once(':') {
        Some((label, _)) => label.to_string(),
        None => cleaned
            .split_whitespace()
            .take(words)
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// First kind, in scan order, whose keyword heads `line`.
pub fn classify(line: &str) -> Option<SectionKind> {
    SectionKind::ALL.into_iter().find(|kind| kind.heads(line))
}

/// Whether `line` is nothing but a section header ("Ingredients:", "Tips & Tricks").
///
/// A recognized header ending in a colon is bare however long its label
/// ("Ingredients for the salsa:"). Lines like "Tip: use day-old rice" carry
/// content after the label and are not bare. Colon-less headers must be short,
/// so "Tips for Perfect Rice" still reads as a title.
pub fn is_bare_header(line: &str) -> bool {
    if classify(line).is_none() {
        return false;
    }
    let cleaned = clean_line(line);
    match cleaned.split_once(':') {
        Some((_, rest)) => rest.trim().is_empty(),
        None => {
            PARENTHETICAL_RE
                .replace_all(&cleaned, "")
                .split_whitespace()
                .count()
                <= 3
        }
    }
}

/// A non-empty line of the raw document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    /// A blank line preceded this one
    pub after_blank: bool,
}

/// The non-empty, trimmed lines of a raw text, in order.
pub fn split_lines(raw: &str) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut after_blank = false;
    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            after_blank = true;
            continue;
        }
        lines.push(Line {
            text: trimmed.to_string(),
            after_blank,
        });
        after_blank = false;
    }
    lines
}

/// Section boundaries of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    pub title: Option<String>,
    /// Index of the line the title came from; lines up to here are never headers
    pub title_line: Option<usize>,
    starts: Vec<(SectionKind, usize)>,
    len: usize,
}

impl SectionMap {
    /// Header line index of `kind`, if found.
    pub fn start(&self, kind: SectionKind) -> Option<usize> {
        self.starts
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, idx)| *idx)
    }

    /// Exclusive end of `kind`'s content: the next found header, or end of document.
    pub fn end(&self, kind: SectionKind) -> usize {
        let Some(start) = self.start(kind) else {
            return self.len;
        };
        self.starts
            .iter()
            .map(|(_, idx)| *idx)
            .filter(|idx| *idx > start)
            .min()
            .unwrap_or(self.len)
    }

    /// Content range of `kind`, excluding its header line.
    pub fn content_range(&self, kind: SectionKind) -> Option<std::ops::Range<usize>> {
        self.start(kind).map(|start| (start + 1)..self.end(kind))
    }

    /// Found sections ordered by position.
    pub fn found(&self) -> Vec<(SectionKind, usize)> {
        let mut found = self.starts.clone();
        found.sort_by_key(|(_, idx)| *idx);
        found
    }
}

/// Scan `lines` and record where each section starts.
pub fn segment(lines: &[Line]) -> SectionMap {
    let mut map = SectionMap {
        len: lines.len(),
        ..Default::default()
    };

    let (title, title_line) = find_title(lines);
    map.title = title;
    map.title_line = title_line;
    let scan_from = title_line.map_or(0, |idx| idx + 1);

    for (idx, line) in lines.iter().enumerate().skip(scan_from) {
        let Some(kind) = classify(&line.text) else {
            continue;
        };
        if map.start(kind).is_none() {
            debug!("Found {:?} header at line {}: {:?}", kind, idx, line.text);
            map.starts.push((kind, idx));
        }
    }

    map
}

fn find_title(lines: &[Line]) -> (Option<String>, Option<usize>) {
    for (idx, line) in lines.iter().enumerate() {
        let cleaned = clean_line(&line.text);
        // A header before any title marker means the generator skipped the title
        if is_bare_header(&line.text) {
            break;
        }
        if let Some(caps) = TITLE_MARKER_RE.captures(&cleaned) {
            let inline = caps.get(1).map_or("", |m| m.as_str()).trim();
            if !inline.is_empty() {
                return (Some(inline.to_string()), Some(idx));
            }
            if let Some(next) = lines.get(idx + 1) {
                let title = clean_line(&next.text);
                if !title.is_empty() && !is_bare_header(&next.text) {
                    return (Some(title), Some(idx + 1));
                }
            }
            return (None, Some(idx));
        }
    }

    match lines.first() {
        Some(first) if !is_bare_header(&first.text) => {
            let title = clean_line(&first.text);
            if title.is_empty() {
                (None, Some(0))
            } else {
                (Some(title), Some(0))
            }
        }
        _ => (None, None),
    }
}

/// Title of the document, or [`UNTITLED`].
pub fn title_or_default(map: &SectionMap) -> String {
    map.title
        .as_deref()
        .map(normalize)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNTITLED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &str) -> Vec<Line> {
        split_lines(raw)
    }

    #[test]
    fn test_classify_headers() {
        assert_eq!(classify("Ingredients:"), Some(SectionKind::Ingredients));
        assert_eq!(classify("**2. Instructions**"), Some(SectionKind::Instructions));
        assert_eq!(classify("## Directions"), Some(SectionKind::Instructions));
        assert_eq!(classify("Optional Substitutions:"), Some(SectionKind::Substitutions));
        assert_eq!(classify("Tips & Tricks"), Some(SectionKind::Tips));
        assert_eq!(
            classify("Nutrition Information (per serving):"),
            Some(SectionKind::Nutrition)
        );
        assert_eq!(classify("Total Time: 30m"), Some(SectionKind::TotalTime));
        assert_eq!(classify("Serves: 4"), Some(SectionKind::Serves));
        assert_eq!(classify("Serving Size: 1 cup"), Some(SectionKind::ServingSize));
        assert_eq!(classify("Yield: 4 portions"), Some(SectionKind::ServingSize));
    }

    #[test]
    fn test_classify_long_labels() {
        assert_eq!(
            classify("**Ingredients (for 4 servings, adjust as needed):**"),
            Some(SectionKind::Ingredients)
        );
        assert_eq!(
            classify("Approximate Nutritional Information per serving"),
            Some(SectionKind::Nutrition)
        );
        assert_eq!(
            classify("Estimated nutrition for one generous serving of this dish:"),
            Some(SectionKind::Nutrition)
        );
        assert_eq!(classify("Sprinkle nutritional yeast over the top."), None);
    }

    #[test]
    fn test_classify_ignores_content_lines() {
        assert_eq!(classify("1 cup nutritional yeast"), None);
        assert_eq!(classify("Fry in multiple batches."), None);
        assert_eq!(classify("2 cups rice"), None);
        assert_eq!(classify("Serve hot."), None);
    }

    #[test]
    fn test_first_matching_kind_claims_line() {
        // "ingredient" is scanned before "tip"
        assert_eq!(classify("Ingredient tips:"), Some(SectionKind::Ingredients));
    }

    #[test]
    fn test_segment_finds_boundaries_in_order() {
        let doc = lines(
            "Veggie Fried Rice\n\nIngredients:\n- 2 cups rice\n- 1 onion\n\nInstructions:\n1. Chop onion.\n2. Fry rice.\n",
        );
        let map = segment(&doc);
        assert_eq!(map.title.as_deref(), Some("Veggie Fried Rice"));
        assert_eq!(map.start(SectionKind::Ingredients), Some(1));
        assert_eq!(map.start(SectionKind::Instructions), Some(4));
        assert_eq!(map.end(SectionKind::Ingredients), 4);
        assert_eq!(map.end(SectionKind::Instructions), doc.len());
        assert_eq!(map.start(SectionKind::Tips), None);
        assert_eq!(map.content_range(SectionKind::Tips), None);
    }

    #[test]
    fn test_segment_long_headers() {
        let doc = lines(
            "Leek Soup\n**Ingredients (for 4 servings, adjust as needed):**\n- 1 leek\nApproximate Nutritional Information per serving\nCalories: 300\nProtein: 5g",
        );
        let map = segment(&doc);
        assert_eq!(map.start(SectionKind::Ingredients), Some(1));
        assert_eq!(map.start(SectionKind::Nutrition), Some(3));
        assert_eq!(map.end(SectionKind::Ingredients), 3);
    }

    #[test]
    fn test_repeated_header_is_content() {
        let doc = lines("Soup\nIngredients:\n1 leek\nIngredients:\n2 potatoes");
        let map = segment(&doc);
        assert_eq!(map.start(SectionKind::Ingredients), Some(1));
        assert_eq!(map.end(SectionKind::Ingredients), 5);
    }

    #[test]
    fn test_title_marker_uses_next_line() {
        let doc = lines("Here is your recipe!\nTitle:\nLemon Pasta\nIngredients:\n1 lemon");
        let map = segment(&doc);
        assert_eq!(map.title.as_deref(), Some("Lemon Pasta"));
        assert_eq!(map.title_line, Some(2));
        assert_eq!(map.start(SectionKind::Ingredients), Some(3));
    }

    #[test]
    fn test_title_marker_inline() {
        let doc = lines("1. **Title:** Lemon Pasta\n2. Ingredients:\n1 lemon");
        let map = segment(&doc);
        assert_eq!(title_or_default(&map), "Lemon Pasta");
    }

    #[test]
    fn test_missing_title() {
        let doc = lines("Ingredients:\n1 lemon");
        let map = segment(&doc);
        assert_eq!(title_or_default(&map), UNTITLED);
        assert_eq!(map.start(SectionKind::Ingredients), Some(0));

        assert_eq!(title_or_default(&segment(&[])), UNTITLED);
    }

    #[test]
    fn test_title_line_is_never_a_header() {
        let doc = lines("Tips for Perfect Rice\nIngredients:\n1 cup rice");
        let map = segment(&doc);
        assert_eq!(map.title.as_deref(), Some("Tips for Perfect Rice"));
        assert_eq!(map.start(SectionKind::Tips), None);
    }

    #[test]
    fn test_bare_header() {
        assert!(is_bare_header("Ingredients:"));
        assert!(is_bare_header("**Tips & Tricks**"));
        assert!(is_bare_header("Estimated Nutrition Facts (per serving):"));
        assert!(is_bare_header("Ingredients for the salsa:"));
        assert!(is_bare_header("Ingredients (for 4 servings, adjust as needed):"));
        assert!(!is_bare_header("Tip: use day-old rice"));
        assert!(!is_bare_header("Tips for Perfect Rice"));
        assert!(!is_bare_header("2 cups rice"));
    }

    #[test]
    fn test_split_lines_tracks_blanks() {
        let doc = lines("a\n\n  b  \nc");
        assert_eq!(doc.len(), 3);
        assert_eq!(doc[1].text, "b");
        assert!(doc[1].after_blank);
        assert!(!doc[2].after_blank);
    }
}
