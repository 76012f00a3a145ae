use regex::Regex;
use std::sync::LazyLock;

pub const NOT_SPECIFIED: &str = "Serving size not specified";

static PER_SERVING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:~\s*)?\d.*\bper\s+serving\s*\.?$").unwrap());

static QUALIFIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:~|approximately|approx\.?|about|around|roughly)\s*").unwrap()
});

static TRAILING_PER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*(?:per\s+(?:serving|portion|person)|each)\s*\.?$").unwrap()
});

/// "4 portions", "6 servings": a yield count rather than a size.
static PORTION_COUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:makes\s+)?(\d+)\s*(?:portions?|servings?|people|persons?)?\s*\.?$").unwrap()
});

static FIRST_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

fn first_number(text: &str) -> Option<u32> {
    FIRST_NUMBER_RE
        .find(text)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .filter(|n| *n > 0)
}

fn portion_count(serving_size: Option<&str>) -> Option<u32> {
    let caps = PORTION_COUNT_RE.captures(serving_size?.trim())?;
    caps[1].parse::<u32>().ok().filter(|n| *n > 0)
}

/// Number of portions the recipe was written for, if stated.
///
/// Taken from the serves field, else from a serving-size field that is really
/// a portion count ("Yield: 4 portions").
pub fn stated_servings(servings: Option<&str>, serving_size: Option<&str>) -> Option<u32> {
    servings
        .and_then(first_number)
        .or_else(|| portion_count(serving_size))
}

/// Serving-size line for display.
///
/// 1. An explicit size without a parenthetical or note: kept when already
///    "<amount> per serving", otherwise rewritten to "1 <size> per serving".
/// 2. A numeric serves count N: "1 of N portions (estimated)".
/// 3. "Serving size not specified".
pub fn serving_size_text(serving_size: Option<&str>, servings: Option<&str>) -> String {
    if let Some(size) = serving_size.map(str::trim).filter(|s| !s.is_empty()) {
        let annotated = size.contains('(') || size.to_lowercase().contains("note");
        if !annotated && portion_count(Some(size)).is_none() {
            if PER_SERVING_RE.is_match(size) {
                return size.to_string();
            }
            let stripped = QUALIFIER_RE.replace(size, "");
            let cleaned = TRAILING_PER_RE.replace(&stripped, "");
            let cleaned = cleaned.trim();
            if !cleaned.is_empty() {
                return if cleaned.starts_with(|c: char| c.is_ascii_digit()) {
                    format!("{cleaned} per serving")
                } else {
                    format!("1 {cleaned} per serving")
                };
            }
        }
    }

    match stated_servings(servings, serving_size) {
        Some(count) => format!("1 of {count} portions (estimated)"),
        None => NOT_SPECIFIED.to_string(),
    }
}
