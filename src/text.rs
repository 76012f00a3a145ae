//! Line-level text cleanup shared by every parsing stage.

use regex::Regex;
use std::sync::LazyLock;

/// A single leading bullet glyph or ordinal ("1.", "12)") followed by whitespace.
static LIST_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-*•·–]\s*|\d{1,3}[.)]\s+)").unwrap());

/// Leading quantity: mixed number, fraction, decimal or integer.
static LEADING_QUANTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:(\d+)\s+(\d+)\s*/\s*(\d+)|(\d+)\s*/\s*(\d+)|(\d+(?:\.\d+)?))").unwrap()
});

/// Strip markdown emphasis markers (`*`, `#`) and surrounding whitespace.
///
/// Total and idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '*' | '#'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Normalize, then drop one leading bullet or ordinal.
pub fn clean_line(line: &str) -> String {
    let normalized = normalize(line);
    LIST_MARKER_RE
        .replace(&normalized, "")
        .trim()
        .to_string()
}

/// Parse the quantity at the start of `text` ("2", "1.5", "1/2", "1 1/2").
///
/// Returns `None` when the text does not start with a number or a fraction
/// has a zero denominator.
pub fn leading_quantity(text: &str) -> Option<f64> {
    let caps = LEADING_QUANTITY_RE.captures(text)?;
    let num = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<f64>().ok());

    if let (Some(whole), Some(n), Some(d)) = (num(1), num(2), num(3)) {
        return (d != 0.0).then(|| whole + n / d);
    }
    if let (Some(n), Some(d)) = (num(4), num(5)) {
        return (d != 0.0).then(|| n / d);
    }
    num(6)
}
