use crate::segmenter::{is_bare_header, Line};
use crate::text::clean_line;

/// Cleaned entries strictly between `start_exclusive` and `end_exclusive`.
///
/// Each line loses one leading bullet or ordinal. Empty lines and lines that
/// are nothing but a section header are dropped. Out-of-range bounds are
/// clamped to the document, never a panic.
pub fn extract(lines: &[Line], start_exclusive: usize, end_exclusive: usize) -> Vec<String> {
    let from = start_exclusive.saturating_add(1).min(lines.len());
    let to = end_exclusive.min(lines.len()).max(from);

    lines[from..to]
        .iter()
        .filter(|line| !is_bare_header(&line.text))
        .map(|line| clean_line(&line.text))
        .filter(|entry| !entry.is_empty())
        .collect()
}
