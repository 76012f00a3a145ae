use crate::segmenter::{Line, SectionKind};
use crate::text::clean_line;

/// Single value of a field section ("Serves: 4", "Total time: 45m").
///
/// The value is whatever follows the keyword on the header line, minus a
/// leading `:` or `-`. When nothing follows, the first non-empty content line
/// up to `end_exclusive` is used instead.
pub fn extract_field(
    lines: &[Line],
    kind: SectionKind,
    start: usize,
    end_exclusive: usize,
) -> Option<String> {
    let header = clean_line(&lines.get(start)?.text);

    let inline = kind
        .keyword_end(&header)
        .map(|end| trim_separator(&header[end..]))
        .unwrap_or_default();
    if !inline.is_empty() {
        return Some(inline);
    }

    let to = end_exclusive.min(lines.len());
    lines
        .get(start + 1..to)?
        .iter()
        .map(|line| clean_line(&line.text))
        .find(|value| !value.is_empty())
}

fn trim_separator(rest: &str) -> String {
    rest.trim_start_matches(|c: char| c.is_whitespace() || c == ':' || c == '-')
        .trim()
        .to_string()
}
