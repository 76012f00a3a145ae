use crate::segmenter::{is_bare_header, Line};
use crate::text::clean_line;

/// Substitution entries between the two bounds.
///
/// Generators write swaps either as a flat list or as labelled blocks:
///
/// ```text
/// Instead of rice:
/// Use quinoa for extra protein.
///
/// Soy sauce:
/// Tamari keeps it gluten-free.
/// ```
///
/// A line ending in `:` opens a block that absorbs the following lines until a
/// blank line; each block becomes one entry. Other lines are entries of their own.
pub fn extract_blocks(lines: &[Line], start_exclusive: usize, end_exclusive: usize) -> Vec<String> {
    let from = start_exclusive.saturating_add(1).min(lines.len());
    let to = end_exclusive.min(lines.len()).max(from);

    let mut entries: Vec<String> = Vec::new();
    let mut open_block = false;

    for line in &lines[from..to] {
        if is_bare_header(&line.text) {
            open_block = false;
            continue;
        }
        let entry = clean_line(&line.text);
        if entry.is_empty() {
            continue;
        }
        if line.after_blank {
            open_block = false;
        }

        match entries.last_mut() {
            Some(current) if open_block => {
                current.push(' ');
                current.push_str(&entry);
            }
            _ => {
                open_block = entry.ends_with(':');
                entries.push(entry);
            }
        }
    }

    entries
}
