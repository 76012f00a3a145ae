//! Facts, notes and time sub-fields inside a nutrition block.

use crate::model::{NutritionFacts, TimeFields};
use crate::text::clean_line;
use log::trace;
use regex::Regex;
use std::sync::LazyLock;

static NOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\(?\s*notes?\b\s*[:\-]?\s*(.*?)\)?$").unwrap());

static CALORIES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:~\s*|approx(?:imately|\.)?\s+|about\s+)?(?:estimated\s+)?(?:calories|energy)\b[^:]*:\s*(.+)$",
    )
    .unwrap()
});

/// "~450 calories", "Approximately 450 kcal per serving"
static CALORIES_INLINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(~\s*|approx(?:imately|\.)?\s+|about\s+)?(?:estimated\s+)?(\d[\d,]*(?:\.\d+)?)\s*(?:k?cal(?:orie)?s?)\b",
    )
    .unwrap()
});

static FACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:total\s+)?(protein|carb(?:ohydrate)?s?|fat|sodium|fib(?:er|re)|vitamin(?:\s+[a-z0-9]+)?|iron|calcium|potassium)\b[^:]*:\s*(.+)$",
    )
    .unwrap()
});

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(prep(?:aration)?|cook(?:ing)?|total)\s+time\b[^:]*:?\s*(.*)$").unwrap()
});

/// One classified nutrition line, first matching pattern wins.
#[derive(Debug, Clone, PartialEq, Eq)]
enum NutritionLine {
    Note(String),
    Fact { label: String, value: String },
    Prep(String),
    Cook(String),
    Total(String),
}

fn classify(line: &str) -> Option<NutritionLine> {
    if let Some(caps) = NOTE_RE.captures(line) {
        return Some(NutritionLine::Note(caps[1].trim().to_string()));
    }
    if let Some(caps) = CALORIES_RE.captures(line) {
        return Some(NutritionLine::Fact {
            label: "Calories".to_string(),
            value: caps[1].trim().to_string(),
        });
    }
    if let Some(caps) = CALORIES_INLINE_RE.captures(line) {
        let approximate = caps.get(1).is_some();
        let amount = &caps[2];
        return Some(NutritionLine::Fact {
            label: "Calories".to_string(),
            value: if approximate {
                format!("~{amount}")
            } else {
                amount.to_string()
            },
        });
    }
    if let Some(caps) = FACT_RE.captures(line) {
        return Some(NutritionLine::Fact {
            label: canonical_label(&caps[1]),
            value: caps[2].trim().to_string(),
        });
    }
    if let Some(caps) = TIME_RE.captures(line) {
        let value = caps[2].trim().to_string();
        return match caps[1].to_lowercase().as_str() {
            label if label.starts_with("prep") => Some(NutritionLine::Prep(value)),
            label if label.starts_with("cook") => Some(NutritionLine::Cook(value)),
            _ => Some(NutritionLine::Total(value)),
        };
    }
    None
}

fn canonical_label(raw: &str) -> String {
    let lower = raw.to_lowercase();
    if lower.starts_with("carb") {
        return "Carbs".to_string();
    }
    if lower.starts_with("fib") {
        return "Fiber".to_string();
    }
    lower
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            // vitamin letters stay upper-case ("Vitamin C", "Vitamin B12")
            if i > 0 && word.len() <= 3 {
                return word.to_uppercase();
            }
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse the verbatim nutrition block.
///
/// Unmatched lines are ignored. The first value seen for a label wins;
/// several notes are joined with a space.
pub fn parse_nutrition(block: &str) -> (NutritionFacts, TimeFields) {
    let mut facts = NutritionFacts::default();
    let mut times = TimeFields::default();

    for raw in block.lines() {
        let line = clean_line(raw);
        if line.is_empty() {
            continue;
        }
        let Some(parsed) = classify(&line) else {
            trace!("Ignoring nutrition line: {:?}", line);
            continue;
        };
        match parsed {
            NutritionLine::Note(note) if !note.is_empty() => {
                facts.note = Some(match facts.note.take() {
                    Some(existing) => format!("{existing} {note}"),
                    None => note,
                });
            }
            NutritionLine::Note(_) => {}
            NutritionLine::Fact { label, value } => {
                facts.facts.entry(label).or_insert(value);
            }
            NutritionLine::Prep(value) => set_once(&mut times.prep, value),
            NutritionLine::Cook(value) => set_once(&mut times.cook, value),
            NutritionLine::Total(value) => set_once(&mut times.total, value),
        }
    }

    (facts, times)
}

fn set_once(slot: &mut Option<String>, value: String) {
    if slot.is_none() && !value.is_empty() {
        *slot = Some(value);
    }
}
