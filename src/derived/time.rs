use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// One amount with its unit: "1.5 hours", "10m", "20 minutes", "2 hrs".
static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(hours?|hrs?|h|minutes?|mins?|m)").unwrap()
});

/// Placeholder left behind when the prompt header bleeds into the value.
const HEADER_BLEED: &str = "required:";

/// Amounts in `text` as `(value, is_hours, byte range)`, skipping units that
/// are only the start of a longer word ("2 heaping", "5 mixed").
fn duration_parts(text: &str) -> impl Iterator<Item = (f64, bool, Range<usize>)> + '_ {
    DURATION_RE.captures_iter(text).filter_map(move |caps| {
        let whole = caps.get(0)?;
        if text[whole.end()..].starts_with(char::is_alphabetic) {
            return None;
        }
        let amount = caps[1].parse::<f64>().ok()?;
        let is_hours = caps[2].to_ascii_lowercase().starts_with('h');
        Some((amount, is_hours, whole.range()))
    })
}

/// Total minutes in a "<N>h <M>m"-shaped string.
///
/// The first amount counts. An hour amount absorbs a minute amount that
/// directly follows it ("1h10m", "1 hour and 5 minutes"). Decimal amounts are
/// allowed ("1.5 hours" is 90). `None` when no amount has a time unit.
pub fn parse_minutes(text: &str) -> Option<u32> {
    let mut parts = duration_parts(text);
    let (amount, is_hours, first) = parts.next()?;
    if !is_hours {
        return Some(amount.round() as u32);
    }

    let mut minutes = amount * 60.0;
    if let Some((extra, false, next)) = parts.next() {
        let gap = text[first.end..next.start].trim().trim_matches(',').trim();
        if gap.is_empty() || gap.eq_ignore_ascii_case("and") {
            minutes += extra;
        }
    }
    Some(minutes.round() as u32)
}

/// Render minutes as "Xh Ym", dropping the hour part when it is zero.
pub fn format_hm(minutes: u32) -> String {
    let (hours, rest) = (minutes / 60, minutes % 60);
    if hours == 0 {
        format!("{rest}m")
    } else {
        format!("{hours}h {rest}m")
    }
}

/// "N minutes" (singular for one).
pub fn format_minutes(minutes: u32) -> String {
    format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
}

fn usable(field: Option<&str>) -> Option<&str> {
    field
        .map(str::trim)
        .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case(HEADER_BLEED))
}

/// Total time for display.
///
/// Prep plus cook wins when both parse and sum to something positive. After
/// that the stated total is used, then the total embedded in the nutrition
/// block; empty values and the bleed fragment are skipped.
pub fn total_time(
    prep: Option<&str>,
    cook: Option<&str>,
    stated: Option<&str>,
    embedded: Option<&str>,
) -> Option<String> {
    let prep_minutes = prep.and_then(parse_minutes);
    let cook_minutes = cook.and_then(parse_minutes);
    if let (Some(prep), Some(cook)) = (prep_minutes, cook_minutes) {
        let sum = prep.saturating_add(cook);
        if sum > 0 {
            return Some(format_hm(sum));
        }
    }

    usable(stated)
        .or_else(|| usable(embedded))
        .map(str::to_string)
}

/// "N minutes" when the text parses, the text itself otherwise, "—" when absent.
pub fn display_time(value: Option<&str>) -> String {
    match usable(value) {
        Some(text) => parse_minutes(text)
            .map(format_minutes)
            .unwrap_or_else(|| text.to_string()),
        None => super::UNKNOWN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_minutes("10m"), Some(10));
        assert_eq!(parse_minutes("1h 10m"), Some(70));
        assert_eq!(parse_minutes("2h"), Some(120));
        assert_eq!(parse_minutes("20 minutes"), Some(20));
        assert_eq!(parse_minutes("1 hour 5 mins"), Some(65));
        assert_eq!(parse_minutes("about 45 min"), Some(45));
        assert_eq!(parse_minutes("0m"), Some(0));
        assert_eq!(parse_minutes("1h10m"), Some(70));
        assert_eq!(parse_minutes("1 hour and 30 minutes"), Some(90));
        assert_eq!(parse_minutes("2 hrs"), Some(120));
        assert_eq!(parse_minutes("a while"), None);
        assert_eq!(parse_minutes(""), None);
    }

    #[test]
    fn test_decimal_hours_are_not_split() {
        assert_eq!(parse_minutes("1.5 hours"), Some(90));
        assert_eq!(parse_minutes("0.5h"), Some(30));
        assert_eq!(display_time(Some("1.5 hours")), "90 minutes");
    }

    #[test]
    fn test_unit_must_end_the_word() {
        assert_eq!(parse_minutes("2 heaping spoons"), None);
        assert_eq!(parse_minutes("10m, then rest 5m"), Some(10));
    }

    #[test]
    fn test_prep_plus_cook() {
        let total = total_time(Some("10m"), Some("20m"), None, None);
        assert_eq!(total.as_deref(), Some("30m"));
        assert_eq!(display_time(total.as_deref()), "30 minutes");

        let total = total_time(Some("1h 10m"), Some("0m"), None, None);
        assert_eq!(total.as_deref(), Some("1h 10m"));
        assert_eq!(display_time(total.as_deref()), "70 minutes");
    }

    #[test]
    fn test_sum_wins_over_stated_total() {
        let total = total_time(Some("10m"), Some("20m"), Some("45m"), None);
        assert_eq!(total.as_deref(), Some("30m"));
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(
            total_time(Some("10m"), None, Some("45m"), None).as_deref(),
            Some("45m")
        );
        assert_eq!(
            total_time(Some("0m"), Some("0m"), Some("1h"), None).as_deref(),
            Some("1h")
        );
        assert_eq!(
            total_time(None, None, Some("required:"), Some("25m")).as_deref(),
            Some("25m")
        );
        assert_eq!(total_time(None, None, Some("  "), None), None);
        assert_eq!(total_time(None, None, Some("Required:"), None), None);
    }

    #[test]
    fn test_display_time() {
        assert_eq!(display_time(Some("1m")), "1 minute");
        assert_eq!(display_time(Some("overnight")), "overnight");
        assert_eq!(display_time(None), "—");
    }
}
