//! Serving-size scaling of ingredient lines.
//!
//! Every numeric token in a line (fraction, decimal or integer) is multiplied
//! on its own, so "2 x 3 oz" doubled becomes "4 x 6 oz".

use regex::Regex;
use std::sync::LazyLock;

/// Fraction, then decimal, then integer; each token is scaled once.
static NUMBER_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<num>\d+)\s*/\s*(?P<den>\d+)|(?P<dec>\d+\.\d+)|(?P<int>\d+)").unwrap()
});

/// Fractions a non-integral result may snap to.
const COMMON_FRACTIONS: [(f64, &str); 5] = [
    (0.25, "1/4"),
    (1.0 / 3.0, "1/3"),
    (0.5, "1/2"),
    (2.0 / 3.0, "2/3"),
    (0.75, "3/4"),
];

const SNAP_TOLERANCE: f64 = 0.04;

/// Render a scaled quantity: integers bare, small values as common fractions
/// when close enough, anything else with one decimal.
pub fn format_quantity(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        return format!("{}", value.round() as i64);
    }
    if value < 1.0 {
        if let Some((_, fraction)) = COMMON_FRACTIONS
            .iter()
            .filter(|(target, _)| (value - target).abs() < SNAP_TOLERANCE)
            .min_by(|a, b| (value - a.0).abs().total_cmp(&(value - b.0).abs()))
        {
            return fraction.to_string();
        }
    }
    let rounded = (value * 10.0).round() / 10.0;
    if (rounded - rounded.round()).abs() < 1e-9 {
        format!("{}", rounded.round() as i64)
    } else {
        format!("{rounded:.1}")
    }
}

/// Multiply every numeric token in `line` by `factor`.
///
/// A token that cannot be evaluated (zero denominator, overflow) is left as written.
pub fn scale_line(line: &str, factor: f64) -> String {
    NUMBER_TOKEN_RE
        .replace_all(line, |caps: &regex::Captures| {
            let value = if let (Some(num), Some(den)) = (caps.name("num"), caps.name("den")) {
                match (num.as_str().parse::<f64>(), den.as_str().parse::<f64>()) {
                    (Ok(n), Ok(d)) if d != 0.0 => Some(n / d),
                    _ => None,
                }
            } else {
                caps.name("dec")
                    .or_else(|| caps.name("int"))
                    .and_then(|m| m.as_str().parse::<f64>().ok())
            };

            match value.map(|v| v * factor).filter(|v| v.is_finite()) {
                Some(scaled) => format_quantity(scaled),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Ratio of desired to original servings; a zero original counts as 1.
pub fn scale_factor(desired: u32, original: u32) -> f64 {
    f64::from(desired) / f64::from(original.max(1))
}

/// Scaled copy of `ingredients`; the input is never modified.
///
/// A factor of exactly 1 returns the lines unchanged.
pub fn scale_ingredients(ingredients: &[String], factor: f64) -> Vec<String> {
    if factor == 1.0 {
        return ingredients.to_vec();
    }
    ingredients
        .iter()
        .map(|line| scale_line(line, factor))
        .collect()
}
