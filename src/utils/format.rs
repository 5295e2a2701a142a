//! Formatting utilities.

use serde_json::Value;

/// Format a ratio (nominally 0.0 to 1.0) as a whole percentage.
///
/// Halves round up, matching how browsers round scores. Out-of-range values
/// are not clamped: `1.5` formats as `150%`.
pub fn format_score(score: f64) -> String {
    if score.is_nan() {
        return "NaN%".to_string();
    }
    if score.is_infinite() {
        return if score > 0.0 {
            "Infinity%".to_string()
        } else {
            "-Infinity%".to_string()
        };
    }

    format!("{}%", round_half_up(score * 100.0))
}

/// Round to the nearest integer, halves toward positive infinity.
///
/// Compares the fractional part instead of adding 0.5 first, which would
/// round in floating point before `floor` sees the value.
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    let rounded = if x - floor >= 0.5 { floor + 1.0 } else { floor };
    // Adding +0.0 turns a negative zero into a positive one.
    rounded + 0.0
}

/// Format a loosely-typed score value as a percentage.
///
/// Anything that is not a JSON number formats as `0%`.
pub fn format_ratio_as_percentage(value: &Value) -> String {
    match value.as_f64() {
        Some(score) => format_score(score),
        None => "0%".to_string(),
    }
}
