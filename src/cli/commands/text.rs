//! Text helper commands.

use crate::cli::PlaceholderKind;
use crate::render::{render_error_placeholder, render_loading_placeholder};
use crate::utils::{format_ratio_as_percentage, html_escape};

pub fn cmd_escape(text: &str) -> anyhow::Result<()> {
    println!("{}", html_escape(text));
    Ok(())
}

/// Format command-line text as a percentage.
///
/// Values that are not valid JSON are treated as strings, which format as `0%`.
fn score_text(value: &str) -> String {
    let value: serde_json::Value = serde_json::from_str(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
    format_ratio_as_percentage(&value)
}

pub fn cmd_score(value: &str) -> anyhow::Result<()> {
    println!("{}", score_text(value));
    Ok(())
}

pub fn cmd_placeholder(kind: PlaceholderKind, message: Option<&str>) -> anyhow::Result<()> {
    let mut html = String::new();
    match kind {
        PlaceholderKind::Loading => render_loading_placeholder(Some(&mut html), message),
        PlaceholderKind::Error => render_error_placeholder(Some(&mut html), message),
    }
    println!("{}", html);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_text_numbers() {
        assert_eq!(score_text("0.5"), "50%");
        assert_eq!(score_text("1"), "100%");
        assert_eq!(score_text("1.5"), "150%");
    }

    #[test]
    fn test_score_text_non_numbers() {
        assert_eq!(score_text("x"), "0%");
        assert_eq!(score_text("\"0.5\""), "0%");
        assert_eq!(score_text("null"), "0%");
        assert_eq!(score_text(""), "0%");
    }
}
