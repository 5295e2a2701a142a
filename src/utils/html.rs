//! HTML escaping utilities.

use serde_json::Value;

/// Escape HTML special characters for safe rendering.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape an arbitrary value for display as text.
///
/// Only strings carry displayable text; every other value (numbers, null,
/// objects, ...) renders as the empty string.
pub fn escape_for_display(value: &Value) -> String {
    match value {
        Value::String(s) => html_escape(s),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_html_escape_basic() {
        assert_eq!(html_escape("hello"), "hello");
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(html_escape("it's"), "it&#39;s");
    }

    #[test]
    fn test_html_escape_combined() {
        assert_eq!(
            html_escape("<a href=\"test\">foo & bar</a>"),
            "&lt;a href=&quot;test&quot;&gt;foo &amp; bar&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_for_display_non_strings() {
        for value in [
            json!(null),
            json!(42),
            json!(0.5),
            json!(true),
            json!(["<b>"]),
            json!({"html": "<b>"}),
        ] {
            assert_eq!(escape_for_display(&value), "", "value: {value}");
        }
    }

    #[test]
    fn test_escape_for_display_leaves_no_markup() {
        let escaped = escape_for_display(&json!("<img src='x' onerror=\"alert(1)\"> & more"));
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('"'));
        assert!(!escaped.contains('\''));
        for (idx, _) in escaped.match_indices('&') {
            let rest = &escaped[idx..];
            assert!(
                ["&amp;", "&lt;", "&gt;", "&quot;", "&#39;"]
                    .iter()
                    .any(|entity| rest.starts_with(entity)),
                "bare ampersand in {escaped}"
            );
        }
    }

    #[test]
    fn test_escape_is_not_idempotent() {
        assert_eq!(html_escape("&lt;"), "&amp;lt;");
    }
}
