//! Loading and error placeholders for page containers.

use crate::utils::html_escape;

/// Default message shown while content loads.
pub const DEFAULT_LOADING_MESSAGE: &str = "Loading...";

/// Default message shown when a caller reports an error without text.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

/// A container whose content can be replaced with rendered HTML.
pub trait RenderTarget {
    /// Replace the container's entire content.
    fn replace_content(&mut self, html: String);
}

impl RenderTarget for String {
    fn replace_content(&mut self, html: String) {
        *self = html;
    }
}

/// Loading placeholder markup.
pub fn loading_html(message: &str) -> String {
    format!(r#"<div class="loading">{}</div>"#, html_escape(message))
}

/// Error placeholder markup.
pub fn error_html(message: &str) -> String {
    format!(r#"<div class="error">{}</div>"#, html_escape(message))
}

/// Show a loading message in `target`, if there is one.
///
/// The default message is used only when `message` is `None`; an explicit
/// empty message renders an empty placeholder.
pub fn render_loading_placeholder<T>(target: Option<&mut T>, message: Option<&str>)
where
    T: RenderTarget + ?Sized,
{
    if let Some(target) = target {
        target.replace_content(loading_html(message.unwrap_or(DEFAULT_LOADING_MESSAGE)));
    }
}

/// Show an error message in `target`, if there is one.
///
/// Missing and empty messages both fall back to the default text.
pub fn render_error_placeholder<T>(target: Option<&mut T>, message: Option<&str>)
where
    T: RenderTarget + ?Sized,
{
    if let Some(target) = target {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_ERROR_MESSAGE);
        target.replace_content(error_html(message));
    }
}
