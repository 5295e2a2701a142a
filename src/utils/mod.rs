//! Shared utility functions.
//!
//! This module contains the pure text helpers used when rendering pages:
//! - `html`: HTML escaping for safe rendering
//! - `format`: Human-readable formatting (scores)

mod format;
mod html;

pub use format::{format_ratio_as_percentage, format_score};
pub use html::{escape_for_display, html_escape};
