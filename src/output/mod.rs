//! Output formatting for calculation results.
//!
//! - [`terminal`] - banner, labelled result block and error lines
//! - [`json`] - one JSON object per result

mod json;
mod terminal;

pub use json::render_json;
pub use terminal::{banner, format_label, render_error, render_text};
