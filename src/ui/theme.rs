//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. All helpers
//! fall back to plain text when colors are disabled (`--no-color` flag
//! or the `NO_COLOR` environment variable).

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

fn styled<T: Display>(text: T, apply: impl FnOnce(&T) -> String) -> String {
    if output::is_no_color() {
        text.to_string()
    } else {
        apply(&text)
    }
}

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for section headers (e.g., "Session", "Available commands")
    pub fn header<T: Display>(text: T) -> String {
        styled(text, |t| format!("{}", t.bold()))
    }

    /// Style for labels/keys (e.g., "endpoint", "document")
    pub fn label<T: Display>(text: T) -> String {
        styled(text, |t| format!("{}", t.dimmed()))
    }

    /// Style for primary values (e.g., file names)
    pub fn value<T: Display>(text: T) -> String {
        styled(text, |t| format!("{}", t.cyan()))
    }

    /// Style for secondary/supplementary info (e.g., endpoints, descriptions)
    pub fn secondary<T: Display>(text: T) -> String {
        styled(text, |t| format!("{}", t.dimmed()))
    }

    /// Style for success messages
    pub fn success<T: Display>(text: T) -> String {
        styled(text, |t| format!("{}", t.green()))
    }

    /// Style for error messages
    pub fn error<T: Display>(text: T) -> String {
        styled(text, |t| format!("{}", t.red().bold()))
    }

    /// Style for warning messages
    pub fn warning<T: Display>(text: T) -> String {
        styled(text, |t| format!("{}", t.yellow()))
    }

    /// Style for commands (e.g., "/file", "/help")
    pub fn command<T: Display>(text: T) -> String {
        styled(text, |t| format!("{}", t.green()))
    }

    /// Style for hints/help text
    pub fn hint<T: Display>(text: T) -> String {
        styled(text, |t| format!("{}", t.dimmed().italic()))
    }

    /// Style for version info
    pub fn version<T: Display>(text: T) -> String {
        styled(text, |t| format!("{}", t.dimmed()))
    }
}
