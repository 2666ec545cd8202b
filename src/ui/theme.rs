//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Every helper
//! falls back to plain text when colors are disabled.

use owo_colors::{OwoColorize, Style as Paint};
use std::fmt::Display;

use crate::output;

fn paint<T: Display>(text: T, style: Paint) -> String {
    if output::is_no_color() {
        text.to_string()
    } else {
        text.style(style).to_string()
    }
}

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for section headers (e.g., "Header", "Variants")
    pub fn header<T: Display>(text: T) -> String {
        paint(text, Paint::new().bold())
    }

    /// Style for labels/keys (e.g., "version", "segtype")
    pub fn label<T: Display>(text: T) -> String {
        paint(text, Paint::new().dimmed())
    }

    /// Style for primary values
    pub fn value<T: Display>(text: T) -> String {
        paint(text, Paint::new().cyan())
    }

    /// Style for file paths
    pub fn secondary<T: Display>(text: T) -> String {
        paint(text, Paint::new().dimmed())
    }

    /// Style for success messages
    pub fn success<T: Display>(text: T) -> String {
        paint(text, Paint::new().green())
    }

    /// Style for warning messages
    pub fn warning<T: Display>(text: T) -> String {
        paint(text, Paint::new().yellow())
    }

    /// Style for locale codes
    pub fn code<T: Display>(text: T) -> String {
        paint(text, Paint::new().yellow())
    }
}
