//! Formatting utilities for terminal output

use crate::core::{Feedback, Verdict};
use colored::{ColoredString, Colorize};

/// Apply `style` to `text` when color is enabled, otherwise return it unchanged
pub fn paint(text: &str, color: bool, style: impl FnOnce(&str) -> ColoredString) -> String {
    if color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

/// Color for a single verdict letter
fn styled_verdict(verdict: Verdict) -> ColoredString {
    let symbol = verdict.symbol().to_string();
    match verdict {
        Verdict::Fermi => symbol.bright_green().bold(),
        Verdict::Pico => symbol.bright_yellow().bold(),
        Verdict::Bagel => symbol.bright_black(),
    }
}

/// Render feedback as space-separated letters, e.g. `P F B B`
#[must_use]
pub fn render_feedback(feedback: &Feedback, color: bool) -> String {
    if !color {
        return feedback.to_string();
    }

    feedback
        .verdicts()
        .iter()
        .map(|&v| styled_verdict(v).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
