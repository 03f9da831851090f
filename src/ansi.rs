//! ANSI escape sequence generation for terminal preview.
//!
//! Maps each run of a [`Document`] to an SGR-styled fragment so a terminal
//! shell can show a live preview of the styled text. Truecolor only; this
//! is a preview aid, not a capability-negotiated renderer.

use crate::color::Rgb;
use crate::document::Document;
use crate::style::TextAttributes;

/// Reset all attributes to default.
pub const RESET: &str = "\x1b[0m";

/// Bold/increased intensity.
pub const BOLD: &str = "\x1b[1m";

/// Underlined text.
pub const UNDERLINE: &str = "\x1b[4m";

/// Generate the SGR sequence for a truecolor foreground.
#[must_use]
pub fn fg_color(color: Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

/// Generate the SGR sequence for a truecolor background.
#[must_use]
pub fn bg_color(color: Rgb) -> String {
    format!("\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
}

/// Render a document as an SGR-styled preview string.
///
/// Each styled run is wrapped in its SGR prefix and a trailing [`RESET`];
/// plain runs pass through untouched.
#[must_use]
pub fn render(document: &Document) -> String {
    let mut out = String::new();
    for run in document.runs() {
        if let Some(fg) = run.style.fg {
            out.push_str(&fg_color(fg));
        }
        if let Some(bg) = run.style.bg {
            out.push_str(&bg_color(bg));
        }
        if run.style.attributes.contains(TextAttributes::BOLD) {
            out.push_str(BOLD);
        }
        if run.style.attributes.contains(TextAttributes::UNDERLINE) {
            out.push_str(UNDERLINE);
        }
        out.push_str(&run.text);
        if !run.style.is_empty() {
            out.push_str(RESET);
        }
    }
    out
}
