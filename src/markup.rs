//! Chat markup serialization.
//!
//! Serializes a [`Document`] into the bracket/delimiter dialect the chat
//! client consumes:
//!
//! | Attribute  | Tokens                        |
//! |------------|-------------------------------|
//! | Foreground | `[RRGGBB]text[/RRGGBB]`       |
//! | Background | `[@RRGGBB]text[/@RRGGBB]`     |
//! | Bold       | `**text**`                    |
//! | Underline  | `__text__`                    |
//!
//! When several attributes are present on one run, wrappers nest in a
//! fixed order — foreground innermost, then background, bold, underline
//! outermost: `__**[@BG][FG]text[/FG][/@BG]**__`. Wrapped runs are
//! concatenated with no separator.
//!
//! Literal delimiter characters inside run text (`**`, `__`, brackets) are
//! emitted as-is; the dialect has no escape syntax, and this limitation is
//! preserved rather than silently fixed.

use crate::document::{Document, Run};
use crate::style::TextAttributes;
use std::fmt::{self, Write};

/// Serialize a document to the markup string.
///
/// Re-serializing an unchanged document is deterministic.
#[must_use]
pub fn to_markup(document: &Document) -> String {
    let text_len: usize = document.runs().iter().map(|run| run.text.len()).sum();
    let mut out = String::with_capacity(text_len * 2);
    write_markup(&mut out, document).expect("writing to a String cannot fail");
    out
}

/// Write the markup for a whole document.
///
/// # Errors
///
/// Propagates errors from the underlying writer; serialization itself
/// cannot fail.
pub fn write_markup<W: Write>(w: &mut W, document: &Document) -> fmt::Result {
    for run in document.runs() {
        write_run(w, run)?;
    }
    Ok(())
}

/// Write one run with its wrappers.
///
/// Openers are written outermost-first and closers in reverse, which is
/// equivalent to wrapping innermost-to-outermost fg -> bg -> bold ->
/// underline.
fn write_run<W: Write>(w: &mut W, run: &Run) -> fmt::Result {
    let bold = run.style.attributes.contains(TextAttributes::BOLD);
    let underline = run.style.attributes.contains(TextAttributes::UNDERLINE);

    if underline {
        w.write_str("__")?;
    }
    if bold {
        w.write_str("**")?;
    }
    if let Some(bg) = run.style.bg {
        write!(w, "[@{}]", bg.to_hex())?;
    }
    if let Some(fg) = run.style.fg {
        write!(w, "[{}]", fg.to_hex())?;
    }

    w.write_str(&run.text)?;

    if let Some(fg) = run.style.fg {
        write!(w, "[/{}]", fg.to_hex())?;
    }
    if let Some(bg) = run.style.bg {
        write!(w, "[/@{}]", bg.to_hex())?;
    }
    if bold {
        w.write_str("**")?;
    }
    if underline {
        w.write_str("__")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Run;
    use crate::palette;
    use crate::style::Style;

    #[test]
    fn test_plain_document_passes_through() {
        let doc = Document::plain("just text");
        assert_eq!(to_markup(&doc), "just text");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(to_markup(&Document::plain("")), "");
    }

    #[test]
    fn test_foreground_tokens() {
        let doc = Document::from_runs(vec![Run::new("Hi", Style::fg(palette::RED))]);
        assert_eq!(to_markup(&doc), "[ff3232]Hi[/ff3232]");
    }

    #[test]
    fn test_background_tokens() {
        let doc = Document::from_runs(vec![Run::new("Hi", Style::bg(palette::ORANGE))]);
        assert_eq!(to_markup(&doc), "[@d35400]Hi[/@d35400]");
    }

    #[test]
    fn test_bold_outside_color() {
        let doc = Document::from_runs(vec![Run::new("x", Style::fg(palette::RED).with_bold())]);
        assert_eq!(to_markup(&doc), "**[ff3232]x[/ff3232]**");
    }

    #[test]
    fn test_full_nesting_order() {
        let style = Style::fg(palette::RED)
            .with_bg(palette::DARK_BLUE)
            .with_bold()
            .with_underline();
        let doc = Document::from_runs(vec![Run::new("text", style)]);
        assert_eq!(
            to_markup(&doc),
            "__**[@001e2d][ff3232]text[/ff3232][/@001e2d]**__"
        );
    }

    #[test]
    fn test_runs_concatenate_without_separator() {
        let doc = Document::from_runs(vec![
            Run::new("a", Style::bold()),
            Run::plain("b"),
            Run::new("c", Style::underline()),
        ]);
        assert_eq!(to_markup(&doc), "**a**b__c__");
    }

    #[test]
    fn test_no_escaping_of_literal_delimiters() {
        let doc = Document::from_runs(vec![Run::new("a**b", Style::underline())]);
        assert_eq!(to_markup(&doc), "__a**b__");

        let doc = Document::plain("[ff3232]fake[/ff3232]");
        assert_eq!(to_markup(&doc), "[ff3232]fake[/ff3232]");
    }
}
