//! Editing session: buffer text, selection, document, and the export seam.
//!
//! [`Session`] is the single-writer application state behind the UI shell.
//! The shell feeds it raw text replacements, selection changes, and style
//! commands; it reads back the run sequence for live preview and the markup
//! string for export.
//!
//! The session itself contains no document logic. Every mutation takes an
//! explicit snapshot of the current [`Document`] and [`Selection`], calls a
//! pure operation, and stores the result — there is no ambient mutable
//! state inside the core, so the model stays race-free even if a host later
//! adds concurrent event handling around it.
//!
//! # Examples
//!
//! ```
//! use tintrun::{Session, StyleChange, palette};
//!
//! let mut session = Session::with_text("Hello World");
//! session.set_selection(0, 5);
//! session.apply(StyleChange::Foreground(palette::RED));
//!
//! assert_eq!(session.export(), "[ff3232]Hello[/ff3232] World");
//! ```

use crate::ansi;
use crate::document::{Document, Run};
use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};
use crate::markup;
use crate::rope::RopeWrapper;
use crate::selection::Selection;
use crate::style::StyleChange;
use std::io;

/// Destination for exported markup — the host clipboard.
///
/// The only fallible side effect in the system lives behind this seam;
/// failures surface to the caller as [`Error::Clipboard`].
pub trait Clipboard {
    /// Write the exported string to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] when the host clipboard is unavailable or
    /// rejects the write.
    fn write(&mut self, text: &str) -> io::Result<()>;
}

/// Single-writer session state.
///
/// Invariant: the buffer text and the document's concatenated run text are
/// always identical. [`replace_text`](Self::replace_text) sets both,
/// [`apply`](Self::apply) preserves text, and
/// [`reset_all`](Self::reset_all) re-derives the document from the buffer.
#[derive(Clone, Debug, Default)]
pub struct Session {
    buffer: RopeWrapper,
    document: Document,
    selection: Selection,
}

impl Session {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with initial text and no styling.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: RopeWrapper::from_str(text),
            document: Document::plain(text),
            selection: Selection::default(),
        }
    }

    /// Replace the buffer text wholesale.
    ///
    /// A free-text edit discards all prior styling: the document collapses
    /// to a single unstyled run spanning the new text. The recorded
    /// selection is clamped to the new length.
    pub fn replace_text(&mut self, text: &str) {
        self.buffer.replace(text);
        self.document = Document::plain(text);
        self.selection = self.selection.clamp(self.buffer.len_chars());
        emit_log(
            LogLevel::Debug,
            &format!("text replaced ({} chars)", self.buffer.len_chars()),
        );
    }

    /// Record a new selection from the shell, in char offsets.
    ///
    /// The range is clamped to the buffer and normalized. Zero-width
    /// ranges are ignored — the previous selection stays active, so
    /// clicking a swatch right after a caret move still targets the last
    /// real selection.
    pub fn set_selection(&mut self, start: usize, end: usize) {
        let sel = Selection::new(start, end).clamp(self.buffer.len_chars());
        if !sel.is_empty() {
            self.selection = sel;
        }
    }

    /// The currently recorded selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The live document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The run sequence, for shell-side rendering.
    #[must_use]
    pub fn runs(&self) -> &[Run] {
        self.document.runs()
    }

    /// The raw buffer text.
    #[must_use]
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// The underlying buffer, for shells that need index conversion.
    #[must_use]
    pub fn buffer(&self) -> &RopeWrapper {
        &self.buffer
    }

    /// Apply a style change to the current selection.
    ///
    /// Delegates to [`Document::apply`] on a snapshot; a zero-width
    /// selection makes this a no-op. The selection survives, so repeated
    /// commands hit the same range.
    pub fn apply(&mut self, change: StyleChange) {
        self.document = self.document.apply(self.selection, change);
        emit_log(
            LogLevel::Debug,
            &format!("applied {change:?} to {:?}", self.selection),
        );
    }

    /// Clear all formatting, keeping the current text.
    pub fn reset_all(&mut self) {
        self.document = Document::plain(&self.buffer.to_string());
        emit_log(LogLevel::Debug, "formatting cleared");
    }

    /// Serialize the document to the chat markup string.
    #[must_use]
    pub fn export(&self) -> String {
        markup::to_markup(&self.document)
    }

    /// Serialize and hand the markup to the host clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Clipboard`] when the clipboard write fails; the
    /// document is unaffected either way.
    pub fn export_to(&self, clipboard: &mut dyn Clipboard) -> Result<()> {
        let text = self.export();
        clipboard.write(&text).map_err(Error::Clipboard)?;
        emit_log(LogLevel::Info, "markup copied to clipboard");
        Ok(())
    }

    /// Render the document as an ANSI-styled preview string.
    #[must_use]
    pub fn preview(&self) -> String {
        ansi::render(&self.document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;

    /// Clipboard double that records writes.
    #[derive(Default)]
    struct MemClipboard {
        contents: Option<String>,
    }

    impl Clipboard for MemClipboard {
        fn write(&mut self, text: &str) -> io::Result<()> {
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    /// Clipboard double that always fails.
    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn write(&mut self, _text: &str) -> io::Result<()> {
            Err(io::Error::other("clipboard unavailable"))
        }
    }

    #[test]
    fn test_with_text_starts_plain() {
        let session = Session::with_text("hello");
        assert_eq!(session.runs(), &[Run::plain("hello")]);
        assert_eq!(session.text(), "hello");
    }

    #[test]
    fn test_zero_width_selection_is_ignored() {
        let mut session = Session::with_text("hello");
        session.set_selection(1, 4);
        session.set_selection(2, 2);
        assert_eq!(session.selection(), Selection::new(1, 4));
    }

    #[test]
    fn test_selection_clamped_to_buffer() {
        let mut session = Session::with_text("hello");
        session.set_selection(2, 99);
        assert_eq!(session.selection(), Selection::new(2, 5));
    }

    #[test]
    fn test_replace_text_discards_styling() {
        let mut session = Session::with_text("hello");
        session.set_selection(0, 5);
        session.apply(StyleChange::ToggleBold);
        assert_eq!(session.runs().len(), 1);

        session.replace_text("hello there");
        assert_eq!(session.runs(), &[Run::plain("hello there")]);
    }

    #[test]
    fn test_replace_text_clamps_stale_selection() {
        let mut session = Session::with_text("a long buffer");
        session.set_selection(0, 13);
        session.replace_text("ab");
        assert_eq!(session.selection(), Selection::new(0, 2));
    }

    #[test]
    fn test_reset_all_keeps_text() {
        let mut session = Session::with_text("hello");
        session.set_selection(0, 3);
        session.apply(StyleChange::Foreground(palette::RED));
        session.reset_all();
        assert_eq!(session.runs(), &[Run::plain("hello")]);
        assert_eq!(session.text(), "hello");
    }

    #[test]
    fn test_apply_without_selection_is_noop() {
        let mut session = Session::with_text("hello");
        session.apply(StyleChange::ToggleBold);
        assert_eq!(session.runs(), &[Run::plain("hello")]);
    }

    #[test]
    fn test_export_to_clipboard() {
        let mut session = Session::with_text("Hello World");
        session.set_selection(0, 5);
        session.apply(StyleChange::Foreground(palette::RED));

        let mut clipboard = MemClipboard::default();
        session.export_to(&mut clipboard).unwrap();
        assert_eq!(
            clipboard.contents.as_deref(),
            Some("[ff3232]Hello[/ff3232] World")
        );
    }

    #[test]
    fn test_export_to_broken_clipboard_errors() {
        let session = Session::with_text("hello");
        let err = session.export_to(&mut BrokenClipboard).unwrap_err();
        assert!(matches!(err, Error::Clipboard(_)));
    }

    #[test]
    fn test_buffer_and_document_stay_in_sync() {
        let mut session = Session::with_text("héllo wörld");
        session.set_selection(2, 8);
        session.apply(StyleChange::Background(palette::PURPLE));
        assert_eq!(session.document().text(), session.text());
    }
}
