//! Styled-run document model.
//!
//! A [`Document`] partitions buffer text into attribute-homogeneous
//! [`Run`]s. Two invariants hold for every document produced here:
//!
//! - Concatenating the run texts in order reproduces the buffer exactly,
//!   with no gaps and no overlaps, and no run has empty text.
//! - No two adjacent runs carry an identical style (maximality). The merge
//!   pass after every mutation restores this; without it, repeated edits
//!   would fragment the partition indefinitely.
//!
//! All operations are pure: they take the current document by reference and
//! return a new one. The surrounding application state owns the "current
//! document" value and stores each result (see
//! [`Session`](crate::session::Session)).
//!
//! # Examples
//!
//! ```
//! use tintrun::{Document, Selection, StyleChange, palette};
//!
//! let doc = Document::plain("Hello World");
//! let doc = doc.apply(
//!     Selection::new(0, 5),
//!     StyleChange::Foreground(palette::RED),
//! );
//!
//! assert_eq!(doc.runs().len(), 2);
//! assert_eq!(doc.text(), "Hello World");
//! ```

use crate::selection::Selection;
use crate::style::{Style, StyleChange};

/// A contiguous span of text sharing one style.
///
/// Runs persisted inside a [`Document`] are never empty; empty pieces are
/// dropped during splicing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run {
    /// The text content.
    pub text: String,
    /// The style applied to the whole span.
    pub style: Style,
}

impl Run {
    /// Create a new styled run.
    #[must_use]
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Create an unstyled run.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::NONE)
    }

    /// Get the length in chars.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }
}

/// An ordered partition of buffer text into styled runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    runs: Vec<Run>,
}

impl Document {
    /// Create a document with a single unstyled run spanning `text`.
    ///
    /// Used both for wholesale text replacement (a free-text edit discards
    /// all prior styling) and for clearing formatting while keeping
    /// content. Empty text yields the zero-run partition, keeping the
    /// no-empty-run invariant.
    #[must_use]
    pub fn plain(text: &str) -> Self {
        if text.is_empty() {
            Self::default()
        } else {
            Self {
                runs: vec![Run::plain(text)],
            }
        }
    }

    /// Build a document from pre-styled runs.
    ///
    /// Empty runs are dropped and adjacent equal-style runs are merged, so
    /// the result satisfies the partition invariants regardless of input.
    #[must_use]
    pub fn from_runs(runs: Vec<Run>) -> Self {
        Self {
            runs: coalesce(runs),
        }
    }

    /// The runs, in buffer order.
    #[must_use]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Check if the document holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Concatenate all run texts back into the buffer content.
    #[must_use]
    pub fn text(&self) -> String {
        let cap = self.runs.iter().map(|run| run.text.len()).sum();
        let mut out = String::with_capacity(cap);
        for run in &self.runs {
            out.push_str(&run.text);
        }
        out
    }

    /// Total length in chars.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.runs.iter().map(Run::len_chars).sum()
    }

    /// Apply a style change to a selection, returning the new document.
    ///
    /// Interval splice over the ordered partition: runs entirely outside
    /// the selection are copied unchanged; an overlapping run is split into
    /// up to three pieces — prefix and suffix keep the old style, the
    /// intersection gets [`Style::apply`] — and empty pieces are dropped.
    /// A merge pass then coalesces adjacent equal-style runs.
    ///
    /// A zero-width selection is a no-op. Inverted selections are
    /// normalized; offsets past the end of the buffer select nothing.
    #[must_use]
    pub fn apply(&self, selection: Selection, change: StyleChange) -> Self {
        let sel = selection.normalized();
        if sel.is_empty() {
            return self.clone();
        }

        let mut spliced = Vec::with_capacity(self.runs.len() + 2);
        let mut pos = 0usize;

        for run in &self.runs {
            let run_start = pos;
            let run_len = run.len_chars();
            let run_end = run_start + run_len;
            pos = run_end;

            // Entirely before or after the selection.
            if run_end <= sel.start || run_start >= sel.end {
                spliced.push(run.clone());
                continue;
            }

            // Overlap: split at the selection edges that fall inside.
            let cut_from = sel.start.saturating_sub(run_start);
            let cut_to = (sel.end - run_start).min(run_len);

            let (prefix, rest) = split_at_char(&run.text, cut_from);
            let (middle, suffix) = split_at_char(rest, cut_to - cut_from);

            if !prefix.is_empty() {
                spliced.push(Run::new(prefix, run.style));
            }
            // The intersection is non-empty whenever the ranges overlap.
            spliced.push(Run::new(middle, run.style.apply(change)));
            if !suffix.is_empty() {
                spliced.push(Run::new(suffix, run.style));
            }
        }

        Self {
            runs: coalesce(spliced),
        }
    }
}

/// Split at a char offset, returning the pieces before and after it.
///
/// Offsets at or past the end of the text put everything in the first
/// piece.
fn split_at_char(text: &str, char_idx: usize) -> (&str, &str) {
    let byte_idx = text
        .char_indices()
        .nth(char_idx)
        .map_or(text.len(), |(idx, _)| idx);
    text.split_at(byte_idx)
}

/// Left-to-right merge pass: drop empty runs, concatenate adjacent runs
/// whose styles are equal. Restores maximality after a splice.
fn coalesce(runs: Vec<Run>) -> Vec<Run> {
    let mut merged: Vec<Run> = Vec::with_capacity(runs.len());
    for run in runs {
        if run.text.is_empty() {
            continue;
        }
        if let Some(prev) = merged.last_mut() {
            if prev.style == run.style {
                prev.text.push_str(&run.text);
                continue;
            }
        }
        merged.push(run);
    }
    merged
}
