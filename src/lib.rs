//! `tintrun` - styled text runs with chat markup export
//!
//! Applies visual attributes (foreground color, background color, bold,
//! underline) to arbitrary, possibly overlapping character ranges of a text
//! buffer, and serializes the result into the bracket markup dialect chat
//! clients use for colored text.
//!
//! The core is the segment model: [`Document`] partitions the buffer into
//! attribute-homogeneous [`Run`]s, [`Document::apply`] splices a style
//! change into an arbitrary range and re-merges, and [`markup`] serializes
//! the runs with a fixed nesting order. [`Session`] wires the model to a UI
//! shell: text replacement, selection tracking, style commands, and
//! clipboard export behind the [`Clipboard`] seam.
//!
//! ```
//! use tintrun::{Session, StyleChange, palette};
//!
//! let mut session = Session::with_text("Hello World");
//! session.set_selection(0, 5);
//! session.apply(StyleChange::Foreground(palette::RED));
//! session.set_selection(6, 11);
//! session.apply(StyleChange::ToggleBold);
//!
//! assert_eq!(session.export(), "[ff3232]Hello[/ff3232] **World**");
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow StyleChange, TextAttributes etc
#![allow(clippy::should_implement_trait)] // from_str naming is intentional
#![allow(clippy::inherent_to_string)] // to_string methods are convenient

pub mod ansi;
pub mod color;
pub mod document;
pub mod error;
pub mod event;
pub mod markup;
pub mod palette;
pub mod rope;
pub mod selection;
pub mod session;
pub mod style;

// Re-export core types at crate root
pub use color::Rgb;
pub use document::{Document, Run};
pub use error::{Error, Result};
pub use event::{LogLevel, emit_log, set_log_callback};
pub use markup::{to_markup, write_markup};
pub use rope::RopeWrapper;
pub use selection::Selection;
pub use session::{Clipboard, Session};
pub use style::{Style, StyleChange, TextAttributes};
