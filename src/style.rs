//! Run styling with attributes and colors.
//!
//! This module provides the types that describe how a run of text looks:
//!
//! - [`TextAttributes`]: Bitflags for bold and underline
//! - [`Style`]: Complete styling including optional foreground/background colors
//! - [`StyleChange`]: A formatting command applied to a selection
//!
//! # Examples
//!
//! ```
//! use tintrun::{Rgb, Style, StyleChange, TextAttributes};
//!
//! let style = Style::fg(Rgb::new(0xff, 0x32, 0x32)).with_bold();
//! assert!(style.attributes.contains(TextAttributes::BOLD));
//!
//! // Colors overwrite, flags toggle.
//! let toggled = style.apply(StyleChange::ToggleBold);
//! assert!(!toggled.attributes.contains(TextAttributes::BOLD));
//! ```

use crate::color::Rgb;
use bitflags::bitflags;

bitflags! {
    /// Text rendering attributes.
    ///
    /// The two flags are independent booleans; a run may carry both.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold/increased weight.
        const BOLD      = 0x01;
        /// Underlined text.
        const UNDERLINE = 0x02;
    }
}

/// Complete style for a run: optional colors plus attribute flags.
///
/// `None` for a color means "unstyled" — the chat client renders its own
/// default, and the serializer emits no token for that channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    /// Foreground color (None = client default).
    pub fg: Option<Rgb>,
    /// Background color (None = client default).
    pub bg: Option<Rgb>,
    /// Text rendering attributes.
    pub attributes: TextAttributes,
}

impl Style {
    /// Empty style with no colors or attributes.
    pub const NONE: Self = Self {
        fg: None,
        bg: None,
        attributes: TextAttributes::empty(),
    };

    /// Create a style with only a foreground color.
    #[must_use]
    pub const fn fg(color: Rgb) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            attributes: TextAttributes::empty(),
        }
    }

    /// Create a style with only a background color.
    #[must_use]
    pub const fn bg(color: Rgb) -> Self {
        Self {
            fg: None,
            bg: Some(color),
            attributes: TextAttributes::empty(),
        }
    }

    /// Create a bold style.
    #[must_use]
    pub const fn bold() -> Self {
        Self {
            fg: None,
            bg: None,
            attributes: TextAttributes::BOLD,
        }
    }

    /// Create an underline style.
    #[must_use]
    pub const fn underline() -> Self {
        Self {
            fg: None,
            bg: None,
            attributes: TextAttributes::UNDERLINE,
        }
    }

    /// Return a new style with the specified foreground color.
    #[must_use]
    pub const fn with_fg(self, color: Rgb) -> Self {
        Self {
            fg: Some(color),
            ..self
        }
    }

    /// Return a new style with the specified background color.
    #[must_use]
    pub const fn with_bg(self, color: Rgb) -> Self {
        Self {
            bg: Some(color),
            ..self
        }
    }

    /// Return a new style with the bold attribute added.
    #[must_use]
    pub const fn with_bold(self) -> Self {
        Self {
            attributes: self.attributes.union(TextAttributes::BOLD),
            ..self
        }
    }

    /// Return a new style with the underline attribute added.
    #[must_use]
    pub const fn with_underline(self) -> Self {
        Self {
            attributes: self.attributes.union(TextAttributes::UNDERLINE),
            ..self
        }
    }

    /// Check if this style has any non-default properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attributes.is_empty()
    }

    /// Apply a formatting command, returning the resulting style.
    ///
    /// Color changes overwrite the existing value (last applied wins);
    /// toggle changes flip the run's own flag. The distinction is carried
    /// by the [`StyleChange`] variants themselves.
    #[must_use]
    pub fn apply(self, change: StyleChange) -> Self {
        match change {
            StyleChange::Foreground(color) => Self {
                fg: Some(color),
                ..self
            },
            StyleChange::Background(color) => Self {
                bg: Some(color),
                ..self
            },
            StyleChange::ToggleBold => Self {
                attributes: self.attributes ^ TextAttributes::BOLD,
                ..self
            },
            StyleChange::ToggleUnderline => Self {
                attributes: self.attributes ^ TextAttributes::UNDERLINE,
                ..self
            },
        }
    }
}

/// A formatting command targeting the current selection.
///
/// The variants fall into exactly two behavior classes:
///
/// - **Overwrite**: [`Foreground`](Self::Foreground) and
///   [`Background`](Self::Background) set the channel to the given color
///   regardless of its prior value.
/// - **Toggle**: [`ToggleBold`](Self::ToggleBold) and
///   [`ToggleUnderline`](Self::ToggleUnderline) flip each affected run's
///   flag independently. A selection spanning a mix of bold and non-bold
///   runs stays mixed after toggling; there is no single target value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleChange {
    /// Set the foreground color.
    Foreground(Rgb),
    /// Set the background color.
    Background(Rgb),
    /// Flip the bold flag per run.
    ToggleBold,
    /// Flip the underline flag per run.
    ToggleUnderline,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_change_overwrites() {
        let red = Rgb::new(0xff, 0x32, 0x32);
        let blue = Rgb::new(0x34, 0x98, 0xdb);

        let style = Style::fg(red).apply(StyleChange::Foreground(blue));
        assert_eq!(style.fg, Some(blue));

        // Background is untouched by a foreground change.
        let style = Style::bg(red).apply(StyleChange::Foreground(blue));
        assert_eq!(style.bg, Some(red));
        assert_eq!(style.fg, Some(blue));
    }

    #[test]
    fn test_toggle_flips_flag() {
        let style = Style::NONE.apply(StyleChange::ToggleBold);
        assert!(style.attributes.contains(TextAttributes::BOLD));

        let style = style.apply(StyleChange::ToggleBold);
        assert!(!style.attributes.contains(TextAttributes::BOLD));
    }

    #[test]
    fn test_toggle_is_self_inverse() {
        let style = Style::fg(Rgb::new(1, 2, 3)).with_underline();
        let twice = style
            .apply(StyleChange::ToggleUnderline)
            .apply(StyleChange::ToggleUnderline);
        assert_eq!(twice, style);
    }

    #[test]
    fn test_toggle_preserves_other_flags() {
        let style = Style::bold().apply(StyleChange::ToggleUnderline);
        assert!(style.attributes.contains(TextAttributes::BOLD));
        assert!(style.attributes.contains(TextAttributes::UNDERLINE));
    }

    #[test]
    fn test_is_empty() {
        assert!(Style::NONE.is_empty());
        assert!(!Style::bold().is_empty());
        assert!(!Style::fg(Rgb::new(0, 0, 0)).is_empty());
    }
}
