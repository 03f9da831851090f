//! Stock swatch palettes for the formatting toolbar.
//!
//! Two fixed rows of eight colors each, matching the chat client's rendered
//! palette. The UI shell presents these as swatch buttons; nothing in the
//! document model restricts colors to this set.

use crate::color::Rgb;

/// Gray foreground.
pub const GRAY: Rgb = Rgb::new(0x5c, 0x5c, 0x5c);
/// Red foreground.
pub const RED: Rgb = Rgb::new(0xff, 0x32, 0x32);
/// Green foreground.
pub const GREEN: Rgb = Rgb::new(0x90, 0xb4, 0x14);
/// Yellow foreground.
pub const YELLOW: Rgb = Rgb::new(0xe6, 0xa2, 0x26);
/// Blue foreground.
pub const BLUE: Rgb = Rgb::new(0x34, 0x98, 0xdb);
/// Pink foreground.
pub const PINK: Rgb = Rgb::new(0xe8, 0x43, 0x93);
/// Teal foreground.
pub const TEAL: Rgb = Rgb::new(0x1a, 0xbc, 0x9c);
/// White foreground.
pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

/// Dark blue background.
pub const DARK_BLUE: Rgb = Rgb::new(0x00, 0x1e, 0x2d);
/// Orange background.
pub const ORANGE: Rgb = Rgb::new(0xd3, 0x54, 0x00);
/// Slate background.
pub const SLATE: Rgb = Rgb::new(0x62, 0x76, 0x80);
/// Gray-blue background.
pub const GRAY_BLUE: Rgb = Rgb::new(0x71, 0x8b, 0x93);
/// Light gray background.
pub const LIGHT_GRAY: Rgb = Rgb::new(0x8c, 0x9a, 0xa3);
/// Purple background.
pub const PURPLE: Rgb = Rgb::new(0x71, 0x67, 0xc9);
/// Silver background.
pub const SILVER: Rgb = Rgb::new(0x9e, 0xad, 0xb5);
/// Cream background.
pub const CREAM: Rgb = Rgb::new(0xff, 0xfb, 0xe6);

/// Foreground swatches in toolbar order.
pub const FOREGROUND: [Rgb; 8] = [GRAY, RED, GREEN, YELLOW, BLUE, PINK, TEAL, WHITE];

/// Background swatches in toolbar order.
pub const BACKGROUND: [Rgb; 8] = [
    DARK_BLUE, ORANGE, SLATE, GRAY_BLUE, LIGHT_GRAY, PURPLE, SILVER, CREAM,
];
