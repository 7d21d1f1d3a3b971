//! Colors used by the built-in view components.

use serde::{Deserialize, Serialize};

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const fn gray(level: u8) -> Color {
        Color(level, level, level)
    }
}

pub const BLACK: Color = Color::gray(0x00);
pub const WHITE: Color = Color::gray(0xFF);
pub const GRAY04: Color = Color::gray(0x44);
pub const GRAY08: Color = Color::gray(0x88);
pub const GRAY12: Color = Color::gray(0xCC);

pub const SEPARATOR_NORMAL: Color = GRAY08;
pub const BUTTON_NORMAL: Color = GRAY12;
pub const BUTTON_BORDER: Color = GRAY04;

// Screen backgrounds used by the demo routes.
pub const SCREEN_CORAL: Color = Color(0xE8, 0x6A, 0x5C);
pub const SCREEN_TEAL: Color = Color(0x2E, 0x8B, 0x8B);
pub const SCREEN_OLIVE: Color = Color(0x8A, 0x8F, 0x3C);
