//! Fixed named color table
//!
//! Color-blind friendly choices are White, Black, Red, Blue and Gold.

use super::{Rgb, rgb_from_u32};

/// Symbolic palette entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PaletteColor {
    White,
    Red,
    Green,
    Blue,
    Yellow,
    Pink,
    Orange,
    Black,
    Gold,
    Purple,
}

impl PaletteColor {
    pub const COUNT: usize = 10;
}

/// Mapping from palette symbols to concrete colors
///
/// Fixed at configuration time; the renderer never mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; PaletteColor::COUNT],
}

#[allow(clippy::unreadable_literal)]
impl Palette {
    pub const DEFAULT: Self = Self {
        colors: [
            rgb_from_u32(0xFFFFFF), // White
            rgb_from_u32(0xFF0000), // Red
            rgb_from_u32(0x008000), // Green
            rgb_from_u32(0x0000CC), // Blue
            rgb_from_u32(0xFFB10A), // Yellow
            rgb_from_u32(0xDC267F), // Pink
            rgb_from_u32(0xFE6100), // Orange
            rgb_from_u32(0x000000), // Black
            rgb_from_u32(0xFFC20A), // Gold
            rgb_from_u32(0x6903A3), // Purple
        ],
    };

    /// Resolve a palette symbol
    pub const fn get(&self, color: PaletteColor) -> Rgb {
        self.colors[color as usize]
    }

    /// Replace one entry
    #[must_use]
    pub const fn with(mut self, color: PaletteColor, value: Rgb) -> Self {
        self.colors[color as usize] = value;
        self
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}
