//! Style data types.
//!
//! Contains the resolved attribute state carried through scanning,
//! line breaking and rendering.

use serde::Serialize;
use std::fmt;

/// mIRC palette colors. Raw color arguments are reduced mod 16 on use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorCode {
    White = 0,
    Black = 1,
    Blue = 2,
    Green = 3,
    Red = 4,
    LightRed = 5,
    Purple = 6,
    Orange = 7,
    Yellow = 8,
    LightGreen = 9,
    Aqua = 10,
    LightAqua = 11,
    LightBlue = 12,
    LightPurple = 13,
    Grey = 14,
    LightGrey = 15,
}

impl ColorCode {
    const ALL: [ColorCode; 16] = [
        ColorCode::White,
        ColorCode::Black,
        ColorCode::Blue,
        ColorCode::Green,
        ColorCode::Red,
        ColorCode::LightRed,
        ColorCode::Purple,
        ColorCode::Orange,
        ColorCode::Yellow,
        ColorCode::LightGreen,
        ColorCode::Aqua,
        ColorCode::LightAqua,
        ColorCode::LightBlue,
        ColorCode::LightPurple,
        ColorCode::Grey,
        ColorCode::LightGrey,
    ];

    /// Resolve a raw in-band color number (0-99) to a palette entry.
    pub fn from_index(index: u8) -> Self {
        Self::ALL[usize::from(index % 16)]
    }

    pub fn index(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.index())
    }
}

/// Attributes in effect at a character.
///
/// `fg` and `bg` hold the raw decimal argument as written in the line
/// (0-99). Use [`StyleState::fg_color`] for the palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct StyleState {
    pub bold: bool,
    pub underline: bool,
    pub fg: Option<u8>,
    pub bg: Option<u8>,
}

impl StyleState {
    /// Clear all four fields.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn fg_color(&self) -> Option<ColorCode> {
        self.fg.map(ColorCode::from_index)
    }

    pub fn bg_color(&self) -> Option<ColorCode> {
        self.bg.map(ColorCode::from_index)
    }

    /// True when no attribute is set.
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}
