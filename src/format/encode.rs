//! Encoder for color control sequences.

use super::ControlCode;
use std::fmt;

/// A color sequence with optional foreground and background.
///
/// ```
/// use ircflow::format::{Color, ColorCode};
///
/// let red = Color::fg(ColorCode::Red);
/// assert_eq!(format!("{red}hello"), "\x0304hello");
/// assert_eq!(Color::new(Some(4), Some(2)).to_string(), "\x0304,02");
/// assert_eq!(Color::default().to_string(), "\x03");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub fg: Option<u8>,
    pub bg: Option<u8>,
}

impl Color {
    pub fn new(fg: Option<u8>, bg: Option<u8>) -> Self {
        Self { fg, bg }
    }

    pub fn fg(code: super::ColorCode) -> Self {
        Self::new(Some(code.index()), None)
    }

    pub fn bg(code: super::ColorCode) -> Self {
        Self::new(None, Some(code.index()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ControlCode::Color)?;
        if let Some(fg) = self.fg {
            write!(f, "{:02}", fg)?;
        }
        if let Some(bg) = self.bg {
            write!(f, ",{:02}", bg)?;
        }
        Ok(())
    }
}
