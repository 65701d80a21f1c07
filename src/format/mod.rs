//! mIRC attribute encoding.
//!
//! Defines the in-band control bytes understood by the scanner and the
//! data types describing resolved style state:
//! - ControlCode: the four reserved bytes (bold, color, reset, underline)
//! - ColorCode: the 16-entry mIRC palette
//! - Color: encoder for a color control sequence with optional arguments
//! - StyleState: the bold/underline/fg/bg values in effect at a character

mod encode;
mod types;

pub use encode::Color;
pub use types::{ColorCode, StyleState};

use std::fmt;

/// An in-band control byte. Each one mutates style state and renders nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlCode {
    /// Toggles bold.
    Bold,
    /// Starts a color sequence, optionally followed by `fg[,bg]` digits.
    Color,
    /// Clears every attribute.
    Reset,
    /// Toggles underline.
    Underline,
}

impl ControlCode {
    pub const BOLD: char = '\x02';
    pub const COLOR: char = '\x03';
    pub const RESET: char = '\x0F';
    pub const UNDERLINE: char = '\x1F';

    /// Classify a character as a control code.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            Self::BOLD => Some(Self::Bold),
            Self::COLOR => Some(Self::Color),
            Self::RESET => Some(Self::Reset),
            Self::UNDERLINE => Some(Self::Underline),
            _ => None,
        }
    }

    /// The reserved character for this code.
    pub fn as_char(self) -> char {
        match self {
            Self::Bold => Self::BOLD,
            Self::Color => Self::COLOR,
            Self::Reset => Self::RESET,
            Self::Underline => Self::UNDERLINE,
        }
    }
}

impl fmt::Display for ControlCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
