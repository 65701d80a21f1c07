//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::measure::DEFAULT_CACHE_CAPACITY;
use crate::wrap::DEFAULT_LOOKBACK;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub wrap: WrapConfig,
    #[serde(default)]
    pub measure: MeasureConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

/// Viewport configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Viewport width in pixels. Unset means "use the terminal width".
    #[serde(default)]
    pub width: Option<u32>,
    /// Height of one display row in pixels
    #[serde(default = "default_line_height")]
    pub line_height: u32,
}

pub fn default_line_height() -> u32 {
    14
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: None,
            line_height: default_line_height(),
        }
    }
}

/// Line breaking configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapConfig {
    /// Source positions searched backward for a break space
    #[serde(default = "default_lookback")]
    pub lookback: usize,
}

pub fn default_lookback() -> usize {
    DEFAULT_LOOKBACK
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            lookback: default_lookback(),
        }
    }
}

/// Glyph measurement configuration (monospace cell grid)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureConfig {
    /// Width of one cell in pixels
    #[serde(default = "default_cell_width")]
    pub cell_width: u32,
    /// Extra pixels added to bold glyphs
    #[serde(default)]
    pub bold_extra: u32,
    /// Entries kept in the measurement cache
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

pub fn default_cell_width() -> u32 {
    7
}

pub fn default_cache_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            cell_width: default_cell_width(),
            bold_extra: 0,
            cache_capacity: default_cache_capacity(),
        }
    }
}

/// Clipboard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardConfig {
    /// Copy the selection to the clipboard when a drag ends
    #[serde(default = "default_copy_on_release")]
    pub copy_on_release: bool,
}

pub fn default_copy_on_release() -> bool {
    true
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            copy_on_release: default_copy_on_release(),
        }
    }
}
