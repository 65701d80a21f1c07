//! Configuration management for ircflow

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::measure::{CachedMeasure, MonospaceMeasure};
use crate::wrap::LineBreaker;

impl Config {
    /// Get the config file path (~/.config/ircflow/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/ircflow)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        io::save(self)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> Result<(), String> {
        if self.view.line_height == 0 {
            return Err("view.line_height must be > 0".to_string());
        }
        if self.view.width == Some(0) {
            return Err("view.width must be > 0".to_string());
        }
        if self.wrap.lookback == 0 {
            return Err("wrap.lookback must be > 0".to_string());
        }
        if self.measure.cell_width == 0 {
            return Err("measure.cell_width must be > 0".to_string());
        }
        Ok(())
    }

    /// Cached monospace measurer described by `[measure]` and `[view]`.
    pub fn measure(&self) -> CachedMeasure<MonospaceMeasure> {
        let inner = MonospaceMeasure::new(self.measure.cell_width, self.view.line_height)
            .with_bold_extra(self.measure.bold_extra);
        CachedMeasure::new(inner, self.measure.cache_capacity)
    }

    pub fn line_breaker(&self) -> LineBreaker {
        LineBreaker::new(self.wrap.lookback)
    }

    /// Viewport width for `columns` terminal cells.
    pub fn width_for_columns(&self, columns: u16) -> u32 {
        u32::from(columns) * self.measure.cell_width
    }
}
