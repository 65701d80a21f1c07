//! Command handlers for the ircflow CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod config;
pub mod hit;
pub mod select;
pub mod strip;
pub mod wrap;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use ircflow::measure::{CachedMeasure, MonospaceMeasure};
use ircflow::{Config, TextView};

/// Terminal width assumed when neither flag, config nor terminal says.
pub const FALLBACK_COLUMNS: u16 = 80;

/// Load the config from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Read input lines from a file, or from stdin when `file` is "-".
pub fn read_lines(file: &str) -> Result<Vec<String>> {
    if file == "-" {
        return read_lines_from(io::stdin().lock()).context("Failed to read stdin");
    }
    let handle = File::open(file).with_context(|| format!("Failed to open {}", file))?;
    read_lines_from(BufReader::new(handle)).with_context(|| format!("Failed to read {}", file))
}

/// Split a reader into lines, dropping `\n` and `\r\n` terminators.
pub fn read_lines_from<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let mut line = line?;
        if line.ends_with('\r') {
            line.pop();
        }
        lines.push(line);
    }
    Ok(lines)
}

/// Pick the viewport width: explicit flag, then config, then terminal.
pub fn resolve_width(explicit: Option<u32>, config: &Config, columns: Option<u16>) -> u32 {
    explicit
        .or(config.view.width)
        .unwrap_or_else(|| config.width_for_columns(columns.unwrap_or(FALLBACK_COLUMNS)))
}

/// Columns of the attached terminal, if any.
pub fn terminal_columns() -> Option<u16> {
    terminal_size::terminal_size().map(|(terminal_size::Width(w), _)| w)
}

/// Build a reflowed view of `lines` for the layout commands.
pub fn build_view(
    config: &Config,
    lines: Vec<String>,
    width: Option<u32>,
) -> TextView<CachedMeasure<MonospaceMeasure>> {
    let max_width = resolve_width(width, config, terminal_columns());
    let mut view = TextView::from_config(config, max_width);
    view.set_buffer(lines);
    view.reflow(max_width);
    view
}
