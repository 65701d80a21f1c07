//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use ircflow::measure::TableMeasure;
use ircflow::{Subline, TextView};

/// Row height used by [`abc_measure`].
pub const LINE_HEIGHT: u32 = 14;

/// Width of `a`, `b` and `c` under [`abc_measure`].
pub const A: u32 = 7;
pub const B: u32 = 8;
pub const C: u32 = 5;

/// Proportional measurer with distinct widths for `a`, `b` and `c`.
///
/// Every other glyph, space included, is 6 pixels wide.
pub fn abc_measure() -> TableMeasure {
    TableMeasure::new(6, LINE_HEIGHT)
        .with('a', A)
        .with('b', B)
        .with('c', C)
}

/// Pixel width of `text` under [`abc_measure`], ignoring bold.
pub fn width_of(text: &str) -> u32 {
    text.chars()
        .map(|ch| match ch {
            'a' => A,
            'b' => B,
            'c' => C,
            _ => 6,
        })
        .sum()
}

/// Reflowed view over `lines`.
pub fn view_of(lines: &[&str], max_width: u32) -> TextView<TableMeasure> {
    let mut view = TextView::new(abc_measure(), max_width);
    view.set_buffer(lines.iter().copied());
    view.reflow(max_width);
    view
}

/// Literal text of each subline.
pub fn literal_texts(sublines: &[Subline]) -> Vec<String> {
    sublines.iter().map(Subline::literal_text).collect()
}

/// Write `contents` to a file in a fresh temp dir.
pub fn temp_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write temp file");
    (temp_dir, path)
}
