//! Run data for surface renderers.
//!
//! A renderer paints backgrounds, glyphs and underlines; all it needs from
//! the engine is, per subline, the maximal runs of characters that share
//! a style and selection state, with their horizontal placement.

use serde::Serialize;

use crate::format::{ColorCode, StyleState};
use crate::measure::Measure;
use crate::selection::{Selection, SelectionEndpoint};
use crate::wrap::Subline;

/// Consecutive characters drawn with the same attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledRun {
    pub style: StyleState,
    pub selected: bool,
    pub text: String,
    /// Pixel offset of the run from the left edge of the row.
    pub x: u32,
    pub width: u32,
}

impl StyledRun {
    pub fn fg_color(&self) -> Option<ColorCode> {
        self.style.fg_color()
    }

    pub fn bg_color(&self) -> Option<ColorCode> {
        self.style.bg_color()
    }
}

/// Split subline `index` into styled runs.
pub fn subline_runs<M: Measure + ?Sized>(
    subline: &Subline,
    index: usize,
    selection: &Selection,
    measure: &M,
) -> Vec<StyledRun> {
    let mut runs: Vec<StyledRun> = Vec::new();
    let mut left: u32 = 0;

    for (i, scanned) in subline.scan().enumerate() {
        let width = measure.width(scanned.ch, scanned.style.bold);
        let selected = selection.contains(SelectionEndpoint::new(index, i));

        match runs.last_mut() {
            Some(run) if run.style == scanned.style && run.selected == selected => {
                run.text.push(scanned.ch);
                run.width += width;
            }
            _ => runs.push(StyledRun {
                style: scanned.style,
                selected,
                text: scanned.ch.to_string(),
                x: left,
                width,
            }),
        }
        left += width;
    }
    runs
}
