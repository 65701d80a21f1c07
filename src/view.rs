//! Host-facing text view.
//!
//! Owns the logical buffer, the wrapped subline list and the selection,
//! and keeps the three consistent: every reflow snapshots the selection as
//! absolute offsets against the old sublines, replaces the sublines, then
//! resolves the snapshot against the new ones.

use tracing::{debug, warn};

use crate::config::Config;
use crate::measure::{CachedMeasure, Measure, MonospaceMeasure};
use crate::position::{self, CharHit};
use crate::render::{self, StyledRun};
use crate::selection::{Selection, SelectionError};
use crate::wrap::{LineBreaker, Subline};

/// Wrapped, selectable view over a buffer of attributed lines.
#[derive(Debug)]
pub struct TextView<M> {
    buffer: Vec<String>,
    sublines: Vec<Subline>,
    max_width: u32,
    measure: M,
    breaker: LineBreaker,
    selection: Selection,
    /// Buffer changed since the last reflow.
    stale: bool,
}

impl TextView<CachedMeasure<MonospaceMeasure>> {
    /// View measured and wrapped as described by `config`.
    pub fn from_config(config: &Config, max_width: u32) -> Self {
        TextView::new(config.measure(), max_width).with_breaker(config.line_breaker())
    }
}

impl<M: Measure> TextView<M> {
    pub fn new(measure: M, max_width: u32) -> Self {
        Self {
            buffer: Vec::new(),
            sublines: Vec::new(),
            max_width,
            measure,
            breaker: LineBreaker::default(),
            selection: Selection::default(),
            stale: false,
        }
    }

    pub fn with_breaker(mut self, breaker: LineBreaker) -> Self {
        self.breaker = breaker;
        self
    }

    pub fn buffer(&self) -> &[String] {
        &self.buffer
    }

    pub fn sublines(&self) -> &[Subline] {
        &self.sublines
    }

    pub fn max_width(&self) -> u32 {
        self.max_width
    }

    pub fn measure(&self) -> &M {
        &self.measure
    }

    pub fn line_height(&self) -> u32 {
        self.measure.line_height()
    }

    /// Total height of all rows in pixels.
    pub fn content_height(&self) -> u64 {
        self.sublines.len() as u64 * u64::from(self.line_height())
    }

    /// True when the buffer changed and [`TextView::reflow`] has not run.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Replace the buffer. Sublines are dropped until the next reflow and
    /// the selection, which referred to the old content, is cleared.
    pub fn set_buffer<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.buffer = lines.into_iter().map(Into::into).collect();
        self.sublines.clear();
        self.selection.clear();
        self.stale = true;
    }

    /// Append one logical line, wrapping only that line.
    ///
    /// Existing subline indices, and therefore the selection, stay valid.
    pub fn append_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        if !self.stale {
            let wrapped = self
                .breaker
                .break_line(&line, self.max_width, &self.measure);
            self.sublines.extend(wrapped);
        }
        self.buffer.push(line);
    }

    /// Re-wrap the whole buffer at `max_width` and carry the selection over.
    pub fn reflow(&mut self, max_width: u32) {
        let snapshot = self.selection.snapshot(&self.sublines);
        let sublines = self
            .breaker
            .break_buffer(&self.buffer, max_width, &self.measure);
        self.sublines = sublines;
        self.max_width = max_width;
        self.stale = false;
        self.selection = snapshot.resolve(&self.sublines);
        debug!(
            max_width,
            sublines = self.sublines.len(),
            selection = ?self.selection.range(),
            "view reflowed"
        );
    }

    /// Character under a pixel position, `None` below the last row.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<CharHit> {
        position::find_char_at_pos(&self.sublines, x, y, &self.measure)
    }

    /// Pointer pressed: anchor a selection, or clear it on a miss.
    pub fn press(&mut self, x: f64, y: f64) {
        match self.hit_test(x, y) {
            Some(hit) => self.selection.begin(hit.endpoint()),
            None => self.selection.clear(),
        }
    }

    /// Pointer moved: follow it with the free end while dragging.
    pub fn motion(&mut self, x: f64, y: f64) {
        if !self.selection.is_dragging() {
            return;
        }
        if let Some(hit) = self.hit_test(x, y) {
            self.selection.extend(hit.endpoint());
        }
    }

    /// Pointer released: finish the drag and return the text to hand to
    /// the clipboard, if a non-empty selection resulted.
    pub fn release(&mut self, x: f64, y: f64) -> Option<String> {
        if !self.selection.is_dragging() {
            return None;
        }
        let hit = self.hit_test(x, y).map(|hit| hit.endpoint());
        if !self.selection.finish(hit) {
            return None;
        }
        match self.current_selection_text() {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(error = %e, "selection not copied");
                None
            }
        }
    }

    /// Plain text of the current selection.
    pub fn current_selection_text(&self) -> Result<String, SelectionError> {
        self.selection.text(&self.sublines)
    }

    /// Styled runs of subline `index` for the renderer.
    pub fn runs(&self, index: usize) -> Option<Vec<StyledRun>> {
        let subline = self.sublines.get(index)?;
        Some(render::subline_runs(
            subline,
            index,
            &self.selection,
            &self.measure,
        ))
    }
}
