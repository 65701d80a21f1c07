//! Selection model.
//!
//! A selection is a pair of endpoints in `(subline, literal index)`
//! coordinates. The smaller endpoint is the inclusive start, the larger
//! the exclusive end, whichever order they were set in.
//!
//! Subline coordinates are only meaningful for the subline list they were
//! taken against. Before the buffer is re-wrapped the selection is
//! snapshotted as absolute offsets (see [`SelectionSnapshot`]) and
//! resolved again against the new list.

mod error;
mod reconcile;

pub use error::SelectionError;
pub use reconcile::{from_absolute, to_absolute, SelectionSnapshot};

use serde::Serialize;

use crate::wrap::Subline;

/// A position between literal characters of a subline.
///
/// Ordering is lexicographic on `(subline, index)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct SelectionEndpoint {
    pub subline: usize,
    pub index: usize,
}

impl SelectionEndpoint {
    pub fn new(subline: usize, index: usize) -> Self {
        Self { subline, index }
    }

    /// Return `(min, max)` of two endpoints.
    pub fn ordered(a: Self, b: Self) -> (Self, Self) {
        (a.min(b), a.max(b))
    }
}

impl From<(usize, usize)> for SelectionEndpoint {
    fn from((subline, index): (usize, usize)) -> Self {
        Self::new(subline, index)
    }
}

/// Selection state driven by pointer events.
///
/// Only one endpoint being set is a transient state between a press and
/// the following motion or release.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    start: Option<SelectionEndpoint>,
    end: Option<SelectionEndpoint>,
    dragging: bool,
}

impl Selection {
    /// A complete selection between two endpoints.
    pub fn new(start: impl Into<SelectionEndpoint>, end: impl Into<SelectionEndpoint>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
            dragging: false,
        }
    }

    pub fn start(&self) -> Option<SelectionEndpoint> {
        self.start
    }

    pub fn end(&self) -> Option<SelectionEndpoint> {
        self.end
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Both endpoints are set.
    pub fn is_active(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Anchor a new selection and start dragging.
    pub fn begin(&mut self, anchor: SelectionEndpoint) {
        self.start = Some(anchor);
        self.end = None;
        self.dragging = true;
    }

    /// Move the free end while dragging. Ignored otherwise.
    pub fn extend(&mut self, to: SelectionEndpoint) {
        if self.dragging {
            self.end = Some(to);
        }
    }

    /// Stop dragging. `to` is `None` when the release missed every row.
    ///
    /// Returns true if a non-empty selection remains.
    pub fn finish(&mut self, to: Option<SelectionEndpoint>) -> bool {
        self.dragging = false;
        if let Some(to) = to {
            self.end = Some(to);
        }
        if to.is_none() || self.start == self.end {
            self.clear();
            return false;
        }
        self.is_active()
    }

    /// Ordered `(start, end)` if both endpoints are set.
    pub fn range(&self) -> Option<(SelectionEndpoint, SelectionEndpoint)> {
        Some(SelectionEndpoint::ordered(self.start?, self.end?))
    }

    /// Whether the character at `point` is inside the selection.
    pub fn contains(&self, point: SelectionEndpoint) -> bool {
        self.range()
            .is_some_and(|(start, end)| start <= point && point < end)
    }

    /// Plain text covered by the selection.
    pub fn text(&self, sublines: &[Subline]) -> Result<String, SelectionError> {
        let (start, end) = self.range().ok_or(SelectionError::NoSelection)?;
        extract_text(sublines, start, end)
    }

    /// Record the endpoints as absolute offsets into `sublines`.
    pub fn snapshot(&self, sublines: &[Subline]) -> SelectionSnapshot {
        SelectionSnapshot {
            start: self.start.map(|ep| to_absolute(sublines, ep)),
            end: self.end.map(|ep| to_absolute(sublines, ep)),
            dragging: self.dragging,
        }
    }
}

/// Attribute-free text between two endpoints, in either order.
///
/// An end endpoint on subline `sublines.len()` selects through the end of
/// the last subline. Sublines that begin a logical line are preceded by a
/// newline; consumed break spaces are restored.
pub fn extract_text(
    sublines: &[Subline],
    a: SelectionEndpoint,
    b: SelectionEndpoint,
) -> Result<String, SelectionError> {
    let (start, end) = SelectionEndpoint::ordered(a, b);
    let len = sublines.len();
    if start.subline >= len || end.subline > len {
        return Err(SelectionError::OutOfRange {
            start: start.subline,
            end: end.subline,
            len,
        });
    }

    let end = if end.subline == len {
        SelectionEndpoint::new(len - 1, sublines[len - 1].literal_len())
    } else {
        end
    };

    let first = &sublines[start.subline];
    if start.subline == end.subline {
        return Ok(first.literal_slice(start.index, end.index));
    }

    let mut text = first.literal_slice(start.index, usize::MAX);
    push_break_spaces(&mut text, first);

    for subline in &sublines[start.subline + 1..end.subline] {
        if subline.first_subline {
            text.push('\n');
        }
        text.push_str(&subline.literal_text());
        push_break_spaces(&mut text, subline);
    }

    let last = &sublines[end.subline];
    if last.first_subline {
        text.push('\n');
    }
    text.push_str(&last.literal_slice(0, end.index));
    Ok(text)
}

fn push_break_spaces(text: &mut String, subline: &Subline) {
    text.extend(std::iter::repeat(' ').take(subline.trailing_offset));
}
