//! Selection reconciliation across re-wrapping.
//!
//! An absolute offset counts literal characters from the start of the
//! buffer, including consumed break spaces. It does not depend on the
//! viewport width, so it survives a reflow that changes every subline
//! boundary.

use tracing::trace;

use super::{Selection, SelectionEndpoint};
use crate::wrap::Subline;

/// Selection endpoints as absolute offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionSnapshot {
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub dragging: bool,
}

impl SelectionSnapshot {
    /// Resolve the offsets against a freshly wrapped subline list.
    pub fn resolve(&self, sublines: &[Subline]) -> Selection {
        let selection = Selection {
            start: self.start.map(|offset| from_absolute(sublines, offset)),
            end: self.end.map(|offset| from_absolute(sublines, offset)),
            dragging: self.dragging,
        };
        trace!(
            start = ?selection.start,
            end = ?selection.end,
            "selection reconciled"
        );
        selection
    }
}

/// Absolute offset of `endpoint` within `sublines`.
pub fn to_absolute(sublines: &[Subline], endpoint: SelectionEndpoint) -> usize {
    let before: usize = sublines
        .iter()
        .take(endpoint.subline)
        .map(Subline::span)
        .sum();
    before + endpoint.index
}

/// Endpoint of an absolute offset within `sublines`.
///
/// An offset on a subline boundary resolves to the start of the later
/// subline. Offsets past the end clamp to `(sublines.len(), 0)`.
pub fn from_absolute(sublines: &[Subline], offset: usize) -> SelectionEndpoint {
    let mut remaining = offset;
    for (index, subline) in sublines.iter().enumerate() {
        let span = subline.span();
        if remaining < span {
            return SelectionEndpoint::new(index, remaining);
        }
        remaining -= span;
    }
    SelectionEndpoint::new(sublines.len(), 0)
}
