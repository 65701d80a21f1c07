//! Pixel to character mapping.
//!
//! Rows are a fixed `line_height` tall and stacked in subline order.
//! Within a row the characters are laid out left to right with the
//! widths reported by the measurer, exactly as the line breaker measured
//! them.

use serde::Serialize;

use crate::measure::Measure;
use crate::selection::SelectionEndpoint;
use crate::wrap::Subline;

/// A resolved character position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharHit {
    pub subline: usize,
    /// Literal character index; equals the subline's literal length when
    /// the point lies past the last character.
    pub index: usize,
    /// The character under the point, `None` past the end of the row.
    pub ch: Option<char>,
}

impl CharHit {
    pub fn endpoint(&self) -> SelectionEndpoint {
        SelectionEndpoint::new(self.subline, self.index)
    }

    pub fn is_past_end(&self) -> bool {
        self.ch.is_none()
    }
}

/// Row index under `y` and the subline drawn there, if any.
pub fn find_subline_at_pos(
    sublines: &[Subline],
    y: f64,
    line_height: u32,
) -> (usize, Option<&Subline>) {
    if line_height == 0 {
        return (usize::MAX, None);
    }
    let row = (y.max(0.0) / f64::from(line_height)).floor();
    let index = row as usize;
    (index, sublines.get(index))
}

/// Character under `(x, y)`, or `None` when no row is drawn at `y`.
pub fn find_char_at_pos<M: Measure + ?Sized>(
    sublines: &[Subline],
    x: f64,
    y: f64,
    measure: &M,
) -> Option<CharHit> {
    let (index, subline) = find_subline_at_pos(sublines, y, measure.line_height());
    let subline = subline?;
    let x = x.max(0.0);

    let mut left: u32 = 0;
    for (i, scanned) in subline.scan().enumerate() {
        let width = measure.width(scanned.ch, scanned.style.bold);
        let right = left.saturating_add(width);
        if f64::from(left) <= x && x < f64::from(right) {
            return Some(CharHit {
                subline: index,
                index: i,
                ch: Some(scanned.ch),
            });
        }
        left = right;
    }

    Some(CharHit {
        subline: index,
        index: subline.literal_len(),
        ch: None,
    })
}
