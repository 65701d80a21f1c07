//! Greedy line breaker.
//!
//! Splits an attributed logical line into sublines no wider than the
//! viewport. Each subline keeps its raw attributed text and the style in
//! effect where it begins, so it can be rendered and hit-tested without
//! looking at its neighbours.
//!
//! When a character pushes the running width past the limit, the breaker
//! looks back a bounded number of source positions for a space and breaks
//! before it, consuming the space. Without a space in range it breaks hard
//! in the middle of the word.

mod subline;

pub use subline::Subline;

use tracing::{debug, trace};

use crate::format::StyleState;
use crate::measure::Measure;
use crate::scanner::{self, Scanned, Scanner};

/// Default number of source positions searched backward for a space.
pub const DEFAULT_LOOKBACK: usize = 25;

/// Where to end the subline in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cut {
    /// Byte offset (exclusive) of the subline text.
    end: usize,
    /// 1 when a break space follows `end` and is consumed.
    trailing_offset: usize,
}

/// Line breaker configured with a space lookback distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBreaker {
    lookback: usize,
}

impl Default for LineBreaker {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKBACK)
    }
}

impl LineBreaker {
    pub fn new(lookback: usize) -> Self {
        Self { lookback }
    }

    pub fn lookback(&self) -> usize {
        self.lookback
    }

    /// Break one logical line. Always returns at least one subline.
    pub fn break_line<M: Measure + ?Sized>(
        &self,
        line: &str,
        max_width: u32,
        measure: &M,
    ) -> Vec<Subline> {
        let mut sublines = Vec::new();
        let mut rest = line;
        let mut style = StyleState::default();
        let mut first = true;

        loop {
            let Some(cut) = self.next_cut(rest, style, max_width, measure) else {
                sublines.push(Subline::new(style, first, 0, rest));
                return sublines;
            };

            // Codes trailing a hard cut stay with the last glyph.
            if cut.trailing_offset == 0 && scanner::literal_len(&rest[cut.end..]) == 0 {
                sublines.push(Subline::new(style, first, 0, rest));
                return sublines;
            }

            let text = &rest[..cut.end];
            trace!(
                end = cut.end,
                trailing_offset = cut.trailing_offset,
                "subline break"
            );
            sublines.push(Subline::new(style, first, cut.trailing_offset, text));

            // The consumed break space is a single ASCII byte.
            style = scanner::fold(style, text);
            rest = &rest[cut.end + cut.trailing_offset..];
            first = false;
        }
    }

    /// Break every line of a buffer into one flat subline sequence.
    pub fn break_buffer<S, M>(&self, lines: &[S], max_width: u32, measure: &M) -> Vec<Subline>
    where
        S: AsRef<str>,
        M: Measure + ?Sized,
    {
        let sublines: Vec<Subline> = lines
            .iter()
            .flat_map(|line| self.break_line(line.as_ref(), max_width, measure))
            .collect();
        debug!(
            lines = lines.len(),
            sublines = sublines.len(),
            max_width,
            "buffer reflowed"
        );
        sublines
    }

    /// Scan until the running width overflows; `None` if the text fits.
    fn next_cut<M: Measure + ?Sized>(
        &self,
        text: &str,
        style: StyleState,
        max_width: u32,
        measure: &M,
    ) -> Option<Cut> {
        let mut left: u32 = 0;
        let mut has_literal = false;

        for scanned in Scanner::new(text, style) {
            left = left.saturating_add(measure.width(scanned.ch, scanned.style.bold));
            if left > max_width {
                return Some(self.find_cut(text, scanned, has_literal));
            }
            has_literal = true;
        }
        None
    }

    fn find_cut(&self, text: &str, overflow: Scanned, has_literal: bool) -> Cut {
        let window_end = overflow.offset + overflow.ch.len_utf8();
        let space = text[..window_end]
            .char_indices()
            .rev()
            .take(self.lookback)
            .filter(|&(pos, _)| pos > 0)
            .find(|&(_, ch)| ch == ' ');

        match space {
            Some((pos, _)) => Cut {
                end: pos,
                trailing_offset: 1,
            },
            // A glyph wider than the viewport still has to go somewhere.
            None if !has_literal => Cut {
                end: window_end,
                trailing_offset: 0,
            },
            None => Cut {
                end: overflow.offset,
                trailing_offset: 0,
            },
        }
    }
}

/// Break `line` with the default lookback.
pub fn break_line<M: Measure + ?Sized>(line: &str, max_width: u32, measure: &M) -> Vec<Subline> {
    LineBreaker::default().break_line(line, max_width, measure)
}
