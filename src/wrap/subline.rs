use serde::Serialize;

use crate::format::StyleState;
use crate::scanner::{self, Scanner};

/// One display row produced by the line breaker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subline {
    /// Style in effect at the first character of `text`.
    pub style_at_start: StyleState,
    /// True when this subline begins a logical line.
    pub first_subline: bool,
    /// 1 when a break space was consumed after `text`, else 0.
    pub trailing_offset: usize,
    /// Raw attributed text, control codes included.
    pub text: String,
    literal_len: usize,
}

impl Subline {
    pub fn new(
        style_at_start: StyleState,
        first_subline: bool,
        trailing_offset: usize,
        text: &str,
    ) -> Self {
        Self {
            style_at_start,
            first_subline,
            trailing_offset,
            text: text.to_string(),
            literal_len: scanner::literal_len(text),
        }
    }

    /// Number of literal (rendered) characters.
    pub fn literal_len(&self) -> usize {
        self.literal_len
    }

    /// Literal characters plus the consumed break space, i.e. the share of
    /// the buffer's absolute offsets this subline accounts for.
    pub fn span(&self) -> usize {
        self.literal_len + self.trailing_offset
    }

    /// Scan the literal characters, starting from `style_at_start`.
    pub fn scan(&self) -> Scanner<'_> {
        Scanner::new(&self.text, self.style_at_start)
    }

    /// Text with attributes removed.
    pub fn literal_text(&self) -> String {
        self.scan().map(|s| s.ch).collect()
    }

    /// Literal characters in `[start, end)`, clamped to the subline.
    pub fn literal_slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.literal_len);
        if start >= end {
            return String::new();
        }
        self.scan().skip(start).take(end - start).map(|s| s.ch).collect()
    }
}
