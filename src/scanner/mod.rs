//! Attribute scanner.
//!
//! A single pass over an attributed line that folds control codes into a
//! running [`StyleState`] and yields every literal character together with
//! the style in effect for it. The stripper, the line breaker, the hit
//! tester and the run builder all drive their own scanner; nothing is
//! shared between passes.

mod color;

use crate::format::{ControlCode, StyleState};
use color::parse_color_args;

/// One literal character produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scanned {
    /// Style in effect for this character.
    pub style: StyleState,
    pub ch: char,
    /// Byte offset of the character in the scanned text.
    pub offset: usize,
}

/// Iterator over the literal characters of an attributed string.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    text: &'a str,
    pos: usize,
    style: StyleState,
}

impl<'a> Scanner<'a> {
    /// Scan `text` starting from `style`.
    pub fn new(text: &'a str, style: StyleState) -> Self {
        Self {
            text,
            pos: 0,
            style,
        }
    }

    /// Style after everything consumed so far, including trailing codes.
    pub fn style(&self) -> StyleState {
        self.style
    }

    /// Byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn apply(&mut self, code: ControlCode) {
        match code {
            ControlCode::Bold => self.style.bold = !self.style.bold,
            ControlCode::Underline => self.style.underline = !self.style.underline,
            ControlCode::Reset => self.style.reset(),
            ControlCode::Color => {
                let args = parse_color_args(&self.text[self.pos..]);
                self.style.fg = args.fg;
                self.style.bg = args.bg;
                self.pos += args.consumed;
            }
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Scanned;

    fn next(&mut self) -> Option<Scanned> {
        loop {
            let ch = self.text[self.pos..].chars().next()?;
            let offset = self.pos;
            self.pos += ch.len_utf8();
            match ControlCode::from_char(ch) {
                Some(code) => self.apply(code),
                None => {
                    return Some(Scanned {
                        style: self.style,
                        ch,
                        offset,
                    })
                }
            }
        }
    }
}

/// Fold every control code in `text` into `initial`.
pub fn fold(initial: StyleState, text: &str) -> StyleState {
    let mut scanner = Scanner::new(text, initial);
    scanner.by_ref().for_each(drop);
    scanner.style()
}

/// Remove bold, underline, reset and color codes (with their arguments).
pub fn strip(text: &str) -> String {
    Scanner::new(text, StyleState::default())
        .map(|s| s.ch)
        .collect()
}

/// Number of literal characters in `text`.
pub fn literal_len(text: &str) -> usize {
    Scanner::new(text, StyleState::default()).count()
}
