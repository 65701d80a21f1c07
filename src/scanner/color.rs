//! Color argument grammar.
//!
//! After a color byte: up to two digits of foreground, then optionally a
//! comma followed by one or two digits of background. A comma that is not
//! followed by a digit is left in the stream as a literal.

/// Parsed arguments of one color sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct ColorArgs {
    pub fg: Option<u8>,
    pub bg: Option<u8>,
    /// Bytes of argument text consumed after the color byte.
    pub consumed: usize,
}

/// Parse the arguments following a color byte.
///
/// Running out of input is treated as "no digit present".
pub(crate) fn parse_color_args(rest: &str) -> ColorArgs {
    let bytes = rest.as_bytes();
    let mut pos = 0;

    let fg = take_number(bytes, &mut pos);

    let bg = if bytes.get(pos) == Some(&b',') && bytes.get(pos + 1).is_some_and(u8::is_ascii_digit)
    {
        pos += 1;
        take_number(bytes, &mut pos)
    } else {
        None
    };

    ColorArgs {
        fg,
        bg,
        consumed: pos,
    }
}

/// Consume one or two ASCII digits starting at `pos`.
fn take_number(bytes: &[u8], pos: &mut usize) -> Option<u8> {
    let first = *bytes.get(*pos).filter(|b| b.is_ascii_digit())?;
    *pos += 1;
    let mut value = first - b'0';
    if let Some(second) = bytes.get(*pos).filter(|b| b.is_ascii_digit()) {
        *pos += 1;
        value = value * 10 + (second - b'0');
    }
    Some(value)
}
