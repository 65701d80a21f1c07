//! Hit command handler

use anyhow::Result;

use ircflow::{CharHit, Config};

use super::{build_view, read_lines};
use crate::cli::LayoutArgs;

/// Report the character under `(x, y)` after wrapping the input.
pub fn handle(config: &Config, layout: &LayoutArgs, x: f64, y: f64) -> Result<()> {
    let lines = read_lines(&layout.file)?;
    let view = build_view(config, lines, layout.width);
    println!("{}", describe(view.hit_test(x, y), x, y));
    Ok(())
}

pub fn describe(hit: Option<CharHit>, x: f64, y: f64) -> String {
    match hit {
        Some(CharHit {
            subline,
            index,
            ch: Some(ch),
        }) => format!("subline {} index {} {:?}", subline, index, ch),
        Some(CharHit {
            subline,
            index,
            ch: None,
        }) => format!("subline {} index {} (end of row)", subline, index),
        None => format!("no subline at ({}, {})", x, y),
    }
}
