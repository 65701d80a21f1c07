//! Wrap command handler

use anyhow::Result;

use ircflow::{Config, Subline};

use super::{build_view, read_lines};
use crate::cli::LayoutArgs;

/// Print the sublines of every input line at the resolved width.
pub fn handle(config: &Config, layout: &LayoutArgs, json: bool) -> Result<()> {
    let lines = read_lines(&layout.file)?;
    let view = build_view(config, lines, layout.width);
    if json {
        println!("{}", serde_json::to_string_pretty(view.sublines())?);
    } else {
        for row in format_sublines(view.sublines()) {
            println!("{}", row);
        }
    }
    Ok(())
}

/// One row per subline: index, `|` or `+` for continuations, literal text.
pub fn format_sublines(sublines: &[Subline]) -> Vec<String> {
    sublines
        .iter()
        .enumerate()
        .map(|(i, subline)| {
            let marker = if subline.first_subline { '|' } else { '+' };
            let text = subline.literal_text();
            let mut row = format!("{:>4} {}", i, marker);
            if !text.is_empty() {
                row.push(' ');
                row.push_str(&text);
            }
            row
        })
        .collect()
}
