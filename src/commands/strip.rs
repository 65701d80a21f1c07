//! Strip command handler

use anyhow::Result;

use super::read_lines;

/// Print each input line with its control codes removed.
pub fn handle(file: &str) -> Result<()> {
    for line in read_lines(file)? {
        println!("{}", ircflow::strip(&line));
    }
    Ok(())
}
