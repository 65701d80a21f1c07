//! Select command handler

use anyhow::Result;
use std::io::{self, IsTerminal};
use tracing::warn;

use ircflow::clipboard::copy_text_to_clipboard;
use ircflow::Config;

use super::{build_view, read_lines};
use crate::cli::LayoutArgs;

/// Clipboard behaviour requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMode {
    /// `--copy`: copy and fail loudly if no tool works.
    Always,
    /// `--no-copy`.
    Never,
    /// Follow `clipboard.copy_on_release` when stdout is a terminal.
    Config,
}

impl CopyMode {
    pub fn from_flags(copy: bool, no_copy: bool) -> Self {
        match (copy, no_copy) {
            (true, _) => Self::Always,
            (_, true) => Self::Never,
            _ => Self::Config,
        }
    }

    fn should_copy(self, config: &Config, interactive: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Config => config.clipboard.copy_on_release && interactive,
        }
    }
}

/// Press at `from`, release at `to`, and print the selected text.
pub fn handle(
    config: &Config,
    layout: &LayoutArgs,
    from: (f64, f64),
    to: (f64, f64),
    mode: CopyMode,
) -> Result<()> {
    let lines = read_lines(&layout.file)?;
    let mut view = build_view(config, lines, layout.width);

    view.press(from.0, from.1);
    view.motion(to.0, to.1);
    let Some(text) = view.release(to.0, to.1) else {
        eprintln!("Nothing selected");
        return Ok(());
    };

    println!("{}", text);

    if mode.should_copy(config, io::stdout().is_terminal()) {
        match copy_text_to_clipboard(&text) {
            Ok(result) => eprintln!("{}", result.message()),
            Err(e) if mode == CopyMode::Always => return Err(e.into()),
            Err(e) => warn!(error = %e, "selection not copied"),
        }
    }
    Ok(())
}
