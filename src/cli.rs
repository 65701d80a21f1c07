//! CLI definitions for ircflow
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so the command handlers and tests can share them.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Build clap styles for a consistent CLI appearance.
///
/// - Green: headers, usage, command names
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "ircflow")]
#[command(about = "Wrap, hit-test and select mIRC-formatted text")]
#[command(
    long_about = "ircflow - reflow and selection for IRC attributed text.

Lines are read from a file (or stdin with '-') and may contain mIRC control
codes: ^B bold, ^C color, ^O reset and ^_ underline. Lines are wrapped to a
pixel width using a monospace measurer configured in
~/.config/ircflow/config.toml.

QUICK START:
    ircflow strip log.txt                        Print lines without control codes
    ircflow wrap log.txt --width 560             Show how lines wrap at 560px
    ircflow hit log.txt --x 30 --y 20            Show the character at a point
    ircflow select log.txt --from 0,0 --to 90,30 Print the text of a drag

Set IRCFLOW_LOG=debug to trace reflow decisions on stderr."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Use this config file instead of ~/.config/ircflow/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Input file plus viewport width, shared by the layout commands.
#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    /// Input file, or '-' for stdin
    #[arg(help = "Input file with one attributed line per line ('-' for stdin)")]
    pub file: String,
    /// Viewport width in pixels
    #[arg(
        long,
        short,
        help = "Viewport width in pixels (defaults to config or terminal width)"
    )]
    pub width: Option<u32>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show how lines wrap at a width
    #[command(long_about = "Break every input line into sublines and print them.

Continuation sublines are marked with '+'. With --json the full subline
records are printed, including the style in effect at each subline start
and whether a break space was consumed.

EXAMPLES:
    ircflow wrap log.txt --width 560
    cat log.txt | ircflow wrap - --width 300 --json")]
    Wrap {
        #[command(flatten)]
        layout: LayoutArgs,
        /// Print sublines as JSON
        #[arg(long, help = "Print sublines as JSON")]
        json: bool,
    },

    /// Print lines with control codes removed
    #[command(long_about = "Remove all mIRC control codes, including color arguments,
and print the literal text of each line.

EXAMPLE:
    ircflow strip log.txt")]
    Strip {
        /// Input file, or '-' for stdin
        #[arg(help = "Input file ('-' for stdin)")]
        file: String,
    },

    /// Show the character under a pixel position
    #[command(long_about = "Wrap the input and report which subline and character
index lie under the given point. Points past the end of a row report the
end-of-row index.

EXAMPLE:
    ircflow hit log.txt --x 30 --y 20 --width 560")]
    Hit {
        #[command(flatten)]
        layout: LayoutArgs,
        /// Horizontal position in pixels
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        /// Vertical position in pixels
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },

    /// Print the text covered by a drag
    #[command(long_about = "Simulate pressing at one point and releasing at another,
then print the selected text. Break spaces and line breaks are restored.

The text is also placed on the clipboard with --copy, or when
clipboard.copy_on_release is set and stdout is a terminal.

EXAMPLES:
    ircflow select log.txt --from 0,0 --to 90,30
    ircflow select log.txt --from 0,0 --to 90,30 --width 300 --copy")]
    Select {
        #[command(flatten)]
        layout: LayoutArgs,
        /// Press position as X,Y
        #[arg(long, value_name = "X,Y", value_parser = parse_point, allow_hyphen_values = true)]
        from: (f64, f64),
        /// Release position as X,Y
        #[arg(long, value_name = "X,Y", value_parser = parse_point, allow_hyphen_values = true)]
        to: (f64, f64),
        /// Copy the selection to the clipboard
        #[arg(long, conflicts_with = "no_copy")]
        copy: bool,
        /// Never copy, even when the config asks for it
        #[arg(long)]
        no_copy: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    #[command(long_about = "View the ircflow configuration.

Configuration is stored in ~/.config/ircflow/config.toml and covers the
viewport, the line breaker, glyph measurement and the clipboard.

EXAMPLE:
    ircflow config show")]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    #[command(long_about = "Display the effective configuration in TOML format,
with defaults filled in for anything the file leaves out.

EXAMPLE:
    ircflow config show")]
    Show,
    /// Print the config file location
    Path,
}

/// Parse an `X,Y` pixel position.
pub fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", s))?;
    let x = x
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid X '{}': {}", x, e))?;
    let y = y
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid Y '{}': {}", y, e))?;
    Ok((x, y))
}
