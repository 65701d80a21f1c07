//! Clipboard operation errors.

/// Maximum text size handed to a clipboard tool (10 MB).
pub const MAX_CONTENT_SIZE: usize = 10 * 1024 * 1024;

/// Errors that can occur during clipboard operations.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Nothing to copy")]
    EmptyText,

    #[error("No clipboard tool available. On Linux, install xclip or wl-copy.")]
    NoToolAvailable,

    #[error("Text too large for clipboard ({size_mb:.1} MB). Maximum is {max_mb} MB.")]
    TextTooLarge { size_mb: f64, max_mb: usize },

    #[error("Platform not supported (only macOS and Linux)")]
    UnsupportedPlatform,
}
