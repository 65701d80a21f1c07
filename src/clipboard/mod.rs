//! Clipboard support for selected text.
//!
//! The view hands the selection text to this module when a drag ends.
//! Text is piped to the first available platform tool: `osascript` on
//! macOS, `wl-copy` or `xclip` on Linux.
//!
//! # Example
//!
//! ```ignore
//! use ircflow::clipboard::copy_text_to_clipboard;
//!
//! let result = copy_text_to_clipboard("selected text")?;
//! println!("{}", result.message());
//! ```

pub mod copy;
mod error;
mod result;
pub mod tool;
pub mod tools;

pub use error::ClipboardError;
pub use result::{CopyMethod, CopyResult};

use copy::Copy;

/// Copy text to the system clipboard.
///
/// # Errors
/// - `ClipboardError::EmptyText` - nothing to copy
/// - `ClipboardError::TextTooLarge` - text exceeds the size limit
/// - `ClipboardError::NoToolAvailable` - no clipboard tool found
/// - `ClipboardError::UnsupportedPlatform` - neither macOS nor Linux
pub fn copy_text_to_clipboard(text: &str) -> Result<CopyResult, ClipboardError> {
    if !cfg!(any(target_os = "macos", target_os = "linux")) {
        return Err(ClipboardError::UnsupportedPlatform);
    }
    Copy::new().text(text)
}
