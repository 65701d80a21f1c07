//! Platform clipboard tools.

mod osascript;
mod wl_copy;
mod xclip;

pub use osascript::OsaScript;
pub use wl_copy::WlCopy;
pub use xclip::Xclip;

use super::tool::{CopyTool, CopyToolError};
use std::io::Write;
use std::process::{Command, Stdio};

/// Tools for the current platform in priority order.
pub fn platform_tools() -> Vec<Box<dyn CopyTool>> {
    if cfg!(target_os = "macos") {
        vec![Box::new(OsaScript::new())]
    } else if cfg!(target_os = "linux") {
        vec![Box::new(WlCopy::new()), Box::new(Xclip::new())]
    } else {
        Vec::new()
    }
}

/// Check if a program is on the PATH.
pub(crate) fn tool_exists(program: &str) -> bool {
    Command::new("which")
        .arg(program)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Run `program` with `text` on its stdin.
pub(crate) fn pipe_text(program: &str, args: &[&str], text: &str) -> Result<(), CopyToolError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| CopyToolError::Failed(e.to_string()))?;

    if let Some(stdin) = child.stdin.as_mut() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| CopyToolError::Failed(e.to_string()))?;
    }

    let status = child
        .wait()
        .map_err(|e| CopyToolError::Failed(e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(CopyToolError::Failed(format!("{} failed", program)))
    }
}
