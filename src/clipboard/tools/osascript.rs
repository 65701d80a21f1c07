//! macOS AppleScript clipboard tool.

use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{CopyTool, CopyToolError};
use std::process::Command;

/// macOS AppleScript clipboard tool.
///
/// Uses `osascript` to set the clipboard to a string literal.
pub struct OsaScript;

impl OsaScript {
    /// Create a new OsaScript tool.
    pub fn new() -> Self {
        Self
    }

    /// Escape text for use in an AppleScript string literal.
    ///
    /// Backslashes and double quotes are escaped; newlines, carriage
    /// returns and tabs become escape sequences so the script stays on
    /// one line.
    pub fn escape_text(text: &str) -> String {
        text.replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    /// Build the AppleScript command for a text copy.
    pub fn build_text_script(text: &str) -> String {
        format!("set the clipboard to \"{}\"", Self::escape_text(text))
    }

    /// Run an AppleScript.
    fn run_script(script: &str) -> Result<(), CopyToolError> {
        let output = Command::new("osascript")
            .args(["-e", script])
            .output()
            .map_err(|e| CopyToolError::Failed(e.to_string()))?;

        if output.status.success() {
            Ok(())
        } else {
            Err(CopyToolError::Failed(
                String::from_utf8_lossy(&output.stderr).to_string(),
            ))
        }
    }
}

impl CopyTool for OsaScript {
    fn method(&self) -> CopyMethod {
        CopyMethod::OsaScript
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        Self::run_script(&Self::build_text_script(text))
    }
}

impl Default for OsaScript {
    fn default() -> Self {
        Self::new()
    }
}
