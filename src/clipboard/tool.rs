//! Clipboard tool abstraction.

use super::result::CopyMethod;

/// Failure of a single tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyToolError {
    /// The tool binary is not installed.
    NotFound,
    /// The tool cannot copy this kind of content.
    NotSupported,
    /// The tool ran and failed.
    Failed(String),
}

/// An external program able to place text on the clipboard.
pub trait CopyTool {
    fn method(&self) -> CopyMethod;

    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Whether the tool can run on this machine.
    fn is_available(&self) -> bool;

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError>;
}
