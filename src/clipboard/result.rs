//! Clipboard copy results.

/// The tool that performed a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    OsaScript,
    WlCopy,
    Xclip,
}

impl CopyMethod {
    pub fn name(&self) -> &'static str {
        match self {
            Self::OsaScript => "osascript",
            Self::WlCopy => "wl-copy",
            Self::Xclip => "xclip",
        }
    }
}

/// Outcome of a successful copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyResult {
    pub method: CopyMethod,
    /// Bytes copied.
    pub size: usize,
}

impl CopyResult {
    pub fn new(method: CopyMethod, size: usize) -> Self {
        Self { method, size }
    }

    /// Human-readable confirmation.
    pub fn message(&self) -> String {
        let chars = if self.size == 1 { "byte" } else { "bytes" };
        format!(
            "Copied {} {} to the clipboard (via {})",
            self.size,
            chars,
            self.method.name()
        )
    }
}
