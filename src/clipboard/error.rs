//! Clipboard read errors.

/// Errors a platform reader can hit while fetching raw clipboard data.
///
/// These never escape [`crate::clipboard::read_clipboard_paths`]; they are
/// logged and turned into an empty path list.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard tool not found: {tool}")]
    ToolNotFound { tool: &'static str },

    #[error("Clipboard tool {tool} failed: {message}")]
    ToolFailed { tool: &'static str, message: String },

    #[error("Clipboard data is not valid UTF-8")]
    InvalidUtf8,

    #[error("Reading file paths from the clipboard is only supported on macOS")]
    UnsupportedPlatform,

    #[error("Failed to run clipboard tool: {0}")]
    Io(#[from] std::io::Error),
}
