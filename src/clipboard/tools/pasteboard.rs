//! macOS pasteboard reader.

use crate::clipboard::error::ClipboardError;
use crate::clipboard::reader::PlatformPaths;
use std::io::ErrorKind;
use std::process::Command;

/// Pasteboard type under which Finder publishes copied files.
pub const FILENAMES_TYPE: &str = "NSFilenamesPboardType";

/// Reads `NSFilenamesPboardType` from the general pasteboard.
///
/// Runs a JavaScript for Automation snippet through `osascript`, which
/// prints the entry as property-list XML (or nothing when absent).
pub struct MacPasteboard;

impl MacPasteboard {
    /// Create a new pasteboard reader.
    pub fn new() -> Self {
        Self
    }

    /// Build the JXA script that prints the raw pasteboard entry.
    pub fn build_read_script() -> String {
        format!(
            "ObjC.import('AppKit');\n\
             var s = $.NSPasteboard.generalPasteboard.stringForType('{}');\n\
             s.isNil() ? '' : ObjC.unwrap(s);",
            FILENAMES_TYPE
        )
    }

    fn run_script(script: &str) -> Result<String, ClipboardError> {
        let output = Command::new("osascript")
            .args(["-l", "JavaScript", "-e", script])
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ClipboardError::ToolNotFound { tool: "osascript" },
                _ => ClipboardError::Io(e),
            })?;

        if !output.status.success() {
            return Err(ClipboardError::ToolFailed {
                tool: "osascript",
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| ClipboardError::InvalidUtf8)
    }
}

impl PlatformPaths for MacPasteboard {
    fn name(&self) -> &'static str {
        "pasteboard"
    }

    fn read_raw(&self) -> Result<Option<String>, ClipboardError> {
        let raw = Self::run_script(&Self::build_read_script())?;
        if raw.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(raw))
        }
    }
}

impl Default for MacPasteboard {
    fn default() -> Self {
        Self::new()
    }
}
