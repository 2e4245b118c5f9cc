//! Clipboard path reading.
//!
//! Extracts the absolute paths of files copied in the OS file manager. Only
//! macOS is supported: its pasteboard exposes copied files as a property list
//! under `NSFilenamesPboardType`. On every other platform the reader is an
//! explicit stub that reports no paths.
//!
//! # Example
//!
//! ```ignore
//! use mdmedia::clipboard::read_clipboard_paths;
//!
//! for path in read_clipboard_paths() {
//!     println!("{}", path);
//! }
//! ```

mod error;
pub mod plist;
pub mod reader;
pub mod tools;

pub use error::ClipboardError;
pub use reader::PlatformPaths;

use tools::platform_reader;

/// Read file paths from the system clipboard.
///
/// Never fails: a missing clipboard entry, an unsupported platform or a
/// failing pasteboard tool all yield an empty list, which callers treat as
/// "nothing to do".
pub fn read_clipboard_paths() -> Vec<String> {
    paths_from(platform_reader().as_ref())
}

/// Read file paths through a specific reader.
pub fn paths_from(reader: &dyn PlatformPaths) -> Vec<String> {
    match reader.read_paths() {
        Ok(paths) => {
            tracing::debug!(
                reader = reader.name(),
                count = paths.len(),
                "read clipboard paths"
            );
            paths
        }
        Err(e) => {
            tracing::debug!(reader = reader.name(), error = %e, "clipboard read failed");
            Vec::new()
        }
    }
}
