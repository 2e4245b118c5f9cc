//! Platform reader trait.

use super::error::ClipboardError;
use super::plist::extract_filenames;

/// A platform-specific source of copied file paths.
///
/// Implementations only fetch the raw clipboard entry; parsing is shared.
pub trait PlatformPaths {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Fetch the raw file-list entry from the clipboard.
    ///
    /// `Ok(None)` means the clipboard holds no file list.
    fn read_raw(&self) -> Result<Option<String>, ClipboardError>;

    /// Read and parse the clipboard file list.
    fn read_paths(&self) -> Result<Vec<String>, ClipboardError> {
        Ok(self
            .read_raw()?
            .map(|raw| extract_filenames(&raw))
            .unwrap_or_default())
    }
}
