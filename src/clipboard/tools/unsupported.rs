//! Reader for platforms without clipboard file-list support.

use crate::clipboard::error::ClipboardError;
use crate::clipboard::reader::PlatformPaths;

/// Stub reader that never finds any paths.
///
/// Windows exposes copied files as `CF_HDROP`, Linux desktops as a
/// `text/uri-list` target. Neither is parsed.
pub struct Unsupported;

impl PlatformPaths for Unsupported {
    fn name(&self) -> &'static str {
        "unsupported"
    }

    fn read_raw(&self) -> Result<Option<String>, ClipboardError> {
        Ok(None)
    }
}
