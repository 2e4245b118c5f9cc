//! Platform clipboard readers.

pub mod pasteboard;
pub mod unsupported;

pub use pasteboard::MacPasteboard;
pub use unsupported::Unsupported;

use super::reader::PlatformPaths;

/// Select the reader for the current platform.
pub fn platform_reader() -> Box<dyn PlatformPaths> {
    if cfg!(target_os = "macos") {
        Box::new(MacPasteboard::new())
    } else {
        Box::new(Unsupported)
    }
}
