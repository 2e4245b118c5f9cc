//! File copy errors.

use std::path::PathBuf;

/// Errors that can occur while copying a source into the media folder.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    #[error("Source not found: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("Source has no file name: {path}")]
    NoFileName { path: PathBuf },

    #[error("Destination is a directory: {path}")]
    DestinationIsDirectory { path: PathBuf },

    #[error("Cannot copy directory {src} into itself ({dest})")]
    CopyIntoItself { src: PathBuf, dest: PathBuf },

    #[error("Failed to {action} {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CopyError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
