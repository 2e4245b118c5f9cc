//! Decomposition of a source path into its name parts.

use std::path::Path;

/// The parts of a source path used for copying and link text.
///
/// `ext` keeps its leading dot (`".png"`) and is empty when the name has no
/// extension. `stem` is the base name without `ext`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPath {
    pub dir: String,
    pub base: String,
    pub ext: String,
    pub stem: String,
}

impl ParsedPath {
    pub fn parse(path: &str) -> Self {
        let p = Path::new(path);
        let lossy = |s: Option<&std::ffi::OsStr>| {
            s.map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        };

        Self {
            dir: lossy(p.parent().map(|d| d.as_os_str())),
            base: lossy(p.file_name()),
            ext: p
                .extension()
                .map(|e| format!(".{}", e.to_string_lossy()))
                .unwrap_or_default(),
            stem: lossy(p.file_stem()),
        }
    }
}
