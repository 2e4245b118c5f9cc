//! Copying with a caller-decided overwrite policy.
//!
//! Missing destinations are always written. When the destination already
//! exists, the overwrite predicate receives the source and destination
//! metadata and decides; a `false` answer leaves the destination untouched
//! and counts the file as skipped. Directories are copied recursively with
//! the predicate applied to each file.

use std::fs::{self, Metadata};
use std::path::Path;

use super::error::CopyError;

/// What a copy did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyOutcome {
    /// Files written to the destination.
    pub copied: usize,
    /// Files left untouched because the predicate declined.
    pub skipped: usize,
    /// Bytes written.
    pub bytes: u64,
}

impl CopyOutcome {
    fn copied(bytes: u64) -> Self {
        Self {
            copied: 1,
            skipped: 0,
            bytes,
        }
    }

    fn skipped() -> Self {
        Self {
            copied: 0,
            skipped: 1,
            bytes: 0,
        }
    }

    fn merge(&mut self, other: CopyOutcome) {
        self.copied += other.copied;
        self.skipped += other.skipped;
        self.bytes += other.bytes;
    }

    /// True when nothing was written and at least one file was kept.
    pub fn is_skipped(&self) -> bool {
        self.copied == 0 && self.skipped > 0
    }
}

/// Overwrite only when the source was modified strictly later.
///
/// Returns `false` if either timestamp is unavailable.
pub fn source_is_newer(src: &Metadata, dest: &Metadata) -> bool {
    match (src.modified(), dest.modified()) {
        (Ok(src_time), Ok(dest_time)) => src_time > dest_time,
        _ => false,
    }
}

/// Copy `src` to `dest`, replacing an existing file only if `src` is newer.
pub fn copy_if_newer(src: &Path, dest: &Path) -> Result<CopyOutcome, CopyError> {
    copy_with_policy(src, dest, &source_is_newer)
}

/// Copy `src` (file or directory) to `dest`.
///
/// Parent directories of `dest` are created as needed.
pub fn copy_with_policy(
    src: &Path,
    dest: &Path,
    overwrite: &dyn Fn(&Metadata, &Metadata) -> bool,
) -> Result<CopyOutcome, CopyError> {
    let src_meta = match fs::metadata(src) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(CopyError::SourceNotFound {
                path: src.to_path_buf(),
            })
        }
        Err(e) => return Err(CopyError::io("read metadata of", src, e)),
    };

    if src_meta.is_dir() {
        copy_dir(src, dest, overwrite)
    } else {
        copy_file(src, &src_meta, dest, overwrite)
    }
}

fn copy_file(
    src: &Path,
    src_meta: &Metadata,
    dest: &Path,
    overwrite: &dyn Fn(&Metadata, &Metadata) -> bool,
) -> Result<CopyOutcome, CopyError> {
    match fs::metadata(dest) {
        Ok(dest_meta) if dest_meta.is_dir() => {
            return Err(CopyError::DestinationIsDirectory {
                path: dest.to_path_buf(),
            })
        }
        Ok(dest_meta) => {
            if !overwrite(src_meta, &dest_meta) {
                tracing::debug!(
                    src = %src.display(),
                    dest = %dest.display(),
                    "destination is up to date, skipping"
                );
                return Ok(CopyOutcome::skipped());
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(CopyError::io("read metadata of", dest, e)),
    }

    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CopyError::io("create directory", parent, e))?;
    }

    let bytes = fs::copy(src, dest).map_err(|e| CopyError::io("copy to", dest, e))?;
    tracing::info!(src = %src.display(), dest = %dest.display(), bytes, "copied");
    Ok(CopyOutcome::copied(bytes))
}

fn copy_dir(
    src: &Path,
    dest: &Path,
    overwrite: &dyn Fn(&Metadata, &Metadata) -> bool,
) -> Result<CopyOutcome, CopyError> {
    let src_abs = fs::canonicalize(src).map_err(|e| CopyError::io("resolve", src, e))?;
    if let Some(dest_abs) = canonical_prefix(dest) {
        if dest_abs.starts_with(&src_abs) {
            return Err(CopyError::CopyIntoItself {
                src: src.to_path_buf(),
                dest: dest.to_path_buf(),
            });
        }
    }

    if dest.is_file() {
        return Err(CopyError::io(
            "create directory",
            dest,
            std::io::Error::new(std::io::ErrorKind::AlreadyExists, "a file with that name exists"),
        ));
    }
    fs::create_dir_all(dest).map_err(|e| CopyError::io("create directory", dest, e))?;

    let mut entries: Vec<_> = fs::read_dir(src)
        .map_err(|e| CopyError::io("read directory", src, e))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CopyError::io("read directory", src, e))?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut outcome = CopyOutcome::default();
    for entry in entries {
        let child_src = entry.path();
        let child_dest = dest.join(entry.file_name());
        outcome.merge(copy_with_policy(&child_src, &child_dest, overwrite)?);
    }
    Ok(outcome)
}

/// Canonicalize the longest existing ancestor of `path`, re-appending the rest.
fn canonical_prefix(path: &Path) -> Option<std::path::PathBuf> {
    let mut existing = path;
    let mut rest = Vec::new();
    loop {
        if let Ok(canonical) = fs::canonicalize(existing) {
            return Some(rest.iter().rev().fold(canonical, |acc, part| acc.join(part)));
        }
        rest.push(existing.file_name()?.to_os_string());
        existing = existing.parent()?;
    }
}
