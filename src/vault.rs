//! Vault context and media folder resolution.
//!
//! The media folder for a note is `<vault-root>/<note-folder>/media`, where
//! `<note-folder>` is the note's parent folder relative to the vault root.

use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

/// Name of the folder media files are copied into.
pub const MEDIA_FOLDER: &str = "media";

/// Directory marking the root of an Obsidian vault.
pub const VAULT_MARKER: &str = ".obsidian";

/// What the host knows about the vault and the active document.
pub trait VaultContext {
    /// Absolute path of the vault root.
    fn root_path(&self) -> PathBuf;

    /// Vault-relative folder of the active document (`/` for the root),
    /// `None` when no document is active.
    fn active_document_folder(&self) -> Option<String>;
}

#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    #[error("No active document: cannot decide where to put media files")]
    NoActiveDocument,

    #[error("Note {note} is not inside vault {vault}")]
    NoteOutsideVault { note: PathBuf, vault: PathBuf },
}

/// Normalize separators: backslashes become `/`, repeated slashes collapse
/// and a trailing slash is dropped. A leading slash is kept.
///
/// Windows verbatim prefixes (`\\?\C:\`, `\\?\UNC\server\share`) as
/// returned by `fs::canonicalize` are removed, and a UNC root keeps its
/// leading `//`.
pub fn normalize_path(path: &str) -> String {
    let path = strip_verbatim_prefix(path);
    let unc = is_unc_root(&path);

    let mut out = String::with_capacity(path.len() + 1);
    if unc {
        out.push('/');
    }
    for c in path.chars() {
        let c = if c == '\\' { '/' } else { c };
        if c == '/' && out.ends_with('/') && !(unc && out == "/") {
            continue;
        }
        out.push(c);
    }
    if out.len() > 1 && out.ends_with('/') {
        out.pop();
    }
    out
}

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// `\\server\share`: exactly two separators, then a host name.
fn is_unc_root(path: &str) -> bool {
    let mut chars = path.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(a), Some(b), Some(c)) if is_separator(a) && is_separator(b) && !is_separator(c)
    )
}

fn strip_verbatim_prefix(path: &str) -> Cow<'_, str> {
    let rest = match path
        .strip_prefix(r"\\?\")
        .or_else(|| path.strip_prefix("//?/"))
    {
        Some(rest) => rest,
        None => return Cow::Borrowed(path),
    };
    match rest
        .strip_prefix(r"UNC\")
        .or_else(|| rest.strip_prefix("UNC/"))
    {
        Some(share) => Cow::Owned(format!("//{}", share)),
        None => Cow::Borrowed(rest),
    }
}

/// Compute the media folder for the active document.
pub fn resolve_destination(ctx: &dyn VaultContext) -> Result<PathBuf, VaultError> {
    let folder = ctx
        .active_document_folder()
        .ok_or(VaultError::NoActiveDocument)?;
    let root = ctx.root_path();
    let joined = format!("{}/{}/{}", root.to_string_lossy(), folder, MEDIA_FOLDER);
    Ok(PathBuf::from(normalize_path(&joined)))
}

/// Find the nearest ancestor of `note` containing a `.obsidian` directory.
pub fn find_vault_root(note: &Path) -> Option<PathBuf> {
    note.ancestors()
        .skip(1)
        .find(|dir| dir.join(VAULT_MARKER).is_dir())
        .map(Path::to_path_buf)
}

/// A vault on the local file system with an optional active note.
#[derive(Debug, Clone)]
pub struct FsVault {
    root: PathBuf,
    active_folder: Option<String>,
}

impl FsVault {
    /// A vault with no active document.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            active_folder: None,
        }
    }

    /// A vault whose active document is `note`.
    ///
    /// Both paths are compared as given, so callers should pass them in the
    /// same form (typically canonicalized).
    pub fn with_active_note(root: impl Into<PathBuf>, note: &Path) -> Result<Self, VaultError> {
        let root = root.into();
        let parent = note.parent().unwrap_or_else(|| Path::new(""));
        let relative = parent
            .strip_prefix(&root)
            .map_err(|_| VaultError::NoteOutsideVault {
                note: note.to_path_buf(),
                vault: root.clone(),
            })?;

        Ok(Self {
            active_folder: Some(vault_relative(relative)),
            root,
        })
    }
}

fn vault_relative(relative: &Path) -> String {
    let parts: Vec<_> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        "/".to_string()
    } else {
        parts.join("/")
    }
}

impl VaultContext for FsVault {
    fn root_path(&self) -> PathBuf {
        self.root.clone()
    }

    fn active_document_folder(&self) -> Option<String> {
        self.active_folder.clone()
    }
}
