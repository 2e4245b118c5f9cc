//! Unit tests for media folder resolution

use std::path::{Path, PathBuf};

use mdmedia::vault::{normalize_path, VaultError};
use mdmedia::{resolve_destination, FsVault};

#[test]
fn media_folder_for_nested_note() {
    let vault = FsVault::with_active_note("/vault", Path::new("/vault/Doc Folder/note.md")).unwrap();
    assert_eq!(
        resolve_destination(&vault).unwrap(),
        PathBuf::from("/vault/Doc Folder/media")
    );
}

#[test]
fn media_folder_for_root_note() {
    let vault = FsVault::with_active_note("/vault", Path::new("/vault/note.md")).unwrap();
    assert_eq!(resolve_destination(&vault).unwrap(), PathBuf::from("/vault/media"));
}

#[test]
fn vault_root_with_trailing_slash() {
    let vault = FsVault::with_active_note("/vault/", Path::new("/vault/a/b.md")).unwrap();
    assert_eq!(resolve_destination(&vault).unwrap(), PathBuf::from("/vault/a/media"));
}

#[test]
fn no_active_note_fails_clearly() {
    let err = resolve_destination(&FsVault::new("/vault")).unwrap_err();
    assert!(matches!(err, VaultError::NoActiveDocument));
    assert!(err.to_string().contains("No active document"));
}

#[test]
fn normalize_handles_mixed_separators() {
    assert_eq!(normalize_path(r"/vault\\notes//media"), "/vault/notes/media");
}
