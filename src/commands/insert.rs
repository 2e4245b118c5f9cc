//! Insert command handler (`insert-media-markdown`)

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use mdmedia::editor::{CursorPosition, NoteBuffer};
use mdmedia::vault::find_vault_root;
use mdmedia::{
    import_and_link, read_clipboard_paths, resolve_destination, Config, ErrorPolicy, FsVault,
    ImportOptions,
};

use crate::cli::InsertArgs;

/// Copy clipboard files into the note's media folder and link them.
///
/// The note is read once, all links are inserted into the in-memory buffer
/// and the result is written back in one go.
pub fn handle(args: &InsertArgs) -> Result<()> {
    let config = Config::load()?;

    let note = fs::canonicalize(&args.note)
        .with_context(|| format!("Note not found: {}", args.note.display()))?;
    let vault_root = vault_root_for(&note, args.vault.as_deref())?;
    let vault = FsVault::with_active_note(vault_root, &note)?;
    let destination = resolve_destination(&vault)?;

    let paths = if args.paths.is_empty() {
        read_clipboard_paths()
    } else {
        args.paths.clone()
    };
    if paths.is_empty() {
        println!("No files on the clipboard. Nothing to insert.");
        return Ok(());
    }
    tracing::info!(count = paths.len(), destination = %destination.display(), "importing");

    let text = fs::read_to_string(&note)
        .with_context(|| format!("Failed to read note: {}", note.display()))?;
    let mut buffer = NoteBuffer::with_cursor_at_end(text);
    if let (Some(line), Some(ch)) = (args.line, args.ch) {
        buffer.set_cursor(CursorPosition::new(line, ch));
    }

    let options = ImportOptions {
        on_error: if args.fail_fast {
            ErrorPolicy::Abort
        } else {
            ErrorPolicy::Continue
        },
        dry_run: args.dry_run,
    };
    let report = import_and_link(&paths, &destination, &mut buffer, config.width(), &options);

    if args.dry_run {
        for file in &report.imported {
            println!("{} -> {}", file.source, file.destination.display());
        }
        println!();
        for file in &report.imported {
            print!("{}", file.markdown);
        }
    } else if !report.imported.is_empty() {
        fs::write(&note, buffer.text())
            .with_context(|| format!("Failed to write note: {}", note.display()))?;
    }

    for failed in &report.failed {
        eprintln!("Error: {}", failed.error);
    }
    if !args.dry_run {
        println!("{}", report);
    }

    if report.has_failures() {
        anyhow::bail!("{} file(s) could not be imported", report.failed.len());
    }
    Ok(())
}

/// Pick the vault root: explicit flag, then `.obsidian` discovery, then the
/// note's own folder.
fn vault_root_for(note: &Path, explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(vault) = explicit {
        return fs::canonicalize(vault)
            .with_context(|| format!("Vault not found: {}", vault.display()));
    }
    if let Some(root) = find_vault_root(note) {
        return Ok(root);
    }
    note.parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("Note has no parent folder: {}", note.display()))
}
