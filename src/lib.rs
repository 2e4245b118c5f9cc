//! mdmedia library
//!
//! Reads file paths from the system clipboard, copies the files into a
//! `media` folder next to the active note and inserts markdown links for them.

pub mod clipboard;
pub mod config;
pub mod editor;
pub mod files;
pub mod import;
pub mod markdown;
pub mod vault;

pub use clipboard::read_clipboard_paths;
pub use config::Config;
pub use editor::{CursorPosition, Editor, NoteBuffer};
pub use import::{import_and_link, ErrorPolicy, ImportOptions, ImportReport};
pub use vault::{resolve_destination, FsVault, VaultContext};
