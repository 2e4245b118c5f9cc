//! Paths command handler

use anyhow::Result;

use mdmedia::read_clipboard_paths;

/// Print the clipboard's file paths, one per line.
pub fn handle() -> Result<()> {
    let paths = read_clipboard_paths();
    if paths.is_empty() {
        eprintln!("No file paths on the clipboard.");
        if !cfg!(target_os = "macos") {
            eprintln!("Reading copied files is only supported on macOS.");
        }
        return Ok(());
    }
    for path in paths {
        println!("{}", path);
    }
    Ok(())
}
