//! Unit tests for clipboard path reading

use mdmedia::clipboard::plist::extract_filenames;
use mdmedia::clipboard::tools::{MacPasteboard, Unsupported};
use mdmedia::clipboard::{paths_from, ClipboardError, PlatformPaths};

/// Reader returning a fixed raw pasteboard entry.
struct StubReader(Option<&'static str>);

impl PlatformPaths for StubReader {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn read_raw(&self) -> Result<Option<String>, ClipboardError> {
        Ok(self.0.map(str::to_string))
    }
}

/// Reader whose tool always fails.
struct BrokenReader;

impl PlatformPaths for BrokenReader {
    fn name(&self) -> &'static str {
        "broken"
    }

    fn read_raw(&self) -> Result<Option<String>, ClipboardError> {
        Err(ClipboardError::ToolFailed {
            tool: "osascript",
            message: "execution error".to_string(),
        })
    }
}

fn plist_with(paths: &[&str]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<plist version=\"1.0\">\n<array>\n",
    );
    for path in paths {
        xml.push_str(&format!("\t<string>{}</string>\n", path));
    }
    xml.push_str("</array>\n</plist>\n");
    xml
}

#[test]
fn n_string_tags_yield_n_paths_in_order() {
    for n in 0..5 {
        let paths: Vec<String> = (0..n).map(|i| format!("/Users/a/file{}.png", i)).collect();
        let refs: Vec<&str> = paths.iter().map(String::as_str).collect();
        assert_eq!(extract_filenames(&plist_with(&refs)), paths);
    }
}

#[test]
fn stub_reader_paths_are_parsed() {
    let raw = "<array>\n<string>/Users/a/photo.png</string>\n<string>/Users/a/notes.pdf</string>\n</array>";
    let reader = StubReader(Some(raw));
    assert_eq!(
        paths_from(&reader),
        vec!["/Users/a/photo.png", "/Users/a/notes.pdf"]
    );
}

#[test]
fn text_clipboard_without_tags_is_empty() {
    let reader = StubReader(Some("copied words, not files"));
    assert!(paths_from(&reader).is_empty());
}

#[test]
fn absent_clipboard_entry_is_empty() {
    assert!(paths_from(&StubReader(None)).is_empty());
}

#[test]
fn failing_tool_degrades_to_empty() {
    assert!(paths_from(&BrokenReader).is_empty());
}

#[test]
fn unsupported_platform_reader_is_empty() {
    assert!(paths_from(&Unsupported).is_empty());
    assert_eq!(Unsupported.name(), "unsupported");
}

#[test]
fn pasteboard_reader_is_named() {
    assert_eq!(MacPasteboard::new().name(), "pasteboard");
}

#[test]
fn clipboard_error_messages() {
    let err = ClipboardError::ToolNotFound { tool: "osascript" };
    assert!(err.to_string().contains("osascript"));
    assert!(ClipboardError::UnsupportedPlatform
        .to_string()
        .contains("macOS"));
}
