//! Parsing of the `NSFilenamesPboardType` property list.
//!
//! The pasteboard hands the copied files over as an XML property list:
//!
//! ```text
//! <plist version="1.0">
//! <array>
//!     <string>/Users/a/photo.png</string>
//! </array>
//! </plist>
//! ```
//!
//! Only the `<string>` elements matter; everything else is ignored.

use regex::Regex;
use std::sync::OnceLock;

fn string_element() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `.` does not cross newlines, so an element must open and close on one line.
    RE.get_or_init(|| Regex::new(r"<string>(.*?)</string>").expect("valid regex"))
}

/// Extract every `<string>...</string>` payload in document order.
///
/// Returns an empty list when `raw` contains no such element.
pub fn extract_filenames(raw: &str) -> Vec<String> {
    string_element()
        .captures_iter(raw)
        .filter_map(|caps| caps.get(1))
        .map(|m| decode_entities(m.as_str()))
        .collect()
}

/// Decode the five predefined XML entities.
///
/// `&amp;` is handled last so that `&amp;lt;` decodes to `&lt;`, not `<`.
fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
