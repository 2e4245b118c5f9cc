//! Markdown text for imported media.

use crate::files::ParsedPath;

/// Extensions rendered as image embeds. Matching is case-sensitive.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpeg", "jpg", "gif", "png", "tif", "tiff", "bmp", "eps", "raw", "apng", "avif", "jfif",
    "pjpeg", "pjp", "svg", "webp",
];

/// Whether an extension (with or without its leading dot) is an image type.
pub fn is_image_extension(ext: &str) -> bool {
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    IMAGE_EXTENSIONS.contains(&ext)
}

/// Image embed: `![stem|width](base)` followed by a newline.
///
/// The `|width` part is left out entirely when `width` is empty.
pub fn image_embed(stem: &str, base: &str, width: &str) -> String {
    if width.is_empty() {
        format!("![{}]({})\n", stem, base)
    } else {
        format!("![{}|{}]({})\n", stem, width, base)
    }
}

/// Plain link: `[stem](base)` followed by a newline.
pub fn file_link(stem: &str, base: &str) -> String {
    format!("[{}]({})\n", stem, base)
}

/// Markdown for one imported file, picking embed or link by extension.
pub fn media_markdown(parsed: &ParsedPath, width: &str) -> String {
    if is_image_extension(&parsed.ext) {
        image_embed(&parsed.stem, &parsed.base, width)
    } else {
        file_link(&parsed.stem, &parsed.base)
    }
}
