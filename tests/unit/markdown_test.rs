//! Unit tests for markdown generation

use mdmedia::files::ParsedPath;
use mdmedia::markdown::{file_link, image_embed, is_image_extension, media_markdown};

#[test]
fn image_embed_with_width() {
    assert_eq!(image_embed("name", "name.svg", "300"), "![name|300](name.svg)\n");
}

#[test]
fn image_embed_without_width() {
    assert_eq!(image_embed("name", "name.svg", ""), "![name](name.svg)\n");
}

#[test]
fn file_link_format() {
    assert_eq!(file_link("name", "name.pdf"), "[name](name.pdf)\n");
}

#[test]
fn uppercase_extensions_are_not_images() {
    for ext in [".PNG", ".JPG", ".Svg", ".WEBP"] {
        assert!(!is_image_extension(ext), "{}", ext);
    }
}

#[test]
fn media_markdown_for_mixed_files() {
    let cases = [
        ("/Users/a/photo.png", "![photo|300](photo.png)\n"),
        ("/Users/a/notes.pdf", "[notes](notes.pdf)\n"),
        ("/Users/a/scan.tiff", "![scan|300](scan.tiff)\n"),
        ("/Users/a/clip.mov", "[clip](clip.mov)\n"),
        ("/Users/a/photo.PNG", "[photo](photo.PNG)\n"),
    ];
    for (path, expected) in cases {
        assert_eq!(media_markdown(&ParsedPath::parse(path), "300"), expected);
    }
}

#[test]
fn names_with_spaces_are_not_escaped() {
    let parsed = ParsedPath::parse("/Users/a/My Photo.png");
    assert_eq!(media_markdown(&parsed, "300"), "![My Photo|300](My Photo.png)\n");
}
