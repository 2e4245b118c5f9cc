//! CLI tests against the built binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

use crate::helpers::TestVault;

/// Command for the mdmedia binary with an isolated config file.
fn mdmedia(vault: &TestVault) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mdmedia"));
    cmd.env("MDMEDIA_CONFIG", vault.config_path())
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_lists_commands() {
    let vault = TestVault::new("", "");
    mdmedia(&vault)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("insert"))
        .stdout(predicate::str::contains("paths"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn insert_copies_files_and_appends_links_to_note() {
    let vault = TestVault::new("Doc Folder", "# Doc\n");
    let photo = vault.source("photo.png", "png");
    let notes = vault.source("notes.pdf", "pdf");

    mdmedia(&vault)
        .args(["insert", "--note"])
        .arg(&vault.note)
        .args(["--path", photo.as_str(), "--path", notes.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Linked 2 of 2 file(s)"));

    assert!(vault.media().join("photo.png").exists());
    assert!(vault.media().join("notes.pdf").exists());
    // The cursor stays in front of each insert, so later files come first.
    assert_eq!(
        vault.note_text(),
        "# Doc\n[notes](notes.pdf)\n![photo|300](photo.png)\n"
    );
}

#[test]
fn insert_media_markdown_alias_works() {
    let vault = TestVault::new("", "");
    let doc = vault.source("doc.txt", "x");

    mdmedia(&vault)
        .args(["insert-media-markdown", "--note"])
        .arg(&vault.note)
        .args(["--path", doc.as_str()])
        .assert()
        .success();

    assert_eq!(vault.note_text(), "[doc](doc.txt)\n");
    assert!(vault.root.join("media").join("doc.txt").exists());
}

#[test]
fn insert_at_explicit_cursor() {
    let vault = TestVault::new("notes", "first\nlast\n");
    let img = vault.source("pic.webp", "w");

    mdmedia(&vault)
        .args(["insert", "--note"])
        .arg(&vault.note)
        .args(["--line", "1", "--ch", "0", "--path", img.as_str()])
        .assert()
        .success();

    assert_eq!(vault.note_text(), "first\n![pic|300](pic.webp)\nlast\n");
}

#[test]
fn insert_uses_configured_width() {
    let vault = TestVault::new("notes", "");
    let img = vault.source("pic.jpg", "j");

    mdmedia(&vault)
        .args(["config", "width", "640"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Image width set to 640."));

    mdmedia(&vault)
        .args(["insert", "--note"])
        .arg(&vault.note)
        .args(["--path", img.as_str()])
        .assert()
        .success();

    assert_eq!(vault.note_text(), "![pic|640](pic.jpg)\n");
}

#[test]
fn empty_width_drops_the_pipe() {
    let vault = TestVault::new("notes", "");
    let img = vault.source("pic.gif", "g");

    mdmedia(&vault).args(["config", "width", ""]).assert().success();
    mdmedia(&vault)
        .args(["config", "width"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(none)"));

    mdmedia(&vault)
        .args(["insert", "--note"])
        .arg(&vault.note)
        .args(["--path", img.as_str()])
        .assert()
        .success();

    assert_eq!(vault.note_text(), "![pic](pic.gif)\n");
}

#[test]
fn dry_run_changes_nothing() {
    let vault = TestVault::new("notes", "keep\n");
    let img = vault.source("pic.png", "p");

    mdmedia(&vault)
        .args(["insert", "--dry-run", "--note"])
        .arg(&vault.note)
        .args(["--path", img.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("![pic|300](pic.png)"));

    assert_eq!(vault.note_text(), "keep\n");
    assert!(!vault.media().exists());
}

#[test]
fn missing_source_fails_but_links_the_rest() {
    let vault = TestVault::new("notes", "");
    let ok = vault.source("ok.pdf", "o");
    let missing = vault.sources.join("gone.pdf");

    mdmedia(&vault)
        .args(["insert", "--note"])
        .arg(&vault.note)
        .arg("--path")
        .arg(&missing)
        .args(["--path", ok.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Source not found"));

    assert_eq!(vault.note_text(), "[ok](ok.pdf)\n");
}

#[test]
fn missing_note_is_an_error() {
    let vault = TestVault::new("notes", "");
    mdmedia(&vault)
        .args(["insert", "--note"])
        .arg(vault.root.join("nope.md"))
        .args(["--path", "/tmp/x.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Note not found"));
}

#[test]
fn note_outside_explicit_vault_is_an_error() {
    let vault = TestVault::new("notes", "");
    let other = vault.temp.path().join("other");
    fs::create_dir_all(&other).unwrap();
    let doc = vault.source("a.pdf", "a");

    mdmedia(&vault)
        .args(["insert", "--note"])
        .arg(&vault.note)
        .arg("--vault")
        .arg(&other)
        .args(["--path", doc.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not inside vault"));
}

#[test]
fn config_show_prints_width() {
    let vault = TestVault::new("", "");
    mdmedia(&vault)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[media]"))
        .stdout(predicate::str::contains("width = \"300\""));
}

#[test]
fn completions_generate_for_bash() {
    let vault = TestVault::new("", "");
    mdmedia(&vault)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mdmedia"));
}
