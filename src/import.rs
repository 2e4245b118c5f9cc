//! Media import: copy clipboard files and link them from the note.
//!
//! Files are handled one at a time in clipboard order. For each file the
//! cursor is read from the editor again right before inserting, so the
//! result depends on how the editor moves its cursor after an insert.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::editor::Editor;
use crate::files::{copy_if_newer, CopyError, CopyOutcome, ParsedPath};
use crate::markdown::media_markdown;
use crate::vault::normalize_path;

/// What to do when a file cannot be copied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Record the failure, insert nothing for that file and go on.
    #[default]
    Continue,
    /// Stop at the first failure; earlier files stay imported.
    Abort,
}

/// Knobs for [`import_and_link`].
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    pub on_error: ErrorPolicy,
    /// Generate and insert markdown without touching the file system.
    pub dry_run: bool,
}

/// A file that was copied (or found up to date) and linked.
#[derive(Debug, Clone)]
pub struct ImportedFile {
    pub source: String,
    pub destination: PathBuf,
    pub markdown: String,
    /// `None` in dry-run mode.
    pub outcome: Option<CopyOutcome>,
}

/// A file that could not be copied and got no link.
#[derive(Debug)]
pub struct FailedFile {
    pub source: String,
    pub error: CopyError,
}

/// Per-file results of one import run, in clipboard order.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub imported: Vec<ImportedFile>,
    pub failed: Vec<FailedFile>,
    /// Set when processing stopped early under [`ErrorPolicy::Abort`].
    pub aborted: bool,
}

impl ImportReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Totals over all imported files.
    pub fn totals(&self) -> CopyOutcome {
        self.imported
            .iter()
            .filter_map(|f| f.outcome)
            .fold(CopyOutcome::default(), |acc, o| CopyOutcome {
                copied: acc.copied + o.copied,
                skipped: acc.skipped + o.skipped,
                bytes: acc.bytes + o.bytes,
            })
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let totals = self.totals();
        write!(
            f,
            "Linked {} of {} file(s): {} copied ({}), {} unchanged",
            self.imported.len(),
            self.imported.len() + self.failed.len(),
            totals.copied,
            humansize::format_size(totals.bytes, humansize::BINARY),
            totals.skipped
        )?;
        if self.has_failures() {
            write!(f, ", {} failed", self.failed.len())?;
        }
        if self.aborted {
            write!(f, " (stopped at first failure)")?;
        }
        Ok(())
    }
}

/// Copy each path into `destination_folder` and insert its markdown at the
/// editor's cursor.
///
/// A file whose destination already exists is only overwritten when the
/// source is newer; otherwise the existing copy is linked as is.
pub fn import_and_link(
    paths: &[String],
    destination_folder: &Path,
    editor: &mut dyn Editor,
    width: &str,
    options: &ImportOptions,
) -> ImportReport {
    let mut report = ImportReport::default();
    let folder = destination_folder.to_string_lossy();

    for source in paths {
        let parsed = ParsedPath::parse(source);
        match import_one(source, &parsed, &folder, options) {
            Ok((destination, outcome)) => {
                let markdown = media_markdown(&parsed, width);
                let at = editor.cursor();
                editor.replace_range(&markdown, at);
                tracing::debug!(source = %source, at = %at, "inserted link");

                report.imported.push(ImportedFile {
                    source: source.clone(),
                    destination,
                    markdown,
                    outcome,
                });
            }
            Err(error) => {
                tracing::warn!(source = %source, error = %error, "import failed");
                report.failed.push(FailedFile {
                    source: source.clone(),
                    error,
                });
                if options.on_error == ErrorPolicy::Abort {
                    report.aborted = true;
                    break;
                }
            }
        }
    }

    report
}

fn import_one(
    source: &str,
    parsed: &ParsedPath,
    folder: &str,
    options: &ImportOptions,
) -> Result<(PathBuf, Option<CopyOutcome>), CopyError> {
    if parsed.base.is_empty() {
        return Err(CopyError::NoFileName {
            path: PathBuf::from(source),
        });
    }

    let destination = PathBuf::from(normalize_path(&format!("{}/{}", folder, parsed.base)));
    if options.dry_run {
        return Ok((destination, None));
    }

    let outcome = copy_if_newer(Path::new(source), &destination)?;
    Ok((destination, Some(outcome)))
}
