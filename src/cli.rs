//! CLI definitions for mdmedia
//!
//! The clap structures live here, separate from main.rs, so command handlers
//! and tests can reach them.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

/// Build clap styles for help output.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "mdmedia")]
#[command(about = "Copy files from the clipboard into a note's media folder and link them")]
#[command(
    long_about = "mdmedia - Insert media markdown for files copied to the clipboard.

Copy files in Finder, then run mdmedia on a note. Each file is copied into a
'media' folder next to the note and a markdown link is inserted at the cursor.
Images become embeds with the configured display width.

QUICK START:
    mdmedia insert --note Projects/plan.md     Link clipboard files into a note
    mdmedia paths                              Show the files on the clipboard
    mdmedia config width 480                   Change the image display width"
)]
#[command(version, styles = build_cli_styles())]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Copy clipboard files into the note's media folder and insert links
    #[command(
        visible_alias = "insert-media-markdown",
        long_about = "Copy the files on the clipboard into <vault>/<note folder>/media and
insert a markdown link for each at the cursor.

An existing file in the media folder is only replaced when the copied file
is newer. Image files (png, jpg, svg, webp, ...) are embedded as
![name|width](file), everything else is linked as [name](file).

EXAMPLES:
    mdmedia insert --note Daily/2024-05-01.md
    mdmedia insert --note plan.md --line 3 --ch 0
    mdmedia insert --note plan.md --path ~/Desktop/chart.png
    mdmedia insert --note plan.md --dry-run"
    )]
    Insert(InsertArgs),

    /// Print the file paths currently on the clipboard
    Paths,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: CompletionShell,
    },
}

#[derive(Args, Debug, Clone)]
pub struct InsertArgs {
    /// Markdown note to insert links into
    #[arg(long, short)]
    pub note: PathBuf,

    /// Vault root (default: nearest folder containing .obsidian, else the note's folder)
    #[arg(long)]
    pub vault: Option<PathBuf>,

    /// Cursor line, zero-based (default: end of note)
    #[arg(long, requires = "ch")]
    pub line: Option<usize>,

    /// Cursor column in characters, zero-based
    #[arg(long, requires = "line")]
    pub ch: Option<usize>,

    /// Use these files instead of the clipboard
    #[arg(long = "path", value_name = "PATH")]
    pub paths: Vec<String>,

    /// Stop at the first file that cannot be copied
    #[arg(long)]
    pub fail_fast: bool,

    /// Print the markdown without copying files or changing the note
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Show or set the image display width (empty string disables it)
    Width {
        /// New width, e.g. 300 (stored exactly as typed)
        value: Option<String>,
    },
    /// Open configuration in editor
    Edit,
}
