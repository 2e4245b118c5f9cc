//! Configuration management for mdmedia
//!
//! The only persisted setting is the image display width.

mod io;
mod types;

pub use io::CONFIG_ENV;
pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

impl Config {
    /// Get the config file path ($MDMEDIA_CONFIG or ~/.config/mdmedia/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/mdmedia)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load_from(&io::config_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        io::save_to(self, &io::config_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Image display width, empty when no width directive should be emitted.
    pub fn width(&self) -> &str {
        &self.media.width
    }

    /// Set the image display width, stored exactly as given.
    ///
    /// Returns `true` if the value changed.
    pub fn set_width(&mut self, width: &str) -> bool {
        if self.media.width == width {
            false
        } else {
            self.media.width = width.to_string();
            true
        }
    }
}
