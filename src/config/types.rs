//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub media: MediaConfig,
}

/// Media embedding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Display width for image embeds (`![name|width](file)`).
    /// An empty string leaves the width directive out.
    #[serde(default = "default_width")]
    pub width: String,
}

pub fn default_width() -> String {
    "300".to_string()
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
        }
    }
}
