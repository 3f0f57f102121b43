//! Accelerator map file settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// `[accel_map]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AccelMapConfig {
    /// Map file location. `None` means `accels` next to `config.toml`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Load the map file at startup when it exists.
    pub autoload: bool,
    /// Write the map file back after it was changed.
    pub autosave: bool,
    /// Paths hidden from filtered enumeration.
    pub filters: Vec<String>,
}

impl Default for AccelMapConfig {
    fn default() -> Self {
        Self {
            file: None,
            autoload: true,
            autosave: false,
            filters: Vec::new(),
        }
    }
}
