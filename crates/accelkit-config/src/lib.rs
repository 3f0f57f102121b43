//! accelkit configuration system.
//!
//! Provides TOML-based configuration for the accelerator map file, the
//! default modifier mask, default path bindings and logging. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use accelkit_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use schema::{AccelkitConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{default_accel_map_path, load_from_path};
pub use toml_writer::{save_config, save_config_to_path};

use std::path::PathBuf;

use accelkit_common::ConfigError;
use accelkit_engine::keymap::ModifierType;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<AccelkitConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &AccelkitConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

impl AccelkitConfig {
    /// The configured default modifier mask. Unknown names are skipped;
    /// validation reports them.
    pub fn default_modifier_mask(&self) -> ModifierType {
        self.accelerators
            .default_modifier
            .iter()
            .filter_map(|name| ModifierType::lookup(name))
            .fold(ModifierType::empty(), |mask, m| mask | m)
    }

    /// The accelerator map file: `accel_map.file` if set, otherwise the
    /// platform default.
    pub fn accel_map_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.accel_map.file {
            Some(file) => Ok(file.clone()),
            None => default_accel_map_path(),
        }
    }
}
