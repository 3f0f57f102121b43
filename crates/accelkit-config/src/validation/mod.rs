//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod accel_map;
mod accelerators;


use crate::schema::AccelkitConfig;
use accelkit_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &AccelkitConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    accel_map::validate_accel_map(&mut errors, config);
    accelerators::validate_default_modifier(&mut errors, config);
    accelerators::validate_paths(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
