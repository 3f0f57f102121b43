//! `[accelerators]` constraints.

use accelkit_engine::accel_map::is_valid_accel_path;
use accelkit_engine::keymap::{accelerator_parse, ModifierType};

use crate::schema::AccelkitConfig;

pub(crate) fn validate_default_modifier(errors: &mut Vec<String>, config: &AccelkitConfig) {
    let names = &config.accelerators.default_modifier;
    if names.is_empty() {
        errors.push("accelerators.default_modifier must name at least one modifier".into());
    }
    for name in names {
        if ModifierType::lookup(name).is_none() {
            errors.push(format!("accelerators.default_modifier: unknown modifier '{name}'"));
        }
    }
}

pub(crate) fn validate_paths(errors: &mut Vec<String>, config: &AccelkitConfig) {
    for (path, accel) in &config.accelerators.paths {
        if !is_valid_accel_path(path) {
            errors.push(format!("accelerators.paths: '{path}' is not a valid accelerator path"));
        }
        if accelerator_parse(accel).is_none() {
            errors.push(format!(
                "accelerators.paths: '{accel}' for '{path}' is not a valid accelerator"
            ));
        }
    }
}
