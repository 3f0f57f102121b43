//! `[accel_map]` constraints.

use accelkit_engine::accel_map::is_valid_accel_path;

use crate::schema::AccelkitConfig;

pub(crate) fn validate_accel_map(errors: &mut Vec<String>, config: &AccelkitConfig) {
    if let Some(file) = &config.accel_map.file {
        if file.as_os_str().is_empty() {
            errors.push("accel_map.file must not be empty".into());
        }
    }

    for path in &config.accel_map.filters {
        if !is_valid_accel_path(path) {
            errors.push(format!("accel_map.filters: '{path}' is not a valid accelerator path"));
        }
    }
}
