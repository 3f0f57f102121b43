//! Configuration schema types for accelkit.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod accel_map;
mod accelerators;
mod system;

pub use accel_map::*;
pub use accelerators::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccelkitConfig {
    pub accel_map: AccelMapConfig,
    pub accelerators: AcceleratorsConfig,
    pub logging: LoggingConfig,
}
