//! Default modifier mask and default path bindings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// `[accelerators]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AcceleratorsConfig {
    /// Modifier names OR-ed into the process-wide default modifier mask.
    pub default_modifier: Vec<String>,
    /// Accelerator path -> accelerator name, registered before the map file
    /// is loaded.
    pub paths: BTreeMap<String, String>,
}

impl Default for AcceleratorsConfig {
    fn default() -> Self {
        Self {
            default_modifier: ["shift", "control", "mod1", "super", "hyper", "meta"]
                .into_iter()
                .map(String::from)
                .collect(),
            paths: BTreeMap::new(),
        }
    }
}
