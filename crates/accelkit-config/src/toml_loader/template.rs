//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r#"# accelkit configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[accel_map]
# file = "/path/to/accels"   # defaults to `accels` next to this file
# autoload = true            # load the map file at startup
# autosave = false           # write the map file back after `accelkit set`
# filters = []               # paths hidden from `accelkit list`

[accelerators]
# Modifiers that count when matching a key press against a binding.
# default_modifier = ["shift", "control", "mod1", "super", "hyper", "meta"]

[accelerators.paths]
# Bindings registered before the map file is loaded.
# "<App>/File/Quit" = "<Primary>q"
# "<App>/File/Open" = "<Primary>o"

[logging]
# level = "INFO"             # TRACE, DEBUG, INFO, WARNING, ERROR
"#
}
