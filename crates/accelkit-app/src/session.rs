//! Start-up: resolve file locations and push the config into the engine.

use std::path::{Path, PathBuf};

use accelkit_common::Result;
use accelkit_config::{toml_loader, AccelkitConfig};
use accelkit_engine::accel_map;
use accelkit_engine::keymap::{accelerator_parse, set_default_modifier};

use crate::cli::Args;

/// The loaded config and the files the CLI reads and writes.
#[derive(Debug)]
pub struct Session {
    pub config: AccelkitConfig,
    pub config_path: PathBuf,
    pub map_path: PathBuf,
}

impl Session {
    /// Load the config named by `--config` (or the platform default) and
    /// resolve the map file, `--map` taking precedence over the config.
    pub fn open(args: &Args) -> Result<Self> {
        let (config, config_path) = match &args.config {
            Some(path) => (toml_loader::load_from_path(path)?, path.clone()),
            None => (
                toml_loader::load_default()?,
                toml_loader::default_config_path()?,
            ),
        };
        let map_path = match &args.map {
            Some(path) => path.clone(),
            None => config.accel_map_path()?,
        };
        Ok(Self {
            config,
            config_path,
            map_path,
        })
    }

    /// Install the default modifier, filters and default bindings, then
    /// merge the map file when autoload is on. Returns the number of entries
    /// read from the map file.
    pub fn apply(&self) -> Result<usize> {
        apply_config(&self.config)?;
        if !self.config.accel_map.autoload {
            return Ok(0);
        }
        load_map_if_present(&self.map_path)
    }
}

pub fn apply_config(config: &AccelkitConfig) -> Result<()> {
    set_default_modifier(config.default_modifier_mask());

    for filter in &config.accel_map.filters {
        accel_map::add_filter(filter);
    }

    for (path, accel) in &config.accelerators.paths {
        match accelerator_parse(accel) {
            Some((key, modifier)) => accel_map::add_entry(path, key, modifier)?,
            None => tracing::warn!(path = %path, accel = %accel, "skipping unparsable default binding"),
        }
    }

    tracing::debug!(
        filters = config.accel_map.filters.len(),
        defaults = config.accelerators.paths.len(),
        "config applied"
    );
    Ok(())
}

fn load_map_if_present(path: &Path) -> Result<usize> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no accel map file yet");
        return Ok(0);
    }
    Ok(accel_map::load(path)?)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use accelkit_engine::keymap::ModifierType;

    #[test]
    fn defaults_from_config_are_registered() {
        let mut config = AccelkitConfig::default();
        config
            .accelerators
            .paths
            .insert("<SessionDefaults>/Quit".into(), "<Primary>q".into());
        config
            .accelerators
            .paths
            .insert("<SessionDefaults>/Broken".into(), "<Nope>q".into());

        apply_config(&config).unwrap();

        let key = accel_map::lookup_entry("<SessionDefaults>/Quit").unwrap();
        assert_eq!((key.key, key.modifier), (113, ModifierType::CONTROL));
        assert!(accel_map::lookup_entry("<SessionDefaults>/Broken").is_none());
    }

    #[test]
    fn invalid_default_path_is_an_error() {
        let mut config = AccelkitConfig::default();
        config
            .accelerators
            .paths
            .insert("NoCategory".into(), "<Primary>q".into());
        assert!(apply_config(&config).is_err());
    }

    #[test]
    fn open_uses_explicit_files_and_autoloads_map() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        let map_path = dir.path().join("accels");
        std::fs::write(&config_path, "[accel_map]\nautoload = true\n").unwrap();
        std::fs::write(
            &map_path,
            "; accels\n(gtk_accel_path \"<SessionLoad>/Open\" \"<Primary>o\")\n",
        )
        .unwrap();

        let args = Args::try_parse_from([
            "accelkit",
            "--config",
            config_path.to_str().unwrap(),
            "--map",
            map_path.to_str().unwrap(),
            "list",
        ])
        .unwrap();
        let session = Session::open(&args).unwrap();
        assert_eq!(session.config_path, config_path);
        assert_eq!(session.map_path, map_path);

        assert_eq!(session.apply().unwrap(), 1);
        let key = accel_map::lookup_entry("<SessionLoad>/Open").unwrap();
        assert_eq!(key.key, 111);
    }

    #[test]
    fn missing_map_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_map_if_present(&dir.path().join("accels")).unwrap(), 0);
    }

    #[test]
    fn explicit_config_must_exist() {
        let args = Args::try_parse_from([
            "accelkit",
            "--config",
            "/tmp/accelkit-missing-config.toml",
            "list",
        ])
        .unwrap();
        assert!(Session::open(&args).is_err());
    }
}
