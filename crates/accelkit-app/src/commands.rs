//! Subcommand implementations. Output goes to any `Write` so the commands
//! can be exercised without a terminal.

use std::io::Write;
use std::ops::ControlFlow;

use accelkit_common::{AccelError, AccelkitError, Result};
use accelkit_config::save_config_to_path;
use accelkit_engine::accel_map::{self, accel_path_category, is_valid_accel_path, AccelPathEntry};
use accelkit_engine::keymap::{
    accelerator_label, accelerator_name, accelerator_parse, keyval_from_name, ModifierInput,
    ModifierType,
};

use crate::cli::Command;
use crate::session::Session;

pub fn run<W: Write>(session: &mut Session, command: &Command, out: &mut W) -> Result<()> {
    match command {
        Command::List {
            all,
            json,
            category,
        } => list(*all, *json, category.as_deref(), out),
        Command::Lookup { path } => lookup(path, out),
        Command::Set { path, accel, save } => set(session, path, accel, *save, out),
        Command::Filter { path } => filter(session, path, out),
        Command::Name { key, modifiers } => {
            let (key, modifier) = key_and_modifiers(key, modifiers)?;
            writeln!(out, "{}", accelerator_name(key, modifier))?;
            Ok(())
        }
        Command::Label { key, modifiers } => {
            let (key, modifier) = key_and_modifiers(key, modifiers)?;
            writeln!(out, "{}", accelerator_label(key, modifier))?;
            Ok(())
        }
    }
}

fn list<W: Write>(all: bool, json: bool, category: Option<&str>, out: &mut W) -> Result<()> {
    let mut entries: Vec<AccelPathEntry> = Vec::new();
    let collect = |entry: &AccelPathEntry| {
        if category.is_none() || accel_path_category(&entry.path) == category {
            entries.push(entry.clone());
        }
        ControlFlow::Continue(())
    };
    if all {
        accel_map::foreach_unfiltered(collect);
    } else {
        accel_map::foreach(collect);
    }

    if json {
        let text = serde_json::to_string_pretty(&entries)
            .map_err(|e| AccelkitError::Other(format!("failed to serialize entries: {e}")))?;
        writeln!(out, "{text}")?;
        return Ok(());
    }

    for entry in &entries {
        writeln!(
            out,
            "{}\t{}",
            entry.path,
            accelerator_name(entry.key.key, entry.key.modifier)
        )?;
    }
    Ok(())
}

fn lookup<W: Write>(path: &str, out: &mut W) -> Result<()> {
    if !is_valid_accel_path(path) {
        return Err(AccelError::InvalidPath(path.to_string()).into());
    }
    let key = accel_map::lookup_entry(path)
        .ok_or_else(|| AccelError::PathNotFound(path.to_string()))?;
    writeln!(
        out,
        "{}\t{}",
        accelerator_name(key.key, key.modifier),
        accelerator_label(key.key, key.modifier)
    )?;
    Ok(())
}

fn set<W: Write>(session: &Session, path: &str, accel: &str, save: bool, out: &mut W) -> Result<()> {
    let (key, modifier) = accelerator_parse(accel)
        .ok_or_else(|| AccelError::UnparsableAccelerator(accel.to_string()))?;

    if accel_map::lookup_entry(path).is_some() {
        if !accel_map::change_entry(path, key, modifier)? {
            return Err(AccelError::PathLocked(path.to_string()).into());
        }
    } else {
        accel_map::add_entry(path, key, modifier)?;
    }
    writeln!(out, "{path}\t{}", accelerator_name(key, modifier))?;

    if save || session.config.accel_map.autosave {
        if let Some(parent) = session.map_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        accel_map::save(&session.map_path)?;
    }
    Ok(())
}

fn filter<W: Write>(session: &mut Session, path: &str, out: &mut W) -> Result<()> {
    if !is_valid_accel_path(path) {
        return Err(AccelError::InvalidPath(path.to_string()).into());
    }
    accel_map::add_filter(path);

    let filters = &mut session.config.accel_map.filters;
    if filters.iter().any(|f| f == path) {
        writeln!(out, "{path} is already filtered")?;
        return Ok(());
    }
    filters.push(path.to_string());
    save_config_to_path(&session.config, &session.config_path)?;
    writeln!(out, "filtered {path}")?;
    Ok(())
}

/// A key given as a name (`q`, `Return`), a decimal value or a `0x` hex
/// value, plus modifier names.
fn key_and_modifiers(key: &str, modifiers: &[String]) -> Result<(u32, ModifierType)> {
    let parsed = match key.strip_prefix("0x") {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None if key.len() > 1 && key.bytes().all(|b| b.is_ascii_digit()) => key.parse().ok(),
        None => keyval_from_name(key),
    };
    let key = parsed.ok_or_else(|| AccelError::UnknownKey(key.to_string()))?;

    let modifier = if modifiers.is_empty() {
        ModifierType::empty()
    } else {
        ModifierInput::from(modifiers.to_vec()).resolve()?
    };
    Ok((key, modifier))
}
