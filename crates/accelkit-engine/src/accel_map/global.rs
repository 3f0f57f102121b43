//! The process-wide accelerator map.
//!
//! Created on first use and never torn down. Every accelerator group that
//! binds by path resolves against this table. Callbacks (foreach visitors
//! and change listeners) always run after the internal lock is released, so
//! they may call back into this module.

use std::io::{BufRead, BufReader, BufWriter, Write};
use std::ops::ControlFlow;
use std::path::Path;
use std::sync::{LazyLock, Mutex, PoisonError};

use accelkit_common::AccelError;

use super::file::{read_entries, write_entries};
use super::map::{AccelMap, AccelPathEntry};
use crate::keymap::{AccelKey, ModifierInput};

static ACCEL_MAP: LazyLock<Mutex<AccelMap>> = LazyLock::new(|| Mutex::new(AccelMap::new()));

fn with_map<R>(f: impl FnOnce(&mut AccelMap) -> R) -> R {
    let mut map = ACCEL_MAP.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut map)
}

pub fn add_entry(path: &str, key: u32, modifier: impl Into<ModifierInput>) -> Result<(), AccelError> {
    let modifier = modifier.into();
    with_map(|map| map.add_entry_deferred(path, key, modifier))?.notify();
    Ok(())
}

pub fn change_entry(
    path: &str,
    key: u32,
    modifier: impl Into<ModifierInput>,
) -> Result<bool, AccelError> {
    let modifier = modifier.into();
    let (changed, changes) = with_map(|map| map.change_entry_deferred(path, key, modifier))?;
    changes.notify();
    Ok(changed)
}

pub fn lookup_entry(path: &str) -> Option<AccelKey> {
    with_map(|map| map.lookup_entry(path))
}

pub fn foreach<F>(callback: F)
where
    F: FnMut(&AccelPathEntry) -> ControlFlow<()>,
{
    visit(with_map(|map| map.snapshot(true)), callback);
}

pub fn foreach_unfiltered<F>(callback: F)
where
    F: FnMut(&AccelPathEntry) -> ControlFlow<()>,
{
    visit(with_map(|map| map.snapshot(false)), callback);
}

fn visit<F>(entries: Vec<AccelPathEntry>, mut callback: F)
where
    F: FnMut(&AccelPathEntry) -> ControlFlow<()>,
{
    for entry in &entries {
        if callback(entry).is_break() {
            break;
        }
    }
}

pub fn add_filter(path: &str) {
    with_map(|map| map.add_filter(path));
}

pub fn lock_path(path: &str) {
    with_map(|map| map.lock_path(path));
}

pub fn unlock_path(path: &str) {
    with_map(|map| map.unlock_path(path));
}

pub fn connect_changed<F>(listener: F)
where
    F: Fn(&str, &AccelKey) + Send + Sync + 'static,
{
    with_map(|map| map.connect_changed(listener));
}

pub fn save_to_writer<W: Write>(writer: &mut W) -> Result<(), AccelError> {
    let entries = with_map(|map| map.snapshot(false));
    write_entries(&entries, writer)?;
    Ok(())
}

pub fn load_from_reader<R: BufRead>(reader: R) -> Result<usize, AccelError> {
    with_map(|map| read_entries(map, reader)).finish()
}

/// Write the whole map to the file at `path`.
pub fn save(path: impl AsRef<Path>) -> Result<(), AccelError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(std::fs::File::create(path)?);
    save_to_writer(&mut writer)?;
    tracing::info!(path = %path.display(), "saved accel map");
    Ok(())
}

/// Merge the entries of the file at `path` into the map.
pub fn load(path: impl AsRef<Path>) -> Result<usize, AccelError> {
    let path = path.as_ref();
    let count = load_from_reader(BufReader::new(std::fs::File::open(path)?))?;
    tracing::info!(path = %path.display(), entries = count, "loaded accel map");
    Ok(count)
}
