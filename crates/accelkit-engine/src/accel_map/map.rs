use std::collections::{BTreeMap, BTreeSet};
use std::ops::ControlFlow;
use std::sync::Arc;

use accelkit_common::AccelError;
use serde::Serialize;

use super::path::validate_accel_path;
use crate::keymap::{AccelFlags, AccelKey, ModifierInput, ModifierType};

/// Resolve a modifier for storage. Bits outside [`ModifierType::MODIFIER`]
/// have no accelerator name and could not be saved, so they are rejected.
fn storable_modifier(modifier: ModifierInput) -> Result<ModifierType, AccelError> {
    let modifier = modifier.resolve()?;
    if !ModifierType::MODIFIER.contains(modifier) {
        return Err(AccelError::InvalidModifier(format!("{:#x}", modifier.bits())));
    }
    Ok(modifier)
}

/// Listener invoked after an entry was added or changed.
pub type ChangeListener = dyn Fn(&str, &AccelKey) + Send + Sync;

/// One accelerator path and the key it currently resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccelPathEntry {
    pub path: String,
    pub key: AccelKey,
    /// Set once the entry was written through add, change or load.
    pub changed: bool,
}

/// Mutations recorded while the map was borrowed, delivered afterwards.
///
/// Keeping delivery separate lets the process-wide map release its lock
/// before listeners run.
#[must_use]
pub(crate) struct Changes {
    items: Vec<(String, AccelKey)>,
    listeners: Vec<Arc<ChangeListener>>,
}

impl Changes {
    pub(crate) fn notify(self) {
        for (path, key) in &self.items {
            for listener in &self.listeners {
                listener(path, key);
            }
        }
    }
}

/// Table of accelerator paths, with a filter set for enumeration.
///
/// Entries are kept sorted by path, which is the enumeration and save order.
#[derive(Default)]
pub struct AccelMap {
    entries: BTreeMap<String, AccelPathEntry>,
    filters: BTreeSet<String>,
    locked: BTreeSet<String>,
    listeners: Vec<Arc<ChangeListener>>,
}

impl AccelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `path` -> `(key, modifier)`, replacing any existing entry.
    pub fn add_entry(
        &mut self,
        path: &str,
        key: u32,
        modifier: impl Into<ModifierInput>,
    ) -> Result<(), AccelError> {
        self.add_entry_deferred(path, key, modifier.into())?.notify();
        Ok(())
    }

    /// Rebind an existing path. Returns `false` when the path is unknown or
    /// locked.
    pub fn change_entry(
        &mut self,
        path: &str,
        key: u32,
        modifier: impl Into<ModifierInput>,
    ) -> Result<bool, AccelError> {
        let (changed, changes) = self.change_entry_deferred(path, key, modifier.into())?;
        changes.notify();
        Ok(changed)
    }

    pub fn lookup_entry(&self, path: &str) -> Option<AccelKey> {
        self.entries.get(path).map(|entry| entry.key)
    }

    pub fn entry(&self, path: &str) -> Option<&AccelPathEntry> {
        self.entries.get(path)
    }

    /// Visit every entry not in the filter set. Return `ControlFlow::Break`
    /// to stop early; the next call starts over from the first entry.
    pub fn foreach<F>(&self, mut callback: F)
    where
        F: FnMut(&AccelPathEntry) -> ControlFlow<()>,
    {
        for entry in self.entries.values() {
            if self.filters.contains(&entry.path) {
                continue;
            }
            if callback(entry).is_break() {
                break;
            }
        }
    }

    /// Like [`foreach`](Self::foreach) but ignoring the filter set.
    pub fn foreach_unfiltered<F>(&self, mut callback: F)
    where
        F: FnMut(&AccelPathEntry) -> ControlFlow<()>,
    {
        for entry in self.entries.values() {
            if callback(entry).is_break() {
                break;
            }
        }
    }

    /// Hide `path` from [`foreach`](Self::foreach). Lookups still see it.
    pub fn add_filter(&mut self, path: &str) {
        self.filters.insert(path.to_string());
    }

    pub fn is_filtered(&self, path: &str) -> bool {
        self.filters.contains(path)
    }

    /// Prevent [`change_entry`](Self::change_entry) from rebinding `path`.
    pub fn lock_path(&mut self, path: &str) {
        self.locked.insert(path.to_string());
    }

    pub fn unlock_path(&mut self, path: &str) {
        self.locked.remove(path);
    }

    pub fn is_path_locked(&self, path: &str) -> bool {
        self.locked.contains(path)
    }

    pub fn connect_changed<F>(&mut self, listener: F)
    where
        F: Fn(&str, &AccelKey) + Send + Sync + 'static,
    {
        self.listeners.push(Arc::new(listener));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy of the entries [`foreach`] or [`foreach_unfiltered`] would visit.
    ///
    /// [`foreach`]: Self::foreach
    /// [`foreach_unfiltered`]: Self::foreach_unfiltered
    pub(crate) fn snapshot(&self, filtered: bool) -> Vec<AccelPathEntry> {
        self.entries
            .values()
            .filter(|entry| !filtered || !self.filters.contains(&entry.path))
            .cloned()
            .collect()
    }

    pub(crate) fn add_entry_deferred(
        &mut self,
        path: &str,
        key: u32,
        modifier: ModifierInput,
    ) -> Result<Changes, AccelError> {
        validate_accel_path(path)?;
        let modifier = storable_modifier(modifier)?;
        let key = self.store(path, key, modifier);
        tracing::debug!(path, key = key.key, modifier = key.modifier.bits(), "accel path added");
        Ok(self.changes(vec![(path.to_string(), key)]))
    }

    pub(crate) fn change_entry_deferred(
        &mut self,
        path: &str,
        key: u32,
        modifier: ModifierInput,
    ) -> Result<(bool, Changes), AccelError> {
        validate_accel_path(path)?;
        let modifier = storable_modifier(modifier)?;

        if self.locked.contains(path) {
            tracing::debug!(path, "accel path is locked, not changing");
            return Ok((false, self.changes(Vec::new())));
        }

        let Some(entry) = self.entries.get_mut(path) else {
            return Ok((false, self.changes(Vec::new())));
        };
        entry.key.key = key;
        entry.key.modifier = modifier;
        entry.changed = true;
        let key = entry.key;

        tracing::debug!(path, key = key.key, modifier = key.modifier.bits(), "accel path changed");
        Ok((true, self.changes(vec![(path.to_string(), key)])))
    }

    /// Upsert without validation; callers have already checked the path
    /// and modifier.
    pub(crate) fn store(&mut self, path: &str, key: u32, modifier: ModifierType) -> AccelKey {
        let key = AccelKey::new(key, modifier, AccelFlags::empty());
        self.entries.insert(
            path.to_string(),
            AccelPathEntry {
                path: path.to_string(),
                key,
                changed: true,
            },
        );
        key
    }

    pub(crate) fn changes(&self, items: Vec<(String, AccelKey)>) -> Changes {
        let listeners = if items.is_empty() {
            Vec::new()
        } else {
            self.listeners.clone()
        };
        Changes { items, listeners }
    }
}
