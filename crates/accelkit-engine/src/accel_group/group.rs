use std::cell::RefCell;
use std::rc::Rc;

use accelkit_common::AccelError;

use super::entry::{AccelCallback, AccelGroupEntry};
use crate::accel_map::{self, validate_accel_path};
use crate::keymap::{
    accelerator_valid, default_modifier, keyval_to_lower, AccelFlags, FlagInput, ModifierInput,
    ModifierType,
};

struct GroupState {
    entries: Vec<AccelGroupEntry>,
    locked: bool,
    modifier_mask: ModifierType,
}

/// A set of `(key, modifier)` -> callback bindings.
///
/// Cloning yields another handle to the same group, so a window and its
/// creator can share one. Identity is by handle, see [`AccelGroup::same`].
#[derive(Clone)]
pub struct AccelGroup {
    state: Rc<RefCell<GroupState>>,
}

impl Default for AccelGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelGroup {
    /// Create an empty, unlocked group. The current default modifier mask is
    /// captured as the group's modifier mask.
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(GroupState {
                entries: Vec::new(),
                locked: false,
                modifier_mask: default_modifier(),
            })),
        }
    }

    /// Bind `callback` to `(key, modifier)`.
    ///
    /// Binding the same pair again adds a second entry; nothing is replaced.
    pub fn connect<F>(
        &self,
        key: u32,
        modifier: impl Into<ModifierInput>,
        flags: impl Into<FlagInput>,
        callback: F,
    ) -> Result<(), AccelError>
    where
        F: Fn(u32, ModifierType) -> bool + 'static,
    {
        self.connect_rc(key, modifier.into(), flags.into(), Rc::new(callback))
    }

    pub(crate) fn connect_rc(
        &self,
        key: u32,
        modifier: ModifierInput,
        flags: FlagInput,
        callback: AccelCallback,
    ) -> Result<(), AccelError> {
        let modifier = modifier.resolve()?;
        let flags = flags.resolve()?;
        self.ensure_unlocked()?;
        if !accelerator_valid(key, modifier) {
            return Err(AccelError::InvalidKey {
                key,
                modifier: modifier.bits(),
            });
        }

        let entry = AccelGroupEntry::new(key, modifier, flags, callback);
        tracing::debug!(accel = %entry.path, "accel group connect");
        self.state.borrow_mut().entries.push(entry);
        Ok(())
    }

    /// Bind `callback` to whatever key `path` resolves to in the process-wide
    /// accelerator map right now.
    ///
    /// Returns `false` when the path is not registered; no entry is created
    /// and later registrations of the path are not picked up.
    pub fn connect_by_path<F>(&self, path: &str, callback: F) -> Result<bool, AccelError>
    where
        F: Fn(u32, ModifierType) -> bool + 'static,
    {
        self.connect_by_path_rc(path, Rc::new(callback))
    }

    pub(crate) fn connect_by_path_rc(
        &self,
        path: &str,
        callback: AccelCallback,
    ) -> Result<bool, AccelError> {
        validate_accel_path(path)?;
        self.ensure_unlocked()?;

        let Some(resolved) = accel_map::lookup_entry(path) else {
            tracing::debug!(path, "accel path not registered, nothing bound");
            return Ok(false);
        };
        let entry = AccelGroupEntry::new(
            resolved.key,
            resolved.modifier,
            AccelFlags::VISIBLE,
            callback,
        );
        tracing::debug!(path, accel = %entry.path, "accel group connect by path");
        self.state.borrow_mut().entries.push(entry);
        Ok(true)
    }

    /// Entries bound to exactly `(key, modifier)`, in connection order.
    pub fn query(
        &self,
        key: u32,
        modifier: impl Into<ModifierInput>,
    ) -> Result<Vec<AccelGroupEntry>, AccelError> {
        let modifier = modifier.into().resolve()?;
        Ok(self
            .state
            .borrow()
            .entries
            .iter()
            .filter(|entry| entry.matches(key, modifier))
            .cloned()
            .collect())
    }

    /// Remove every entry bound to `(key, modifier)`. Returns whether any
    /// entry was removed.
    pub fn disconnect_key(
        &self,
        key: u32,
        modifier: impl Into<ModifierInput>,
    ) -> Result<bool, AccelError> {
        let modifier = modifier.into().resolve()?;
        let mut state = self.state.borrow_mut();
        let before = state.entries.len();
        state.entries.retain(|entry| !entry.matches(key, modifier));
        let removed = before - state.entries.len();
        if removed > 0 {
            tracing::debug!(key, modifier = modifier.bits(), removed, "accel group disconnect");
        }
        Ok(removed > 0)
    }

    /// Run the callbacks bound to `(key, modifier)` until one handles it.
    ///
    /// The modifier is reduced to the group's modifier mask first, so lock
    /// keys and pointer buttons do not prevent a match. Callbacks run with no
    /// borrow of the group held and may connect or disconnect freely.
    pub fn activate(&self, key: u32, modifier: ModifierType) -> bool {
        let key = keyval_to_lower(key);
        let modifier = modifier & self.modifier_mask();
        let callbacks: Vec<AccelCallback> = self
            .state
            .borrow()
            .entries
            .iter()
            .filter(|entry| keyval_to_lower(entry.key) == key && entry.modifier == modifier)
            .map(|entry| Rc::clone(&entry.callback))
            .collect();

        for callback in callbacks {
            if callback(key, modifier) {
                tracing::debug!(key, modifier = modifier.bits(), "accelerator activated");
                return true;
            }
        }
        false
    }

    pub fn lock(&self) {
        self.state.borrow_mut().locked = true;
    }

    pub fn unlock(&self) {
        self.state.borrow_mut().locked = false;
    }

    pub fn is_locked(&self) -> bool {
        self.state.borrow().locked
    }

    /// Modifiers this group considers when activating.
    pub fn modifier_mask(&self) -> ModifierType {
        self.state.borrow().modifier_mask
    }

    pub fn entries(&self) -> Vec<AccelGroupEntry> {
        self.state.borrow().entries.clone()
    }

    pub fn len(&self) -> usize {
        self.state.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().entries.is_empty()
    }

    /// Whether both handles refer to the same group.
    pub fn same(&self, other: &AccelGroup) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    fn ensure_unlocked(&self) -> Result<(), AccelError> {
        if self.is_locked() {
            Err(AccelError::GroupLocked)
        } else {
            Ok(())
        }
    }
}
