use std::fmt;
use std::rc::Rc;

use crate::keymap::{accelerator_name, AccelFlags, AccelKey, ModifierType};

/// Callback bound into an [`AccelGroup`](super::AccelGroup).
///
/// Receives the activating key and modifier; returning `true` marks the
/// activation as handled.
pub type AccelCallback = Rc<dyn Fn(u32, ModifierType) -> bool>;

/// One binding held by an accelerator group.
#[derive(Clone)]
pub struct AccelGroupEntry {
    pub key: u32,
    pub modifier: ModifierType,
    pub flags: AccelFlags,
    /// Machine name of the accelerator, e.g. `<Primary>q`.
    pub path: String,
    pub callback: AccelCallback,
}

impl AccelGroupEntry {
    pub fn new(key: u32, modifier: ModifierType, flags: AccelFlags, callback: AccelCallback) -> Self {
        Self {
            key,
            modifier,
            flags,
            path: accelerator_name(key, modifier),
            callback,
        }
    }

    pub fn accel_key(&self) -> AccelKey {
        AccelKey::new(self.key, self.modifier, self.flags)
    }

    pub(crate) fn matches(&self, key: u32, modifier: ModifierType) -> bool {
        self.key == key && self.modifier == modifier
    }
}

impl fmt::Debug for AccelGroupEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccelGroupEntry")
            .field("key", &self.key)
            .field("modifier", &self.modifier)
            .field("flags", &self.flags)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
