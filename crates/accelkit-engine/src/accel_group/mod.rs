//! Accelerator groups: `(key, modifier)` -> callback tables.

mod entry;
mod group;

pub use entry::{AccelCallback, AccelGroupEntry};
pub use group::AccelGroup;

// Group-independent accelerator helpers, exported alongside the group type.
pub use crate::keymap::{accelerator_label, accelerator_name, default_modifier, set_default_modifier};
