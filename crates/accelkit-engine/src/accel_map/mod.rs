//! Accelerator path map: symbolic paths resolved to keys at runtime.
//!
//! [`AccelMap`] is the table itself; the free functions in this module
//! operate on the single process-wide instance that accelerator groups
//! consult when binding by path.

mod file;
mod global;
mod map;
mod path;

pub use global::{
    add_entry, add_filter, change_entry, connect_changed, foreach, foreach_unfiltered, load,
    load_from_reader, lock_path, lookup_entry, save, save_to_writer, unlock_path,
};
pub use map::{AccelMap, AccelPathEntry, ChangeListener};
pub use path::{accel_path_category, is_valid_accel_path};

pub(crate) use path::validate_accel_path;
