use accelkit_common::{AccelError, HostValue};

use super::{check_arity, key_code, key_value, mask_input, path_value};
use crate::accel_group::{AccelCallback, AccelGroup, AccelGroupEntry};
use crate::accel_map;
use crate::keymap::{self, AccelFlags, AccelKey, ModifierType};

fn lookup_name(value: &HostValue) -> Result<&str, AccelError> {
    value.as_name().ok_or(AccelError::WrongType {
        found: value.type_name(),
        expected: "string or symbol",
    })
}

/// `ModifierType.lookup(name)`. An unknown name is `None`, a non-name is a
/// type error.
pub fn modifier_lookup(name: &HostValue) -> Result<Option<ModifierType>, AccelError> {
    Ok(ModifierType::lookup(lookup_name(name)?))
}

pub fn flags_lookup(name: &HostValue) -> Result<Option<AccelFlags>, AccelError> {
    Ok(AccelFlags::lookup(lookup_name(name)?))
}

/// `AccelMap.add_entry(path, key, modifier)`. The key must be an integer.
pub fn map_add_entry(args: &[HostValue]) -> Result<(), AccelError> {
    check_arity(args, 3, "3")?;
    let path = path_value(&args[0])?;
    let key = key_code(&args[1])?;
    let modifier = mask_input::<ModifierType>(&args[2])?;
    accel_map::add_entry(path, key, modifier)
}

/// `AccelMap.change_entry(path, key, modifier)`.
pub fn map_change_entry(args: &[HostValue]) -> Result<bool, AccelError> {
    check_arity(args, 3, "3")?;
    let path = path_value(&args[0])?;
    let key = key_code(&args[1])?;
    let modifier = mask_input::<ModifierType>(&args[2])?;
    accel_map::change_entry(path, key, modifier)
}

pub fn map_lookup_entry(path: &HostValue) -> Result<Option<AccelKey>, AccelError> {
    Ok(accel_map::lookup_entry(path_value(path)?))
}

/// `group.connect(key, modifier, flags) { ... }`.
pub fn group_connect(
    group: &AccelGroup,
    args: &[HostValue],
    callback: Option<AccelCallback>,
) -> Result<(), AccelError> {
    check_arity(args, 3, "3")?;
    let callback = callback.ok_or(AccelError::NoCallback)?;
    let key = key_value(&args[0])?;
    let modifier = mask_input::<ModifierType>(&args[1])?;
    let flags = mask_input::<AccelFlags>(&args[2])?;
    group.connect_rc(key, modifier, flags, callback)
}

/// `group.connect_by_path(path) { ... }`.
pub fn group_connect_by_path(
    group: &AccelGroup,
    args: &[HostValue],
    callback: Option<AccelCallback>,
) -> Result<bool, AccelError> {
    check_arity(args, 1, "1")?;
    let callback = callback.ok_or(AccelError::NoCallback)?;
    group.connect_by_path_rc(path_value(&args[0])?, callback)
}

/// `group.query(key, modifier)`.
pub fn group_query(group: &AccelGroup, args: &[HostValue]) -> Result<Vec<AccelGroupEntry>, AccelError> {
    check_arity(args, 2, "2")?;
    let key = key_value(&args[0])?;
    group.query(key, mask_input::<ModifierType>(&args[1])?)
}

/// `group.disconnect_key(key, modifier)`.
pub fn group_disconnect_key(group: &AccelGroup, args: &[HostValue]) -> Result<bool, AccelError> {
    check_arity(args, 2, "2")?;
    let key = key_value(&args[0])?;
    group.disconnect_key(key, mask_input::<ModifierType>(&args[1])?)
}

/// `AccelGroup.accelerator_name(key, modifier)`.
pub fn accelerator_name(args: &[HostValue]) -> Result<String, AccelError> {
    let (key, modifier) = key_and_modifier(args)?;
    Ok(keymap::accelerator_name(key, modifier))
}

/// `AccelGroup.accelerator_label(key, modifier)`.
pub fn accelerator_label(args: &[HostValue]) -> Result<String, AccelError> {
    let (key, modifier) = key_and_modifier(args)?;
    Ok(keymap::accelerator_label(key, modifier))
}

fn key_and_modifier(args: &[HostValue]) -> Result<(u32, ModifierType), AccelError> {
    check_arity(args, 2, "2")?;
    let key = key_value(&args[0])?;
    let modifier = mask_input::<ModifierType>(&args[1])?.resolve()?;
    Ok((key, modifier))
}
