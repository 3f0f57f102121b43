//! Accelerator path grammar.
//!
//! A path starts with one bracketed category (`<Category>`) followed by an
//! arbitrary tail: `<AccelGroup>/Test`, `<Test>/File/Open`, `<Control>q`.

use std::sync::LazyLock;

use accelkit_common::AccelError;
use regex::Regex;

static PATH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^<[^<>]+>").unwrap());

pub fn is_valid_accel_path(path: &str) -> bool {
    PATH_RE.is_match(path)
}

pub(crate) fn validate_accel_path(path: &str) -> Result<(), AccelError> {
    if is_valid_accel_path(path) {
        Ok(())
    } else {
        Err(AccelError::InvalidPath(path.to_string()))
    }
}

/// The category of a valid path, without brackets.
pub fn accel_path_category(path: &str) -> Option<&str> {
    let rest = path.strip_prefix('<')?;
    let close = rest.find('>')?;
    let category = &rest[..close];
    (!category.is_empty() && !category.contains('<')).then_some(category)
}
