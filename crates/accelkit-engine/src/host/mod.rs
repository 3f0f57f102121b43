//! Entry points for a dynamically typed host language.
//!
//! Arguments arrive as [`HostValue`]s. Each entry point checks arity and
//! argument types, reports a missing callback, and then calls the typed API.
//! Error messages follow the host conventions (`given N for 1..2`,
//! `no callback given`, ...).

mod accel;
mod widget;

pub use accel::{
    accelerator_label, accelerator_name, flags_lookup, group_connect, group_connect_by_path,
    group_disconnect_key, group_query, map_add_entry, map_change_entry, map_lookup_entry,
    modifier_lookup,
};
pub use widget::widget_connect;

use accelkit_common::{AccelError, HostValue};

use crate::keymap::{keyval_from_name, MaskInput, NamedMask};

const MASK_EXPECTED: &str = "a bitmask or an array of symbols";

pub(crate) fn check_arity(
    args: &[HostValue],
    count: usize,
    expected: &'static str,
) -> Result<(), AccelError> {
    if args.len() == count {
        Ok(())
    } else {
        Err(AccelError::WrongArity {
            given: args.len(),
            expected,
        })
    }
}

/// A modifier or flag argument: an integer mask, a single name, or an array
/// of names.
pub(crate) fn mask_input<T>(value: &HostValue) -> Result<MaskInput<T>, AccelError>
where
    T: NamedMask + bitflags::Flags<Bits = u32>,
{
    match value {
        HostValue::Int(bits) => u32::try_from(*bits)
            .map(|bits| MaskInput::Mask(T::from_bits_retain(bits)))
            .map_err(|_| AccelError::WrongType {
                found: "integer",
                expected: MASK_EXPECTED,
            }),
        HostValue::Str(name) | HostValue::Symbol(name) => Ok(MaskInput::Names(vec![name.clone()])),
        HostValue::Array(items) => items
            .iter()
            .map(|item| {
                item.as_name().map(str::to_string).ok_or(AccelError::WrongType {
                    found: item.type_name(),
                    expected: "symbol",
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(MaskInput::Names),
        other => Err(AccelError::WrongType {
            found: other.type_name(),
            expected: MASK_EXPECTED,
        }),
    }
}

/// A key argument: an integer key value or a key name / single character.
pub(crate) fn key_value(value: &HostValue) -> Result<u32, AccelError> {
    match value {
        HostValue::Int(key) => u32::try_from(*key).map_err(|_| AccelError::WrongType {
            found: "integer",
            expected: "a non-negative key value",
        }),
        HostValue::Str(name) | HostValue::Symbol(name) => {
            keyval_from_name(name).ok_or(AccelError::WrongType {
                found: value.type_name(),
                expected: "a key value or key name",
            })
        }
        other => Err(AccelError::WrongType {
            found: other.type_name(),
            expected: "a key value or key name",
        }),
    }
}

/// A key argument that must already be a key value. Names are not resolved.
pub(crate) fn key_code(value: &HostValue) -> Result<u32, AccelError> {
    match value {
        HostValue::Int(key) => u32::try_from(*key).map_err(|_| AccelError::WrongType {
            found: "integer",
            expected: "a non-negative key value",
        }),
        other => Err(AccelError::WrongType {
            found: other.type_name(),
            expected: "integer",
        }),
    }
}

pub(crate) fn path_value(value: &HostValue) -> Result<&str, AccelError> {
    match value {
        HostValue::Str(path) => Ok(path.as_str()),
        other => Err(AccelError::WrongType {
            found: other.type_name(),
            expected: "string",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{AccelFlags, ModifierType};

    #[test]
    fn mask_from_integer() {
        let input = mask_input::<ModifierType>(&HostValue::Int(4)).unwrap();
        assert_eq!(input.resolve().unwrap(), ModifierType::CONTROL);
    }

    #[test]
    fn mask_from_names() {
        let single = mask_input::<ModifierType>(&HostValue::sym("shift")).unwrap();
        assert_eq!(single.resolve().unwrap(), ModifierType::SHIFT);

        let list = mask_input::<AccelFlags>(&HostValue::from(vec![
            HostValue::sym("visible"),
            HostValue::str("locked"),
        ]))
        .unwrap();
        assert_eq!(list.resolve().unwrap(), AccelFlags::VISIBLE | AccelFlags::LOCKED);
    }

    #[test]
    fn mask_rejects_wrong_types() {
        for value in [
            HostValue::Nil,
            HostValue::Bool(true),
            HostValue::Int(-1),
            HostValue::from(vec![HostValue::Int(1)]),
        ] {
            let err = mask_input::<ModifierType>(&value).unwrap_err();
            assert!(matches!(err, AccelError::WrongType { .. }), "{value:?}");
        }
    }

    #[test]
    fn empty_name_array_fails_on_resolve() {
        let input = mask_input::<ModifierType>(&HostValue::Array(Vec::new())).unwrap();
        assert!(matches!(input.resolve(), Err(AccelError::WrongType { .. })));
    }

    #[test]
    fn key_from_integer_or_name() {
        assert_eq!(key_value(&HostValue::Int(113)).unwrap(), 113);
        assert_eq!(key_value(&HostValue::str("q")).unwrap(), 113);
        assert_eq!(key_value(&HostValue::sym("Return")).unwrap(), 0xff0d);
        assert!(key_value(&HostValue::str("NotAKey")).is_err());
        assert!(key_value(&HostValue::Int(-5)).is_err());
        assert!(key_value(&HostValue::Nil).is_err());
    }

    #[test]
    fn key_code_takes_integers_only() {
        assert_eq!(key_code(&HostValue::Int(113)).unwrap(), 113);
        for value in [HostValue::str("1"), HostValue::sym("q"), HostValue::Int(-1), HostValue::Nil] {
            let err = key_code(&value).unwrap_err();
            assert!(matches!(err, AccelError::WrongType { .. }), "{value:?}");
        }
    }

    #[test]
    fn path_must_be_a_string() {
        assert_eq!(path_value(&HostValue::str("<Test>/A")).unwrap(), "<Test>/A");
        let err = path_value(&HostValue::Int(1)).unwrap_err();
        assert_eq!(err.to_string(), "wrong argument type integer (expected string)");
    }

    #[test]
    fn arity_message() {
        let err = check_arity(&[HostValue::Nil], 3, "3").unwrap_err();
        assert_eq!(err.to_string(), "wrong number of arguments (given 1 for 3)");
    }
}
