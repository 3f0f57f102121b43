use std::sync::atomic::{AtomicU32, Ordering};

use accelkit_common::AccelError;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Keyboard and pointer modifier state, using the toolkit's bit values.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ModifierType: u32 {
        const SHIFT = 1 << 0;
        const LOCK = 1 << 1;
        const CONTROL = 1 << 2;
        const MOD1 = 1 << 3;
        const MOD2 = 1 << 4;
        const MOD3 = 1 << 5;
        const MOD4 = 1 << 6;
        const MOD5 = 1 << 7;
        const BUTTON1 = 1 << 8;
        const BUTTON2 = 1 << 9;
        const BUTTON3 = 1 << 10;
        const BUTTON4 = 1 << 11;
        const BUTTON5 = 1 << 12;
        const SUPER = 1 << 26;
        const HYPER = 1 << 27;
        const META = 1 << 28;
        const RELEASE = 1 << 30;
        const MODIFIER = 0x5c00_1fff;
    }
}

bitflags! {
    /// Flags attached to an installed accelerator.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct AccelFlags: u32 {
        const VISIBLE = 1 << 0;
        const LOCKED = 1 << 1;
        const MASK = 0x07;
    }
}

const MODIFIER_NAMES: &[(&str, ModifierType)] = &[
    ("shift", ModifierType::SHIFT),
    ("lock", ModifierType::LOCK),
    ("control", ModifierType::CONTROL),
    ("mod1", ModifierType::MOD1),
    ("mod2", ModifierType::MOD2),
    ("mod3", ModifierType::MOD3),
    ("mod4", ModifierType::MOD4),
    ("mod5", ModifierType::MOD5),
    ("button1", ModifierType::BUTTON1),
    ("button2", ModifierType::BUTTON2),
    ("button3", ModifierType::BUTTON3),
    ("button4", ModifierType::BUTTON4),
    ("button5", ModifierType::BUTTON5),
    ("super", ModifierType::SUPER),
    ("hyper", ModifierType::HYPER),
    ("meta", ModifierType::META),
    ("release", ModifierType::RELEASE),
    ("modifier", ModifierType::MODIFIER),
];

const FLAG_NAMES: &[(&str, AccelFlags)] = &[
    ("visible", AccelFlags::VISIBLE),
    ("locked", AccelFlags::LOCKED),
    ("mask", AccelFlags::MASK),
];

/// A closed name <-> bitmask registry.
///
/// Lookups are exact and case sensitive. A miss is `None`, never an error,
/// so callers can probe names speculatively.
pub trait NamedMask: Copy + Sized + 'static {
    const NAMES: &'static [(&'static str, Self)];

    /// Error reported when a name in a [`MaskInput::Names`] list is unknown.
    fn unknown(name: &str) -> AccelError;

    fn lookup(name: &str) -> Option<Self> {
        Self::NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, mask)| *mask)
    }
}

impl NamedMask for ModifierType {
    const NAMES: &'static [(&'static str, Self)] = MODIFIER_NAMES;

    fn unknown(name: &str) -> AccelError {
        AccelError::InvalidModifier(name.to_string())
    }
}

impl NamedMask for AccelFlags {
    const NAMES: &'static [(&'static str, Self)] = FLAG_NAMES;

    fn unknown(name: &str) -> AccelError {
        AccelError::InvalidFlag(name.to_string())
    }
}

impl ModifierType {
    pub fn lookup(name: &str) -> Option<Self> {
        <Self as NamedMask>::lookup(name)
    }
}

impl AccelFlags {
    pub fn lookup(name: &str) -> Option<Self> {
        <Self as NamedMask>::lookup(name)
    }
}

/// A modifier or flag argument: either a ready bitmask or symbolic names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskInput<T> {
    Mask(T),
    Names(Vec<String>),
}

pub type ModifierInput = MaskInput<ModifierType>;
pub type FlagInput = MaskInput<AccelFlags>;

impl<T> MaskInput<T>
where
    T: NamedMask + bitflags::Flags,
{
    /// Resolve to a bitmask, OR-ing every named entry.
    pub fn resolve(&self) -> Result<T, AccelError> {
        match self {
            MaskInput::Mask(mask) => Ok(*mask),
            MaskInput::Names(names) if names.is_empty() => Err(AccelError::WrongType {
                found: "empty name list",
                expected: "a bitmask or at least one name",
            }),
            MaskInput::Names(names) => names.iter().try_fold(T::empty(), |acc, name| {
                let mask = T::lookup(name).ok_or_else(|| T::unknown(name))?;
                Ok(acc.union(mask))
            }),
        }
    }
}

macro_rules! impl_mask_input_from {
    ($ty:ty) => {
        impl From<$ty> for MaskInput<$ty> {
            fn from(mask: $ty) -> Self {
                MaskInput::Mask(mask)
            }
        }

        impl From<&str> for MaskInput<$ty> {
            fn from(name: &str) -> Self {
                MaskInput::Names(vec![name.to_string()])
            }
        }

        impl From<&[&str]> for MaskInput<$ty> {
            fn from(names: &[&str]) -> Self {
                MaskInput::Names(names.iter().map(|n| n.to_string()).collect())
            }
        }

        impl<const N: usize> From<[&str; N]> for MaskInput<$ty> {
            fn from(names: [&str; N]) -> Self {
                MaskInput::Names(names.iter().map(|n| n.to_string()).collect())
            }
        }

        impl From<Vec<String>> for MaskInput<$ty> {
            fn from(names: Vec<String>) -> Self {
                MaskInput::Names(names)
            }
        }
    };
}

impl_mask_input_from!(ModifierType);
impl_mask_input_from!(AccelFlags);

/// An accelerator: key value, modifier mask and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccelKey {
    pub key: u32,
    pub modifier: ModifierType,
    pub flags: AccelFlags,
}

impl AccelKey {
    pub fn new(key: u32, modifier: ModifierType, flags: AccelFlags) -> Self {
        Self {
            key,
            modifier,
            flags,
        }
    }

    /// Build from symbolic modifier/flag inputs, rejecting unknown names.
    pub fn from_symbols(
        key: u32,
        modifier: impl Into<ModifierInput>,
        flags: impl Into<FlagInput>,
    ) -> Result<Self, AccelError> {
        Ok(Self {
            key,
            modifier: modifier.into().resolve()?,
            flags: flags.into().resolve()?,
        })
    }
}

const DEFAULT_MOD_MASK: u32 = ModifierType::SHIFT.bits()
    | ModifierType::CONTROL.bits()
    | ModifierType::MOD1.bits()
    | ModifierType::SUPER.bits()
    | ModifierType::HYPER.bits()
    | ModifierType::META.bits();

static DEFAULT_MODIFIER: AtomicU32 = AtomicU32::new(DEFAULT_MOD_MASK);

/// The process-wide default modifier mask.
///
/// Accelerator activation only considers modifiers inside this mask.
pub fn default_modifier() -> ModifierType {
    ModifierType::from_bits_retain(DEFAULT_MODIFIER.load(Ordering::Relaxed))
}

pub fn set_default_modifier(mask: ModifierType) {
    DEFAULT_MODIFIER.store(mask.bits(), Ordering::Relaxed);
}
