//! Modifier and flag registries, accelerator keys, and accelerator naming.

mod display;
mod keyval;
mod parse;
mod types;

pub use display::{accelerator_label, accelerator_name};
pub use keyval::{accelerator_valid, keyval_from_name, keyval_label, keyval_name, keyval_to_lower};
pub use parse::accelerator_parse;
pub use types::{
    default_modifier, set_default_modifier, AccelFlags, AccelKey, FlagInput, MaskInput,
    ModifierInput, ModifierType, NamedMask,
};
