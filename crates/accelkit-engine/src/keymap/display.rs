use super::keyval::{keyval_label, keyval_name, keyval_to_lower};
use super::types::ModifierType;

/// Modifier tokens in the order they are written by [`accelerator_name`].
/// Every bit of [`ModifierType::MODIFIER`] has one.
pub(super) const NAME_TOKENS: &[(ModifierType, &str)] = &[
    (ModifierType::RELEASE, "<Release>"),
    (ModifierType::CONTROL, "<Primary>"),
    (ModifierType::SHIFT, "<Shift>"),
    (ModifierType::LOCK, "<Lock>"),
    (ModifierType::MOD1, "<Alt>"),
    (ModifierType::MOD2, "<Mod2>"),
    (ModifierType::MOD3, "<Mod3>"),
    (ModifierType::MOD4, "<Mod4>"),
    (ModifierType::MOD5, "<Mod5>"),
    (ModifierType::BUTTON1, "<Button1>"),
    (ModifierType::BUTTON2, "<Button2>"),
    (ModifierType::BUTTON3, "<Button3>"),
    (ModifierType::BUTTON4, "<Button4>"),
    (ModifierType::BUTTON5, "<Button5>"),
    (ModifierType::SUPER, "<Super>"),
    (ModifierType::HYPER, "<Hyper>"),
    (ModifierType::META, "<Meta>"),
];

const LABEL_TOKENS: &[(ModifierType, &str)] = &[
    (ModifierType::SHIFT, "Shift"),
    (ModifierType::CONTROL, "Ctrl"),
    (ModifierType::MOD1, "Alt"),
    (ModifierType::MOD2, "Mod2"),
    (ModifierType::MOD3, "Mod3"),
    (ModifierType::MOD4, "Mod4"),
    (ModifierType::MOD5, "Mod5"),
    (ModifierType::SUPER, "Super"),
    (ModifierType::HYPER, "Hyper"),
    (ModifierType::META, "Meta"),
];

/// Machine-readable accelerator name, e.g. `<Primary>q`.
///
/// This is the format stored in accelerator map files and understood by
/// [`accelerator_parse`](super::accelerator_parse). Returns an empty string
/// when the key has no name.
pub fn accelerator_name(key: u32, modifier: ModifierType) -> String {
    let Some(key_name) = keyval_name(keyval_to_lower(key)) else {
        return String::new();
    };
    let modifier = modifier & ModifierType::MODIFIER;

    let mut name = String::new();
    for (mask, token) in NAME_TOKENS {
        if modifier.contains(*mask) {
            name.push_str(token);
        }
    }
    name.push_str(&key_name);
    name
}

/// Human-readable accelerator label, e.g. `Ctrl+Q`.
///
/// Returns an empty string when the key has no label.
pub fn accelerator_label(key: u32, modifier: ModifierType) -> String {
    let Some(key_label) = keyval_label(key) else {
        return String::new();
    };

    let mut parts: Vec<&str> = LABEL_TOKENS
        .iter()
        .filter(|(mask, _)| modifier.contains(*mask))
        .map(|(_, token)| *token)
        .collect();
    parts.push(&key_label);
    parts.join("+")
}
