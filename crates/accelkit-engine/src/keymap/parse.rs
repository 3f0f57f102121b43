use super::keyval::{keyval_from_name, keyval_to_lower};
use super::types::ModifierType;

/// Parses a machine-readable accelerator name like `"<Control>q"`,
/// `"<Primary><Shift>F5"` or `"<Alt>Return"` into `(key, modifier)`.
///
/// Modifier tokens are case-insensitive and accept the usual aliases:
/// - `<Control>` / `<Ctrl>` / `<Ctl>` / `<Primary>` -> `CONTROL`
/// - `<Shift>` / `<Shft>` -> `SHIFT`
/// - `<Alt>` / `<Mod1>` -> `MOD1`
/// - `<Lock>`, `<Mod2>` .. `<Mod5>`, `<Button1>` .. `<Button5>`
/// - `<Super>`, `<Hyper>`, `<Meta>`, `<Release>`
///
/// Letter keys are normalized to lowercase. The empty string parses to the
/// "no accelerator" value `(0, empty)`. Returns `None` for unknown tokens,
/// unknown key names, or modifiers without a key.
pub fn accelerator_parse(accelerator: &str) -> Option<(u32, ModifierType)> {
    let mut modifier = ModifierType::empty();
    let mut rest = accelerator.trim();

    while let Some(after_open) = rest.strip_prefix('<') {
        let close = after_open.find('>')?;
        modifier |= normalize_modifier_token(&after_open[..close])?;
        rest = &after_open[close + 1..];
    }

    if rest.is_empty() {
        return modifier.is_empty().then_some((0, modifier));
    }

    let key = keyval_from_name(rest)?;
    Some((keyval_to_lower(key), modifier))
}

pub(super) fn normalize_modifier_token(token: &str) -> Option<ModifierType> {
    match token.to_lowercase().as_str() {
        "control" | "ctrl" | "ctl" | "primary" => Some(ModifierType::CONTROL),
        "shift" | "shft" => Some(ModifierType::SHIFT),
        "lock" => Some(ModifierType::LOCK),
        "alt" | "mod1" => Some(ModifierType::MOD1),
        "mod2" => Some(ModifierType::MOD2),
        "mod3" => Some(ModifierType::MOD3),
        "mod4" => Some(ModifierType::MOD4),
        "mod5" => Some(ModifierType::MOD5),
        "button1" => Some(ModifierType::BUTTON1),
        "button2" => Some(ModifierType::BUTTON2),
        "button3" => Some(ModifierType::BUTTON3),
        "button4" => Some(ModifierType::BUTTON4),
        "button5" => Some(ModifierType::BUTTON5),
        "super" => Some(ModifierType::SUPER),
        "hyper" => Some(ModifierType::HYPER),
        "meta" => Some(ModifierType::META),
        "release" => Some(ModifierType::RELEASE),
        _ => None,
    }
}
