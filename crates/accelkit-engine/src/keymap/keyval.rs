//! Key value naming table.
//!
//! Key values follow the X keysym numbering the toolkit uses: printable
//! ASCII maps to its code point, function and editing keys live in the
//! `0xff00` page.

use super::types::ModifierType;

const ASCII_NAMES: &[(u32, &str)] = &[
    (0x20, "space"),
    (0x21, "exclam"),
    (0x22, "quotedbl"),
    (0x23, "numbersign"),
    (0x24, "dollar"),
    (0x25, "percent"),
    (0x26, "ampersand"),
    (0x27, "apostrophe"),
    (0x28, "parenleft"),
    (0x29, "parenright"),
    (0x2a, "asterisk"),
    (0x2b, "plus"),
    (0x2c, "comma"),
    (0x2d, "minus"),
    (0x2e, "period"),
    (0x2f, "slash"),
    (0x3a, "colon"),
    (0x3b, "semicolon"),
    (0x3c, "less"),
    (0x3d, "equal"),
    (0x3e, "greater"),
    (0x3f, "question"),
    (0x40, "at"),
    (0x5b, "bracketleft"),
    (0x5c, "backslash"),
    (0x5d, "bracketright"),
    (0x5e, "asciicircum"),
    (0x5f, "underscore"),
    (0x60, "grave"),
    (0x7b, "braceleft"),
    (0x7c, "bar"),
    (0x7d, "braceright"),
    (0x7e, "asciitilde"),
];

/// Latin-1 supplement, `0xa0..=0xff`.
const LATIN1_NAMES: &[(u32, &str)] = &[
    (0xa0, "nobreakspace"),
    (0xa1, "exclamdown"),
    (0xa2, "cent"),
    (0xa3, "sterling"),
    (0xa4, "currency"),
    (0xa5, "yen"),
    (0xa6, "brokenbar"),
    (0xa7, "section"),
    (0xa8, "diaeresis"),
    (0xa9, "copyright"),
    (0xaa, "ordfeminine"),
    (0xab, "guillemotleft"),
    (0xac, "notsign"),
    (0xad, "hyphen"),
    (0xae, "registered"),
    (0xaf, "macron"),
    (0xb0, "degree"),
    (0xb1, "plusminus"),
    (0xb2, "twosuperior"),
    (0xb3, "threesuperior"),
    (0xb4, "acute"),
    (0xb5, "mu"),
    (0xb6, "paragraph"),
    (0xb7, "periodcentered"),
    (0xb8, "cedilla"),
    (0xb9, "onesuperior"),
    (0xba, "masculine"),
    (0xbb, "guillemotright"),
    (0xbc, "onequarter"),
    (0xbd, "onehalf"),
    (0xbe, "threequarters"),
    (0xbf, "questiondown"),
    (0xc0, "Agrave"),
    (0xc1, "Aacute"),
    (0xc2, "Acircumflex"),
    (0xc3, "Atilde"),
    (0xc4, "Adiaeresis"),
    (0xc5, "Aring"),
    (0xc6, "AE"),
    (0xc7, "Ccedilla"),
    (0xc8, "Egrave"),
    (0xc9, "Eacute"),
    (0xca, "Ecircumflex"),
    (0xcb, "Ediaeresis"),
    (0xcc, "Igrave"),
    (0xcd, "Iacute"),
    (0xce, "Icircumflex"),
    (0xcf, "Idiaeresis"),
    (0xd0, "ETH"),
    (0xd1, "Ntilde"),
    (0xd2, "Ograve"),
    (0xd3, "Oacute"),
    (0xd4, "Ocircumflex"),
    (0xd5, "Otilde"),
    (0xd6, "Odiaeresis"),
    (0xd7, "multiply"),
    (0xd8, "Oslash"),
    (0xd9, "Ugrave"),
    (0xda, "Uacute"),
    (0xdb, "Ucircumflex"),
    (0xdc, "Udiaeresis"),
    (0xdd, "Yacute"),
    (0xde, "THORN"),
    (0xdf, "ssharp"),
    (0xe0, "agrave"),
    (0xe1, "aacute"),
    (0xe2, "acircumflex"),
    (0xe3, "atilde"),
    (0xe4, "adiaeresis"),
    (0xe5, "aring"),
    (0xe6, "ae"),
    (0xe7, "ccedilla"),
    (0xe8, "egrave"),
    (0xe9, "eacute"),
    (0xea, "ecircumflex"),
    (0xeb, "ediaeresis"),
    (0xec, "igrave"),
    (0xed, "iacute"),
    (0xee, "icircumflex"),
    (0xef, "idiaeresis"),
    (0xf0, "eth"),
    (0xf1, "ntilde"),
    (0xf2, "ograve"),
    (0xf3, "oacute"),
    (0xf4, "ocircumflex"),
    (0xf5, "otilde"),
    (0xf6, "odiaeresis"),
    (0xf7, "division"),
    (0xf8, "oslash"),
    (0xf9, "ugrave"),
    (0xfa, "uacute"),
    (0xfb, "ucircumflex"),
    (0xfc, "udiaeresis"),
    (0xfd, "yacute"),
    (0xfe, "thorn"),
    (0xff, "ydiaeresis"),
];

const SPECIAL_NAMES: &[(u32, &str)] = &[
    (0xff08, "BackSpace"),
    (0xff09, "Tab"),
    (0xff0a, "Linefeed"),
    (0xff0b, "Clear"),
    (0xff0d, "Return"),
    (0xff13, "Pause"),
    (0xff14, "Scroll_Lock"),
    (0xff15, "Sys_Req"),
    (0xff1b, "Escape"),
    (0xff50, "Home"),
    (0xff51, "Left"),
    (0xff52, "Up"),
    (0xff53, "Right"),
    (0xff54, "Down"),
    (0xff55, "Page_Up"),
    (0xff56, "Page_Down"),
    (0xff57, "End"),
    (0xff58, "Begin"),
    (0xff60, "Select"),
    (0xff61, "Print"),
    (0xff62, "Execute"),
    (0xff63, "Insert"),
    (0xff65, "Undo"),
    (0xff66, "Redo"),
    (0xff67, "Menu"),
    (0xff68, "Find"),
    (0xff69, "Cancel"),
    (0xff6a, "Help"),
    (0xff6b, "Break"),
    (0xff7f, "Num_Lock"),
    (0xff80, "KP_Space"),
    (0xff89, "KP_Tab"),
    (0xff8d, "KP_Enter"),
    (0xff91, "KP_F1"),
    (0xff92, "KP_F2"),
    (0xff93, "KP_F3"),
    (0xff94, "KP_F4"),
    (0xff95, "KP_Home"),
    (0xff96, "KP_Left"),
    (0xff97, "KP_Up"),
    (0xff98, "KP_Right"),
    (0xff99, "KP_Down"),
    (0xff9a, "KP_Page_Up"),
    (0xff9b, "KP_Page_Down"),
    (0xff9c, "KP_End"),
    (0xff9d, "KP_Begin"),
    (0xff9e, "KP_Insert"),
    (0xff9f, "KP_Delete"),
    (0xffaa, "KP_Multiply"),
    (0xffab, "KP_Add"),
    (0xffac, "KP_Separator"),
    (0xffad, "KP_Subtract"),
    (0xffae, "KP_Decimal"),
    (0xffaf, "KP_Divide"),
    (0xffb0, "KP_0"),
    (0xffb1, "KP_1"),
    (0xffb2, "KP_2"),
    (0xffb3, "KP_3"),
    (0xffb4, "KP_4"),
    (0xffb5, "KP_5"),
    (0xffb6, "KP_6"),
    (0xffb7, "KP_7"),
    (0xffb8, "KP_8"),
    (0xffb9, "KP_9"),
    (0xffbd, "KP_Equal"),
    (0xffe1, "Shift_L"),
    (0xffe2, "Shift_R"),
    (0xffe3, "Control_L"),
    (0xffe4, "Control_R"),
    (0xffe5, "Caps_Lock"),
    (0xffe6, "Shift_Lock"),
    (0xffe7, "Meta_L"),
    (0xffe8, "Meta_R"),
    (0xffe9, "Alt_L"),
    (0xffea, "Alt_R"),
    (0xffeb, "Super_L"),
    (0xffec, "Super_R"),
    (0xffed, "Hyper_L"),
    (0xffee, "Hyper_R"),
    (0xfe20, "ISO_Left_Tab"),
    (0xffff, "Delete"),
];

/// `F1` is `0xffbe`; function keys run contiguously up to `F35`.
const FUNCTION_KEYS: std::ops::RangeInclusive<u32> = 0xffbe..=0xffe0;

/// Key values that can never form an accelerator on their own.
const UNBINDABLE: &[u32] = &[
    0xff7f, // Num_Lock
    0xfe01, // ISO_Lock
    0xfe02, // ISO_Level2_Latch
    0xfe03, // ISO_Level3_Shift
    0xfe04, // ISO_Level3_Latch
    0xfe05, // ISO_Level3_Lock
    0xfe06, // ISO_Group_Latch
    0xfe07, // ISO_Group_Lock
    0xfe08, // ISO_Next_Group
    0xfe20, // ISO_Left_Tab
];

const MODIFIER_KEYS: std::ops::RangeInclusive<u32> = 0xffe1..=0xffee;

/// The canonical name of a key value, or `None` for the "no key" value 0.
///
/// Keys without a symbolic name are named by their hex value (`0x1008ff13`),
/// which [`keyval_from_name`] reads back, so every key survives a trip
/// through an accelerator map file.
pub fn keyval_name(key: u32) -> Option<String> {
    if key == 0 {
        return None;
    }
    if let Some(name) = named(key) {
        return Some(name.to_string());
    }
    if FUNCTION_KEYS.contains(&key) {
        return Some(format!("F{}", key - FUNCTION_KEYS.start() + 1));
    }
    match char::from_u32(key) {
        Some(c) if c.is_ascii_alphanumeric() => Some(c.to_string()),
        _ => Some(format!("{key:#x}")),
    }
}

/// Resolve a key name (or a single printable character) to its key value.
///
/// Names are case sensitive: `q` and `Q` are different keys. Hex values
/// such as `0xffca` are accepted for keys without a name.
pub fn keyval_from_name(name: &str) -> Option<u32> {
    if let Some(code) = [ASCII_NAMES, LATIN1_NAMES, SPECIAL_NAMES]
        .iter()
        .find_map(|table| lookup_name(table, name))
    {
        return Some(code);
    }
    if let Some(code) = function_key(name) {
        return Some(code);
    }
    if let Some(hex) = name.strip_prefix("0x") {
        return u32::from_str_radix(hex, 16).ok().filter(|code| *code != 0);
    }
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_graphic() || c == ' ' || ('\u{a0}'..='\u{ff}').contains(&c) => {
            Some(c as u32)
        }
        _ => None,
    }
}

/// Human-readable form of a key value, as shown in menus.
pub fn keyval_label(key: u32) -> Option<String> {
    match key {
        0x20 => return Some("Space".into()),
        0xff08 => return Some("Backspace".into()),
        _ => {}
    }
    if let Some(c) = char::from_u32(key).filter(|c| c.is_ascii_graphic()) {
        return Some(c.to_ascii_uppercase().to_string());
    }
    if let Some(c) = char::from_u32(key).filter(|_| (0xa1..=0xff).contains(&key)) {
        return Some(c.to_uppercase().collect());
    }
    if let Some(name) = lookup_code(SPECIAL_NAMES, key) {
        return Some(name.replace('_', " "));
    }
    keyval_name(key)
}

/// Lowercase variant of a key value; non-letters are returned unchanged.
pub fn keyval_to_lower(key: u32) -> u32 {
    match char::from_u32(key) {
        Some(c) if c.is_ascii_uppercase() => c.to_ascii_lowercase() as u32,
        _ => key,
    }
}

/// Whether `(key, modifier)` can be installed as an accelerator.
pub fn accelerator_valid(key: u32, modifier: ModifierType) -> bool {
    if ModifierType::from_bits(modifier.bits()).is_none() {
        return false;
    }
    if key <= 0xff {
        return key >= 0x20;
    }
    !MODIFIER_KEYS.contains(&key) && !UNBINDABLE.contains(&key)
}

fn named(key: u32) -> Option<&'static str> {
    [ASCII_NAMES, LATIN1_NAMES, SPECIAL_NAMES]
        .iter()
        .find_map(|table| lookup_code(table, key))
}

fn function_key(name: &str) -> Option<u32> {
    let number: u32 = name.strip_prefix('F')?.parse().ok()?;
    let code = FUNCTION_KEYS.start().checked_add(number.checked_sub(1)?)?;
    FUNCTION_KEYS.contains(&code).then_some(code)
}

fn lookup_code(table: &[(u32, &'static str)], key: u32) -> Option<&'static str> {
    table.iter().find(|(code, _)| *code == key).map(|(_, name)| *name)
}

fn lookup_name(table: &[(u32, &str)], name: &str) -> Option<u32> {
    table.iter().find(|(_, n)| *n == name).map(|(code, _)| *code)
}
