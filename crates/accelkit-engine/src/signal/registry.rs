//! Per-class signal tables.
//!
//! Each widget class declares the signals it adds on top of its parent
//! class; lookups walk up the chain.

use std::fmt;

const WIDGET_SIGNALS: &[&str] = &[
    "destroy",
    "show",
    "hide",
    "map",
    "unmap",
    "realize",
    "unrealize",
    "key-press-event",
    "key-release-event",
    "focus-in-event",
    "focus-out-event",
    "draw",
    "size-allocate",
];

const WINDOW_SIGNALS: &[&str] = &["activate-default", "activate-focus", "keys-changed", "set-focus"];

/// The dynamic type of a signal-bearing object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetClass {
    Widget,
    Window,
}

impl WidgetClass {
    pub fn name(self) -> &'static str {
        match self {
            WidgetClass::Widget => "Widget",
            WidgetClass::Window => "Window",
        }
    }

    pub fn parent(self) -> Option<WidgetClass> {
        match self {
            WidgetClass::Widget => None,
            WidgetClass::Window => Some(WidgetClass::Widget),
        }
    }

    /// Signals introduced by this class itself, without inherited ones.
    fn own_signals(self) -> &'static [&'static str] {
        match self {
            WidgetClass::Widget => WIDGET_SIGNALS,
            WidgetClass::Window => WINDOW_SIGNALS,
        }
    }

    /// Every signal this class accepts, parent classes first.
    pub fn signals(self) -> Vec<&'static str> {
        let mut chain = vec![self];
        while let Some(parent) = chain.last().and_then(|class| class.parent()) {
            chain.push(parent);
        }
        chain
            .into_iter()
            .rev()
            .flat_map(|class| class.own_signals().iter().copied())
            .collect()
    }

    /// Resolve `name` to the registered signal it denotes, if any.
    ///
    /// Underscores and dashes are interchangeable: `key_press_event` and
    /// `key-press-event` name the same signal.
    pub fn lookup_signal(self, name: &str) -> Option<&'static str> {
        let canonical = canonical_signal_name(name);
        let mut class = Some(self);
        while let Some(current) = class {
            if let Some(found) = current.own_signals().iter().find(|s| **s == canonical) {
                return Some(*found);
            }
            class = current.parent();
        }
        None
    }

    pub fn has_signal(self, name: &str) -> bool {
        self.lookup_signal(name).is_some()
    }
}

impl fmt::Display for WidgetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn canonical_signal_name(name: &str) -> String {
    name.replace('_', "-")
}
