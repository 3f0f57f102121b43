//! Top-level window: a widget that carries accelerator groups.

use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

use crate::accel_group::AccelGroup;
use crate::keymap::ModifierType;
use crate::signal::{Widget, WidgetClass};

/// A [`Widget`] of class `Window` with an ordered list of attached
/// accelerator groups.
#[derive(Clone)]
pub struct Window {
    widget: Widget,
    groups: Rc<RefCell<Vec<AccelGroup>>>,
}

impl Default for Window {
    fn default() -> Self {
        Self::new()
    }
}

impl Window {
    pub fn new() -> Self {
        Self {
            widget: Widget::with_class(WidgetClass::Window),
            groups: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn widget(&self) -> &Widget {
        &self.widget
    }

    /// Attach `group`. Attaching a group that is already attached does
    /// nothing. Emits `keys-changed` when the set of groups changes.
    pub fn add_accel_group(&self, group: &AccelGroup) {
        {
            let mut groups = self.groups.borrow_mut();
            if groups.iter().any(|g| g.same(group)) {
                return;
            }
            groups.push(group.clone());
        }
        self.keys_changed();
    }

    /// Detach `group`. Returns whether it was attached.
    pub fn remove_accel_group(&self, group: &AccelGroup) -> bool {
        let removed = {
            let mut groups = self.groups.borrow_mut();
            let before = groups.len();
            groups.retain(|g| !g.same(group));
            before != groups.len()
        };
        if removed {
            self.keys_changed();
        }
        removed
    }

    pub fn accel_groups(&self) -> Vec<AccelGroup> {
        self.groups.borrow().clone()
    }

    /// Offer a key press to the attached groups in attachment order. Returns
    /// `true` as soon as one of them handles it.
    pub fn activate_key(&self, key: u32, modifier: ModifierType) -> bool {
        if self.widget.is_destroyed() {
            return false;
        }
        let groups = self.accel_groups();
        groups.iter().any(|group| group.activate(key, modifier))
    }

    /// Destroy the underlying widget and detach every group.
    pub fn destroy(&self) {
        self.widget.destroy();
        self.groups.borrow_mut().clear();
    }

    fn keys_changed(&self) {
        if let Err(e) = self.widget.emit("keys-changed") {
            tracing::warn!("keys-changed emission failed: {e}");
        }
    }
}

impl Deref for Window {
    type Target = Widget;

    fn deref(&self) -> &Widget {
        &self.widget
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::signal::ConnectOptions;

    fn counting_group(key: u32, hits: &Rc<Cell<u32>>, handled: bool) -> AccelGroup {
        let group = AccelGroup::new();
        let hits = hits.clone();
        group
            .connect(key, "control", "visible", move |_, _| {
                hits.set(hits.get() + 1);
                handled
            })
            .unwrap();
        group
    }

    #[test]
    fn new_window_has_window_class() {
        let window = Window::new();
        assert_eq!(window.class(), WidgetClass::Window);
        assert!(window.accel_groups().is_empty());
    }

    #[test]
    fn activate_key_routes_to_groups_in_order() {
        let window = Window::new();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        window.add_accel_group(&counting_group(113, &first, false));
        window.add_accel_group(&counting_group(113, &second, true));

        assert!(window.activate_key(113, ModifierType::CONTROL));
        assert_eq!((first.get(), second.get()), (1, 1));

        assert!(!window.activate_key(119, ModifierType::CONTROL));
    }

    #[test]
    fn first_handling_group_wins() {
        let window = Window::new();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        window.add_accel_group(&counting_group(113, &first, true));
        window.add_accel_group(&counting_group(113, &second, true));

        assert!(window.activate_key(113, ModifierType::CONTROL));
        assert_eq!((first.get(), second.get()), (1, 0));
    }

    #[test]
    fn add_and_remove_groups() {
        let window = Window::new();
        let group = AccelGroup::new();

        window.add_accel_group(&group);
        window.add_accel_group(&group);
        assert_eq!(window.accel_groups().len(), 1);

        assert!(window.remove_accel_group(&group));
        assert!(!window.remove_accel_group(&group));
        assert!(window.accel_groups().is_empty());
    }

    #[test]
    fn group_changes_emit_keys_changed() {
        let window = Window::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        window
            .connect("keys-changed", ConnectOptions::default(), move |e| {
                sink.borrow_mut().push(e.signal.to_string())
            })
            .unwrap();

        let group = AccelGroup::new();
        window.add_accel_group(&group);
        window.remove_accel_group(&group);
        window.remove_accel_group(&group);

        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn groups_bound_later_are_seen() {
        let window = Window::new();
        let group = AccelGroup::new();
        window.add_accel_group(&group);

        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        group
            .connect(97, "mod1", "visible", move |_, _| {
                counter.set(counter.get() + 1);
                true
            })
            .unwrap();

        assert!(window.activate_key(97, ModifierType::MOD1));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn destroyed_window_activates_nothing() {
        let window = Window::new();
        let hits = Rc::new(Cell::new(0));
        window.add_accel_group(&counting_group(113, &hits, true));

        window.destroy();
        assert!(window.is_destroyed());
        assert!(window.accel_groups().is_empty());
        assert!(!window.activate_key(113, ModifierType::CONTROL));
        assert_eq!(hits.get(), 0);
    }
}
