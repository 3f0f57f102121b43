use std::cell::{Cell, RefCell};
use std::rc::Rc;

use accelkit_common::{HostValue, SignalError};

use super::*;

fn record(log: &Rc<RefCell<Vec<String>>>, tag: &str) -> impl Fn(&SignalEmission<'_>) + 'static {
    let log = log.clone();
    let tag = tag.to_string();
    move |_| log.borrow_mut().push(tag.clone())
}

#[test]
fn connect_returns_increasing_handles() {
    let widget = Widget::new();
    let first = widget.connect("destroy", ConnectOptions::default(), |_| {}).unwrap();
    let second = widget.connect("destroy", ConnectOptions::default(), |_| {}).unwrap();

    assert!(first.get() > 0);
    assert!(second > first);
}

#[test]
fn handles_are_unique_across_widgets() {
    let a = Widget::new();
    let b = Widget::with_class(WidgetClass::Window);
    let ha = a.connect("show", ConnectOptions::default(), |_| {}).unwrap();
    let hb = b.connect("show", ConnectOptions::default(), |_| {}).unwrap();
    assert_ne!(ha, hb);
}

#[test]
fn unknown_signal_is_rejected() {
    let widget = Widget::with_class(WidgetClass::Window);
    let err = widget
        .connect("does-not-exist", ConnectOptions::default(), |_| {})
        .unwrap_err();
    assert!(matches!(err, SignalError::InvalidName(ref name) if name == "does-not-exist"));
    assert_eq!(err.to_string(), "invalid signal name");
}

#[test]
fn window_only_signal_needs_window_class() {
    let widget = Widget::new();
    assert!(widget.connect("keys-changed", ConnectOptions::default(), |_| {}).is_err());

    let window = Widget::with_class(WidgetClass::Window);
    assert!(window.connect("keys_changed", ConnectOptions::default(), |_| {}).is_ok());
}

#[test]
fn emit_orders_before_default_after() {
    let widget = Widget::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    widget.connect("show", ConnectOptions::after(), record(&log, "after-1")).unwrap();
    widget.connect("show", ConnectOptions::default(), record(&log, "default-1")).unwrap();
    widget.connect("show", ConnectOptions::before(), record(&log, "before-1")).unwrap();
    widget.connect("show", ConnectOptions::default(), record(&log, "default-2")).unwrap();
    widget.connect("show", ConnectOptions::before(), record(&log, "before-2")).unwrap();
    widget.connect("hide", ConnectOptions::default(), record(&log, "hide")).unwrap();

    assert_eq!(widget.emit("show").unwrap(), 5);
    assert_eq!(
        *log.borrow(),
        vec!["before-1", "before-2", "default-1", "default-2", "after-1"]
    );
}

#[test]
fn emit_unknown_signal_is_an_error() {
    let widget = Widget::new();
    assert!(matches!(
        widget.emit("nope"),
        Err(SignalError::InvalidName(_))
    ));
}

#[test]
fn emission_carries_handle_and_user_data() {
    let widget = Widget::new();
    let seen = Rc::new(RefCell::new(None));
    let sink = seen.clone();
    let handle = widget
        .connect(
            "map",
            ConnectOptions::default().with_user_data("payload"),
            move |emission| {
                *sink.borrow_mut() = Some((
                    emission.signal.to_string(),
                    emission.handle,
                    emission.user_data.cloned(),
                ));
            },
        )
        .unwrap();

    widget.emit("map").unwrap();
    assert_eq!(
        *seen.borrow(),
        Some(("map".to_string(), handle, Some(HostValue::str("payload"))))
    );
}

#[test]
fn disconnect_removes_handler_once() {
    let widget = Widget::new();
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let handle = widget
        .connect("show", ConnectOptions::default(), move |_| counter.set(counter.get() + 1))
        .unwrap();

    assert!(widget.is_connected(handle));
    assert!(widget.disconnect(handle));
    assert!(!widget.disconnect(handle));
    widget.emit("show").unwrap();
    assert_eq!(calls.get(), 0);
}

#[test]
fn handler_may_connect_during_emission() {
    let widget = Widget::new();
    let other = widget.clone();
    widget
        .connect("show", ConnectOptions::default(), move |_| {
            other.connect("show", ConnectOptions::default(), |_| {}).unwrap();
        })
        .unwrap();

    assert_eq!(widget.emit("show").unwrap(), 1);
    assert_eq!(widget.handler_count(), 2);
}

#[test]
fn destroy_emits_then_drops_handlers() {
    let widget = Widget::with_class(WidgetClass::Window);
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    widget
        .connect("destroy", ConnectOptions::default(), move |_| counter.set(counter.get() + 1))
        .unwrap();
    widget.connect("show", ConnectOptions::default(), |_| {}).unwrap();

    widget.destroy();
    assert_eq!(calls.get(), 1);
    assert!(widget.is_destroyed());
    assert_eq!(widget.handler_count(), 0);

    widget.destroy();
    assert_eq!(calls.get(), 1);
    assert_eq!(widget.emit("show").unwrap(), 0);

    let err = widget.connect("show", ConnectOptions::default(), |_| {}).unwrap_err();
    assert!(matches!(err, SignalError::Destroyed));
}

#[test]
fn destroy_from_destroy_handler_runs_once() {
    let widget = Widget::new();
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let inner = widget.clone();
    widget
        .connect("destroy", ConnectOptions::default(), move |_| {
            counter.set(counter.get() + 1);
            inner.destroy();
            assert!(!inner.is_destroyed());
        })
        .unwrap();
    widget.connect("destroy", ConnectOptions::after(), |_| {}).unwrap();

    widget.destroy();
    assert_eq!(calls.get(), 1);
    assert!(widget.is_destroyed());
    assert_eq!(widget.handler_count(), 0);
}

#[test]
fn destroy_releases_callbacks() {
    let widget = Widget::new();
    let token = Rc::new(());
    let held = token.clone();
    widget
        .connect("show", ConnectOptions::default(), move |_| {
            let _ = &held;
        })
        .unwrap();
    assert_eq!(Rc::strong_count(&token), 2);

    widget.destroy();
    assert_eq!(Rc::strong_count(&token), 1);
}

#[test]
fn position_tokens() {
    assert_eq!(SignalPosition::from_name("before"), Some(SignalPosition::Before));
    assert_eq!(SignalPosition::from_name("after"), Some(SignalPosition::After));
    assert_eq!(SignalPosition::from_name("does-not-exist"), None);
}

#[test]
fn queue_defers_emission_until_pumped() {
    let queue = EventQueue::new();
    let widget = Widget::new();
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    widget
        .connect("size-allocate", ConnectOptions::default(), move |_| counter.set(counter.get() + 1))
        .unwrap();

    queue.queue_emit(&widget, "size_allocate").unwrap();
    queue.queue_emit(&widget, "size-allocate").unwrap();
    assert!(queue.events_pending());
    assert_eq!(calls.get(), 0);

    while queue.events_pending() {
        queue.main_iteration();
    }
    assert_eq!(calls.get(), 2);
    assert!(!queue.main_iteration());
}

#[test]
fn queue_rejects_unknown_signal() {
    let queue = EventQueue::new();
    let widget = Widget::new();
    assert!(queue.queue_emit(&widget, "nope").is_err());
    assert!(queue.is_empty());
}

#[test]
fn flush_runs_work_queued_by_tasks() {
    let queue = Rc::new(EventQueue::new());
    let ran = Rc::new(Cell::new(0));

    let inner_queue = queue.clone();
    let inner_ran = ran.clone();
    queue.push(move || {
        inner_ran.set(inner_ran.get() + 1);
        let again = inner_ran.clone();
        inner_queue.push(move || again.set(again.get() + 1));
    });

    assert_eq!(queue.flush(), 2);
    assert_eq!(ran.get(), 2);
    assert!(!queue.events_pending());
}
