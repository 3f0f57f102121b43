//! Pending-work pump.
//!
//! The toolkit's event loop is abstracted as [`EventPump`]. [`EventQueue`] is
//! the in-process implementation used for deferred signal emission.

use std::cell::RefCell;
use std::collections::VecDeque;

use accelkit_common::SignalError;

use super::widget::Widget;

pub trait EventPump {
    /// Whether dispatching work is waiting.
    fn events_pending(&self) -> bool;

    /// Dispatch one unit of pending work. Returns `false` when nothing was
    /// pending.
    fn main_iteration(&self) -> bool;

    /// Run iterations until nothing is pending; returns how many ran.
    fn flush(&self) -> usize {
        let mut iterations = 0;
        while self.events_pending() && self.main_iteration() {
            iterations += 1;
        }
        iterations
    }
}

type Task = Box<dyn FnOnce()>;

/// FIFO of deferred work, drained one task per iteration.
#[derive(Default)]
pub struct EventQueue {
    tasks: RefCell<VecDeque<Task>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<F>(&self, task: F)
    where
        F: FnOnce() + 'static,
    {
        self.tasks.borrow_mut().push_back(Box::new(task));
    }

    /// Schedule `signal` to be emitted on `widget` at the next iteration.
    ///
    /// The signal name is checked now so mistakes surface at the call site.
    pub fn queue_emit(&self, widget: &Widget, signal: &str) -> Result<(), SignalError> {
        let signal = widget
            .class()
            .lookup_signal(signal)
            .ok_or_else(|| SignalError::InvalidName(signal.to_string()))?;
        let widget = widget.clone();
        self.push(move || {
            if let Err(e) = widget.emit(signal) {
                tracing::warn!(signal, "deferred emission failed: {e}");
            }
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tasks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.borrow().is_empty()
    }
}

impl EventPump for EventQueue {
    fn events_pending(&self) -> bool {
        !self.is_empty()
    }

    fn main_iteration(&self) -> bool {
        // Pop before running so the task may queue more work.
        let Some(task) = self.tasks.borrow_mut().pop_front() else {
            return false;
        };
        task();
        true
    }
}
