use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use accelkit_common::{HostValue, SignalError, SignalHandle};

use super::registry::WidgetClass;

/// Where a handler runs relative to handlers connected without a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalPosition {
    Before,
    After,
}

impl SignalPosition {
    /// Parse the host token `before` or `after`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "before" => Some(SignalPosition::Before),
            "after" => Some(SignalPosition::After),
            _ => None,
        }
    }
}

/// What a handler sees when its signal fires.
#[derive(Debug)]
pub struct SignalEmission<'a> {
    pub signal: &'a str,
    pub handle: SignalHandle,
    pub user_data: Option<&'a HostValue>,
}

pub type SignalCallback = Rc<dyn Fn(&SignalEmission<'_>)>;

#[derive(Debug, Clone, Default)]
pub struct ConnectOptions {
    pub position: Option<SignalPosition>,
    /// Passed back to the handler on every emission.
    pub user_data: Option<HostValue>,
}

impl ConnectOptions {
    pub fn before() -> Self {
        Self {
            position: Some(SignalPosition::Before),
            ..Self::default()
        }
    }

    pub fn after() -> Self {
        Self {
            position: Some(SignalPosition::After),
            ..Self::default()
        }
    }

    pub fn with_user_data(mut self, data: impl Into<HostValue>) -> Self {
        self.user_data = Some(data.into());
        self
    }
}

struct Handler {
    handle: SignalHandle,
    signal: &'static str,
    position: Option<SignalPosition>,
    user_data: Option<HostValue>,
    callback: SignalCallback,
}

impl Handler {
    fn tier(&self) -> u8 {
        match self.position {
            Some(SignalPosition::Before) => 0,
            None => 1,
            Some(SignalPosition::After) => 2,
        }
    }
}

struct WidgetState {
    class: WidgetClass,
    handlers: Vec<Handler>,
    /// Set while `destroy` handlers run; a nested `destroy` does nothing.
    in_destruction: bool,
    destroyed: bool,
}

/// A signal-bearing UI object.
///
/// Handles are cheap to clone and all refer to the same object.
#[derive(Clone)]
pub struct Widget {
    state: Rc<RefCell<WidgetState>>,
}

impl Default for Widget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget {
    pub fn new() -> Self {
        Self::with_class(WidgetClass::Widget)
    }

    pub fn with_class(class: WidgetClass) -> Self {
        Self {
            state: Rc::new(RefCell::new(WidgetState {
                class,
                handlers: Vec::new(),
                in_destruction: false,
                destroyed: false,
            })),
        }
    }

    pub fn class(&self) -> WidgetClass {
        self.state.borrow().class
    }

    /// Register `callback` for `signal`. Returns a handle that is never
    /// issued again for the rest of the process.
    pub fn connect<F>(
        &self,
        signal: &str,
        options: ConnectOptions,
        callback: F,
    ) -> Result<SignalHandle, SignalError>
    where
        F: Fn(&SignalEmission<'_>) + 'static,
    {
        self.connect_rc(signal, options, Rc::new(callback))
    }

    pub(crate) fn connect_rc(
        &self,
        signal: &str,
        options: ConnectOptions,
        callback: SignalCallback,
    ) -> Result<SignalHandle, SignalError> {
        let mut state = self.state.borrow_mut();
        if state.destroyed {
            return Err(SignalError::Destroyed);
        }
        let signal = state
            .class
            .lookup_signal(signal)
            .ok_or_else(|| SignalError::InvalidName(signal.to_string()))?;

        let handle = SignalHandle::next();
        state.handlers.push(Handler {
            handle,
            signal,
            position: options.position,
            user_data: options.user_data,
            callback,
        });
        tracing::debug!(class = %state.class, signal, %handle, "signal connected");
        Ok(handle)
    }

    /// Fire `signal`, running `Before` handlers, then unpositioned ones, then
    /// `After` handlers, each group in connection order. Returns how many
    /// handlers ran. Emitting on a destroyed widget runs nothing.
    pub fn emit(&self, signal: &str) -> Result<usize, SignalError> {
        let pending = {
            let state = self.state.borrow();
            let signal = state
                .class
                .lookup_signal(signal)
                .ok_or_else(|| SignalError::InvalidName(signal.to_string()))?;
            if state.destroyed {
                return Ok(0);
            }

            let mut matching: Vec<&Handler> =
                state.handlers.iter().filter(|h| h.signal == signal).collect();
            // Stable sort keeps connection order within a tier.
            matching.sort_by_key(|h| h.tier());
            let pending: Vec<_> = matching
                .into_iter()
                .map(|h| {
                    (
                        h.signal,
                        h.handle,
                        h.user_data.clone(),
                        Rc::clone(&h.callback),
                    )
                })
                .collect();
            pending
        };

        let count = pending.len();
        for (signal, handle, user_data, callback) in pending {
            callback(&SignalEmission {
                signal,
                handle,
                user_data: user_data.as_ref(),
            });
        }
        Ok(count)
    }

    /// Remove the handler registered under `handle`. Returns whether it was
    /// connected to this widget.
    pub fn disconnect(&self, handle: SignalHandle) -> bool {
        let mut state = self.state.borrow_mut();
        let before = state.handlers.len();
        state.handlers.retain(|h| h.handle != handle);
        before != state.handlers.len()
    }

    pub fn is_connected(&self, handle: SignalHandle) -> bool {
        self.state.borrow().handlers.iter().any(|h| h.handle == handle)
    }

    /// Number of handlers currently registered, across all signals.
    pub fn handler_count(&self) -> usize {
        self.state.borrow().handlers.len()
    }

    /// Emit `destroy`, then drop every registered handler.
    ///
    /// Afterwards [`connect`](Self::connect) fails and emissions are no-ops.
    /// Destroying twice does nothing the second time, including from inside
    /// a `destroy` handler.
    pub fn destroy(&self) {
        {
            let mut state = self.state.borrow_mut();
            if state.destroyed || state.in_destruction {
                return;
            }
            state.in_destruction = true;
        }
        if let Err(e) = self.emit("destroy") {
            tracing::warn!("destroy emission failed: {e}");
        }

        let dropped = {
            let mut state = self.state.borrow_mut();
            state.in_destruction = false;
            state.destroyed = true;
            std::mem::take(&mut state.handlers)
        };
        tracing::debug!(class = %self.class(), handlers = dropped.len(), "widget destroyed");
    }

    pub fn is_destroyed(&self) -> bool {
        self.state.borrow().destroyed
    }

    /// Whether both handles refer to the same object.
    pub fn same(&self, other: &Widget) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl fmt::Debug for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Widget")
            .field("class", &state.class)
            .field("handlers", &state.handlers.len())
            .field("destroyed", &state.destroyed)
            .finish()
    }
}
