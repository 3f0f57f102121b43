//! Named-event subscriptions on UI objects.

mod pump;
mod registry;
mod widget;

pub use pump::{EventPump, EventQueue};
pub use registry::{canonical_signal_name, WidgetClass};
pub use widget::{ConnectOptions, SignalCallback, SignalEmission, SignalPosition, Widget};

#[cfg(test)]
mod tests;
