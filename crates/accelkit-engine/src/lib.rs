pub mod accel_group;
pub mod accel_map;
pub mod host;
pub mod keymap;
pub mod signal;
pub mod window;

pub use accel_group::{AccelCallback, AccelGroup, AccelGroupEntry};
pub use accel_map::{AccelMap, AccelPathEntry};
pub use keymap::{AccelFlags, AccelKey, ModifierType};
pub use signal::{ConnectOptions, EventPump, EventQueue, SignalPosition, Widget, WidgetClass};
pub use window::Window;
