pub mod errors;
pub mod id;
pub mod value;

pub use errors::{AccelError, AccelkitError, ConfigError, SignalError};
pub use id::SignalHandle;
pub use value::HostValue;

pub type Result<T> = std::result::Result<T, AccelkitError>;
