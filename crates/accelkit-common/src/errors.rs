use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Errors raised by the accelerator registries, path map and groups.
#[derive(Debug, thiserror::Error)]
pub enum AccelError {
    #[error("invalid accelerator path")]
    InvalidPath(String),

    #[error("invalid accelerator modifier")]
    InvalidModifier(String),

    #[error("invalid accelerator flag")]
    InvalidFlag(String),

    #[error("invalid key value and/or modifier")]
    InvalidKey { key: u32, modifier: u32 },

    #[error("wrong argument type {found} (expected {expected})")]
    WrongType {
        found: &'static str,
        expected: &'static str,
    },

    #[error("wrong number of arguments (given {given} for {expected})")]
    WrongArity { given: usize, expected: &'static str },

    #[error("no callback given")]
    NoCallback,

    #[error("group is locked")]
    GroupLocked,

    #[error("no accelerator registered for {0}")]
    PathNotFound(String),

    #[error("accelerator path {0} is locked")]
    PathLocked(String),

    #[error("unparsable accelerator {0:?}")]
    UnparsableAccelerator(String),

    #[error("unknown key {0:?}")]
    UnknownKey(String),

    #[error("accelerator map I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while connecting to a widget signal.
#[derive(Debug, thiserror::Error)]
pub enum SignalError {
    #[error("invalid signal name")]
    InvalidName(String),

    #[error("invalid signal position (should be :before or :after)")]
    InvalidPosition(String),

    #[error("wrong argument type {found} (expected {expected})")]
    WrongType {
        found: &'static str,
        expected: &'static str,
    },

    #[error("wrong number of arguments (given {given} for {expected})")]
    WrongArity { given: usize, expected: &'static str },

    #[error("no callback given")]
    NoCallback,

    #[error("object has been destroyed")]
    Destroyed,
}

#[derive(Debug, thiserror::Error)]
pub enum AccelkitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Accel(#[from] AccelError),

    #[error(transparent)]
    Signal(#[from] SignalError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
