use accelkit_common::{HostValue, SignalError, SignalHandle};

use crate::signal::{ConnectOptions, SignalCallback, SignalPosition, Widget};

/// `widget.connect(name, position = nil) { ... }`.
///
/// Checks run in this order: argument count, name type, position, callback,
/// and finally whether the widget's class knows the signal.
pub fn widget_connect(
    widget: &Widget,
    args: &[HostValue],
    callback: Option<SignalCallback>,
) -> Result<SignalHandle, SignalError> {
    if args.is_empty() || args.len() > 2 {
        return Err(SignalError::WrongArity {
            given: args.len(),
            expected: "1..2",
        });
    }

    let name = args[0].as_name().ok_or(SignalError::WrongType {
        found: args[0].type_name(),
        expected: "String or Symbol",
    })?;

    let position = match args.get(1) {
        None | Some(HostValue::Nil) => None,
        Some(HostValue::Symbol(token)) => Some(
            SignalPosition::from_name(token)
                .ok_or_else(|| SignalError::InvalidPosition(token.clone()))?,
        ),
        Some(other) => return Err(SignalError::InvalidPosition(format!("{other:?}"))),
    };

    let callback = callback.ok_or(SignalError::NoCallback)?;
    widget.connect_rc(
        name,
        ConnectOptions {
            position,
            user_data: None,
        },
        callback,
    )
}
