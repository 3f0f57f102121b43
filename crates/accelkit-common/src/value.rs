//! Dynamically typed values crossing the host-language boundary.

use serde::{Deserialize, Serialize};

/// A value handed over by the host language.
///
/// The binding entry points accept these and perform the type and arity
/// checks a dynamically typed caller expects before calling the typed API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum HostValue {
    Nil,
    Bool(bool),
    Int(i64),
    Str(String),
    Symbol(String),
    Array(Vec<HostValue>),
}

impl HostValue {
    pub fn sym(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    pub fn str(s: impl Into<String>) -> Self {
        Self::Str(s.into())
    }

    /// Type name used in "wrong argument type" messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Str(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::Array(_) => "array",
        }
    }

    /// The textual content of a string or symbol.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Str(s) | Self::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }
}

impl From<i64> for HostValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u32> for HostValue {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<bool> for HostValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for HostValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for HostValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl<T: Into<HostValue>> From<Vec<T>> for HostValue {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names() {
        assert_eq!(HostValue::Nil.type_name(), "nil");
        assert_eq!(HostValue::from(10i64).type_name(), "integer");
        assert_eq!(HostValue::from("a").type_name(), "string");
        assert_eq!(HostValue::sym("a").type_name(), "symbol");
        assert_eq!(HostValue::Array(vec![]).type_name(), "array");
        assert_eq!(HostValue::from(true).type_name(), "boolean");
    }

    #[test]
    fn strings_and_symbols_are_names() {
        assert_eq!(HostValue::sym("control").as_name(), Some("control"));
        assert_eq!(HostValue::str("control").as_name(), Some("control"));
        assert_eq!(HostValue::Int(4).as_name(), None);
    }

    #[test]
    fn ints_convert() {
        assert_eq!(HostValue::from(113u32).as_int(), Some(113));
        assert_eq!(HostValue::str("113").as_int(), None);
    }

    #[test]
    fn vec_converts_to_array() {
        let v: HostValue = vec!["shift", "control"].into();
        assert_eq!(
            v,
            HostValue::Array(vec![HostValue::str("shift"), HostValue::str("control")])
        );
    }

    #[test]
    fn tagged_serialization() {
        let json = serde_json::to_string(&HostValue::sym("destroy")).unwrap();
        assert_eq!(json, r#"{"type":"symbol","value":"destroy"}"#);

        let back: HostValue = serde_json::from_str(r#"{"type":"int","value":7}"#).unwrap();
        assert_eq!(back, HostValue::Int(7));

        let nil: HostValue = serde_json::from_str(r#"{"type":"nil"}"#).unwrap();
        assert!(nil.is_nil());
    }
}
