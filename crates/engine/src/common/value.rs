//! Tagged parameter value type.
//!
//! Configuration input arrives as a finite mapping from parameter names to
//! values of four possible shapes. This module defines that shape as an
//! explicit tagged union so that every consumer dispatches exhaustively;
//! there is no "unknown type" branch anywhere downstream.

use std::fmt;

use serde::Deserialize;

/// A configuration parameter value.
///
/// Deserializes untagged from JSON, so `true`, `64`, `"AHB"` and
/// `[1, 2, 3]` all map directly onto the matching variant. Lists nest.
///
/// ```
/// use i3ccfg_core::Value;
///
/// let v: Value = serde_json::from_str(r#"[64, true, "AHB"]"#).unwrap();
/// assert_eq!(
///     v,
///     Value::List(vec![Value::Int(64), Value::Bool(true), Value::Str("AHB".into())])
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean flag; encoded as `0`/`1` for hardware consumers.
    Bool(bool),
    /// Signed integer. Depths and widths are non-negative in practice, but
    /// the input format does not forbid negatives, so validation happens at
    /// the point of use.
    Int(i64),
    /// String, e.g. a bus family name.
    Str(String),
    /// List of values; elements may themselves be lists.
    List(Vec<Value>),
}

/// Discriminant of a [`Value`], used in schema declarations and diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    /// Boolean.
    Bool,
    /// Integer.
    Int,
    /// String.
    Str,
    /// List.
    List,
}

impl Value {
    /// Returns the discriminant of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Str(_) => ValueKind::Str,
            Value::List(_) => ValueKind::List,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Bool => write!(f, "bool"),
            ValueKind::Int => write!(f, "int"),
            ValueKind::Str => write!(f, "string"),
            ValueKind::List => write!(f, "list"),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}
