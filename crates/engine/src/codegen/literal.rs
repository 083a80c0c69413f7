//! SystemVerilog literal representation of parameter values.
//!
//! Each [`Value`] coerces to exactly one literal form: booleans become `0`/`1`
//! integers (SV defines have no boolean type), strings are quoted, and lists
//! render as brace-delimited, comma-joined element lists, recursively. The
//! match is exhaustive, so there is no unsupported-type failure path.

use std::fmt;

use crate::common::value::Value;

/// A value in its SystemVerilog define representation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SvLiteral {
    /// Plain integer literal; also the coercion target for booleans.
    Int(i64),
    /// String literal; rendered with surrounding double quotes.
    Str(String),
    /// Concatenation-style list literal; rendered `{a, b, c}`.
    List(Vec<SvLiteral>),
}

impl From<&Value> for SvLiteral {
    fn from(value: &Value) -> Self {
        match value {
            Value::Bool(b) => SvLiteral::Int(i64::from(*b)),
            Value::Int(v) => SvLiteral::Int(*v),
            Value::Str(s) => SvLiteral::Str(s.clone()),
            Value::List(items) => SvLiteral::List(items.iter().map(SvLiteral::from).collect()),
        }
    }
}

impl fmt::Display for SvLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SvLiteral::Int(v) => write!(f, "{v}"),
            SvLiteral::Str(s) => write!(f, "\"{s}\""),
            SvLiteral::List(items) => {
                write!(f, "{{")?;
                for (i, item) in items.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "}}")
            }
        }
    }
}
