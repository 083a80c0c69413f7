//! Error definitions for the configuration engine.
//!
//! Every failure the engine can report is a named variant of [`ConfigError`].
//! All of them are fatal at the point raised: resolution and encoding are
//! all-or-nothing and never hand back a partial result. CSR transport
//! failures are deliberately *not* represented here; they belong to the
//! accessor's own error type and pass through the threshold model unchanged.

use thiserror::Error;

use super::value::ValueKind;

/// Fatal configuration or encoding failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required parameter is absent from the input, has no schema default,
    /// and is not marked optional.
    #[error("parameter {0} was neither specified nor has a default value defined")]
    MissingParameter(String),

    /// A supplied (or defaulted) value does not match the schema-declared type.
    #[error("parameter {name} expects {expected}, got {found}")]
    TypeMismatch {
        /// Parameter name as declared in the schema.
        name: String,
        /// Declared type.
        expected: ValueKind,
        /// Kind of the value actually supplied.
        found: ValueKind,
    },

    /// A value cannot be represented in the context that consumed it, e.g. a
    /// list where a bare integer depth is required.
    #[error("unsupported type {found} for {name} while converting the configuration")]
    UnsupportedType {
        /// Parameter name.
        name: String,
        /// Kind of the offending value.
        found: ValueKind,
    },

    /// A depth value cannot be represented in its CSR encoding: a
    /// power-of-two-encoded depth that is not a power of two (or is below the
    /// minimum of 4), or a biased depth of zero. Raised instead of silently
    /// truncating.
    #[error("depth {value} for {name} is not representable in its CSR encoding")]
    InvalidDepth {
        /// Parameter name.
        name: String,
        /// Rejected depth value.
        value: i64,
    },

    /// Two encoding rules produced the same output field name. Signals an
    /// authoring bug in the schema or the derived-field rules.
    #[error("duplicate output field {0}")]
    DuplicateField(String),

    /// The frontend bus selector names a family the core has no define group
    /// for. Only AHB and AXI exist.
    #[error("unknown frontend bus family {0:?}, expected \"AHB\" or \"AXI\"")]
    UnknownBusFamily(String),
}
