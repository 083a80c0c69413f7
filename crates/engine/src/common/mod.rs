//! Common types shared across the configuration engine.
//!
//! This module provides the building blocks the rest of the crate is written
//! in terms of. It includes:
//! 1. **Values:** The tagged union for parameter values (bool/int/string/list).
//! 2. **Errors:** The crate-wide error enum covering every fatal condition.
//! 3. **Bit Arithmetic:** Ceiling log2 and power-of-two helpers for size encodings.

/// Bit-arithmetic helpers for size and threshold encodings.
pub mod bits;

/// Error definitions for resolution, encoding, and depth validation.
pub mod error;

/// Tagged parameter value type.
pub mod value;

pub use bits::{clog2, flog2};
pub use error::ConfigError;
pub use value::{Value, ValueKind};
