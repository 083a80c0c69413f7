//! # Codegen Tests
//!
//! Tests for the define pass (naming, coercion, frontend bus group,
//! collision handling) and the register-generator sizing encodings.

/// Core define generation tests.
pub mod defines;

/// Register-generator sizing tests.
pub mod reggen;
