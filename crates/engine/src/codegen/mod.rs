//! Hardware-facing encodings derived from a resolved configuration.
//!
//! This module turns a [`ResolvedConfig`](crate::config::ResolvedConfig)
//! into the two artifacts the build flow consumes. It provides:
//! 1. **Name Transform:** PascalCase parameter names to UPPER_SNAKE_CASE macros.
//! 2. **Literals:** SystemVerilog literal rendering for each value kind.
//! 3. **Defines:** The ordered, name-unique define set including the frontend bus group.
//! 4. **Sizing:** Register-generator depth fields in their CSR encodings.

/// Ordered define collection and the generic + frontend encode passes.
pub mod defines;

/// SystemVerilog literal representation of parameter values.
pub mod literal;

/// Identifier case transformation.
pub mod name;

/// Register-generator sizing parameters.
pub mod reggen;

pub use defines::CoreDefines;
pub use literal::SvLiteral;
pub use name::to_upper_snake;
pub use reggen::RegGenParams;
