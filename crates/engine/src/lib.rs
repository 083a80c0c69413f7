//! I3C host-controller configuration and CSR-encoding library.
//!
//! This crate compiles abstract capacity parameters for an I3C core (queue
//! depths, frontend bus widths, protocol choice) into hardware-facing
//! artifacts. It provides:
//! 1. **Schema:** The statically declared parameter set (type, default, optionality).
//! 2. **Resolution:** Raw key/value input resolved into a typed, validated configuration.
//! 3. **Codegen:** SystemVerilog define encoding and register-generator sizing fields.
//! 4. **HCI:** Per-queue threshold policies operating through an abstract CSR accessor.

/// Common types (parameter values, error definitions, bit arithmetic).
pub mod common;
/// Typed resolved configuration and the resolution function.
pub mod config;
/// Define and register-generator encodings derived from a resolved configuration.
pub mod codegen;
/// Host Controller Interface queue-threshold model and CSR access capability.
pub mod hci;
/// Parameter schema registry (names, types, defaults, optionality).
pub mod schema;

/// Crate-wide error type; every failure path is a named, non-recoverable variant.
pub use crate::common::ConfigError;
/// Tagged parameter value (bool, integer, string, or list).
pub use crate::common::Value;
/// Fully-resolved configuration; produce with [`config::resolve`].
pub use crate::config::ResolvedConfig;
/// Parameter schema registry; use [`Schema::i3c_core`](schema::Schema::i3c_core) for the built-in set.
pub use crate::schema::Schema;
