//! Parameter schema registry for the I3C core configuration.
//!
//! This module declares the finite parameter set the engine understands. It
//! provides:
//! 1. **Specs:** Per-parameter declarations (name, type, default, optionality).
//! 2. **Registry:** An ordered, name-unique collection used to drive resolution.
//! 3. **Built-in Set:** [`Schema::i3c_core`], the statically known I3C core parameters.

use crate::common::value::{Value, ValueKind};

/// Default configuration constants for the I3C core parameter set.
///
/// These values apply when the input mapping does not override the
/// corresponding parameter.
mod defaults {
    /// Command descriptor queue depth in entries.
    pub const CMD_FIFO_DEPTH: i64 = 64;

    /// Response descriptor queue depth in entries.
    pub const RESP_FIFO_DEPTH: i64 = 64;

    /// Transmit data buffer depth in entries; must be a power of two >= 4
    /// because the CSR stores it as `2^(N+1)`.
    pub const TX_FIFO_DEPTH: i64 = 64;

    /// Receive data buffer depth in entries; same encoding constraint as TX.
    pub const RX_FIFO_DEPTH: i64 = 64;

    /// In-band-interrupt queue depth. Interpreted in entries, or in units of
    /// eight entries when the extended-size flag is set.
    pub const IBI_FIFO_DEPTH: i64 = 64;

    /// Extended IBI size flag. Changes the *unit* of `IBI_FIFO_DEPTH` for
    /// downstream consumers; the depth value itself is carried verbatim.
    pub const IBI_FIFO_EXT_SIZE: bool = false;

    /// Device Address Table depth in entries.
    pub const DAT_DEPTH: i64 = 128;

    /// Device Characteristics Table depth in entries.
    pub const DCT_DEPTH: i64 = 128;

    /// Frontend bus protocol family.
    pub const FRONTEND_BUS_INTERFACE: &str = "AHB";

    /// Frontend bus address width in bits.
    pub const FRONTEND_BUS_ADDR_WIDTH: i64 = 32;

    /// Frontend bus data width in bits.
    pub const FRONTEND_BUS_DATA_WIDTH: i64 = 64;

    /// Active-controller role support.
    pub const CONTROLLER_SUPPORT: bool = true;

    /// Target role support.
    pub const TARGET_SUPPORT: bool = false;
}

/// Declaration of a single configuration parameter.
///
/// Exactly one resolution path applies to each spec: the input provides a
/// value, or the default applies, or the parameter is marked optional and is
/// legitimately absent from the result.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamSpec {
    /// Parameter name as it appears in the input mapping (PascalCase).
    pub name: &'static str,
    /// Declared value type; supplied values of any other kind are rejected.
    pub ty: ValueKind,
    /// Value to use when the input omits this parameter.
    pub default: Option<Value>,
    /// When true and no value or default is available, the parameter is
    /// skipped rather than reported as missing.
    pub optional: bool,
}

impl ParamSpec {
    /// Declares a required parameter with a default value.
    fn with_default(name: &'static str, ty: ValueKind, default: Value) -> Self {
        Self {
            name,
            ty,
            default: Some(default),
            optional: false,
        }
    }

    /// Declares an optional parameter that may be absent from the result.
    fn optional(name: &'static str, ty: ValueKind) -> Self {
        Self {
            name,
            ty,
            default: None,
            optional: true,
        }
    }
}

/// Ordered, name-unique registry of parameter declarations.
///
/// The declaration order is the iteration order used by the generic define
/// pass, so generated artifacts are stable across runs.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    specs: Vec<ParamSpec>,
}

impl Schema {
    /// Builds a registry from a list of specs.
    ///
    /// # Panics
    ///
    /// Panics if two specs share a name; the registry is authored statically
    /// and a duplicate is a programming error, not an input error.
    pub fn new(specs: Vec<ParamSpec>) -> Self {
        for (i, spec) in specs.iter().enumerate() {
            assert!(
                specs[..i].iter().all(|s| s.name != spec.name),
                "duplicate schema entry {}",
                spec.name
            );
        }
        Self { specs }
    }

    /// The statically known I3C core parameter set.
    pub fn i3c_core() -> Self {
        use ValueKind::{Bool, Int, Str};
        Self::new(vec![
            ParamSpec::with_default(
                "CmdFifoDepth",
                Int,
                Value::Int(defaults::CMD_FIFO_DEPTH),
            ),
            ParamSpec::with_default(
                "RespFifoDepth",
                Int,
                Value::Int(defaults::RESP_FIFO_DEPTH),
            ),
            ParamSpec::with_default("TxFifoDepth", Int, Value::Int(defaults::TX_FIFO_DEPTH)),
            ParamSpec::with_default("RxFifoDepth", Int, Value::Int(defaults::RX_FIFO_DEPTH)),
            ParamSpec::with_default(
                "IbiFifoDepth",
                Int,
                Value::Int(defaults::IBI_FIFO_DEPTH),
            ),
            ParamSpec::with_default(
                "IbiFifoExtSize",
                Bool,
                Value::Bool(defaults::IBI_FIFO_EXT_SIZE),
            ),
            ParamSpec::with_default("DatDepth", Int, Value::Int(defaults::DAT_DEPTH)),
            ParamSpec::with_default("DctDepth", Int, Value::Int(defaults::DCT_DEPTH)),
            ParamSpec::with_default(
                "FrontendBusInterface",
                Str,
                Value::Str(defaults::FRONTEND_BUS_INTERFACE.to_owned()),
            ),
            ParamSpec::with_default(
                "FrontendBusAddrWidth",
                Int,
                Value::Int(defaults::FRONTEND_BUS_ADDR_WIDTH),
            ),
            ParamSpec::with_default(
                "FrontendBusDataWidth",
                Int,
                Value::Int(defaults::FRONTEND_BUS_DATA_WIDTH),
            ),
            ParamSpec::with_default(
                "ControllerSupport",
                Bool,
                Value::Bool(defaults::CONTROLLER_SUPPORT),
            ),
            ParamSpec::with_default(
                "TargetSupport",
                Bool,
                Value::Bool(defaults::TARGET_SUPPORT),
            ),
            ParamSpec::optional("DisableInputFF", Bool),
        ])
    }

    /// Iterates the specs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ParamSpec> {
        self.specs.iter()
    }

    /// Looks up a spec by name.
    pub fn get(&self, name: &str) -> Option<&ParamSpec> {
        self.specs.iter().find(|s| s.name == name)
    }

    /// Returns true if the registry declares the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}
