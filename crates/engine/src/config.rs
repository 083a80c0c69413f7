//! Typed resolved configuration and the resolution function.
//!
//! [`resolve`] turns a raw key/value mapping plus a [`Schema`] into a
//! [`ResolvedConfig`]: a statically declared record with one typed field per
//! schema parameter, and a generic side-mapping for input keys the schema
//! does not describe. Resolution is pure and deterministic; calling it twice
//! on the same input yields identical results.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use i3ccfg_core::{config, Schema, Value};
//!
//! let mut raw = BTreeMap::new();
//! raw.insert("TxFifoDepth".to_owned(), Value::Int(16));
//!
//! let cfg = config::resolve(&raw, &Schema::i3c_core()).unwrap();
//! assert_eq!(cfg.tx_fifo_depth, 16);
//! assert_eq!(cfg.cmd_fifo_depth, 64); // schema default
//! assert!(cfg.disable_input_ff.is_none()); // optional, absent
//! ```

use std::collections::BTreeMap;

use tracing::debug;

use crate::common::error::ConfigError;
use crate::common::value::{Value, ValueKind};
use crate::schema::Schema;

/// Fully-resolved I3C core configuration.
///
/// Every schema parameter appears as a typed field; the one may-be-absent
/// parameter is an `Option`. Input keys outside the schema are carried in
/// [`extras`](Self::extras) verbatim and never dropped. Instances are
/// produced by [`resolve`] and treated as immutable afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfig {
    /// Command descriptor queue depth in entries.
    pub cmd_fifo_depth: i64,
    /// Response descriptor queue depth in entries.
    pub resp_fifo_depth: i64,
    /// Transmit data buffer depth in entries.
    pub tx_fifo_depth: i64,
    /// Receive data buffer depth in entries.
    pub rx_fifo_depth: i64,
    /// In-band-interrupt queue depth (entries, or 8-entry units when
    /// [`ibi_fifo_ext_size`](Self::ibi_fifo_ext_size) is set).
    pub ibi_fifo_depth: i64,
    /// Extended IBI size flag; changes the unit of the IBI depth downstream.
    pub ibi_fifo_ext_size: bool,
    /// Device Address Table depth in entries.
    pub dat_depth: i64,
    /// Device Characteristics Table depth in entries.
    pub dct_depth: i64,
    /// Frontend bus family name; validated against the known define groups
    /// when encoding.
    pub frontend_bus_interface: String,
    /// Frontend bus address width in bits.
    pub frontend_bus_addr_width: i64,
    /// Frontend bus data width in bits.
    pub frontend_bus_data_width: i64,
    /// Active-controller role support.
    pub controller_support: bool,
    /// Target role support.
    pub target_support: bool,
    /// Input-flop bypass flag; legitimately absent when the input omits it.
    pub disable_input_ff: Option<bool>,
    /// Input keys not described by the schema, verbatim, in the input
    /// mapping's iteration order.
    pub extras: Vec<(String, Value)>,
}

impl ResolvedConfig {
    /// Iterates all resolved parameters as `(name, value)` pairs.
    ///
    /// Known parameters come first in schema declaration order (the absent
    /// optional one is skipped), followed by the extras. This is the input
    /// to the generic define pass, so the order is part of the output
    /// contract.
    pub fn params(&self) -> Vec<(String, Value)> {
        let mut out: Vec<(String, Value)> = vec![
            ("CmdFifoDepth".to_owned(), Value::Int(self.cmd_fifo_depth)),
            ("RespFifoDepth".to_owned(), Value::Int(self.resp_fifo_depth)),
            ("TxFifoDepth".to_owned(), Value::Int(self.tx_fifo_depth)),
            ("RxFifoDepth".to_owned(), Value::Int(self.rx_fifo_depth)),
            ("IbiFifoDepth".to_owned(), Value::Int(self.ibi_fifo_depth)),
            (
                "IbiFifoExtSize".to_owned(),
                Value::Bool(self.ibi_fifo_ext_size),
            ),
            ("DatDepth".to_owned(), Value::Int(self.dat_depth)),
            ("DctDepth".to_owned(), Value::Int(self.dct_depth)),
            (
                "FrontendBusInterface".to_owned(),
                Value::Str(self.frontend_bus_interface.clone()),
            ),
            (
                "FrontendBusAddrWidth".to_owned(),
                Value::Int(self.frontend_bus_addr_width),
            ),
            (
                "FrontendBusDataWidth".to_owned(),
                Value::Int(self.frontend_bus_data_width),
            ),
            (
                "ControllerSupport".to_owned(),
                Value::Bool(self.controller_support),
            ),
            ("TargetSupport".to_owned(), Value::Bool(self.target_support)),
        ];
        if let Some(v) = self.disable_input_ff {
            out.push(("DisableInputFF".to_owned(), Value::Bool(v)));
        }
        out.extend(self.extras.iter().cloned());
        out
    }
}

/// Resolves a raw mapping against a schema into a [`ResolvedConfig`].
///
/// For each schema entry, exactly one path applies: the input provides the
/// value, the schema default applies, or the entry is optional and stays
/// unset. A required, default-less, absent entry fails with
/// [`ConfigError::MissingParameter`]; a provided or defaulted value of the
/// wrong kind fails with [`ConfigError::TypeMismatch`]. Input keys the
/// schema does not describe are passed through into
/// [`ResolvedConfig::extras`].
///
/// # Errors
///
/// Returns the first resolution failure; no partial result escapes.
pub fn resolve(
    raw: &BTreeMap<String, Value>,
    schema: &Schema,
) -> Result<ResolvedConfig, ConfigError> {
    let mut resolved: Vec<(&str, Value)> = Vec::new();

    for spec in schema.iter() {
        let value = if let Some(v) = raw.get(spec.name) {
            v.clone()
        } else if let Some(d) = &spec.default {
            debug!(parameter = spec.name, "using schema default");
            d.clone()
        } else if spec.optional {
            continue;
        } else {
            return Err(ConfigError::MissingParameter(spec.name.to_owned()));
        };

        if value.kind() != spec.ty {
            return Err(ConfigError::TypeMismatch {
                name: spec.name.to_owned(),
                expected: spec.ty,
                found: value.kind(),
            });
        }
        resolved.push((spec.name, value));
    }

    let extras: Vec<(String, Value)> = raw
        .iter()
        .filter(|(name, _)| !schema.contains(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();

    Ok(ResolvedConfig {
        cmd_fifo_depth: take_int(&resolved, "CmdFifoDepth")?,
        resp_fifo_depth: take_int(&resolved, "RespFifoDepth")?,
        tx_fifo_depth: take_int(&resolved, "TxFifoDepth")?,
        rx_fifo_depth: take_int(&resolved, "RxFifoDepth")?,
        ibi_fifo_depth: take_int(&resolved, "IbiFifoDepth")?,
        ibi_fifo_ext_size: take_bool(&resolved, "IbiFifoExtSize")?,
        dat_depth: take_int(&resolved, "DatDepth")?,
        dct_depth: take_int(&resolved, "DctDepth")?,
        frontend_bus_interface: take_str(&resolved, "FrontendBusInterface")?,
        frontend_bus_addr_width: take_int(&resolved, "FrontendBusAddrWidth")?,
        frontend_bus_data_width: take_int(&resolved, "FrontendBusDataWidth")?,
        controller_support: take_bool(&resolved, "ControllerSupport")?,
        target_support: take_bool(&resolved, "TargetSupport")?,
        disable_input_ff: find(&resolved, "DisableInputFF")
            .map(|v| expect_bool("DisableInputFF", v))
            .transpose()?,
        extras,
    })
}

fn find<'a>(resolved: &'a [(&str, Value)], name: &str) -> Option<&'a Value> {
    resolved
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| v)
}

fn take_int(resolved: &[(&str, Value)], name: &str) -> Result<i64, ConfigError> {
    match find(resolved, name) {
        Some(Value::Int(v)) => Ok(*v),
        Some(v) => Err(ConfigError::TypeMismatch {
            name: name.to_owned(),
            expected: ValueKind::Int,
            found: v.kind(),
        }),
        None => Err(ConfigError::MissingParameter(name.to_owned())),
    }
}

fn take_bool(resolved: &[(&str, Value)], name: &str) -> Result<bool, ConfigError> {
    match find(resolved, name) {
        Some(v) => expect_bool(name, v),
        None => Err(ConfigError::MissingParameter(name.to_owned())),
    }
}

fn take_str(resolved: &[(&str, Value)], name: &str) -> Result<String, ConfigError> {
    match find(resolved, name) {
        Some(Value::Str(v)) => Ok(v.clone()),
        Some(v) => Err(ConfigError::TypeMismatch {
            name: name.to_owned(),
            expected: ValueKind::Str,
            found: v.kind(),
        }),
        None => Err(ConfigError::MissingParameter(name.to_owned())),
    }
}

fn expect_bool(name: &str, value: &Value) -> Result<bool, ConfigError> {
    match value {
        Value::Bool(v) => Ok(*v),
        v => Err(ConfigError::TypeMismatch {
            name: name.to_owned(),
            expected: ValueKind::Bool,
            found: v.kind(),
        }),
    }
}
