//! Configuration Resolution Tests.
//!
//! Verifies the four resolution paths (provided, defaulted, optional-absent,
//! missing), type validation, and verbatim passthrough of unknown keys.

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;

use i3ccfg_core::common::ValueKind;
use i3ccfg_core::config;
use i3ccfg_core::schema::Schema;
use i3ccfg_core::{ConfigError, Value};

use crate::common::raw_config;

#[test]
fn empty_input_resolves_to_schema_defaults() {
    let cfg = config::resolve(&BTreeMap::new(), &Schema::i3c_core()).unwrap();

    assert_eq!(cfg.cmd_fifo_depth, 64);
    assert_eq!(cfg.resp_fifo_depth, 64);
    assert_eq!(cfg.dat_depth, 128);
    assert_eq!(cfg.frontend_bus_interface, "AHB");
    assert!(!cfg.ibi_fifo_ext_size);
    assert!(cfg.controller_support);
}

#[test]
fn provided_values_override_defaults() {
    let cfg = config::resolve(
        &raw_config(&[
            ("TxFifoDepth", Value::Int(16)),
            ("FrontendBusInterface", Value::from("AXI")),
        ]),
        &Schema::i3c_core(),
    )
    .unwrap();

    assert_eq!(cfg.tx_fifo_depth, 16);
    assert_eq!(cfg.frontend_bus_interface, "AXI");
    // Untouched parameters keep their defaults.
    assert_eq!(cfg.rx_fifo_depth, 64);
}

#[test]
fn optional_parameter_stays_unset_when_absent() {
    let cfg = config::resolve(&BTreeMap::new(), &Schema::i3c_core()).unwrap();
    assert_eq!(cfg.disable_input_ff, None);
}

#[test]
fn optional_parameter_resolves_when_provided() {
    let cfg = config::resolve(
        &raw_config(&[("DisableInputFF", Value::Bool(true))]),
        &Schema::i3c_core(),
    )
    .unwrap();
    assert_eq!(cfg.disable_input_ff, Some(true));
}

#[test]
fn unknown_keys_pass_through_verbatim() {
    let cfg = config::resolve(
        &raw_config(&[
            ("VendorId", Value::Int(0x5A5)),
            ("DebugTaps", Value::List(vec![Value::Int(1), Value::Int(2)])),
        ]),
        &Schema::i3c_core(),
    )
    .unwrap();

    assert_eq!(
        cfg.extras,
        vec![
            (
                "DebugTaps".to_owned(),
                Value::List(vec![Value::Int(1), Value::Int(2)])
            ),
            ("VendorId".to_owned(), Value::Int(0x5A5)),
        ]
    );
}

#[test]
fn resolved_key_set_is_exactly_schema_plus_extras() {
    let cfg = config::resolve(
        &raw_config(&[
            ("DisableInputFF", Value::Bool(false)),
            ("VendorId", Value::Int(7)),
        ]),
        &Schema::i3c_core(),
    )
    .unwrap();

    let names: Vec<String> = cfg.params().into_iter().map(|(n, _)| n).collect();
    let schema_names: Vec<&str> = Schema::i3c_core().iter().map(|s| s.name).collect();

    // Every schema entry resolved (the optional one was provided), then extras.
    let mut expected: Vec<String> = schema_names.iter().map(|s| (*s).to_owned()).collect();
    expected.push("VendorId".to_owned());
    assert_eq!(names, expected);
}

#[test]
fn missing_required_parameter_fails() {
    // Every built-in entry carries a default, so a required miss needs a
    // schema entry with neither default nor optional marker.
    let custom = Schema::new(vec![i3ccfg_core::schema::ParamSpec {
        name: "CmdFifoDepth",
        ty: ValueKind::Int,
        default: None,
        optional: false,
    }]);
    let err = config::resolve(&BTreeMap::new(), &custom).unwrap_err();
    assert_eq!(err, ConfigError::MissingParameter("CmdFifoDepth".to_owned()));
}

#[test]
fn wrong_kind_is_rejected() {
    let err = config::resolve(
        &raw_config(&[("CmdFifoDepth", Value::from("sixty-four"))]),
        &Schema::i3c_core(),
    )
    .unwrap_err();

    assert_eq!(
        err,
        ConfigError::TypeMismatch {
            name: "CmdFifoDepth".to_owned(),
            expected: ValueKind::Int,
            found: ValueKind::Str,
        }
    );
}

#[test]
fn wrong_kind_for_optional_parameter_is_rejected() {
    let err = config::resolve(
        &raw_config(&[("DisableInputFF", Value::Int(1))]),
        &Schema::i3c_core(),
    )
    .unwrap_err();

    assert_eq!(
        err,
        ConfigError::TypeMismatch {
            name: "DisableInputFF".to_owned(),
            expected: ValueKind::Bool,
            found: ValueKind::Int,
        }
    );
}

#[test]
fn resolution_is_deterministic() {
    let raw = raw_config(&[("TxFifoDepth", Value::Int(32))]);
    let schema = Schema::i3c_core();
    assert_eq!(
        config::resolve(&raw, &schema).unwrap(),
        config::resolve(&raw, &schema).unwrap()
    );
}
