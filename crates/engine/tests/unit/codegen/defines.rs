//! Core Define Generation Tests.
//!
//! Verifies the PascalCase -> UPPER_SNAKE_CASE renaming, value coercions,
//! frontend bus selection, and the all-or-nothing collision behavior.

use i3ccfg_core::codegen::{CoreDefines, SvLiteral};
use i3ccfg_core::{ConfigError, Value};

use crate::common::{config_with, default_config};

#[test]
fn parameters_are_renamed_to_upper_snake() {
    let defines = CoreDefines::generate(&default_config()).unwrap();

    assert_eq!(defines.get("CMD_FIFO_DEPTH"), Some(&SvLiteral::Int(64)));
    assert_eq!(defines.get("DAT_DEPTH"), Some(&SvLiteral::Int(128)));
    // The PascalCase originals must not leak through.
    assert_eq!(defines.get("CmdFifoDepth"), None);
}

#[test]
fn booleans_coerce_to_integers() {
    let defines = CoreDefines::generate(&default_config()).unwrap();

    assert_eq!(defines.get("CONTROLLER_SUPPORT"), Some(&SvLiteral::Int(1)));
    assert_eq!(defines.get("TARGET_SUPPORT"), Some(&SvLiteral::Int(0)));
}

#[test]
fn frontend_parameters_are_excluded_from_generic_pass() {
    let defines = CoreDefines::generate(&default_config()).unwrap();

    assert_eq!(defines.get("FRONTEND_BUS_INTERFACE"), None);
    assert_eq!(defines.get("FRONTEND_BUS_ADDR_WIDTH"), None);
    assert_eq!(defines.get("FRONTEND_BUS_DATA_WIDTH"), None);
}

#[test]
fn ahb_selection_emits_selector_and_width_fields() {
    let defines = CoreDefines::generate(&config_with(&[
        ("FrontendBusInterface", Value::from("AHB")),
        ("FrontendBusAddrWidth", Value::Int(32)),
        ("FrontendBusDataWidth", Value::Int(64)),
    ]))
    .unwrap();

    assert_eq!(defines.get("I3C_USE_AHB"), Some(&SvLiteral::Int(1)));
    assert_eq!(defines.get("AHB_ADDR_WIDTH"), Some(&SvLiteral::Int(32)));
    assert_eq!(defines.get("AHB_DATA_WIDTH"), Some(&SvLiteral::Int(64)));

    // Only the selected family's group may appear.
    assert_eq!(defines.get("I3C_USE_AXI"), None);
    assert_eq!(defines.get("AXI_ADDR_WIDTH"), None);
    assert_eq!(defines.get("AXI_DATA_WIDTH"), None);
}

#[test]
fn axi_selection_emits_only_axi_fields() {
    let defines =
        CoreDefines::generate(&config_with(&[("FrontendBusInterface", Value::from("AXI"))]))
            .unwrap();

    assert_eq!(defines.get("I3C_USE_AXI"), Some(&SvLiteral::Int(1)));
    assert_eq!(defines.get("I3C_USE_AHB"), None);
    assert_eq!(defines.get("AHB_ADDR_WIDTH"), None);
}

#[test]
fn unknown_bus_family_aborts_encode() {
    let err = CoreDefines::generate(&config_with(&[("FrontendBusInterface", Value::from("APB"))]))
        .unwrap_err();
    assert_eq!(err, ConfigError::UnknownBusFamily("APB".to_owned()));
}

#[test]
fn extra_keys_are_encoded_too() {
    let defines = CoreDefines::generate(&config_with(&[
        ("VendorId", Value::Int(0x5A5)),
        ("LaneMap", Value::List(vec![Value::Int(0), Value::Int(1)])),
    ]))
    .unwrap();

    assert_eq!(defines.get("VENDOR_ID"), Some(&SvLiteral::Int(0x5A5)));
    assert_eq!(
        defines.get("LANE_MAP").map(ToString::to_string),
        Some("{0, 1}".to_owned())
    );
}

#[test]
fn colliding_output_names_abort_encode() {
    // The snake_case extra renames onto the same macro as CmdFifoDepth.
    let err = CoreDefines::generate(&config_with(&[("cmd_fifo_depth", Value::Int(32))]))
        .unwrap_err();
    assert_eq!(err, ConfigError::DuplicateField("CMD_FIFO_DEPTH".to_owned()));
}

#[test]
fn generation_order_is_stable() {
    let a = CoreDefines::generate(&default_config()).unwrap();
    let b = CoreDefines::generate(&default_config()).unwrap();
    let names_a: Vec<&str> = a.iter().map(|(n, _)| n).collect();
    let names_b: Vec<&str> = b.iter().map(|(n, _)| n).collect();
    assert_eq!(names_a, names_b);

    // The frontend group is appended after the generic pass.
    assert_eq!(names_a.last(), Some(&"AHB_DATA_WIDTH"));
}
