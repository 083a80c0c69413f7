//! Register-Generator Sizing Tests.
//!
//! Verifies the per-field CSR encodings: entry-count passthrough, the
//! `2^(N+1)` logarithmic encoding with its power-of-two requirement, the
//! minus-one table bias, and the IBI unit flag.

use pretty_assertions::assert_eq;

use i3ccfg_core::codegen::RegGenParams;
use i3ccfg_core::{ConfigError, Value};

use crate::common::{config_with, default_config};

#[test]
fn descriptor_queue_sizes_pass_through_in_entries() {
    let params = RegGenParams::derive(&config_with(&[
        ("CmdFifoDepth", Value::Int(40)),
        ("RespFifoDepth", Value::Int(255)),
    ]))
    .unwrap();

    assert_eq!(params.cmd_fifo_size, 40);
    assert_eq!(params.resp_fifo_size, 255);
}

#[test]
fn data_buffer_sizes_are_log_encoded() {
    let params = RegGenParams::derive(&config_with(&[
        ("TxFifoDepth", Value::Int(16)),
        ("RxFifoDepth", Value::Int(8)),
    ]))
    .unwrap();

    // Depth = 2^(N+1): 16 entries -> N = 3, 8 entries -> N = 2.
    assert_eq!(params.tx_fifo_size, 3);
    assert_eq!(params.rx_fifo_size, 2);
}

#[test]
fn non_power_of_two_depth_is_rejected_not_truncated() {
    let err = RegGenParams::derive(&config_with(&[("TxFifoDepth", Value::Int(24))])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidDepth {
            name: "TxFifoDepth".to_owned(),
            value: 24,
        }
    );
}

#[test]
fn depth_below_minimum_is_rejected() {
    // 2 is a power of two, but the size field never encodes a depth below 4.
    let err = RegGenParams::derive(&config_with(&[("RxFifoDepth", Value::Int(2))])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidDepth {
            name: "RxFifoDepth".to_owned(),
            value: 2,
        }
    );
}

#[test]
fn table_depths_carry_minus_one_bias() {
    let params = RegGenParams::derive(&config_with(&[
        ("DatDepth", Value::Int(128)),
        ("DctDepth", Value::Int(32)),
    ]))
    .unwrap();

    assert_eq!(params.dat_depth, 127);
    assert_eq!(params.dct_depth, 31);
}

#[test]
fn ibi_depth_is_verbatim_and_flag_changes_unit_only() {
    let params = RegGenParams::derive(&config_with(&[
        ("IbiFifoDepth", Value::Int(12)),
        ("IbiFifoExtSize", Value::Bool(true)),
    ]))
    .unwrap();

    // The extended-size flag must not pre-multiply the carried depth.
    assert_eq!(params.ibi_fifo_size, 12);
    assert_eq!(params.ext_ibi_size, 1);
}

#[test]
fn nonpositive_depth_is_rejected() {
    let err = RegGenParams::derive(&config_with(&[("DatDepth", Value::Int(0))])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidDepth {
            name: "DatDepth".to_owned(),
            value: 0,
        }
    );
}

#[test]
fn params_iterate_in_declaration_order() {
    let params = RegGenParams::derive(&default_config()).unwrap();
    let names: Vec<&str> = params.params().iter().map(|(n, _)| *n).collect();
    assert_eq!(
        names,
        vec![
            "cmd_fifo_size",
            "resp_fifo_size",
            "tx_fifo_size",
            "rx_fifo_size",
            "ibi_fifo_size",
            "ext_ibi_size",
            "dat_depth",
            "dct_depth",
        ]
    );
}

#[test]
fn default_configuration_derives_cleanly() {
    let params = RegGenParams::derive(&default_config()).unwrap();
    // 64-entry buffers: N = 5.
    assert_eq!(params.tx_fifo_size, 5);
    assert_eq!(params.rx_fifo_size, 5);
    assert_eq!(params.dat_depth, 127);
}
