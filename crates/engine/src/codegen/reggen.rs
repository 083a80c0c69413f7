//! Register-generator sizing parameters.
//!
//! The register generator consumes queue and table depths in their CSR
//! encodings rather than in raw entries: TX/RX buffer sizes are stored as
//! `2^(N+1)`, table depths carry a minus-one bias, and the rest pass through
//! as entry counts. Derivation is a pure function of the resolved
//! configuration; nothing is accumulated between calls.

use serde::Serialize;

use crate::common::bits::flog2;
use crate::common::error::ConfigError;
use crate::config::ResolvedConfig;

/// Minimum depth representable by the `2^(N+1)` size encoding (N = 1).
const MIN_LOG_ENCODED_DEPTH: u32 = 4;

/// Sizing fields for CSR generation, each already in its register encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RegGenParams {
    /// Command queue size in entries.
    pub cmd_fifo_size: u32,
    /// Response queue size in entries.
    pub resp_fifo_size: u32,
    /// TX buffer size as `N` where depth = `2^(N+1)`.
    pub tx_fifo_size: u32,
    /// RX buffer size as `N` where depth = `2^(N+1)`.
    pub rx_fifo_size: u32,
    /// IBI queue size in entries, or in 8-entry units when
    /// [`ext_ibi_size`](Self::ext_ibi_size) is 1. The unit change belongs to
    /// downstream consumers; the value here is never pre-multiplied.
    pub ibi_fifo_size: u32,
    /// Extended IBI size flag as 0/1.
    pub ext_ibi_size: u32,
    /// Device Address Table depth, minus-one encoded.
    pub dat_depth: u32,
    /// Device Characteristics Table depth, minus-one encoded.
    pub dct_depth: u32,
}

impl RegGenParams {
    /// Derives the sizing fields from a resolved configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidDepth`] when a log-encoded depth is not a power
    /// of two at least 4, or any depth is not a positive value the encoding
    /// can hold. Depths are never silently truncated.
    pub fn derive(cfg: &ResolvedConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            cmd_fifo_size: entry_count("CmdFifoDepth", cfg.cmd_fifo_depth)?,
            resp_fifo_size: entry_count("RespFifoDepth", cfg.resp_fifo_depth)?,
            tx_fifo_size: log_encoded("TxFifoDepth", cfg.tx_fifo_depth)?,
            rx_fifo_size: log_encoded("RxFifoDepth", cfg.rx_fifo_depth)?,
            ibi_fifo_size: entry_count("IbiFifoDepth", cfg.ibi_fifo_depth)?,
            ext_ibi_size: u32::from(cfg.ibi_fifo_ext_size),
            dat_depth: biased("DatDepth", cfg.dat_depth)?,
            dct_depth: biased("DctDepth", cfg.dct_depth)?,
        })
    }

    /// Iterates the fields as `(name, value)` pairs in declaration order.
    pub fn params(&self) -> [(&'static str, u32); 8] {
        [
            ("cmd_fifo_size", self.cmd_fifo_size),
            ("resp_fifo_size", self.resp_fifo_size),
            ("tx_fifo_size", self.tx_fifo_size),
            ("rx_fifo_size", self.rx_fifo_size),
            ("ibi_fifo_size", self.ibi_fifo_size),
            ("ext_ibi_size", self.ext_ibi_size),
            ("dat_depth", self.dat_depth),
            ("dct_depth", self.dct_depth),
        ]
    }
}

/// A depth carried verbatim as an entry count.
fn entry_count(name: &str, depth: i64) -> Result<u32, ConfigError> {
    u32::try_from(depth)
        .ok()
        .filter(|&d| d > 0)
        .ok_or_else(|| ConfigError::InvalidDepth {
            name: name.to_owned(),
            value: depth,
        })
}

/// A depth stored as `N` where the hardware expands `2^(N+1)` entries.
///
/// Only powers of two >= 4 are representable; anything else is rejected
/// rather than floored.
fn log_encoded(name: &str, depth: i64) -> Result<u32, ConfigError> {
    let entries = entry_count(name, depth)?;
    if entries < MIN_LOG_ENCODED_DEPTH || !entries.is_power_of_two() {
        return Err(ConfigError::InvalidDepth {
            name: name.to_owned(),
            value: depth,
        });
    }
    Ok(flog2(entries) - 1)
}

/// A depth stored with the minus-one bias.
fn biased(name: &str, depth: i64) -> Result<u32, ConfigError> {
    Ok(entry_count(name, depth)? - 1)
}
