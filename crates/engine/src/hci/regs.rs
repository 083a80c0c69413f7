//! Threshold and queue-size CSR addresses and field layouts.
//!
//! Offsets are relative to the controller's register base. The PIO section
//! groups the queue-facing CSRs; two of them hold all four threshold fields,
//! two report the provisioned queue capacities.

/// Base offset of the PIO register section.
pub const PIO_BASE: u32 = 0x80;

/// Queue threshold control CSR: command and response descriptor thresholds.
pub const QUEUE_THLD_CTRL: u32 = PIO_BASE + 0x10;

/// Data buffer threshold control CSR: TX and RX data buffer thresholds.
pub const DATA_BUFFER_THLD_CTRL: u32 = PIO_BASE + 0x14;

/// Queue size CSR: command queue, IBI status, RX and TX buffer capacities.
pub const QUEUE_SIZE: u32 = PIO_BASE + 0x18;

/// Alternate queue size CSR: response queue capacity.
pub const ALT_QUEUE_SIZE: u32 = PIO_BASE + 0x1C;

/// Bit offset of the low-byte threshold fields (command, TX).
pub const THLD_FIELD_LOW_OFFSET: u32 = 0;

/// Bit offset of the high-byte threshold fields (response, RX).
pub const THLD_FIELD_HIGH_OFFSET: u32 = 8;

/// Width of the descriptor-queue threshold fields in `QUEUE_THLD_CTRL`.
pub const QUEUE_THLD_WIDTH: u32 = 8;

/// Width of the data-buffer threshold fields in `DATA_BUFFER_THLD_CTRL`.
pub const DATA_BUFFER_THLD_WIDTH: u32 = 3;

/// Bit offset of the command queue capacity in `QUEUE_SIZE` (entries).
pub const CR_QUEUE_SIZE_OFFSET: u32 = 0;

/// Bit offset of the RX buffer capacity in `QUEUE_SIZE` (`2^(N+1)` encoded).
pub const RX_DATA_BUFFER_SIZE_OFFSET: u32 = 16;

/// Bit offset of the TX buffer capacity in `QUEUE_SIZE` (`2^(N+1)` encoded).
pub const TX_DATA_BUFFER_SIZE_OFFSET: u32 = 24;

/// Bit offset of the response queue capacity in `ALT_QUEUE_SIZE` (entries).
pub const ALT_RESP_QUEUE_SIZE_OFFSET: u32 = 0;

/// Width of every capacity field in the size CSRs.
pub const QUEUE_SIZE_FIELD_WIDTH: u32 = 8;
