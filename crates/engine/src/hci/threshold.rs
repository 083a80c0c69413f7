//! Per-queue-kind threshold policies and register operations.
//!
//! Each of the four HCI queues relates a requested threshold to the current
//! capacity, a CSR field, and an entry count in its own way; the behavior set
//! is closed, so it is dispatched by exhaustive match on [`QueueKind`] rather
//! than through trait objects. Clamping and unit conversion are pure; only
//! [`set_threshold`](QueueKind::set_threshold),
//! [`get_threshold`](QueueKind::get_threshold) and
//! [`read_capacity`](QueueKind::read_capacity) touch the accessor, and none
//! of them cache register state between calls.
//!
//! Two physical CSRs hold all four threshold fields. Writing one field
//! preserves the other by mask, but the read-modify-write is atomic only
//! from this caller's perspective: two concurrent updates to kinds sharing a
//! register must be serialized externally or one of them is lost.

use tracing::trace;

use crate::common::bits::clog2;
use crate::hci::accessor::CsrAccess;
use crate::hci::regs;

/// The four threshold-bearing HCI queues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueueKind {
    /// Command descriptor queue (transmit direction).
    Cmd,
    /// Response descriptor queue (receive direction).
    Resp,
    /// TX data buffer (transmit direction).
    Tx,
    /// RX data buffer (receive direction).
    Rx,
}

impl QueueKind {
    /// All kinds, in register-layout order.
    pub const ALL: [QueueKind; 4] = [QueueKind::Cmd, QueueKind::Resp, QueueKind::Tx, QueueKind::Rx];

    /// Short lowercase name, for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            QueueKind::Cmd => "cmd",
            QueueKind::Resp => "resp",
            QueueKind::Tx => "tx",
            QueueKind::Rx => "rx",
        }
    }

    /// Offset of the CSR holding this kind's threshold field.
    pub fn reg_addr(self) -> u32 {
        match self {
            QueueKind::Cmd | QueueKind::Resp => regs::QUEUE_THLD_CTRL,
            QueueKind::Tx | QueueKind::Rx => regs::DATA_BUFFER_THLD_CTRL,
        }
    }

    /// Width of the threshold field in bits.
    pub fn field_width(self) -> u32 {
        match self {
            QueueKind::Cmd | QueueKind::Resp => regs::QUEUE_THLD_WIDTH,
            QueueKind::Tx | QueueKind::Rx => regs::DATA_BUFFER_THLD_WIDTH,
        }
    }

    /// Bit offset of the threshold field within its CSR. Response and RX
    /// occupy the high byte, command and TX the low byte.
    pub fn field_offset(self) -> u32 {
        match self {
            QueueKind::Cmd | QueueKind::Tx => regs::THLD_FIELD_LOW_OFFSET,
            QueueKind::Resp | QueueKind::Rx => regs::THLD_FIELD_HIGH_OFFSET,
        }
    }

    /// Largest raw value the threshold field can hold.
    pub fn field_max(self) -> u32 {
        (1 << self.field_width()) - 1
    }

    /// Clamps a requested register value against the current capacity.
    ///
    /// Pure; never touches the accessor. The rules mirror what the hardware
    /// honors: a command threshold up to the full queue, a response
    /// threshold up to one below it, and log-encoded data-buffer thresholds
    /// bounded so the expanded entry count fits the buffer (RX keeps one
    /// additional halving in reserve).
    pub fn clamp_to_capacity(self, capacity: u32, requested: u32) -> u32 {
        let bound = match self {
            QueueKind::Cmd => capacity,
            QueueKind::Resp => capacity.saturating_sub(1),
            QueueKind::Tx => clog2(capacity).saturating_sub(1),
            QueueKind::Rx => clog2(capacity).saturating_sub(2),
        };
        requested.min(bound)
    }

    /// Converts a raw threshold register value to an entry count.
    ///
    /// Descriptor queues store entries directly; data buffers store `N`
    /// meaning `2^(N+1)` entries.
    pub fn entries(self, reg_value: u32) -> u32 {
        match self {
            QueueKind::Cmd | QueueKind::Resp => reg_value,
            QueueKind::Tx | QueueKind::Rx => 1 << (reg_value + 1),
        }
    }

    /// Writes this kind's threshold field, preserving the rest of the CSR.
    ///
    /// Read-modify-write: reads the shared register, clears only this
    /// field's bits, ORs in the new value (truncated to the field width,
    /// as the hardware would), and writes back. No re-clamping happens
    /// here; pass the value through [`clamp_to_capacity`](Self::clamp_to_capacity)
    /// first if capacity bounds should apply.
    ///
    /// # Errors
    ///
    /// Transport errors from either bus transaction, unmodified.
    pub fn set_threshold<A: CsrAccess>(self, csr: &mut A, value: u32) -> Result<(), A::Error> {
        let addr = self.reg_addr();
        let mask = self.field_max() << self.field_offset();
        let current = csr.read_csr(addr)?;
        let updated = (current & !mask) | ((value & self.field_max()) << self.field_offset());
        trace!(queue = self.name(), value, addr, "threshold write");
        csr.write_csr(addr, updated)
    }

    /// Reads this kind's threshold field: shift, mask to width, no re-clamp.
    ///
    /// # Errors
    ///
    /// Transport errors from the read, unmodified.
    pub fn get_threshold<A: CsrAccess>(self, csr: &mut A) -> Result<u32, A::Error> {
        let reg = csr.read_csr(self.reg_addr())?;
        Ok((reg >> self.field_offset()) & self.field_max())
    }

    /// Reads this kind's provisioned capacity in entries from the size CSRs.
    ///
    /// Descriptor queue capacities are stored as entry counts, data buffer
    /// capacities in the same `2^(N+1)` encoding the thresholds use.
    ///
    /// # Errors
    ///
    /// Transport errors from the read, unmodified.
    pub fn read_capacity<A: CsrAccess>(self, csr: &mut A) -> Result<u32, A::Error> {
        let field_mask = (1 << regs::QUEUE_SIZE_FIELD_WIDTH) - 1;
        let (addr, offset) = match self {
            QueueKind::Cmd => (regs::QUEUE_SIZE, regs::CR_QUEUE_SIZE_OFFSET),
            QueueKind::Resp => (regs::ALT_QUEUE_SIZE, regs::ALT_RESP_QUEUE_SIZE_OFFSET),
            QueueKind::Tx => (regs::QUEUE_SIZE, regs::TX_DATA_BUFFER_SIZE_OFFSET),
            QueueKind::Rx => (regs::QUEUE_SIZE, regs::RX_DATA_BUFFER_SIZE_OFFSET),
        };
        let raw = (csr.read_csr(addr)? >> offset) & field_mask;
        Ok(match self {
            QueueKind::Cmd | QueueKind::Resp => raw,
            QueueKind::Tx | QueueKind::Rx => 1 << (raw + 1),
        })
    }

    /// Predicts the hardware's approaching-threshold signal.
    ///
    /// The effective threshold is the stored register value clamped to the
    /// capacity and converted to entries. Receive-side queues (response, RX)
    /// assert once the enqueued count reaches it; transmit-side queues
    /// (command, TX) assert while at least that many entries remain free.
    pub fn approach_signal(self, capacity: u32, stored_reg: u32, enqueued: u32) -> bool {
        let effective = self.entries(self.clamp_to_capacity(capacity, stored_reg));
        match self {
            QueueKind::Resp | QueueKind::Rx => enqueued >= effective,
            QueueKind::Cmd | QueueKind::Tx => capacity.saturating_sub(enqueued) >= effective,
        }
    }
}
