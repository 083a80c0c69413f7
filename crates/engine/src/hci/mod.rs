//! Host Controller Interface queue-threshold model.
//!
//! This module models how the four HCI queues expose their occupancy
//! thresholds through CSRs. It provides:
//! 1. **Register Map:** Addresses and field layouts of the threshold and size CSRs.
//! 2. **Access Capability:** The [`CsrAccess`] trait the model reads and writes through.
//! 3. **Queue Kinds:** Per-kind clamp rules, unit conversions, and register operations.

/// CSR access capability trait.
pub mod accessor;

/// Threshold and queue-size CSR addresses and field layouts.
pub mod regs;

/// Per-queue-kind threshold policies and register operations.
pub mod threshold;

pub use accessor::CsrAccess;
pub use threshold::QueueKind;
