//! CSR access capability trait.
//!
//! The threshold model never talks to hardware directly; it is handed an
//! implementation of [`CsrAccess`], which may be an AHB/AXI bus master, a
//! simulation backdoor, or a test double. Calls block for as long as the underlying
//! transaction takes; timeout and retry policy belong entirely to the
//! implementor, and its failures propagate through the model unmodified.

/// Read/write access to the controller's 32-bit CSRs.
pub trait CsrAccess {
    /// Transport failure type; forwarded unchanged by everything built on
    /// this trait, never retried, never wrapped.
    type Error;

    /// Reads the CSR at the given register offset.
    ///
    /// # Errors
    ///
    /// Whatever the transport reports.
    fn read_csr(&mut self, addr: u32) -> Result<u32, Self::Error>;

    /// Writes the CSR at the given register offset.
    ///
    /// # Errors
    ///
    /// Whatever the transport reports.
    fn write_csr(&mut self, addr: u32, value: u32) -> Result<(), Self::Error>;
}
