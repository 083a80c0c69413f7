//! Identifier case transformation.
//!
//! Configuration parameters are named in PascalCase; the generated defines
//! use UPPER_SNAKE_CASE. The transform inserts an underscore before every
//! internal uppercase letter and upper-cases the result, so it is total over
//! identifiers that start with an uppercase letter.

/// Converts a PascalCase identifier to UPPER_SNAKE_CASE.
///
/// ```
/// use i3ccfg_core::codegen::to_upper_snake;
///
/// assert_eq!(to_upper_snake("CmdFifoDepth"), "CMD_FIFO_DEPTH");
/// assert_eq!(to_upper_snake("DatDepth"), "DAT_DEPTH");
/// ```
pub fn to_upper_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() && i != 0 {
            out.push('_');
        }
        out.extend(c.to_uppercase());
    }
    out
}
