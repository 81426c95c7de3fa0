//! ALU shift operations.
//!
//! Implements the rotates, logical and arithmetic shifts, carry rotates and bit
//! reversal. The shift count is the low five bits of the source value.
//!
//! C receives the bit that leaves first: the old bit 31 for left operations
//! (`ROL`, `SHL`, `RCL`) and the old bit 0 for right operations and `REV`.

use super::{AluOp, AluOut};

/// Bit mask for the shift count (5 bits: 0-31).
const SHIFT_MASK: u32 = 0x1F;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `d`  - The value to be shifted.
/// * `s`  - The shift count (low five bits used).
/// * `c`  - Current carry flag, shifted in by `RCL`/`RCR`.
pub const fn execute(op: AluOp, d: u32, s: u32, c: bool) -> AluOut {
    let n = s & SHIFT_MASK;
    let msb = d >> 31 != 0;
    let lsb = d & 1 != 0;
    match op {
        AluOp::Ror => AluOut::new(d.rotate_right(n), lsb),
        AluOp::Rol => AluOut::new(d.rotate_left(n), msb),
        AluOp::Shr => AluOut::new(d >> n, lsb),
        AluOp::Shl => AluOut::new(d << n, msb),
        AluOp::Sar => AluOut::new(((d as i32) >> n) as u32, lsb),
        AluOp::Rcr => {
            let fill = if c && n > 0 { !(u32::MAX >> n) } else { 0 };
            AluOut::new((d >> n) | fill, lsb)
        }
        AluOp::Rcl => {
            let fill = if c && n > 0 { !(u32::MAX << n) } else { 0 };
            AluOut::new((d << n) | fill, msb)
        }
        AluOp::Rev => AluOut::new(d.reverse_bits() >> n, lsb),
        _ => AluOut::new(d, c),
    }
}
