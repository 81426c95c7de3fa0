//! ALU bitwise operations.
//!
//! Implements AND, ANDN, OR, XOR and the mux family. Every operation reports
//! the odd parity of its result in C and `result == 0` in Z.

use super::{AluOp, AluOut, parity};

/// Executes a bitwise operation.
///
/// The mux family writes the source mask into `d` as all ones or all zeros,
/// selected by a flag: `MUXC` by C, `MUXNC` by !C, `MUXZ` by Z, `MUXNZ` by !Z.
pub const fn execute(op: AluOp, d: u32, s: u32, z: bool, c: bool) -> AluOut {
    let value = match op {
        AluOp::And => d & s,
        AluOp::AndN => d & !s,
        AluOp::Or => d | s,
        AluOp::Xor => d ^ s,
        AluOp::MuxC => mux(d, s, c),
        AluOp::MuxNc => mux(d, s, !c),
        AluOp::MuxZ => mux(d, s, z),
        AluOp::MuxNz => mux(d, s, !z),
        _ => d,
    };
    AluOut::new(value, parity(value))
}

#[inline]
const fn mux(d: u32, mask: u32, set: bool) -> u32 {
    if set { d | mask } else { d & !mask }
}
