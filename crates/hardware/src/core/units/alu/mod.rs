//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the pure value/flag computations of the instruction set.
//! Every operation takes the destination value `d`, the source value `s`, and the
//! current Z and C flags, and returns the candidate result plus candidate flags.
//! Whether those are committed is decided by the core from the effect bits.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: add/subtract families, compares, sums, sign operations, limits
//! - [`logic`]:      AND, ANDN, OR, XOR and the mux family
//! - [`shifts`]:     rotates, shifts and bit reversal
//!
//! The carry helpers below are the single implementation of 32-bit unsigned and
//! signed overflow detection; the Counter Unit reuses them.

/// Add/subtract families, compares, sums, sign operations and limits.
pub mod arithmetic;

/// Bitwise logic and the mux family.
pub mod logic;

/// Rotates, shifts and bit reversal.
pub mod shifts;

use crate::isa::Opcode;

/// Operations computed purely from `(d, s, z, c)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum AluOp {
    Add,
    AddAbs,
    AddS,
    AddX,
    AddSx,
    Sub,
    SubAbs,
    SubS,
    SubX,
    SubSx,
    Cmps,
    Cmpsx,
    CmpSub,
    SumC,
    SumNc,
    SumZ,
    SumNz,
    Mov,
    Neg,
    Abs,
    AbsNeg,
    NegC,
    NegNc,
    NegZ,
    NegNz,
    /// Limit maximum: unsigned `min(d, s)`.
    Max,
    /// Limit minimum: unsigned `max(d, s)`.
    Min,
    /// Signed limit maximum.
    Maxs,
    /// Signed limit minimum.
    Mins,
    And,
    AndN,
    Or,
    Xor,
    MuxC,
    MuxNc,
    MuxZ,
    MuxNz,
    Ror,
    Rol,
    Shr,
    Shl,
    Rcr,
    Rcl,
    Sar,
    Rev,
}

impl AluOp {
    /// Maps an opcode to its ALU operation; opcodes with side effects beyond
    /// `(d, s, z, c)` (bus, branches, field moves, waits) return `None`.
    pub const fn from_opcode(op: Opcode) -> Option<Self> {
        let alu = match op {
            Opcode::Add => Self::Add,
            Opcode::AddAbs => Self::AddAbs,
            Opcode::AddS => Self::AddS,
            Opcode::AddX => Self::AddX,
            Opcode::AddSx => Self::AddSx,
            Opcode::Sub => Self::Sub,
            Opcode::SubAbs => Self::SubAbs,
            Opcode::SubS => Self::SubS,
            Opcode::SubX => Self::SubX,
            Opcode::SubSx => Self::SubSx,
            Opcode::Cmps => Self::Cmps,
            Opcode::Cmpsx => Self::Cmpsx,
            Opcode::CmpSub => Self::CmpSub,
            Opcode::SumC => Self::SumC,
            Opcode::SumNc => Self::SumNc,
            Opcode::SumZ => Self::SumZ,
            Opcode::SumNz => Self::SumNz,
            Opcode::Mov => Self::Mov,
            Opcode::Neg => Self::Neg,
            Opcode::Abs => Self::Abs,
            Opcode::AbsNeg => Self::AbsNeg,
            Opcode::NegC => Self::NegC,
            Opcode::NegNc => Self::NegNc,
            Opcode::NegZ => Self::NegZ,
            Opcode::NegNz => Self::NegNz,
            Opcode::Max => Self::Max,
            Opcode::Min => Self::Min,
            Opcode::Maxs => Self::Maxs,
            Opcode::Mins => Self::Mins,
            Opcode::And => Self::And,
            Opcode::AndN => Self::AndN,
            Opcode::Or => Self::Or,
            Opcode::Xor => Self::Xor,
            Opcode::MuxC => Self::MuxC,
            Opcode::MuxNc => Self::MuxNc,
            Opcode::MuxZ => Self::MuxZ,
            Opcode::MuxNz => Self::MuxNz,
            Opcode::Ror => Self::Ror,
            Opcode::Rol => Self::Rol,
            Opcode::Shr => Self::Shr,
            Opcode::Shl => Self::Shl,
            Opcode::Rcr => Self::Rcr,
            Opcode::Rcl => Self::Rcl,
            Opcode::Sar => Self::Sar,
            Opcode::Rev => Self::Rev,
            _ => return None,
        };
        Some(alu)
    }

    /// Compare-only operations never store their result.
    pub const fn is_compare(self) -> bool {
        matches!(self, Self::Cmps | Self::Cmpsx)
    }
}

/// Candidate result and flags produced by an ALU operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AluOut {
    /// Computed result.
    pub value: u32,
    /// Candidate carry flag.
    pub carry: bool,
    /// Candidate zero flag.
    pub zero: bool,
}

impl AluOut {
    /// Result with the default zero rule (`value == 0`).
    #[inline]
    pub const fn new(value: u32, carry: bool) -> Self {
        Self {
            value,
            carry,
            zero: value == 0,
        }
    }
}

/// Arithmetic Logic Unit for 32-bit operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `d`  - Destination value
    /// * `s`  - Source value (already resolved against the immediate flag)
    /// * `z`  - Current zero flag
    /// * `c`  - Current carry flag
    ///
    /// # Returns
    ///
    /// The candidate result and flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use octosim_core::core::units::alu::{Alu, AluOp};
    ///
    /// let out = Alu::execute(AluOp::Sub, 0, 1, false, false);
    /// assert_eq!(out.value, u32::MAX);
    /// assert!(out.carry); // unsigned borrow
    ///
    /// let out = Alu::execute(AluOp::Xor, 0b1011, 0b0001, false, false);
    /// assert_eq!(out.value, 0b1010);
    /// assert!(!out.carry); // even parity
    /// ```
    pub fn execute(op: AluOp, d: u32, s: u32, z: bool, c: bool) -> AluOut {
        match op {
            AluOp::And
            | AluOp::AndN
            | AluOp::Or
            | AluOp::Xor
            | AluOp::MuxC
            | AluOp::MuxNc
            | AluOp::MuxZ
            | AluOp::MuxNz => logic::execute(op, d, s, z, c),

            AluOp::Ror
            | AluOp::Rol
            | AluOp::Shr
            | AluOp::Shl
            | AluOp::Rcr
            | AluOp::Rcl
            | AluOp::Sar
            | AluOp::Rev => shifts::execute(op, d, s, c),

            _ => arithmetic::execute(op, d, s, z, c),
        }
    }
}

/// Whether `a + b + carry_in`, read as unsigned, exceeds 32 bits.
#[inline]
pub const fn unsigned_carry_in(a: u32, b: u32, carry_in: bool) -> bool {
    (a as u64) + (b as u64) + (carry_in as u64) > u32::MAX as u64
}

/// Whether `a + b + carry_in`, read as signed, leaves the 32-bit signed range.
#[inline]
pub fn signed_carry_in(a: u32, b: u32, carry_in: bool) -> bool {
    let sum = (a as i32 as i64) + (b as i32 as i64) + (carry_in as i64);
    i32::try_from(sum).is_err()
}

/// Unsigned carry out of `a + b`.
#[inline]
pub const fn unsigned_carry(a: u32, b: u32) -> bool {
    unsigned_carry_in(a, b, false)
}

/// Signed overflow of `a + b`.
#[inline]
pub fn signed_carry(a: u32, b: u32) -> bool {
    signed_carry_in(a, b, false)
}

/// Unsigned borrow of `d - s - borrow_in`.
#[inline]
pub const fn unsigned_borrow(d: u32, s: u32, borrow_in: bool) -> bool {
    !unsigned_carry_in(d, !s, !borrow_in)
}

/// Signed overflow of `d - s - borrow_in`.
#[inline]
pub fn signed_borrow(d: u32, s: u32, borrow_in: bool) -> bool {
    signed_carry_in(d, !s, !borrow_in)
}

/// Odd parity of all 32 bits.
#[inline]
pub const fn parity(value: u32) -> bool {
    value.count_ones() % 2 == 1
}
