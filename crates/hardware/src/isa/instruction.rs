//! Instruction Word Fields.
//!
//! Provides field extraction for the fixed-width 32-bit instruction word and the
//! decoded `Instruction` type consumed by the core's dispatcher:
//! 1. **Field Extraction:** `InstructionBits` reads each field straight from a raw word.
//! 2. **Effect Flags:** `Effects` groups the write-zero, write-carry, write-result and immediate bits.
//! 3. **Decoded Form:** `Instruction` pairs the raw word with its opcode (or none, for garbage).

use crate::common::constants::{
    COND_MASK, COND_SHIFT, DEST_SHIFT, EFFECT_MASK, EFFECT_SHIFT, FIELD_MASK, OPCODE_MASK,
    OPCODE_SHIFT, SRC_SHIFT,
};
use crate::isa::condition::Condition;
use crate::isa::opcodes::Opcode;

/// Bit of the effect field selecting the zero-flag write.
const WZ_BIT: u32 = 0b1000;
/// Bit of the effect field selecting the carry-flag write.
const WC_BIT: u32 = 0b0100;
/// Bit of the effect field selecting the result write.
const WR_BIT: u32 = 0b0010;
/// Bit of the effect field selecting an immediate source.
const IMM_BIT: u32 = 0b0001;

/// Trait for extracting fields from an encoded instruction word.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 26-31).
    fn opcode_field(&self) -> u32;

    /// Extracts the 4-bit effect field (bits 22-25), `ZCRI` high to low.
    fn effect_field(&self) -> u32;

    /// Extracts the condition field (bits 18-21).
    fn cond_field(&self) -> u32;

    /// Extracts the destination field (bits 9-17).
    fn dest_field(&self) -> u32;

    /// Extracts the source field (bits 0-8).
    fn src_field(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode_field(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn effect_field(&self) -> u32 {
        (self >> EFFECT_SHIFT) & EFFECT_MASK
    }

    #[inline(always)]
    fn cond_field(&self) -> u32 {
        (self >> COND_SHIFT) & COND_MASK
    }

    #[inline(always)]
    fn dest_field(&self) -> u32 {
        (self >> DEST_SHIFT) & FIELD_MASK
    }

    #[inline(always)]
    fn src_field(&self) -> u32 {
        (self >> SRC_SHIFT) & FIELD_MASK
    }
}

/// The four effect flags of an instruction word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct Effects {
    /// Update the zero flag from the effect's outcome.
    pub write_zero: bool,
    /// Update the carry flag from the effect's outcome.
    pub write_carry: bool,
    /// Store the computed result into the destination address.
    pub write_result: bool,
    /// Use the literal source field instead of the word it addresses.
    pub immediate: bool,
}

impl Effects {
    /// Unpacks the 4-bit `ZCRI` field.
    pub const fn from_bits(bits: u32) -> Self {
        Self {
            write_zero: bits & WZ_BIT != 0,
            write_carry: bits & WC_BIT != 0,
            write_result: bits & WR_BIT != 0,
            immediate: bits & IMM_BIT != 0,
        }
    }

    /// Packs into the 4-bit `ZCRI` field.
    pub const fn bits(self) -> u32 {
        (if self.write_zero { WZ_BIT } else { 0 })
            | (if self.write_carry { WC_BIT } else { 0 })
            | (if self.write_result { WR_BIT } else { 0 })
            | (if self.immediate { IMM_BIT } else { 0 })
    }
}

/// A decoded instruction.
///
/// Always retains the raw word so garbage encodings can still be displayed and
/// re-encoded bit-exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// The raw 32-bit word.
    pub raw: u32,
    /// Decoded opcode; `None` for reserved encodings.
    pub opcode: Option<Opcode>,
    /// Effect flags.
    pub effects: Effects,
    /// Condition gating execution.
    pub condition: Condition,
    /// Destination field (local address).
    pub dest: u32,
    /// Source field (local address or literal).
    pub src: u32,
}

impl Instruction {
    /// Whether this word holds a reserved (undecodable) opcode.
    #[inline]
    pub const fn is_garbage(&self) -> bool {
        self.opcode.is_none()
    }
}

impl Default for Instruction {
    /// The all-zero word: a non-writing, never-executed `RDBYTE 0, 0`.
    fn default() -> Self {
        crate::isa::decode::decode(0)
    }
}
