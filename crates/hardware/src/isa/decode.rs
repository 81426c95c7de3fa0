//! Instruction Word Codec.
//!
//! Decodes a raw 32-bit word into an `Instruction` and encodes field tuples back
//! into words. Decoding is total: every 32-bit value decodes, reserved opcodes
//! yield a garbage instruction (`opcode == None`) rather than an error.

use crate::common::constants::{
    COND_MASK, COND_SHIFT, DEST_SHIFT, EFFECT_MASK, EFFECT_SHIFT, FIELD_MASK, OPCODE_MASK,
    OPCODE_SHIFT, SRC_SHIFT,
};
use crate::isa::condition::Condition;
use crate::isa::instruction::{Effects, Instruction, InstructionBits};
use crate::isa::opcodes::Opcode;

/// Decodes a 32-bit instruction word.
///
/// # Arguments
///
/// * `word` - The raw instruction word as stored in local memory.
///
/// # Returns
///
/// The decoded instruction. Reserved opcode codes produce a garbage instruction
/// whose `opcode` is `None`; all other fields are still extracted.
#[inline]
pub fn decode(word: u32) -> Instruction {
    Instruction {
        raw: word,
        opcode: Opcode::from_code(word.opcode_field()),
        effects: Effects::from_bits(word.effect_field()),
        condition: Condition::from_code(word.cond_field()),
        dest: word.dest_field(),
        src: word.src_field(),
    }
}

/// Encodes an instruction tuple into a 32-bit word.
///
/// Destination and source are truncated to their 9-bit fields.
pub const fn encode(
    opcode: Opcode,
    effects: Effects,
    condition: Condition,
    dest: u32,
    src: u32,
) -> u32 {
    ((opcode.code() & OPCODE_MASK) << OPCODE_SHIFT)
        | ((effects.bits() & EFFECT_MASK) << EFFECT_SHIFT)
        | ((condition.code() & COND_MASK) << COND_SHIFT)
        | ((dest & FIELD_MASK) << DEST_SHIFT)
        | ((src & FIELD_MASK) << SRC_SHIFT)
}
