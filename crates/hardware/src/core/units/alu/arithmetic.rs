//! ALU arithmetic operations.
//!
//! Implements the add and subtract families, signed compares, the conditional
//! sums, the sign operations and the limit operations. Carry rules:
//! 1. **Add:** unsigned or signed carry out of the addition.
//! 2. **Subtract:** unsigned or signed borrow; X-variants fold in C and AND Z with the prior Z.
//! 3. **Sign/Move:** C is the sign of the source, Z tests the source.
//! 4. **Limits:** C is the strict `d < s` comparison, Z tests the source.

use super::{
    AluOp, AluOut, signed_borrow, signed_carry, signed_carry_in, unsigned_borrow, unsigned_carry,
    unsigned_carry_in,
};

/// Executes an arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be an arithmetic variant).
/// * `d`  - Destination value.
/// * `s`  - Source value.
/// * `z`  - Current zero flag.
/// * `c`  - Current carry flag.
///
/// # Returns
///
/// The candidate result and flags. Non-arithmetic opcodes return `d` unchanged.
pub fn execute(op: AluOp, d: u32, s: u32, z: bool, c: bool) -> AluOut {
    match op {
        AluOp::Add => AluOut::new(d.wrapping_add(s), unsigned_carry(d, s)),
        AluOp::AddAbs => {
            let magnitude = (s as i32).unsigned_abs();
            AluOut::new(d.wrapping_add(magnitude), unsigned_carry(d, magnitude))
        }
        AluOp::AddS => AluOut::new(d.wrapping_add(s), signed_carry(d, s)),
        AluOp::AddX => extended(
            d.wrapping_add(s).wrapping_add(c as u32),
            unsigned_carry_in(d, s, c),
            z,
        ),
        AluOp::AddSx => extended(
            d.wrapping_add(s).wrapping_add(c as u32),
            signed_carry_in(d, s, c),
            z,
        ),

        AluOp::Sub => AluOut::new(d.wrapping_sub(s), unsigned_borrow(d, s, false)),
        AluOp::SubAbs => {
            let magnitude = (s as i32).unsigned_abs();
            AluOut::new(
                d.wrapping_sub(magnitude),
                unsigned_borrow(d, magnitude, false),
            )
        }
        AluOp::SubS => AluOut::new(d.wrapping_sub(s), signed_borrow(d, s, false)),
        AluOp::SubX => extended(
            d.wrapping_sub(s).wrapping_sub(c as u32),
            unsigned_borrow(d, s, c),
            z,
        ),
        AluOp::SubSx => extended(
            d.wrapping_sub(s).wrapping_sub(c as u32),
            signed_borrow(d, s, c),
            z,
        ),

        AluOp::Cmps => AluOut::new(d.wrapping_sub(s), (d as i32) < (s as i32)),
        AluOp::Cmpsx => {
            let less = (d as i32 as i64) < (s as i32 as i64) + (c as i64);
            extended(d.wrapping_sub(s).wrapping_sub(c as u32), less, z)
        }
        AluOp::CmpSub => {
            if d >= s {
                AluOut::new(d - s, true)
            } else {
                AluOut {
                    value: d,
                    carry: false,
                    zero: false,
                }
            }
        }

        AluOp::SumC => sum(d, s, c),
        AluOp::SumNc => sum(d, s, !c),
        AluOp::SumZ => sum(d, s, z),
        AluOp::SumNz => sum(d, s, !z),

        AluOp::Mov => signed_source(s, s),
        AluOp::Neg => signed_source(s.wrapping_neg(), s),
        AluOp::Abs => signed_source((s as i32).unsigned_abs(), s),
        AluOp::AbsNeg => signed_source((s as i32).unsigned_abs().wrapping_neg(), s),
        AluOp::NegC => signed_source(negate_if(s, c), s),
        AluOp::NegNc => signed_source(negate_if(s, !c), s),
        AluOp::NegZ => signed_source(negate_if(s, z), s),
        AluOp::NegNz => signed_source(negate_if(s, !z), s),

        AluOp::Max => limit(d.min(s), d < s, s),
        AluOp::Min => limit(d.max(s), d < s, s),
        AluOp::Maxs => limit(
            (d as i32).min(s as i32) as u32,
            (d as i32) < (s as i32),
            s,
        ),
        AluOp::Mins => limit(
            (d as i32).max(s as i32) as u32,
            (d as i32) < (s as i32),
            s,
        ),

        _ => AluOut::new(d, false),
    }
}

/// Extended form: Z is only kept set when the result is zero and Z was already set.
#[inline]
const fn extended(value: u32, carry: bool, prior_zero: bool) -> AluOut {
    AluOut {
        value,
        carry,
        zero: value == 0 && prior_zero,
    }
}

/// `d - s` when `subtract` is set, otherwise `d + s`; C is signed overflow.
#[inline]
fn sum(d: u32, s: u32, subtract: bool) -> AluOut {
    if subtract {
        AluOut::new(d.wrapping_sub(s), signed_borrow(d, s, false))
    } else {
        AluOut::new(d.wrapping_add(s), signed_carry(d, s))
    }
}

#[inline]
const fn negate_if(s: u32, negate: bool) -> u32 {
    if negate { s.wrapping_neg() } else { s }
}

/// Sign/move flag rule: C = source is negative, Z = source is zero.
#[inline]
const fn signed_source(value: u32, s: u32) -> AluOut {
    AluOut {
        value,
        carry: (s as i32) < 0,
        zero: s == 0,
    }
}

/// Limit flag rule: Z tests the source rather than the result.
#[inline]
const fn limit(value: u32, less: bool, s: u32) -> AluOut {
    AluOut {
        value,
        carry: less,
        zero: s == 0,
    }
}
