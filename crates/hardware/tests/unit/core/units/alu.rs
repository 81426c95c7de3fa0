//! ALU Tests.
//!
//! Verifies result values and Z/C flag rules of every operation family, and that
//! the carry helpers agree with native overflow detection.

use octosim_core::core::units::alu::{
    Alu, AluOp, parity, signed_borrow, signed_carry, signed_carry_in, unsigned_borrow,
    unsigned_carry, unsigned_carry_in,
};
use octosim_core::isa::Opcode;
use octosim_core::isa::opcodes::ALL_OPCODES;
use proptest::prelude::*;
use rstest::rstest;

fn run(op: AluOp, d: u32, s: u32) -> (u32, bool, bool) {
    let out = Alu::execute(op, d, s, false, false);
    (out.value, out.zero, out.carry)
}

// ─── Add / subtract ──────────────────────────────────────────────────────────

#[rstest]
#[case(AluOp::Add, 5, 3, (8, false, false))]
#[case(AluOp::Add, u32::MAX, 1, (0, true, true))]
#[case(AluOp::Sub, 0, 1, (u32::MAX, false, true))]
#[case(AluOp::Sub, 7, 7, (0, true, false))]
#[case(AluOp::AddS, 0x7FFF_FFFF, 1, (0x8000_0000, false, true))]
#[case(AluOp::SubS, 0x8000_0000, 1, (0x7FFF_FFFF, false, true))]
#[case(AluOp::AddAbs, 10, (-3i32) as u32, (13, false, false))]
#[case(AluOp::SubAbs, 10, (-3i32) as u32, (7, false, false))]
fn add_subtract_family(#[case] op: AluOp, #[case] d: u32, #[case] s: u32, #[case] want: (u32, bool, bool)) {
    assert_eq!(run(op, d, s), want);
}

#[test]
fn extended_forms_chain_carry_and_zero() {
    // 64-bit 0x1_0000_0000 - 1: low word borrows, high word consumes it.
    let low = Alu::execute(AluOp::Sub, 0, 1, false, false);
    assert!(low.carry);
    let high = Alu::execute(AluOp::SubX, 1, 0, low.zero, low.carry);
    assert_eq!(high.value, 0);
    assert!(!high.carry);
    // Z stays clear because the low word was non-zero.
    assert!(!high.zero);

    let high = Alu::execute(AluOp::AddX, u32::MAX, 0, true, true);
    assert_eq!(high.value, 0);
    assert!(high.carry);
    assert!(high.zero);
}

#[test]
fn signed_compares() {
    let out = Alu::execute(AluOp::Cmps, (-1i32) as u32, 1, false, false);
    assert!(out.carry);
    let out = Alu::execute(AluOp::Cmps, 1, (-1i32) as u32, false, false);
    assert!(!out.carry);
    let out = Alu::execute(AluOp::Cmpsx, 4, 4, true, true);
    assert!(out.carry, "4 < 4 + C");
}

#[test]
fn compare_and_subtract_only_when_not_below() {
    assert_eq!(run(AluOp::CmpSub, 10, 4), (6, false, true));
    assert_eq!(run(AluOp::CmpSub, 4, 4), (0, true, true));
    assert_eq!(run(AluOp::CmpSub, 3, 4), (3, false, false));
}

#[test]
fn conditional_sums_pick_direction_from_flags() {
    assert_eq!(Alu::execute(AluOp::SumC, 10, 3, false, false).value, 13);
    assert_eq!(Alu::execute(AluOp::SumC, 10, 3, false, true).value, 7);
    assert_eq!(Alu::execute(AluOp::SumNz, 10, 3, true, false).value, 13);
    assert_eq!(Alu::execute(AluOp::SumNz, 10, 3, false, false).value, 7);
}

// ─── Sign and limit ──────────────────────────────────────────────────────────

#[rstest]
#[case(AluOp::Mov, (-5i32) as u32, ((-5i32) as u32, false, true))]
#[case(AluOp::Neg, 5, ((-5i32) as u32, false, false))]
#[case(AluOp::Abs, (-5i32) as u32, (5, false, true))]
#[case(AluOp::AbsNeg, 5, ((-5i32) as u32, false, false))]
#[case(AluOp::Mov, 0, (0, true, false))]
fn sign_operations_flag_the_source(#[case] op: AluOp, #[case] s: u32, #[case] want: (u32, bool, bool)) {
    assert_eq!(run(op, 0xDEAD, s), want);
}

#[test]
fn limits_clamp_toward_the_source() {
    // MAX limits from above (unsigned minimum), MIN from below.
    assert_eq!(run(AluOp::Max, 100, 40), (40, false, false));
    assert_eq!(run(AluOp::Max, 10, 40), (10, false, true));
    assert_eq!(run(AluOp::Min, 10, 40), (40, false, true));
    assert_eq!(run(AluOp::Maxs, (-10i32) as u32, 5).0, (-10i32) as u32);
    assert_eq!(run(AluOp::Mins, (-10i32) as u32, 5).0, 5);
}

// ─── Logic and shifts ────────────────────────────────────────────────────────

#[test]
fn logic_carry_is_result_parity() {
    assert_eq!(run(AluOp::And, 0b1110, 0b0111), (0b0110, false, false));
    assert_eq!(run(AluOp::Or, 0b1000, 0b0011), (0b1011, false, true));
    assert_eq!(run(AluOp::AndN, 0b1111, 0b1111), (0, true, false));
}

#[test]
fn mux_copies_flag_into_masked_bits() {
    assert_eq!(Alu::execute(AluOp::MuxC, 0, 0b1010, false, true).value, 0b1010);
    assert_eq!(Alu::execute(AluOp::MuxC, 0xFF, 0b1010, false, false).value, 0xF5);
    assert_eq!(Alu::execute(AluOp::MuxNz, 0, 0b1, false, false).value, 1);
}

#[rstest]
#[case(AluOp::Shl, 0x8000_0001, 1, 2, true)]
#[case(AluOp::Shr, 0b11, 1, 1, true)]
#[case(AluOp::Sar, 0x8000_0000, 4, 0xF800_0000, false)]
#[case(AluOp::Ror, 1, 1, 0x8000_0000, true)]
#[case(AluOp::Rol, 0x8000_0000, 1, 1, true)]
#[case(AluOp::Rev, 0b1, 28, 0b1000, true)]
fn shift_results(#[case] op: AluOp, #[case] d: u32, #[case] s: u32, #[case] value: u32, #[case] carry: bool) {
    let out = Alu::execute(op, d, s, false, false);
    assert_eq!(out.value, value);
    assert_eq!(out.carry, carry);
}

#[test]
fn shift_count_uses_low_five_bits() {
    assert_eq!(run(AluOp::Shl, 1, 33).0, 2);
}

// ─── Opcode mapping ──────────────────────────────────────────────────────────

#[test]
fn side_effecting_opcodes_bypass_the_alu() {
    for op in [
        Opcode::RdLong,
        Opcode::HubOp,
        Opcode::JmpRet,
        Opcode::Djnz,
        Opcode::Movs,
        Opcode::WaitCnt,
    ] {
        assert_eq!(AluOp::from_opcode(op), None, "{op}");
    }
    let pure = ALL_OPCODES
        .into_iter()
        .filter_map(AluOp::from_opcode)
        .count();
    assert_eq!(pure, 45);
}

// ─── Carry helpers versus native overflow ────────────────────────────────────

#[rstest]
#[case(0, 0)]
#[case(u32::MAX, 1)]
#[case(0x7FFF_FFFF, 1)]
#[case(0x8000_0000, 0x8000_0000)]
#[case(0x8000_0000, 0x7FFF_FFFF)]
#[case(1, u32::MAX)]
fn boundary_carries(#[case] a: u32, #[case] b: u32) {
    assert_eq!(unsigned_carry(a, b), a.overflowing_add(b).1);
    assert_eq!(signed_carry(a, b), (a as i32).overflowing_add(b as i32).1);
    assert_eq!(unsigned_borrow(a, b, false), a.overflowing_sub(b).1);
    assert_eq!(signed_borrow(a, b, false), (a as i32).overflowing_sub(b as i32).1);
}

proptest! {
    #[test]
    fn carry_helpers_match_native(a in any::<u32>(), b in any::<u32>(), cin in any::<bool>()) {
        prop_assert_eq!(unsigned_carry(a, b), a.overflowing_add(b).1);
        prop_assert_eq!(signed_carry(a, b), (a as i32).checked_add(b as i32).is_none());
        prop_assert_eq!(unsigned_borrow(a, b, false), a < b);
        prop_assert_eq!(
            signed_borrow(a, b, false),
            (a as i32).checked_sub(b as i32).is_none()
        );

        let wide = u64::from(a) + u64::from(b) + u64::from(cin);
        prop_assert_eq!(unsigned_carry_in(a, b, cin), wide > u64::from(u32::MAX));
        let signed_wide = i64::from(a as i32) + i64::from(b as i32) + i64::from(cin);
        prop_assert_eq!(signed_carry_in(a, b, cin), i32::try_from(signed_wide).is_err());
        prop_assert_eq!(
            unsigned_borrow(a, b, cin),
            u64::from(a) < u64::from(b) + u64::from(cin)
        );
    }

    #[test]
    fn parity_matches_popcount(v in any::<u32>()) {
        prop_assert_eq!(parity(v), v.count_ones() % 2 == 1);
    }
}
