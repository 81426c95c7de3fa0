//! Mnemonic Rendering Tests.

use octosim_core::isa::disasm::mnemonic;
use octosim_core::isa::{Condition, Opcode, decode};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::instruction::InstructionBuilder;

fn render(word: u32) -> String {
    decode(word).to_string()
}

// ─── Aliases ─────────────────────────────────────────────────────────────────

#[rstest]
#[case(Opcode::RdByte, "WRBYTE")]
#[case(Opcode::RdWord, "WRWORD")]
#[case(Opcode::RdLong, "WRLONG")]
#[case(Opcode::And, "TEST")]
#[case(Opcode::AndN, "TESTN")]
#[case(Opcode::Sub, "CMP")]
#[case(Opcode::SubX, "CMPX")]
#[case(Opcode::JmpRet, "JMP")]
fn non_writing_forms_use_alias(#[case] op: Opcode, #[case] alias: &str) {
    let word = InstructionBuilder::new(op).nr().build();
    assert_eq!(mnemonic(&decode(word)), Some(alias));

    let writing = InstructionBuilder::new(op).build();
    assert_eq!(mnemonic(&decode(writing)), Some(op.name()));
}

#[rstest]
#[case(0, "CLKSET")]
#[case(1, "COGID")]
#[case(2, "COGINIT")]
#[case(3, "COGSTOP")]
#[case(4, "LOCKNEW")]
#[case(5, "LOCKRET")]
#[case(6, "LOCKSET")]
#[case(7, "LOCKCLR")]
fn immediate_hub_op_uses_sub_operation_name(#[case] sub: u32, #[case] name: &str) {
    let word = InstructionBuilder::new(Opcode::HubOp).dest(0x20).imm(sub).build();
    assert_eq!(mnemonic(&decode(word)), Some(name));
}

#[test]
fn register_hub_op_keeps_generic_name() {
    let word = InstructionBuilder::new(Opcode::HubOp).dest(0x20).src(0x21).build();
    assert_eq!(mnemonic(&decode(word)), Some("HUBOP"));
}

#[test]
fn immediate_hub_op_past_the_table_keeps_generic_name() {
    let word = InstructionBuilder::new(Opcode::HubOp).dest(0x20).imm(10).build();
    assert_eq!(mnemonic(&decode(word)), Some("HUBOP"));
}

// ─── Full lines ──────────────────────────────────────────────────────────────

#[test]
fn operands_name_registers_and_show_immediates_in_decimal() {
    let word = InstructionBuilder::new(Opcode::Mov).dest(0x1F6).imm(10).build();
    assert_eq!(render(word), "MOV DIRA, #10");

    let word = InstructionBuilder::new(Opcode::Add).dest(0x10).src(0x1F1).build();
    assert_eq!(render(word), "ADD $10, CNT");
}

#[test]
fn condition_prefix_and_flag_suffixes() {
    let word = InstructionBuilder::new(Opcode::Sub)
        .dest(0x10)
        .imm(1)
        .wc()
        .cond(Condition::C)
        .build();
    assert_eq!(render(word), "IF_C SUB $10, #1  WC");
}

#[test]
fn non_default_write_modes_get_suffixes() {
    let nr = InstructionBuilder::new(Opcode::Add).dest(1).src(2).nr().wz().build();
    assert_eq!(render(nr), "ADD $1, $2  WZ, NR");

    let wr = InstructionBuilder::new(Opcode::Cmps).dest(1).src(2).build();
    assert_eq!(render(wr), "CMPS $1, $2  WR");

    let plain = InstructionBuilder::new(Opcode::Cmps).dest(1).src(2).nr().build();
    assert_eq!(render(plain), "CMPS $1, $2");
}

#[test]
fn jump_shows_only_its_target() {
    let word = InstructionBuilder::new(Opcode::JmpRet).dest(0x30).imm(7).nr().build();
    assert_eq!(render(word), "JMP #7");
}

#[test]
fn garbage_has_no_mnemonic() {
    let inst = decode(0x1000_0000);
    assert_eq!(mnemonic(&inst), None);
    assert_eq!(inst.to_string(), "00 00 00 10");
}
