//! Local Memory Tests.
//!
//! Live register reads, write protection and operand resolution.

use octosim_core::common::SpecialRegister;
use octosim_core::core::Core;
use octosim_core::isa::{Opcode, decode};
use rstest::rstest;

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::mocks::hub::quiet_hub;

#[test]
fn cnt_mirrors_the_global_tick() {
    let core = Core::new(0, false);
    let hub = quiet_hub(0, 0x1_0000_0123, 0);
    assert_eq!(core.read_local(SpecialRegister::Cnt.addr(), &hub), 0x123);
}

#[test]
fn ina_hides_pins_the_core_drives() {
    let mut core = Core::new(0, false);
    core.poke(SpecialRegister::Dira.addr(), 0b0101);
    let hub = quiet_hub(0, 0, 0b1111);
    assert_eq!(core.read_local(SpecialRegister::Ina.addr(), &hub), 0b1010);
    assert_eq!(core.read_local(SpecialRegister::Inb.addr(), &hub), 0);
}

#[rstest]
#[case(SpecialRegister::Par, false)]
#[case(SpecialRegister::Cnt, false)]
#[case(SpecialRegister::Ina, false)]
#[case(SpecialRegister::Inb, false)]
#[case(SpecialRegister::Outa, true)]
#[case(SpecialRegister::Dira, true)]
#[case(SpecialRegister::Phsa, true)]
fn program_writes_respect_read_only_registers(#[case] reg: SpecialRegister, #[case] stored: bool) {
    let mut core = Core::new(0, false);
    core.write_local(reg.addr(), 0xAB);
    assert_eq!(core.peek(reg.addr()) == 0xAB, stored, "{}", reg.name());
    assert_eq!(reg.is_read_only(), !stored);
}

#[test]
fn addresses_wrap_at_nine_bits() {
    let mut core = Core::new(0, false);
    core.poke(0x205, 9);
    assert_eq!(core.peek(5), 9);
    core.load_local(0x1FF, &[1, 2]);
    assert_eq!(core.peek(0x1FF), 1);
    assert_eq!(core.peek(0), 2);
}

#[test]
fn source_operand_honors_immediate_flag() {
    let mut core = Core::new(0, false);
    core.poke(0x21, 77);
    let hub = quiet_hub(0, 0, 0);

    let imm = decode(InstructionBuilder::new(Opcode::Mov).dest(0x20).imm(0x21).build());
    assert_eq!(core.source_value(&imm, &hub), 0x21);

    let reg = decode(InstructionBuilder::new(Opcode::Mov).dest(0x20).src(0x21).build());
    assert_eq!(core.source_value(&reg, &hub), 77);
}

#[test]
fn register_addresses_are_named() {
    assert_eq!(SpecialRegister::from_addr(0x1F4), Some(SpecialRegister::Outa));
    assert_eq!(SpecialRegister::from_addr(0x1EF), None);
    assert_eq!(SpecialRegister::Vscl.addr(), 0x1FF);
    assert_eq!(SpecialRegister::Ctra.name(), "CTRA");
}
