//! Statistics Tests.

use octosim_core::isa::{Condition, Opcode};

use crate::common::builder::instruction::{InstructionBuilder, mov_imm};
use crate::common::harness::TestContext;

#[test]
fn counts_retired_skipped_and_waiting() {
    let program = [
        mov_imm(0x10, 1),
        InstructionBuilder::new(Opcode::Mov)
            .dest(0x11)
            .imm(1)
            .cond(Condition::Never)
            .build(),
        InstructionBuilder::new(Opcode::RdLong)
            .dest(0x12)
            .imm(0)
            .build(),
    ];
    let mut ctx = TestContext::new().load_program(0, &program);
    ctx.run(8);

    let stats = ctx.chassis.stats();
    assert_eq!(stats.ticks, 8);
    assert_eq!(stats.cores[0].retired, 1);
    assert_eq!(stats.cores[0].skipped, 1);
    assert_eq!(stats.total_retired(), 1);

    // The RDLONG starts on tick 8 and waits for window 0 at tick 16.
    ctx.run(4);
    assert_eq!(ctx.chassis.stats().cores[0].wait_ticks, 4);
}

#[test]
fn report_lists_every_core() {
    let mut ctx = TestContext::new().load_program(0, &[mov_imm(0x10, 1)]);
    ctx.run(4);
    let report = ctx.chassis.stats().to_string();
    assert!(report.contains("sim_ticks                4"));
    assert!(report.contains("sim_insts                1"));
    assert_eq!(report.lines().filter(|l| l.starts_with(char::is_numeric)).count(), 8);
}
