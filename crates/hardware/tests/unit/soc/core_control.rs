//! Core Control Tests.
//!
//! Allocation, explicit restarts, the image load and stopping, driven both by
//! programs (`COGINIT`/`COGSTOP`) and by the host.

use octosim_core::SimError;
use octosim_core::core::CoreState;
use octosim_core::soc::interconnect::StartRequest;

use crate::common::builder::instruction::{hub_op, mov_imm};
use crate::common::harness::TestContext;

const ARG: u32 = 0x20;
const COGID: u32 = 1;
const COGINIT: u32 = 2;
const COGSTOP: u32 = 3;

fn allocate_request(load_addr: u32) -> u32 {
    StartRequest {
        par: 0,
        load_addr,
        target: 0,
        allocate: true,
    }
    .encode()
}

/// Core 0 runs `COGINIT ARG` with the allocate flag; `running` lists the other
/// cores to boot first.
fn coginit_from_core_zero(running: &[usize]) -> TestContext {
    let mut ctx = TestContext::new().load_program(0, &[hub_op(ARG, COGINIT)]);
    ctx.set_local(0, ARG, allocate_request(0x100));
    for &id in running {
        ctx.chassis.boot_core(id, 0).unwrap();
    }
    // Window 0 at tick 0: aligned on elapsed 1, commits on elapsed 9.
    ctx.run(9);
    assert_eq!(ctx.core(0).pc(), 1);
    ctx
}

// ─── Allocation ──────────────────────────────────────────────────────────────

#[test]
fn coginit_fails_when_every_core_is_running() {
    let ctx = coginit_from_core_zero(&[1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(ctx.local(0, ARG), 7);
    assert!(ctx.core(0).carry_flag());
    for id in 0..8 {
        assert_eq!(ctx.core(id).state(), CoreState::Running, "core {id}");
    }
}

#[test]
fn coginit_picks_the_only_dormant_core() {
    let ctx = coginit_from_core_zero(&[1, 2, 3, 4, 5, 7]);
    assert_eq!(ctx.local(0, ARG), 6);
    assert!(!ctx.core(0).carry_flag());
    assert!(!ctx.core(0).zero_flag());
    assert_eq!(ctx.core(6).state(), CoreState::Loading);
    assert_eq!(ctx.core(6).load_address(), 0x100);
}

#[test]
fn coginit_picks_lowest_dormant_core() {
    let ctx = coginit_from_core_zero(&[]);
    assert_eq!(ctx.local(0, ARG), 1);
    assert_eq!(ctx.core(1).state(), CoreState::Loading);
    assert_eq!(ctx.core(2).state(), CoreState::Dormant);
}

#[test]
fn host_start_with_explicit_target_restarts_a_running_core() {
    let mut ctx = TestContext::new().load_program(3, &[mov_imm(0x10, 1)]);
    let arg = StartRequest {
        par: 0x40,
        load_addr: 0x200,
        target: 3,
        allocate: false,
    }
    .encode();

    assert_eq!(ctx.chassis.start_core(arg), Some(3));
    let core = ctx.core(3);
    assert_eq!(core.state(), CoreState::Loading);
    assert_eq!(core.peek(0x1F0), 0x40);
    assert_eq!(core.peek(0), 0);
}

#[test]
fn start_request_fields_round_trip() {
    let request = StartRequest {
        par: 0x7FFC,
        load_addr: 0x1234,
        target: 5,
        allocate: false,
    };
    assert_eq!(StartRequest::decode(request.encode()), request);
    assert!(StartRequest::decode(0b1000).allocate);
}

// ─── Loading ─────────────────────────────────────────────────────────────────

#[test]
fn started_core_loads_image_and_runs_it() {
    let mut ctx = TestContext::new();
    let image_addr = 0x100;
    ctx.chassis
        .load_shared(image_addr, &mov_imm(0x10, 42).to_le_bytes());
    // A long just past the image must not reach the register window.
    ctx.chassis
        .load_shared(image_addr + 0x1F0 * 4, &u32::MAX.to_le_bytes());

    let arg = StartRequest {
        par: 0x44,
        load_addr: image_addr,
        target: 0,
        allocate: true,
    }
    .encode();
    assert_eq!(ctx.chassis.start_core(arg), Some(0));

    // Two longs per 16-tick rotation: 496 longs need 248 rotations.
    ctx.run(3900);
    assert_eq!(ctx.core(0).state(), CoreState::Loading);
    ctx.run(100);

    let core = ctx.core(0);
    assert_eq!(core.state(), CoreState::Running);
    assert_eq!(core.load_cursor(), 0x1F0);
    assert_eq!(ctx.local(0, 0x10), 42);
    assert_eq!(ctx.local(0, 0x1F0), 0x44);
    assert_eq!(ctx.chassis.stats().cores[0].longs_loaded, 0x1F0);
}

// ─── Stopping ────────────────────────────────────────────────────────────────

#[test]
fn core_can_stop_itself() {
    let program = [hub_op(ARG, COGID), hub_op(ARG, COGSTOP)];
    let mut ctx = TestContext::new().load_program(0, &program);
    ctx.run(40);
    assert_eq!(ctx.core(0).state(), CoreState::Dormant);
    assert_eq!(ctx.local(0, ARG), 0);
}

#[test]
fn host_stop_reports_whether_all_were_running() {
    let mut ctx = TestContext::new();
    for id in 0..8 {
        ctx.chassis.boot_core(id, 0).unwrap();
    }
    assert!(ctx.chassis.stop_core(3).unwrap());
    assert_eq!(ctx.core(3).state(), CoreState::Dormant);
    assert!(!ctx.chassis.stop_core(3).unwrap());
}

#[test]
fn host_queries_reject_unknown_cores() {
    let mut ctx = TestContext::new();
    assert!(matches!(ctx.chassis.stop_core(8), Err(SimError::InvalidCoreId(8))));
    assert!(matches!(ctx.chassis.core(9), Err(SimError::InvalidCoreId(9))));
    assert!(ctx.chassis.boot_core(8, 0).is_err());
    assert!(ctx.chassis.load_local(8, 0, &[1]).is_err());
}
