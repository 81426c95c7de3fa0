//! Counter Unit Tests.

use octosim_core::core::units::counter::{Counter, CounterChannel, CounterControl};
use rstest::rstest;

fn ctr(mode: u32, pin_a: u32, pin_b: u32) -> u32 {
    (mode << 26) | (pin_b << 9) | pin_a
}

#[test]
fn disabled_counter_holds_phase() {
    let mut counter = Counter::new(CounterChannel::A);
    assert_eq!(counter.tick(0, 123, 456, u32::MAX), 456);
    assert_eq!(counter.outputs(), 0);
}

#[test]
fn nco_drives_phase_bit_31_on_pin_a() {
    let mut counter = Counter::new(CounterChannel::A);
    let control = ctr(0b00100, 3, 0);

    let phs = counter.tick(control, 0x4000_0000, 0x4000_0000, 0);
    assert_eq!(phs, 0x8000_0000);
    assert_eq!(counter.outputs(), 1 << 3);

    let phs = counter.tick(control, 0x4000_0000, phs, 0);
    assert_eq!(phs, 0xC000_0000);
    assert_eq!(counter.outputs(), 1 << 3);

    let phs = counter.tick(control, 0x4000_0000, phs, 0);
    assert_eq!(phs, 0);
    assert_eq!(counter.outputs(), 0);
}

#[rstest]
#[case::pll_differential(0b00011)]
#[case::nco_differential(0b00101)]
fn differential_modes_drive_complement_on_pin_b(#[case] mode: u32) {
    let mut counter = Counter::new(CounterChannel::B);
    let control = ctr(mode, 0, 1);
    let _ = counter.tick(control, 0, 0, 0);
    assert_eq!(counter.outputs(), 0b10);
    let _ = counter.tick(control, 0, 0x8000_0000, 0);
    assert_eq!(counter.outputs(), 0b01);
}

#[test]
fn single_ended_pll_leaves_pin_b_low() {
    let mut counter = Counter::new(CounterChannel::A);
    let _ = counter.tick(ctr(0b00010, 0, 1), 0, 0x8000_0000, 0);
    assert_eq!(counter.outputs(), 0b01);
}

#[test]
fn duty_mode_outputs_the_accumulator_carry() {
    let mut counter = Counter::new(CounterChannel::A);
    let control = ctr(0b00110, 2, 0);
    let phs = counter.tick(control, 0x8000_0000, 0x8000_0000, 0);
    assert_eq!(phs, 0);
    assert_eq!(counter.outputs(), 1 << 2);
    let _ = counter.tick(control, 0x8000_0000, phs, 0);
    assert_eq!(counter.outputs(), 0);
}

#[rstest]
// mode 16 + truth table over (b, a) rows 00, 01, 10, 11
#[case(16, [false, false, false, false])]
#[case(17, [true, false, false, false])]
#[case(21, [true, false, true, false])]
#[case(24, [false, false, false, true])]
#[case(30, [false, true, true, true])]
#[case(31, [true, true, true, true])]
fn logic_modes_accumulate_when_table_is_true(#[case] mode: u32, #[case] rows: [bool; 4]) {
    let control = ctr(mode, 4, 5);
    for (row, accumulates) in rows.into_iter().enumerate() {
        let inputs = ((row as u32 & 1) << 4) | ((row as u32 >> 1) << 5);
        let mut counter = Counter::new(CounterChannel::A);
        let phs = counter.tick(control, 1, 100, inputs);
        assert_eq!(phs == 101, accumulates, "mode {mode} row {row}");
        assert_eq!(counter.outputs(), 0);
    }
}

#[test]
fn reserved_edge_modes_do_nothing() {
    let mut counter = Counter::new(CounterChannel::A);
    for mode in 8..16 {
        assert_eq!(counter.tick(ctr(mode, 0, 1), 7, 9, u32::MAX), 9);
    }
}

#[test]
fn pins_beyond_port_a_are_not_driven() {
    let mut counter = Counter::new(CounterChannel::A);
    let _ = counter.tick(ctr(0b00100, 40, 0), 0, 0x8000_0000, 0);
    assert_eq!(counter.outputs(), 0);
    assert_eq!(CounterControl::decode(ctr(0b00100, 40, 0)).pin_a, 40);
}

#[test]
fn reset_releases_pins() {
    let mut counter = Counter::new(CounterChannel::A);
    let _ = counter.tick(ctr(0b00100, 0, 0), 0, 0x8000_0000, 0);
    assert_eq!(counter.outputs(), 1);
    counter.reset();
    assert_eq!(counter.outputs(), 0);
    assert_eq!(counter.channel(), CounterChannel::A);
}
