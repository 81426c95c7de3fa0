//! Per-Tick Execution.
//!
//! This module implements the single decision point every core re-enters once per
//! chassis tick. It performs the following:
//! 1. **Loading:** Copies one long of the image on each tick the bus window is aligned.
//! 2. **Condition Gate:** A false condition (or a not-taken branch) costs a uniform
//!    4 ticks and then advances the program counter.
//! 3. **Readiness:** Fixed, hub-access and wait families decide when the effect commits.
//! 4. **Commit:** Result and flag writes gated by the effect bits, then the PC advances
//!    unless the effect redirected it.
//! 5. **Counters:** Both Counter Units step after the instruction while Running.

use tracing::{debug, trace};

use super::dispatch::{Flow, Outcome};
use super::{Core, CoreState};
use crate::common::constants::{
    DEFAULT_LATENCY, HUB_ACCESS_LATENCY, IMAGE_WORDS, LOCAL_ADDR_MASK, LOCAL_MEMORY_WORDS,
    SKIP_LATENCY, WAIT_LATENCY,
};
use crate::common::data::AccessWidth;
use crate::common::reg::SpecialRegister;
use crate::core::units::counter::{Counter, CounterChannel};
use crate::isa::{Instruction, Opcode, Timing};
use crate::soc::traits::HubPort;

impl Core {
    /// Advances this core by one tick.
    ///
    /// Dormant cores do nothing. Loading cores copy at most one long. Running
    /// cores run the per-tick contract on their in-flight instruction and then
    /// step both counters.
    pub fn step(&mut self, hub: &mut dyn HubPort) {
        match self.state {
            CoreState::Dormant => {}
            CoreState::Loading => self.load_step(hub),
            CoreState::Running => {
                self.execute_step(hub);
                self.tick_counters(hub.input_pins());
            }
        }
    }

    /// Copies the next image long when the bus window points at this core.
    fn load_step(&mut self, hub: &mut dyn HubPort) {
        if hub.bus_window() != self.id {
            return;
        }
        let addr = self
            .load_addr
            .wrapping_add((self.load_cursor as u32).wrapping_mul(4));
        let word = hub.read_shared(addr, AccessWidth::Long);
        self.poke(self.load_cursor as u32, word);
        self.load_cursor += 1;
        self.stats.longs_loaded += 1;

        if self.load_cursor >= IMAGE_WORDS {
            self.state = CoreState::Running;
            self.jump(0);
            debug!(core = self.id, longs = self.load_cursor, "image loaded: running");
        }
    }

    /// Runs the per-tick contract on the in-flight instruction.
    fn execute_step(&mut self, hub: &mut dyn HubPort) {
        self.elapsed = self.elapsed.saturating_add(1);
        let inst = self.current;

        let gated_off = self.skip_base.is_some() || !inst.condition.test(self.zero, self.carry);
        if gated_off {
            let base = self.skip_base.unwrap_or(0);
            if self.elapsed - base >= SKIP_LATENCY {
                self.stats.skipped += 1;
                self.advance();
            }
            return;
        }

        if !self.is_ready(&inst, hub) {
            self.stats.wait_ticks += 1;
            return;
        }

        let outcome = self.effect(&inst, hub);
        self.commit(&inst, outcome);
    }

    /// Evaluates the readiness rule of the instruction's opcode family.
    fn is_ready(&mut self, inst: &Instruction, hub: &dyn HubPort) -> bool {
        let timing = inst.opcode.map_or(Timing::Fixed, Opcode::timing);
        match timing {
            Timing::Fixed => self.elapsed >= DEFAULT_LATENCY,
            Timing::HubAccess => {
                if self.aligned_at.is_none() && hub.bus_window() == self.id {
                    self.aligned_at = Some(self.elapsed);
                }
                self.aligned_at
                    .is_some_and(|at| self.elapsed >= at.saturating_add(HUB_ACCESS_LATENCY))
            }
            Timing::Wait => self.elapsed >= WAIT_LATENCY && self.wait_satisfied(inst, hub),
        }
    }

    /// Evaluates the wait condition of a WAIT-family instruction.
    fn wait_satisfied(&self, inst: &Instruction, hub: &dyn HubPort) -> bool {
        let d = self.read_local(inst.dest, hub);
        let s = self.source_value(inst, hub);
        let pins = self.read_local(SpecialRegister::Ina.addr(), hub);
        match inst.opcode {
            Some(Opcode::WaitCnt) => hub.global_tick() as u32 == d,
            Some(Opcode::WaitPeq) => pins & s == d,
            Some(Opcode::WaitPne) => pins & s != d,
            _ => true,
        }
    }

    /// Applies an outcome under the instruction's effect bits and moves the PC.
    fn commit(&mut self, inst: &Instruction, outcome: Outcome) {
        let fx = inst.effects;
        if let Some(value) = outcome.result.filter(|_| fx.write_result) {
            self.write_local(inst.dest, value);
        }
        if let Some(zero) = outcome.zero.filter(|_| fx.write_zero) {
            self.zero = zero;
        }
        if let Some(carry) = outcome.carry.filter(|_| fx.write_carry) {
            self.carry = carry;
        }
        self.stats.retired += 1;

        if self.trace {
            trace!(
                core = self.id,
                pc = self.pc,
                instruction = %inst,
                z = self.zero,
                c = self.carry,
                "commit"
            );
        }

        match outcome.flow {
            Flow::Next => self.advance(),
            Flow::Jump(target) => self.jump(target),
            Flow::NotTaken => self.skip_base = Some(self.elapsed),
        }
    }

    /// Moves to the next sequential instruction.
    fn advance(&mut self) {
        self.jump((self.pc + 1) & LOCAL_ADDR_MASK);
    }

    /// Steps both Counter Units against the external input pins.
    fn tick_counters(&mut self, inputs: u32) {
        tick_counter(&mut self.counter_a, &mut self.memory, inputs);
        tick_counter(&mut self.counter_b, &mut self.memory, inputs);
    }
}

/// Runs one counter against its control/frequency/phase registers.
fn tick_counter(counter: &mut Counter, memory: &mut [u32; LOCAL_MEMORY_WORDS], inputs: u32) {
    let (ctr, frq, phs) = match counter.channel() {
        CounterChannel::A => (
            SpecialRegister::Ctra,
            SpecialRegister::Frqa,
            SpecialRegister::Phsa,
        ),
        CounterChannel::B => (
            SpecialRegister::Ctrb,
            SpecialRegister::Frqb,
            SpecialRegister::Phsb,
        ),
    };
    memory[phs.index()] = counter.tick(
        memory[ctr.index()],
        memory[frq.index()],
        memory[phs.index()],
        inputs,
    );
}
