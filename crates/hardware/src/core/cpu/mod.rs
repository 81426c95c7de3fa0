//! Core Definition and Lifecycle.
//!
//! This module defines the `Core` structure, one of the eight independent execution
//! contexts owned by the chassis. It coordinates the following:
//! 1. **State Management:** Local memory, program counter, Z/C flags, and the
//!    Dormant/Loading/Running lifecycle.
//! 2. **Instruction Tracking:** The in-flight decoded instruction and its elapsed-tick counter.
//! 3. **Peripherals:** The two Counter Units and the pin latches they drive.
//!
//! The per-tick behavior lives in `execution`, operand access in `memory`, and the
//! opcode effects in `dispatch`.

/// Opcode effects and their flag/result outcomes.
pub mod dispatch;

/// Per-tick execution contract and image loading.
pub mod execution;

/// Local memory access with register-mapped addresses.
pub mod memory;

use tracing::debug;

use crate::common::constants::LOCAL_MEMORY_WORDS;
use crate::common::reg::SpecialRegister;
use crate::core::units::counter::{Counter, CounterChannel};
use crate::isa::Instruction;
use crate::stats::CoreStats;

/// Lifecycle state of a core.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CoreState {
    /// Not executing.
    #[default]
    Dormant,
    /// Copying its image from shared RAM, one long per aligned tick.
    Loading,
    /// Executing instructions from local memory.
    Running,
}

/// One independent execution context.
#[derive(Clone, Debug)]
pub struct Core {
    id: usize,
    memory: [u32; LOCAL_MEMORY_WORDS],
    pc: u32,
    zero: bool,
    carry: bool,
    state: CoreState,
    load_addr: u32,
    load_cursor: usize,
    counter_a: Counter,
    counter_b: Counter,
    current: Instruction,
    elapsed: u32,
    /// Elapsed count at which a not-taken branch entered the failed-condition path.
    skip_base: Option<u32>,
    /// Elapsed count at which the bus window first pointed at this core.
    aligned_at: Option<u32>,
    stats: CoreStats,
    trace: bool,
}

impl Core {
    /// Creates a Dormant core with zeroed memory.
    ///
    /// # Arguments
    ///
    /// * `id` - Core index, 0-7.
    /// * `trace` - Emit a `trace!` event for each committed instruction.
    pub fn new(id: usize, trace: bool) -> Self {
        Self {
            id,
            memory: [0; LOCAL_MEMORY_WORDS],
            pc: 0,
            zero: false,
            carry: false,
            state: CoreState::Dormant,
            load_addr: 0,
            load_cursor: 0,
            counter_a: Counter::new(CounterChannel::A),
            counter_b: Counter::new(CounterChannel::B),
            current: Instruction::default(),
            elapsed: 0,
            skip_base: None,
            aligned_at: None,
            stats: CoreStats::default(),
            trace,
        }
    }

    /// Core index.
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Program counter (local address of the in-flight instruction).
    pub const fn pc(&self) -> u32 {
        self.pc
    }

    /// Zero flag.
    pub const fn zero_flag(&self) -> bool {
        self.zero
    }

    /// Carry flag.
    pub const fn carry_flag(&self) -> bool {
        self.carry
    }

    /// Lifecycle state.
    pub const fn state(&self) -> CoreState {
        self.state
    }

    /// Whether the core is executing instructions.
    pub fn is_running(&self) -> bool {
        self.state == CoreState::Running
    }

    /// Longs copied so far in the current Loading phase.
    pub const fn load_cursor(&self) -> usize {
        self.load_cursor
    }

    /// Shared-RAM address the image is loaded from.
    pub const fn load_address(&self) -> u32 {
        self.load_addr
    }

    /// The in-flight decoded instruction.
    pub const fn current(&self) -> &Instruction {
        &self.current
    }

    /// Ticks spent on the in-flight instruction since it was fetched.
    pub const fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// Execution counters.
    pub const fn stats(&self) -> &CoreStats {
        &self.stats
    }

    /// Counter Unit A.
    pub const fn counter_a(&self) -> &Counter {
        &self.counter_a
    }

    /// Counter Unit B.
    pub const fn counter_b(&self) -> &Counter {
        &self.counter_b
    }

    /// Direction bits this core contributes to the aggregate pin state.
    pub const fn direction_pins(&self) -> u32 {
        match self.state {
            CoreState::Dormant => 0,
            _ => self.memory[SpecialRegister::Dira.index()],
        }
    }

    /// Output levels this core drives: `OUTA` and both counter latches, masked by `DIRA`.
    pub const fn output_pins(&self) -> u32 {
        let drive = self.memory[SpecialRegister::Outa.index()]
            | self.counter_a.outputs()
            | self.counter_b.outputs();
        drive & self.direction_pins()
    }

    /// Resets the core and enters Loading.
    ///
    /// Clears local memory, sets `PAR`, clears both flags and records the image
    /// address with a zero load cursor.
    pub fn start(&mut self, par: u32, load_addr: u32) {
        self.memory = [0; LOCAL_MEMORY_WORDS];
        self.memory[SpecialRegister::Par.index()] = par;
        self.zero = false;
        self.carry = false;
        self.pc = 0;
        self.state = CoreState::Loading;
        self.load_addr = load_addr;
        self.load_cursor = 0;
        self.counter_a.reset();
        self.counter_b.reset();
        self.current = Instruction::default();
        self.elapsed = 0;
        self.skip_base = None;
        self.aligned_at = None;
        self.stats.starts += 1;
        debug!(core = self.id, par, load_addr, "core start: loading");
    }

    /// Returns the core to Dormant from any state; its counters release their pins.
    pub fn stop(&mut self) {
        self.state = CoreState::Dormant;
        self.counter_a.reset();
        self.counter_b.reset();
        debug!(core = self.id, pc = self.pc, "core stopped");
    }

    /// Copies words straight into local memory, bypassing the Loading phase.
    ///
    /// Addresses wrap at the 512-word boundary.
    pub fn load_local(&mut self, origin: u32, words: &[u32]) {
        for (offset, &word) in words.iter().enumerate() {
            self.poke(origin.wrapping_add(offset as u32), word);
        }
    }

    /// Enters Running at `pc` without loading, keeping local memory as is.
    pub fn boot_at(&mut self, pc: u32) {
        self.state = CoreState::Running;
        self.jump(pc);
        debug!(core = self.id, pc = self.pc, "core booted directly");
    }
}
