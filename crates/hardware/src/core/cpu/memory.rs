//! Local Memory Access.
//!
//! This module provides the interface between a core and its 512-long local memory.
//! It performs the following:
//! 1. **Live Registers:** `CNT`, `INA` and `INB` read live values instead of storage.
//! 2. **Write Protection:** Writes to `PAR`, `CNT`, `INA` and `INB` are dropped.
//! 3. **Operand Resolution:** Destination values and immediate-aware source values.
//! 4. **Fetch:** Loading the word at the program counter as the in-flight instruction.

use super::Core;
use crate::common::constants::LOCAL_ADDR_MASK;
use crate::common::reg::SpecialRegister;
use crate::isa::{Instruction, decode};
use crate::soc::traits::HubPort;

impl Core {
    /// Reads the stored word at a local address, ignoring live register values.
    #[inline]
    pub const fn peek(&self, addr: u32) -> u32 {
        self.memory[(addr & LOCAL_ADDR_MASK) as usize]
    }

    /// Stores a word at a local address unconditionally (host/loader access).
    #[inline]
    pub const fn poke(&mut self, addr: u32, value: u32) {
        self.memory[(addr & LOCAL_ADDR_MASK) as usize] = value;
    }

    /// Reads a local address as the running program sees it.
    ///
    /// # Arguments
    ///
    /// * `addr` - Local address (masked to 9 bits).
    /// * `hub` - Source of the global tick and the external pin levels.
    pub fn read_local(&self, addr: u32, hub: &dyn HubPort) -> u32 {
        match SpecialRegister::from_addr(addr & LOCAL_ADDR_MASK) {
            Some(SpecialRegister::Cnt) => hub.global_tick() as u32,
            Some(SpecialRegister::Ina) => {
                hub.input_pins() & !self.memory[SpecialRegister::Dira.index()]
            }
            Some(SpecialRegister::Inb) => 0,
            _ => self.peek(addr),
        }
    }

    /// Writes a local address from a program; read-only registers ignore the write.
    pub fn write_local(&mut self, addr: u32, value: u32) {
        let addr = addr & LOCAL_ADDR_MASK;
        if SpecialRegister::from_addr(addr).is_some_and(SpecialRegister::is_read_only) {
            return;
        }
        self.poke(addr, value);
    }

    /// Resolves the source operand: the literal field when immediate, else the addressed word.
    pub fn source_value(&self, inst: &Instruction, hub: &dyn HubPort) -> u32 {
        if inst.effects.immediate {
            inst.src
        } else {
            self.read_local(inst.src, hub)
        }
    }

    /// Sets the program counter and fetches the instruction there.
    pub(crate) fn jump(&mut self, target: u32) {
        self.pc = target & LOCAL_ADDR_MASK;
        self.fetch();
    }

    /// Decodes the word at the program counter and restarts its tick count.
    pub(crate) fn fetch(&mut self) {
        self.current = decode(self.peek(self.pc));
        self.elapsed = 0;
        self.skip_base = None;
        self.aligned_at = None;
    }
}
