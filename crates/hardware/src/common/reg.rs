//! Register-Mapped Local Addresses.
//!
//! The top sixteen longs of every core's local memory (`0x1F0..=0x1FF`) are special
//! purpose registers rather than plain storage. This module provides:
//! 1. **Naming:** A static name table used by the mnemonic renderer.
//! 2. **Access Rules:** Which registers are read-only and how their live values are sourced.

use crate::common::constants::REGISTER_BASE;

/// Special purpose registers at local addresses `0x1F0..=0x1FF`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpecialRegister {
    /// Boot parameter, set when the core is started.
    Par = 0x1F0,
    /// Mirror of the global tick counter.
    Cnt = 0x1F1,
    /// Input pins of port A masked by this core's direction bits.
    Ina = 0x1F2,
    /// Input pins of port B (unimplemented, reads 0).
    Inb = 0x1F3,
    /// Output drive bits of port A.
    Outa = 0x1F4,
    /// Output drive bits of port B (unused).
    Outb = 0x1F5,
    /// Direction bits of port A.
    Dira = 0x1F6,
    /// Direction bits of port B (unused).
    Dirb = 0x1F7,
    /// Counter A control.
    Ctra = 0x1F8,
    /// Counter B control.
    Ctrb = 0x1F9,
    /// Counter A frequency.
    Frqa = 0x1FA,
    /// Counter B frequency.
    Frqb = 0x1FB,
    /// Counter A phase accumulator.
    Phsa = 0x1FC,
    /// Counter B phase accumulator.
    Phsb = 0x1FD,
    /// Video configuration.
    Vcfg = 0x1FE,
    /// Video scale.
    Vscl = 0x1FF,
}

const NAMES: [&str; 16] = [
    "PAR", "CNT", "INA", "INB", "OUTA", "OUTB", "DIRA", "DIRB", "CTRA", "CTRB", "FRQA", "FRQB",
    "PHSA", "PHSB", "VCFG", "VSCL",
];

const ALL: [SpecialRegister; 16] = [
    SpecialRegister::Par,
    SpecialRegister::Cnt,
    SpecialRegister::Ina,
    SpecialRegister::Inb,
    SpecialRegister::Outa,
    SpecialRegister::Outb,
    SpecialRegister::Dira,
    SpecialRegister::Dirb,
    SpecialRegister::Ctra,
    SpecialRegister::Ctrb,
    SpecialRegister::Frqa,
    SpecialRegister::Frqb,
    SpecialRegister::Phsa,
    SpecialRegister::Phsb,
    SpecialRegister::Vcfg,
    SpecialRegister::Vscl,
];

impl SpecialRegister {
    /// Returns the register mapped at a local address, if any.
    pub fn from_addr(addr: u32) -> Option<Self> {
        addr.checked_sub(REGISTER_BASE)
            .and_then(|idx| ALL.get(idx as usize))
            .copied()
    }

    /// Local address of this register.
    #[inline]
    pub const fn addr(self) -> u32 {
        self as u32
    }

    /// Index into the local memory array.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical register name (e.g. `"DIRA"`).
    pub const fn name(self) -> &'static str {
        NAMES[(self.addr() - REGISTER_BASE) as usize]
    }

    /// Whether program writes to this register are dropped.
    pub const fn is_read_only(self) -> bool {
        matches!(self, Self::Par | Self::Cnt | Self::Ina | Self::Inb)
    }
}
