//! Instruction Mnemonic Rendering.
//!
//! Converts a decoded instruction into a human-readable line for debug tracing,
//! logging, and test diagnostics:
//!
//! ```text
//! [COND] MNEMONIC dest, src  EFFECTS
//! ```
//!
//! 1. **Aliases:** Non-writing forms display under their compare/write counterpart
//!    (`RDLONG` becomes `WRLONG`, `AND` becomes `TEST`, `SUB` becomes `CMP`, and so on).
//! 2. **Operands:** Register-mapped addresses print by name, other addresses as `$hex`,
//!    immediates with a leading `#`.
//! 3. **Garbage:** Reserved encodings print as their four raw bytes, little-endian.
//!
//! Rendering never affects execution.
//!
//! ```
//! use octosim_core::isa::{decode, encode, Condition, Effects, Opcode};
//!
//! let fx = Effects { write_result: true, immediate: true, ..Effects::default() };
//! let word = encode(Opcode::Mov, fx, Condition::Always, 0x1F6, 1);
//! assert_eq!(decode(word).to_string(), "MOV DIRA, #1");
//! ```

use std::fmt;

use crate::common::reg::SpecialRegister;
use crate::isa::condition::Condition;
use crate::isa::instruction::Instruction;
use crate::isa::opcodes::{HubOp, Opcode};

/// Mnemonic shown for an instruction, including display-only aliases.
///
/// Returns `None` for garbage encodings.
pub fn mnemonic(inst: &Instruction) -> Option<&'static str> {
    let op = inst.opcode?;
    let wr = inst.effects.write_result;
    let name = match op {
        Opcode::RdByte if !wr => "WRBYTE",
        Opcode::RdWord if !wr => "WRWORD",
        Opcode::RdLong if !wr => "WRLONG",
        Opcode::And if !wr => "TEST",
        Opcode::AndN if !wr => "TESTN",
        Opcode::Sub if !wr => "CMP",
        Opcode::SubX if !wr => "CMPX",
        Opcode::JmpRet if !wr => "JMP",
        Opcode::HubOp if inst.effects.immediate => {
            HubOp::from_source(inst.src).map_or(op.name(), HubOp::name)
        }
        _ => op.name(),
    };
    Some(name)
}

/// Whether the displayed mnemonic already implies the result write setting.
const fn implies_write_mode(inst: &Instruction, op: Opcode) -> bool {
    let wr = inst.effects.write_result;
    match op {
        Opcode::RdByte | Opcode::RdWord | Opcode::RdLong | Opcode::HubOp => true,
        Opcode::And | Opcode::AndN | Opcode::Sub | Opcode::SubX | Opcode::JmpRet => !wr,
        _ => false,
    }
}

/// Whether the opcode stores a result unless told otherwise.
const fn writes_by_default(op: Opcode) -> bool {
    !matches!(
        op,
        Opcode::Cmps
            | Opcode::Cmpsx
            | Opcode::Tjnz
            | Opcode::Tjz
            | Opcode::WaitPeq
            | Opcode::WaitPne
            | Opcode::WaitVid
    )
}

/// Writes a local address operand, naming register-mapped addresses.
fn write_addr(f: &mut fmt::Formatter<'_>, addr: u32) -> fmt::Result {
    match SpecialRegister::from_addr(addr) {
        Some(reg) => f.write_str(reg.name()),
        None => write!(f, "${addr:X}"),
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(op) = self.opcode else {
            let [b0, b1, b2, b3] = self.raw.to_le_bytes();
            return write!(f, "{b0:02X} {b1:02X} {b2:02X} {b3:02X}");
        };
        let Some(name) = mnemonic(self) else {
            return Ok(());
        };

        if self.condition != Condition::Always {
            write!(f, "{} ", self.condition.name())?;
        }
        f.write_str(name)?;

        let hub_by_name = op == Opcode::HubOp && self.effects.immediate;
        let jump_only = op == Opcode::JmpRet && !self.effects.write_result;
        if hub_by_name {
            f.write_str(" ")?;
            write_addr(f, self.dest)?;
        } else {
            f.write_str(" ")?;
            if !jump_only {
                write_addr(f, self.dest)?;
                f.write_str(", ")?;
            }
            if self.effects.immediate {
                write!(f, "#{}", self.src)?;
            } else {
                write_addr(f, self.src)?;
            }
        }

        let mut suffixes: Vec<&str> = Vec::new();
        if self.effects.write_zero {
            suffixes.push("WZ");
        }
        if self.effects.write_carry {
            suffixes.push("WC");
        }
        if !implies_write_mode(self, op) {
            match (writes_by_default(op), self.effects.write_result) {
                (true, false) => suffixes.push("NR"),
                (false, true) => suffixes.push("WR"),
                _ => {}
            }
        }
        if !suffixes.is_empty() {
            write!(f, "  {}", suffixes.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
