//! Opcode Effects.
//!
//! Computes what an instruction does once its readiness rule allows it to commit.
//! An effect never writes the destination or flags itself: it returns an
//! `Outcome` holding the candidate result, candidate flags and control flow, and
//! the core commits the parts its effect bits select.
//!
//! Pure value operations go through the ALU; this module handles the families that
//! touch the hub, the program counter or instruction fields.

use tracing::{debug, warn};

use super::Core;
use crate::common::constants::{
    DEST_SHIFT, FIELD_MASK, INSTR_FIELD_SHIFT, LOCAL_ADDR_MASK, SRC_SHIFT,
};
use crate::common::data::AccessWidth;
use crate::core::units::alu::{Alu, AluOp, parity, unsigned_carry};
use crate::isa::{HubOp, Instruction, Opcode};
use crate::soc::traits::HubPort;

/// Result value written to the destination when no core or lock is available.
const FAILED_ID: u32 = 7;

/// How the program counter moves after a committed effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Advance to the next instruction.
    Next,
    /// Jump to a local address.
    Jump(u32),
    /// Branch not taken: continue through the failed-condition path.
    NotTaken,
}

/// Candidate writes produced by an effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Value for the destination address, if the effect produces one.
    pub result: Option<u32>,
    /// Candidate zero flag.
    pub zero: Option<bool>,
    /// Candidate carry flag.
    pub carry: Option<bool>,
    /// Program counter movement.
    pub flow: Flow,
}

impl Outcome {
    /// No writes; advance.
    pub const NONE: Self = Self {
        result: None,
        zero: None,
        carry: None,
        flow: Flow::Next,
    };

    /// Result plus both flags; advance.
    pub const fn write(result: u32, zero: bool, carry: bool) -> Self {
        Self {
            result: Some(result),
            zero: Some(zero),
            carry: Some(carry),
            flow: Flow::Next,
        }
    }

    /// Flags only; advance.
    pub const fn flags(zero: bool, carry: bool) -> Self {
        Self {
            result: None,
            zero: Some(zero),
            carry: Some(carry),
            flow: Flow::Next,
        }
    }

    const fn with_flow(self, flow: Flow) -> Self {
        Self { flow, ..self }
    }
}

impl Core {
    /// Computes the effect of a ready instruction.
    pub(crate) fn effect(&self, inst: &Instruction, hub: &mut dyn HubPort) -> Outcome {
        let Some(op) = inst.opcode else {
            warn!(
                core = self.id,
                pc = self.pc,
                word = inst.raw,
                "reserved opcode executed as no-op"
            );
            return Outcome::NONE;
        };
        let d = self.read_local(inst.dest, hub);
        let s = self.source_value(inst, hub);

        if let Some(alu) = AluOp::from_opcode(op) {
            return alu_outcome(alu, inst, d, s, self.zero, self.carry);
        }

        match op {
            Opcode::RdByte => hub_transfer(AccessWidth::Byte, inst, d, s, hub),
            Opcode::RdWord => hub_transfer(AccessWidth::Word, inst, d, s, hub),
            Opcode::RdLong => hub_transfer(AccessWidth::Long, inst, d, s, hub),
            Opcode::HubOp => HubOp::from_source(s)
                .map_or(Outcome::NONE, |sub| self.hub_op(sub, d, hub)),

            Opcode::Movs => field_move(d, s, SRC_SHIFT),
            Opcode::Movd => field_move(d, s, DEST_SHIFT),
            Opcode::Movi => field_move(d, s, INSTR_FIELD_SHIFT),

            Opcode::JmpRet => {
                let ret = (self.pc + 1) & LOCAL_ADDR_MASK;
                let linked = (d & !LOCAL_ADDR_MASK) | ret;
                Outcome::write(linked, false, ret != 0).with_flow(Flow::Jump(s))
            }
            Opcode::Djnz => {
                let r = d.wrapping_sub(1);
                let flow = if r == 0 { Flow::NotTaken } else { Flow::Jump(s) };
                Outcome::write(r, r == 0, r == u32::MAX).with_flow(flow)
            }
            Opcode::Tjnz => {
                let flow = if d == 0 { Flow::NotTaken } else { Flow::Jump(s) };
                Outcome::flags(d == 0, false).with_flow(flow)
            }
            Opcode::Tjz => {
                let flow = if d == 0 { Flow::Jump(s) } else { Flow::NotTaken };
                Outcome::flags(d == 0, false).with_flow(flow)
            }

            Opcode::WaitCnt => {
                let r = d.wrapping_add(s);
                Outcome::write(r, r == 0, unsigned_carry(d, s))
            }
            Opcode::WaitPeq => {
                let r = d.wrapping_add(s);
                Outcome::write(r, r == 0, false)
            }
            Opcode::WaitPne => {
                let r = d.wrapping_add(s).wrapping_add(1);
                Outcome::write(r, r == 0, r == 0)
            }

            _ => Outcome::NONE,
        }
    }

    /// Core and lock control sub-operations.
    fn hub_op(&self, sub: HubOp, d: u32, hub: &mut dyn HubPort) -> Outcome {
        let target = (d & 0b111) as usize;
        match sub {
            HubOp::ClkSet => Outcome::NONE,
            HubOp::CoreId => Outcome::write(self.id as u32, self.id == 0, false),
            HubOp::CoreInit => match hub.start_core(d) {
                Some(id) => Outcome::write(id as u32, id == 0, false),
                None => {
                    debug!(core = self.id, arg = d, "core start failed: none dormant");
                    Outcome::write(FAILED_ID, false, true)
                }
            },
            HubOp::CoreStop => Outcome::flags(d == 0, hub.stop_core(target)),
            HubOp::LockNew => match hub.lock_new() {
                Some(id) => Outcome::write(id as u32, id == 0, false),
                None => {
                    debug!(core = self.id, "lock allocation failed: none free");
                    Outcome::write(FAILED_ID, false, true)
                }
            },
            HubOp::LockRet => Outcome::flags(target == 0, hub.lock_return(target)),
            HubOp::LockSet => Outcome::flags(target == 0, hub.lock_set(target)),
            HubOp::LockClr => Outcome::flags(target == 0, hub.lock_clear(target)),
        }
    }
}

/// Pure ALU families, with the compare and mux write rules.
fn alu_outcome(alu: AluOp, inst: &Instruction, d: u32, s: u32, z: bool, c: bool) -> Outcome {
    let out = Alu::execute(alu, d, s, z, c);
    match alu {
        _ if alu.is_compare() => Outcome::flags(out.zero, out.carry),
        AluOp::MuxC | AluOp::MuxNc | AluOp::MuxZ | AluOp::MuxNz if !inst.effects.write_result => {
            Outcome::flags(d == 0, parity(d))
        }
        _ => Outcome::write(out.value, out.zero, out.carry),
    }
}

/// Shared-RAM read (write-result set) or write (write-result clear).
///
/// The hub address is the source value; the destination holds the data.
fn hub_transfer(
    width: AccessWidth,
    inst: &Instruction,
    d: u32,
    s: u32,
    hub: &mut dyn HubPort,
) -> Outcome {
    if inst.effects.write_result {
        let value = hub.read_shared(s, width);
        Outcome::write(value, value == 0, false)
    } else {
        hub.write_shared(s, width, d);
        Outcome::flags(s & width.misalign_mask() != 0, false)
    }
}

/// Replaces the 9-bit field at `shift` with the low nine bits of the source.
const fn field_move(d: u32, s: u32, shift: u32) -> Outcome {
    let r = (d & !(FIELD_MASK << shift)) | ((s & FIELD_MASK) << shift);
    Outcome::write(r, r == 0, r >> 31 != 0)
}
