use octosim_core::isa::{Condition, Effects, Opcode, encode};

/// Fluent builder for 32-bit instruction words.
///
/// Starts as an unconditional, result-writing instruction with no flag writes
/// and a register source.
#[derive(Clone, Copy, Debug)]
pub struct InstructionBuilder {
    opcode: Opcode,
    effects: Effects,
    condition: Condition,
    dest: u32,
    src: u32,
}

impl InstructionBuilder {
    pub fn new(opcode: Opcode) -> Self {
        Self {
            opcode,
            effects: Effects {
                write_result: true,
                ..Effects::default()
            },
            condition: Condition::Always,
            dest: 0,
            src: 0,
        }
    }

    pub fn dest(mut self, dest: u32) -> Self {
        self.dest = dest;
        self
    }

    /// Register source: the operand is the word at `src`.
    pub fn src(mut self, src: u32) -> Self {
        self.src = src;
        self.effects.immediate = false;
        self
    }

    /// Immediate source: the operand is the literal 9-bit value.
    pub fn imm(mut self, value: u32) -> Self {
        self.src = value;
        self.effects.immediate = true;
        self
    }

    pub fn wz(mut self) -> Self {
        self.effects.write_zero = true;
        self
    }

    pub fn wc(mut self) -> Self {
        self.effects.write_carry = true;
        self
    }

    /// Clears the write-result bit.
    pub fn nr(mut self) -> Self {
        self.effects.write_result = false;
        self
    }

    pub fn cond(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    pub fn build(self) -> u32 {
        encode(self.opcode, self.effects, self.condition, self.dest, self.src)
    }
}

/// `MOV dest, #value`.
pub fn mov_imm(dest: u32, value: u32) -> u32 {
    InstructionBuilder::new(Opcode::Mov).dest(dest).imm(value).build()
}

/// `HUBOP dest, #sub` with WR and both flag writes.
pub fn hub_op(dest: u32, sub: u32) -> u32 {
    InstructionBuilder::new(Opcode::HubOp)
        .dest(dest)
        .imm(sub)
        .wz()
        .wc()
        .build()
}
