//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the condition table, the opcode table, the 32-bit instruction word
//! codec, and the mnemonic renderer.
//!
//! # Instruction word
//!
//! Fixed width, MSB first:
//!
//! ```text
//! 31      26 25  22 21  18 17      9 8       0
//! [ opcode ][ ZCRI ][ cond ][  dest  ][  src   ]
//! ```

/// Condition codes gating instruction execution.
pub mod condition;

/// Instruction word decoding and encoding.
pub mod decode;

/// Mnemonic rendering for debug tracing and diagnostics.
pub mod disasm;

/// Instruction field extraction and the decoded instruction type.
pub mod instruction;

/// Opcode table: codes, names, and readiness families.
pub mod opcodes;

pub use condition::Condition;
pub use decode::{decode, encode};
pub use instruction::{Effects, Instruction, InstructionBits};
pub use opcodes::{HubOp, Opcode, Timing};
