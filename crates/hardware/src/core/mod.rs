//! Core implementation.
//!
//! This module contains the per-core state machine and the execution units it
//! drives: the ALU shared by every value-computing opcode and the two Counter
//! Units each core owns.

/// Per-core state, execution contract and opcode effects.
pub mod cpu;

/// Execution units (ALU, Counter Unit).
pub mod units;

pub use self::cpu::{Core, CoreState};
