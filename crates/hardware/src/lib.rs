//! Eight-core shared-bus microcontroller simulator library.
//!
//! This crate implements a cycle-stepped instruction-set simulator with the following:
//! 1. **ISA:** Condition table, 60-entry opcode table, instruction word codec and mnemonic rendering.
//! 2. **Core:** Per-core state machine (Dormant/Loading/Running), register-mapped local memory,
//!    the ALU and two Counter Units per core.
//! 3. **Hub:** Shared RAM, the hardware lock table, round-robin bus arbitration, and the
//!    chassis that steps all cores in lockstep.
//! 4. **Simulation:** Breakpoint collaborator, bounded run loop, configuration and statistics.
//!
//! ```
//! use octosim_core::isa::{encode, Condition, Effects, Opcode};
//! use octosim_core::{Chassis, Config};
//!
//! let mut chassis = Chassis::new(&Config::default()).unwrap();
//! let imm = Effects { write_result: true, immediate: true, ..Effects::default() };
//! let program = [
//!     encode(Opcode::Mov, imm, Condition::Always, 0x10, 5),
//!     encode(Opcode::Add, imm, Condition::Always, 0x10, 3),
//! ];
//! chassis.load_local(0, 0, &program).unwrap();
//! chassis.boot_core(0, 0).unwrap();
//! chassis.tick_n(8);
//! assert_eq!(chassis.core(0).unwrap().peek(0x10), 8);
//! ```

/// Common types and constants (sizes, field layout, access widths, errors, registers).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// Per-core state machine and execution units.
pub mod core;
/// Instruction set (conditions, opcodes, codec, mnemonics).
pub mod isa;
/// Breakpoint debugger and run loop.
pub mod sim;
/// Hub components and the chassis.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// One execution context; borrowed from the chassis for inspection.
pub use crate::core::{Core, CoreState};
/// Host-level error type and result alias.
pub use crate::common::{Result, SimError};
/// Top-level machine; construct with `Chassis::new`.
pub use crate::soc::Chassis;
