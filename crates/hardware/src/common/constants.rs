//! Global System Constants.
//!
//! This module defines chip-wide constants used across the simulator. It includes:
//! 1. **Topology:** Number of cores and hardware locks.
//! 2. **Memory Constants:** Local memory size, register-mapped window, and the image bound.
//! 3. **Instruction Constants:** Field widths and shifts of the 32-bit instruction word.
//! 4. **Timing Constants:** Uniform latencies of the per-tick execution contract.

/// Number of independent processing cores owned by the chassis.
pub const CORE_COUNT: usize = 8;

/// Number of entries in the hardware lock table.
pub const LOCK_COUNT: usize = 8;

/// Number of 32-bit words in each core's local memory.
pub const LOCAL_MEMORY_WORDS: usize = 512;

/// Mask applied to local addresses and the program counter (9 bits).
pub const LOCAL_ADDR_MASK: u32 = 0x1FF;

/// First register-mapped local address (`PAR`).
pub const REGISTER_BASE: u32 = 0x1F0;

/// Number of longs copied from shared RAM while a core is Loading.
///
/// The loader stops once the cursor passes `0x1EF`, so the register-mapped
/// window `0x1F0..=0x1FF` is never overwritten by an image.
pub const IMAGE_WORDS: usize = 0x1F0;

/// Default shared RAM capacity in bytes (32 KiB).
pub const DEFAULT_HUB_RAM_SIZE: usize = 32 * 1024;

/// Mask applied to every shared-RAM address (64 KiB hub address space).
pub const HUB_ADDR_MASK: u32 = 0xFFFF;

/// Number of global ticks the bus window stays on one core.
pub const WINDOW_TICKS: u64 = 2;

/// Ticks a default (ALU/logic/shift/compare) instruction needs before it commits.
pub const DEFAULT_LATENCY: u32 = 4;

/// Ticks a failed-condition instruction occupies before the PC advances.
pub const SKIP_LATENCY: u32 = 4;

/// Minimum ticks before a WAIT-family instruction may commit.
pub const WAIT_LATENCY: u32 = 6;

/// Ticks after the first bus alignment before a bus-access instruction commits.
pub const HUB_ACCESS_LATENCY: u32 = 8;

/// Width of the destination and source fields in bits.
pub const FIELD_BITS: u32 = 9;

/// Mask of a 9-bit destination/source field.
pub const FIELD_MASK: u32 = 0x1FF;

/// Bit position of the source field.
pub const SRC_SHIFT: u32 = 0;

/// Bit position of the destination field.
pub const DEST_SHIFT: u32 = 9;

/// Bit position of the condition field.
pub const COND_SHIFT: u32 = 18;

/// Mask of the 4-bit condition field.
pub const COND_MASK: u32 = 0xF;

/// Bit position of the effect flag field (`ZCRI`).
pub const EFFECT_SHIFT: u32 = 22;

/// Mask of the 4-bit effect flag field.
pub const EFFECT_MASK: u32 = 0xF;

/// Bit position of the opcode field.
pub const OPCODE_SHIFT: u32 = 26;

/// Mask of the 6-bit opcode field.
pub const OPCODE_MASK: u32 = 0x3F;

/// Bit position of the instruction sub-field written by `MOVI`.
pub const INSTR_FIELD_SHIFT: u32 = 23;
