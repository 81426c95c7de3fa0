//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by the ISA, the cores and the hub:
//! 1. **Constants:** Core count, memory sizes, image bound, and instruction field layout.
//! 2. **Access Widths:** Byte/word/long classification for shared-RAM transfers.
//! 3. **Error Handling:** The host-level error type and result alias.
//! 4. **Register Map:** Names and access rules of the register-mapped local addresses.

/// Common constants used throughout the simulator.
pub mod constants;

/// Shared-RAM access width definitions.
pub mod data;

/// Host-level error types.
pub mod error;

/// Register-mapped local address definitions.
pub mod reg;

pub use constants::{CORE_COUNT, LOCAL_MEMORY_WORDS, LOCK_COUNT};
pub use data::AccessWidth;
pub use error::{Result, SimError};
pub use reg::SpecialRegister;
