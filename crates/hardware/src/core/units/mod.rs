//! Execution units and per-core peripherals.
//!
//! This module contains the pure arithmetic/logic unit shared by every opcode and
//! the waveform-generating Counter Unit owned (twice) by each core.

/// Arithmetic Logic Unit and the shared carry helpers.
pub mod alu;

/// Waveform-generating Counter Unit.
pub mod counter;
