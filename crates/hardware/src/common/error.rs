//! Host-level error definitions.
//!
//! Simulated-hardware failures (no free core, no free lock, out-of-range shared-RAM
//! writes) are reported to the running program through the carry flag and sentinel
//! values and never appear here. This module covers the remaining category:
//! 1. **Invalid Queries:** An external caller named a core, pin, or lock that does not exist.
//! 2. **Configuration:** Configuration text failed to parse or violates a constraint.

use thiserror::Error;

/// Errors surfaced to the host embedding the simulator.
#[derive(Debug, Error)]
pub enum SimError {
    /// A core id outside `0..8` was passed to a host query.
    #[error("invalid core id {0} (expected 0..=7)")]
    InvalidCoreId(usize),

    /// An input pin outside `0..32` was passed to a host query.
    #[error("invalid pin {0} (expected 0..=31)")]
    InvalidPin(u32),

    /// A lock id outside `0..8` was passed to a host query.
    #[error("invalid lock id {0} (expected 0..=7)")]
    InvalidLockId(usize),

    /// The configuration text could not be deserialized.
    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The configuration parsed but holds an unusable value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias for host-level operations.
pub type Result<T> = std::result::Result<T, SimError>;
