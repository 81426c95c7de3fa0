//! Simulation drivers.
//!
//! Provides the breakpoint collaborator and the bounded run loop built on the
//! chassis tick.

/// Breakpoint set and run loop.
pub mod debugger;

pub use debugger::{BreakpointSet, RunOutcome};
