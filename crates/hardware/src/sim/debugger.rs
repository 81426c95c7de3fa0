//! Breakpoint debugger support.
//!
//! The breakpoint set is an explicit collaborator owned by the caller for the
//! duration of one debugging session. It provides:
//! 1. **Breakpoints:** `(core, address)` pairs, each independently toggled on and off.
//! 2. **Break query:** True when a Running core sits at an active breakpoint with its
//!    in-flight instruction not yet started (elapsed count 0).
//! 3. **Run loop:** `Chassis::run` ticks until a breakpoint hits or a tick budget runs out.

use std::collections::BTreeMap;

use tracing::debug;

use crate::common::constants::LOCAL_ADDR_MASK;
use crate::soc::Chassis;

/// Why `Chassis::run` returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// An active breakpoint matched.
    Breakpoint {
        /// Core that reached the breakpoint.
        core: usize,
        /// Local address of the breakpoint.
        address: u32,
    },
    /// The tick budget was exhausted.
    TickLimit,
}

/// Breakpoints keyed by `(core, address)`, each with an active flag.
#[derive(Clone, Debug, Default)]
pub struct BreakpointSet {
    entries: BTreeMap<(usize, u32), bool>,
}

impl BreakpointSet {
    /// Creates an empty set.
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Adds an active breakpoint, or flips the active flag of an existing one.
    ///
    /// Returns the breakpoint's new active state.
    pub fn toggle(&mut self, core: usize, address: u32) -> bool {
        let active = self
            .entries
            .entry((core, address & LOCAL_ADDR_MASK))
            .and_modify(|active| *active = !*active)
            .or_insert(true);
        *active
    }

    /// Removes a breakpoint entirely; returns whether it existed.
    pub fn remove(&mut self, core: usize, address: u32) -> bool {
        self.entries
            .remove(&(core, address & LOCAL_ADDR_MASK))
            .is_some()
    }

    /// Whether an active breakpoint exists at `(core, address)`.
    pub fn is_active(&self, core: usize, address: u32) -> bool {
        self.entries
            .get(&(core, address & LOCAL_ADDR_MASK))
            .copied()
            .unwrap_or(false)
    }

    /// Number of breakpoints, active or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no breakpoints.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First active breakpoint (in `(core, address)` order) the chassis currently sits on.
    pub fn hit(&self, chassis: &Chassis) -> Option<(usize, u32)> {
        self.entries
            .iter()
            .filter(|&(_, &active)| active)
            .map(|(&key, _)| key)
            .find(|&(core, address)| {
                chassis.core(core).is_ok_and(|c| {
                    c.is_running() && c.pc() == address && c.elapsed() == 0
                })
            })
    }

    /// Whether the run loop should stop before the next tick.
    pub fn should_break(&self, chassis: &Chassis) -> bool {
        self.hit(chassis).is_some()
    }
}

impl Chassis {
    /// Ticks until a breakpoint hits or `max_ticks` ticks have run.
    ///
    /// The query is evaluated after every tick, so calling `run` again while
    /// parked on a breakpoint always makes progress.
    pub fn run(&mut self, breakpoints: &BreakpointSet, max_ticks: u64) -> RunOutcome {
        for _ in 0..max_ticks {
            self.tick();
            if let Some((core, address)) = breakpoints.hit(self) {
                debug!(core, address, tick = self.global_tick(), "breakpoint hit");
                return RunOutcome::Breakpoint { core, address };
            }
        }
        RunOutcome::TickLimit
    }
}
