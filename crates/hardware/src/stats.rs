//! Simulation statistics collection and reporting.
//!
//! This module tracks observational counters for the chassis. It provides:
//! 1. **Per-core counts:** Committed and skipped instructions, readiness wait ticks, loaded longs.
//! 2. **Derived metrics:** Ticks per committed instruction for each core.
//! 3. **Reporting:** A plain-text table via `Display`.
//!
//! Statistics never influence execution.

use std::fmt;

use crate::common::constants::CORE_COUNT;

/// Execution counters for one core.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CoreStats {
    /// Instructions whose effect committed.
    pub retired: u64,
    /// Instructions that advanced through the failed-condition path
    /// (condition false, or a branch that was not taken).
    pub skipped: u64,
    /// Ticks an instruction with a true condition spent waiting on its readiness rule.
    pub wait_ticks: u64,
    /// Longs copied from shared RAM while Loading.
    pub longs_loaded: u64,
    /// Number of times the core entered Loading.
    pub starts: u64,
}

/// Chassis-wide statistics snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total global ticks elapsed.
    pub ticks: u64,
    /// Per-core counters, indexed by core id.
    pub cores: [CoreStats; CORE_COUNT],
}

impl SimStats {
    /// Committed instructions summed over every core.
    pub fn total_retired(&self) -> u64 {
        self.cores.iter().map(|c| c.retired).sum()
    }
}

impl fmt::Display for SimStats {
    #[allow(clippy::cast_precision_loss)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "CHASSIS SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "sim_ticks                {}", self.ticks)?;
        writeln!(f, "sim_insts                {}", self.total_retired())?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "core  retired    skipped    wait_ticks  loaded  tpi")?;
        for (id, core) in self.cores.iter().enumerate() {
            let tpi = if core.retired == 0 {
                0.0
            } else {
                self.ticks as f64 / core.retired as f64
            };
            writeln!(
                f,
                "{id:<5} {:<10} {:<10} {:<11} {:<7} {tpi:.2}",
                core.retired, core.skipped, core.wait_ticks, core.longs_loaded
            )?;
        }
        write!(f, "----------------------------------------------------------")
    }
}
