//! Hub services trait.
//!
//! This module defines the `HubPort` trait, the only channel through which a core
//! reaches anything outside its own local memory. It provides:
//! 1. **Observation:** The global tick, the bus window, and the external input pins.
//! 2. **Shared RAM:** Width-aware reads and writes.
//! 3. **Core Control:** Start and stop requests addressed to any core.
//! 4. **Locks:** Allocation, release, set and clear on the hardware lock table.
//!
//! The chassis implements this trait over itself minus the stepping core; tests mock it.

use crate::common::data::AccessWidth;

/// Services a core may request from the hub during its step.
pub trait HubPort {
    /// Global tick counter.
    fn global_tick(&self) -> u64;

    /// Core currently owning the bus-access window.
    fn bus_window(&self) -> usize;

    /// Levels of the 32 external input pins.
    fn input_pins(&self) -> u32;

    /// Reads shared RAM; the address is aligned to `width` first. Reads past capacity return 0.
    fn read_shared(&mut self, addr: u32, width: AccessWidth) -> u32;

    /// Writes shared RAM; the address is aligned to `width` first. Writes past capacity are dropped.
    fn write_shared(&mut self, addr: u32, width: AccessWidth, value: u32);

    /// Handles a start request encoded as a core-start argument.
    ///
    /// # Returns
    ///
    /// The id of the core that entered Loading, or `None` when a new core was
    /// requested and none was Dormant.
    fn start_core(&mut self, arg: u32) -> Option<usize>;

    /// Stops the named core.
    ///
    /// # Returns
    ///
    /// Whether every core was Running immediately before the request.
    fn stop_core(&mut self, id: usize) -> bool;

    /// Allocates the first free lock, returning its id.
    fn lock_new(&mut self) -> Option<usize>;

    /// Frees a lock; returns whether any lock is available afterwards.
    fn lock_return(&mut self, id: usize) -> bool;

    /// Marks a lock held; returns its prior held state.
    fn lock_set(&mut self, id: usize) -> bool;

    /// Marks a lock free; returns its prior held state.
    fn lock_clear(&mut self, id: usize) -> bool;
}
