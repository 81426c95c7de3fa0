//! Hardware Lock Table.
//!
//! Eight single-bit semaphores shared by every core. Since cores are stepped one at
//! a time, each operation is atomic within a tick and same-tick races resolve by
//! ascending core index.

use tracing::debug;

use crate::common::constants::LOCK_COUNT;

/// The eight-entry lock table. `true` means Held.
#[derive(Clone, Debug, Default)]
pub struct LockTable {
    held: [bool; LOCK_COUNT],
}

impl LockTable {
    /// Creates a table with every lock Free.
    pub const fn new() -> Self {
        Self {
            held: [false; LOCK_COUNT],
        }
    }

    /// Whether lock `id` (masked to 0-7) is Held.
    pub const fn is_held(&self, id: usize) -> bool {
        self.held[id % LOCK_COUNT]
    }

    /// Number of Free locks.
    pub fn available(&self) -> usize {
        self.held.iter().filter(|&&held| !held).count()
    }

    /// Marks the first Free lock Held and returns its id.
    pub fn allocate(&mut self) -> Option<usize> {
        let id = self.held.iter().position(|&held| !held)?;
        self.held[id] = true;
        debug!(lock = id, "lock allocated");
        Some(id)
    }

    /// Frees a lock unconditionally; returns whether any lock is available afterwards.
    pub fn release(&mut self, id: usize) -> bool {
        self.held[id % LOCK_COUNT] = false;
        debug!(lock = id % LOCK_COUNT, "lock released");
        self.available() > 0
    }

    /// Marks a lock Held; returns its prior state.
    pub const fn set(&mut self, id: usize) -> bool {
        std::mem::replace(&mut self.held[id % LOCK_COUNT], true)
    }

    /// Marks a lock Free; returns its prior state.
    pub const fn clear(&mut self, id: usize) -> bool {
        std::mem::replace(&mut self.held[id % LOCK_COUNT], false)
    }
}
