//! Hub interconnect.
//!
//! This module implements the shared side of the chassis and the view a stepping core
//! gets of it. It provides:
//! 1. **Hub state:** Shared RAM, the lock table, the global tick, the bus window and the
//!    external input pins.
//! 2. **Bus view:** `HubBus` borrows the hub together with every core except the one
//!    being stepped, and implements `HubPort` over them.
//! 3. **Self control:** A core that starts or stops itself is recorded as pending and
//!    applied by the chassis once the core's step returns.

use tracing::debug;

use crate::common::constants::{CORE_COUNT, WINDOW_TICKS};
use crate::common::data::AccessWidth;
use crate::core::{Core, CoreState};
use crate::soc::locks::LockTable;
use crate::soc::memory::SharedRam;
use crate::soc::traits::HubPort;

/// Parameter field of a core-start argument (bits 18-31).
const START_PAR_SHIFT: u32 = 18;
/// Image address field of a core-start argument (bits 4-17).
const START_ADDR_SHIFT: u32 = 4;
/// Width mask of the parameter and address fields (14 bits, long aligned).
const START_FIELD_MASK: u32 = 0x3FFF;
/// Allocate-new-core flag of a core-start argument.
const START_NEW_BIT: u32 = 0b1000;
/// Target core id field of a core-start argument.
const START_ID_MASK: u32 = 0b111;

/// Fields of a core-start argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StartRequest {
    /// Value placed in the started core's `PAR`.
    pub par: u32,
    /// Shared-RAM address of the image.
    pub load_addr: u32,
    /// Explicit target core (ignored when `allocate` is set).
    pub target: usize,
    /// Pick the first Dormant core instead of `target`.
    pub allocate: bool,
}

impl StartRequest {
    /// Splits a core-start argument into its fields.
    pub const fn decode(arg: u32) -> Self {
        Self {
            par: ((arg >> START_PAR_SHIFT) & START_FIELD_MASK) << 2,
            load_addr: ((arg >> START_ADDR_SHIFT) & START_FIELD_MASK) << 2,
            target: (arg & START_ID_MASK) as usize,
            allocate: arg & START_NEW_BIT != 0,
        }
    }

    /// Packs the fields back into a core-start argument.
    pub const fn encode(self) -> u32 {
        (((self.par >> 2) & START_FIELD_MASK) << START_PAR_SHIFT)
            | (((self.load_addr >> 2) & START_FIELD_MASK) << START_ADDR_SHIFT)
            | (if self.allocate { START_NEW_BIT } else { 0 })
            | (self.target as u32 & START_ID_MASK)
    }
}

/// Lifecycle change a core requested for itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelfControl {
    /// Restart into Loading.
    Start {
        /// New `PAR` value.
        par: u32,
        /// Image address.
        load_addr: u32,
    },
    /// Return to Dormant.
    Stop,
}

/// Hub-owned state shared by all cores.
#[derive(Clone, Debug)]
pub struct Hub {
    /// Shared RAM.
    pub ram: SharedRam,
    /// Hardware lock table.
    pub locks: LockTable,
    /// Global tick counter.
    pub tick: u64,
    /// Core owning the bus-access window.
    pub window: usize,
    /// External input pin levels.
    pub inputs: u32,
}

impl Hub {
    /// Creates the hub state.
    pub fn new(ram_size: usize, window: usize, inputs: u32) -> Self {
        Self {
            ram: SharedRam::new(ram_size),
            locks: LockTable::new(),
            tick: 0,
            window: window % CORE_COUNT,
            inputs,
        }
    }

    /// Ends a chassis tick: bumps the counter and rotates the window every second tick.
    pub const fn advance(&mut self) {
        self.tick += 1;
        if self.tick % WINDOW_TICKS == 0 {
            self.window = (self.window + 1) % CORE_COUNT;
        }
    }
}

/// A core's view of the hub and of every other core.
#[derive(Debug)]
pub struct HubBus<'a> {
    hub: &'a mut Hub,
    before: &'a mut [Core],
    after: &'a mut [Core],
    current: Option<usize>,
    pending: Option<SelfControl>,
}

impl<'a> HubBus<'a> {
    /// View for core `current`, given the cores before and after it.
    pub const fn for_core(
        hub: &'a mut Hub,
        before: &'a mut [Core],
        after: &'a mut [Core],
        current: usize,
    ) -> Self {
        Self {
            hub,
            before,
            after,
            current: Some(current),
            pending: None,
        }
    }

    /// View for the host: every core is reachable and none is stepping.
    pub fn for_host(hub: &'a mut Hub, cores: &'a mut [Core]) -> Self {
        let len = cores.len();
        let (before, after) = cores.split_at_mut(len);
        Self {
            hub,
            before,
            after,
            current: None,
            pending: None,
        }
    }

    /// Takes the lifecycle change the stepping core requested for itself.
    pub const fn take_pending(&mut self) -> Option<SelfControl> {
        self.pending.take()
    }

    fn core(&self, id: usize) -> Option<&Core> {
        match self.current {
            Some(cur) if id == cur => None,
            Some(cur) if id > cur => self.after.get(id - cur - 1),
            _ => self.before.get(id),
        }
    }

    fn core_mut(&mut self, id: usize) -> Option<&mut Core> {
        match self.current {
            Some(cur) if id == cur => None,
            Some(cur) if id > cur => self.after.get_mut(id - cur - 1),
            _ => self.before.get_mut(id),
        }
    }

    /// State of any core; the stepping core is Running by definition.
    fn state_of(&self, id: usize) -> Option<CoreState> {
        if self.current == Some(id) {
            return Some(CoreState::Running);
        }
        self.core(id).map(Core::state)
    }
}

impl HubPort for HubBus<'_> {
    fn global_tick(&self) -> u64 {
        self.hub.tick
    }

    fn bus_window(&self) -> usize {
        self.hub.window
    }

    fn input_pins(&self) -> u32 {
        self.hub.inputs
    }

    fn read_shared(&mut self, addr: u32, width: AccessWidth) -> u32 {
        self.hub.ram.read(addr, width)
    }

    fn write_shared(&mut self, addr: u32, width: AccessWidth, value: u32) {
        self.hub.ram.write(addr, width, value);
    }

    fn start_core(&mut self, arg: u32) -> Option<usize> {
        let request = StartRequest::decode(arg);
        let id = if request.allocate {
            let found = (0..CORE_COUNT).find(|&id| self.state_of(id) == Some(CoreState::Dormant));
            if found.is_none() {
                debug!(requester = ?self.current, "no dormant core to allocate");
            }
            found?
        } else {
            request.target
        };

        if self.current == Some(id) {
            self.pending = Some(SelfControl::Start {
                par: request.par,
                load_addr: request.load_addr,
            });
        } else if let Some(core) = self.core_mut(id) {
            core.start(request.par, request.load_addr);
        }
        Some(id)
    }

    fn stop_core(&mut self, id: usize) -> bool {
        let all_running =
            (0..CORE_COUNT).all(|other| self.state_of(other) == Some(CoreState::Running));
        if self.current == Some(id) {
            self.pending = Some(SelfControl::Stop);
        } else if let Some(core) = self.core_mut(id) {
            core.stop();
        }
        all_running
    }

    fn lock_new(&mut self) -> Option<usize> {
        self.hub.locks.allocate()
    }

    fn lock_return(&mut self, id: usize) -> bool {
        self.hub.locks.release(id)
    }

    fn lock_set(&mut self, id: usize) -> bool {
        self.hub.locks.set(id)
    }

    fn lock_clear(&mut self, id: usize) -> bool {
        self.hub.locks.clear(id)
    }
}
