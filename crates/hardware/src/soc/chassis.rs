//! Chassis: the top-level machine.
//!
//! The chassis owns the eight cores and the hub, and drives the global tick. It performs:
//! 1. **Lockstep stepping:** Every core steps once per tick in ascending id order.
//! 2. **Arbitration:** The bus window rotates by one core every second tick.
//! 3. **Host access:** Read-only inspection of cores, locks, pins and shared RAM, plus
//!    external pin drive, RAM seeding and boot-loader entry points.
//!
//! # Examples
//!
//! ```
//! use octosim_core::config::Config;
//! use octosim_core::soc::Chassis;
//!
//! let mut chassis = Chassis::new(&Config::default()).unwrap();
//! for _ in 0..16 {
//!     chassis.tick();
//! }
//! assert_eq!(chassis.global_tick(), 16);
//! assert_eq!(chassis.bus_window(), 0);
//! ```

use std::array;

use tracing::debug;

use crate::common::constants::{CORE_COUNT, LOCK_COUNT};
use crate::common::data::AccessWidth;
use crate::common::error::{Result, SimError};
use crate::config::Config;
use crate::core::Core;
use crate::soc::interconnect::{Hub, HubBus, SelfControl};
use crate::soc::traits::HubPort;
use crate::stats::SimStats;

/// Number of external input pins.
const PIN_COUNT: u32 = 32;

/// The eight cores plus the hub they share.
#[derive(Clone, Debug)]
pub struct Chassis {
    cores: [Core; CORE_COUNT],
    hub: Hub,
}

impl Chassis {
    /// Builds a chassis with every core Dormant.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidConfig` if the configuration fails validation.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let trace = config.general.trace_instructions;
        debug!(
            ram_size = config.hub.ram_size,
            window = config.hub.initial_window,
            "chassis created"
        );
        Ok(Self {
            cores: array::from_fn(|id| Core::new(id, trace)),
            hub: Hub::new(
                config.hub.ram_size,
                config.hub.initial_window,
                config.pins.initial_inputs,
            ),
        })
    }

    /// Advances the whole machine by one tick.
    ///
    /// Steps cores 0 through 7 in order, applies any self start/stop a core
    /// requested, then bumps the global tick and rotates the bus window.
    pub fn tick(&mut self) {
        for id in 0..CORE_COUNT {
            let (before, rest) = self.cores.split_at_mut(id);
            let Some((core, after)) = rest.split_first_mut() else {
                break;
            };
            let mut bus = HubBus::for_core(&mut self.hub, before, after, id);
            core.step(&mut bus);
            match bus.take_pending() {
                Some(SelfControl::Start { par, load_addr }) => core.start(par, load_addr),
                Some(SelfControl::Stop) => core.stop(),
                None => {}
            }
        }
        self.hub.advance();
    }

    /// Runs `count` ticks.
    pub fn tick_n(&mut self, count: u64) {
        for _ in 0..count {
            self.tick();
        }
    }

    /// Borrows a core.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidCoreId` for ids outside 0-7.
    pub fn core(&self, id: usize) -> Result<&Core> {
        self.cores.get(id).ok_or(SimError::InvalidCoreId(id))
    }

    fn core_mut(&mut self, id: usize) -> Result<&mut Core> {
        self.cores.get_mut(id).ok_or(SimError::InvalidCoreId(id))
    }

    /// All cores in id order.
    pub const fn cores(&self) -> &[Core; CORE_COUNT] {
        &self.cores
    }

    /// Global tick counter.
    pub const fn global_tick(&self) -> u64 {
        self.hub.tick
    }

    /// Core currently owning the bus-access window.
    pub const fn bus_window(&self) -> usize {
        self.hub.window
    }

    /// Whether a lock is Held.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidLockId` for ids outside 0-7.
    pub fn lock_held(&self, id: usize) -> Result<bool> {
        if id >= LOCK_COUNT {
            return Err(SimError::InvalidLockId(id));
        }
        Ok(self.hub.locks.is_held(id))
    }

    /// Number of Free locks.
    pub fn locks_available(&self) -> usize {
        self.hub.locks.available()
    }

    /// Drives one external input pin.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidPin` for pins outside 0-31.
    pub fn set_input_pin(&mut self, pin: u32, level: bool) -> Result<()> {
        if pin >= PIN_COUNT {
            return Err(SimError::InvalidPin(pin));
        }
        if level {
            self.hub.inputs |= 1 << pin;
        } else {
            self.hub.inputs &= !(1 << pin);
        }
        Ok(())
    }

    /// Drives all 32 external input pins at once.
    pub const fn set_input_pins(&mut self, levels: u32) {
        self.hub.inputs = levels;
    }

    /// External input pin levels.
    pub const fn input_pins(&self) -> u32 {
        self.hub.inputs
    }

    /// OR of every core's direction bits.
    pub fn direction_pins(&self) -> u32 {
        self.cores.iter().fold(0, |acc, core| acc | core.direction_pins())
    }

    /// OR of every core's driven outputs, masked by the aggregate direction.
    pub fn output_pins(&self) -> u32 {
        let outputs = self.cores.iter().fold(0, |acc, core| acc | core.output_pins());
        outputs & self.direction_pins()
    }

    /// Reads a byte of shared RAM.
    pub fn read_shared_byte(&self, addr: u32) -> u8 {
        self.hub.ram.read(addr, AccessWidth::Byte) as u8
    }

    /// Reads a word of shared RAM (address bit 0 cleared).
    pub fn read_shared_word(&self, addr: u32) -> u16 {
        self.hub.ram.read(addr, AccessWidth::Word) as u16
    }

    /// Reads a long of shared RAM (address bits 0-1 cleared).
    pub fn read_shared_long(&self, addr: u32) -> u32 {
        self.hub.ram.read(addr, AccessWidth::Long)
    }

    /// Copies bytes into shared RAM at `addr`; bytes past capacity are dropped.
    pub fn load_shared(&mut self, addr: u32, bytes: &[u8]) {
        self.hub.ram.load(addr, bytes);
    }

    /// Shared RAM capacity in bytes.
    pub const fn shared_size(&self) -> usize {
        self.hub.ram.len()
    }

    /// Handles a core-start argument exactly as the `COGINIT` sub-operation would.
    ///
    /// Returns the started core's id, or `None` when a new core was requested and
    /// none was Dormant.
    pub fn start_core(&mut self, arg: u32) -> Option<usize> {
        HubBus::for_host(&mut self.hub, &mut self.cores).start_core(arg)
    }

    /// Stops a core; returns whether every core was Running beforehand.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidCoreId` for ids outside 0-7.
    pub fn stop_core(&mut self, id: usize) -> Result<bool> {
        if id >= CORE_COUNT {
            return Err(SimError::InvalidCoreId(id));
        }
        Ok(HubBus::for_host(&mut self.hub, &mut self.cores).stop_core(id))
    }

    /// Writes words straight into a core's local memory, bypassing Loading.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidCoreId` for ids outside 0-7.
    pub fn load_local(&mut self, core: usize, origin: u32, words: &[u32]) -> Result<()> {
        self.core_mut(core)?.load_local(origin, words);
        Ok(())
    }

    /// Puts a core straight into Running at `pc`, keeping its local memory.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidCoreId` for ids outside 0-7.
    pub fn boot_core(&mut self, core: usize, pc: u32) -> Result<()> {
        self.core_mut(core)?.boot_at(pc);
        Ok(())
    }

    /// Snapshot of the execution statistics.
    pub fn stats(&self) -> SimStats {
        SimStats {
            ticks: self.hub.tick,
            cores: self.cores.each_ref().map(|core| *core.stats()),
        }
    }
}
