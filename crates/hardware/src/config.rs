//! Configuration system for the simulator.
//!
//! This module defines all configuration structures used to parameterize the chassis.
//! It provides:
//! 1. **Defaults:** Baseline hardware constants (shared RAM size, initial bus window).
//! 2. **Structures:** Hierarchical config for general, hub, and pin settings.
//! 3. **Validation:** Range checks applied before a chassis is built.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or use `Config::default()`.

use serde::Deserialize;

use crate::common::constants::{CORE_COUNT, DEFAULT_HUB_RAM_SIZE, HUB_ADDR_MASK};
use crate::common::error::{Result, SimError};

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants::DEFAULT_HUB_RAM_SIZE;

    /// Shared RAM capacity (32 KiB).
    pub const HUB_RAM_SIZE: usize = DEFAULT_HUB_RAM_SIZE;

    /// Bus window owner at tick 0.
    pub const INITIAL_WINDOW: usize = 0;

    /// External input pin levels at power-on.
    pub const INITIAL_INPUTS: u32 = 0;
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use octosim_core::config::Config;
///
/// let config = Config::default();
/// assert!(!config.general.trace_instructions);
/// assert_eq!(config.hub.ram_size, 32 * 1024);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use octosim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "hub": { "ram_size": 16384, "initial_window": 3 },
///     "pins": { "initial_inputs": 1 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.hub.ram_size, 16384);
/// assert_eq!(config.hub.initial_window, 3);
/// assert_eq!(config.pins.initial_inputs, 1);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation options.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Shared RAM and bus settings.
    #[serde(default)]
    pub hub: HubConfig,
    /// External pin settings.
    #[serde(default)]
    pub pins: PinConfig,
}

impl Config {
    /// Parses and validates a configuration from JSON text.
    ///
    /// Missing sections and fields fall back to their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every field against the hardware limits.
    pub fn validate(&self) -> Result<()> {
        let addr_space = HUB_ADDR_MASK as usize + 1;
        if self.hub.ram_size == 0 || self.hub.ram_size > addr_space {
            return Err(SimError::InvalidConfig(format!(
                "hub.ram_size must be in 1..={addr_space}, got {}",
                self.hub.ram_size
            )));
        }
        if self.hub.initial_window >= CORE_COUNT {
            return Err(SimError::InvalidConfig(format!(
                "hub.initial_window must be below {CORE_COUNT}, got {}",
                self.hub.initial_window
            )));
        }
        Ok(())
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `trace!` event for every committed instruction.
    #[serde(default)]
    pub trace_instructions: bool,
}

/// Shared RAM and bus arbitration settings.
#[derive(Debug, Clone, Deserialize)]
pub struct HubConfig {
    /// Shared RAM capacity in bytes.
    #[serde(default = "HubConfig::default_ram_size")]
    pub ram_size: usize,

    /// Core that owns the bus window at tick 0.
    #[serde(default = "HubConfig::default_initial_window")]
    pub initial_window: usize,
}

impl HubConfig {
    /// Returns the default shared RAM capacity.
    const fn default_ram_size() -> usize {
        defaults::HUB_RAM_SIZE
    }

    /// Returns the default initial bus window.
    const fn default_initial_window() -> usize {
        defaults::INITIAL_WINDOW
    }
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            ram_size: DEFAULT_HUB_RAM_SIZE,
            initial_window: defaults::INITIAL_WINDOW,
        }
    }
}

/// External pin settings.
#[derive(Debug, Clone, Deserialize)]
pub struct PinConfig {
    /// Levels of the 32 external input pins at power-on.
    #[serde(default = "PinConfig::default_initial_inputs")]
    pub initial_inputs: u32,
}

impl PinConfig {
    /// Returns the default input pin levels.
    const fn default_initial_inputs() -> u32 {
        defaults::INITIAL_INPUTS
    }
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            initial_inputs: defaults::INITIAL_INPUTS,
        }
    }
}
