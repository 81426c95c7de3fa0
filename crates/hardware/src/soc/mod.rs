//! Hub and chassis components.
//!
//! This module organizes everything the cores share: shared RAM, the hardware lock
//! table, the hub-services trait seam and its bus implementation, and the chassis
//! that owns all eight cores and drives the global tick.

/// Chassis: cores plus hub, global tick and host API.
pub mod chassis;

/// Hub state and the per-core bus view.
pub mod interconnect;

/// Hardware lock table.
pub mod locks;

/// Shared RAM.
pub mod memory;

/// Hub-services trait used by cores.
pub mod traits;

pub use chassis::Chassis;
pub use traits::HubPort;
