//! Shared RAM.
//!
//! This module implements the byte-addressable memory every core reaches through the
//! hub. It provides:
//! 1. **Addressing:** Addresses are masked to the 16-bit hub space, then aligned per width.
//! 2. **Little-endian access:** Byte, word and long transfers.
//! 3. **Truncation:** Reads past capacity return 0 and writes past capacity are dropped,
//!    byte by byte, matching the hardware rather than faulting.

use crate::common::constants::HUB_ADDR_MASK;
use crate::common::data::AccessWidth;

/// Shared RAM owned by the chassis.
#[derive(Clone, Debug)]
pub struct SharedRam {
    bytes: Vec<u8>,
}

impl SharedRam {
    /// Creates a zeroed RAM of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    /// Capacity in bytes.
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the RAM has zero capacity.
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Reads `width` bytes little-endian at the aligned address.
    pub fn read(&self, addr: u32, width: AccessWidth) -> u32 {
        let base = Self::align(addr, width);
        (0..width.bytes()).fold(0, |acc, i| {
            acc | (u32::from(self.byte(base + i)) << (8 * i))
        })
    }

    /// Writes the low `width` bytes of `value` little-endian at the aligned address.
    pub fn write(&mut self, addr: u32, width: AccessWidth, value: u32) {
        let base = Self::align(addr, width);
        for (i, byte) in value.to_le_bytes().into_iter().take(width.bytes()).enumerate() {
            if let Some(slot) = self.bytes.get_mut(base + i) {
                *slot = byte;
            }
        }
    }

    /// Copies a byte slice starting at `addr`; bytes past capacity are dropped.
    pub fn load(&mut self, addr: u32, data: &[u8]) {
        let base = (addr & HUB_ADDR_MASK) as usize;
        for (i, &byte) in data.iter().enumerate() {
            if let Some(slot) = self.bytes.get_mut(base + i) {
                *slot = byte;
            }
        }
    }

    fn byte(&self, index: usize) -> u8 {
        self.bytes.get(index).copied().unwrap_or(0)
    }

    const fn align(addr: u32, width: AccessWidth) -> usize {
        ((addr & HUB_ADDR_MASK) & !width.align_mask()) as usize
    }
}
