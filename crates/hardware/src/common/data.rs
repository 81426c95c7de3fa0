//! Shared-RAM Access Widths.
//!
//! This module classifies transfers between a core and shared RAM. The width decides:
//! 1. **Alignment:** How many low address bits are cleared before the access.
//! 2. **Size:** How many bytes are moved, little-endian.
//! 3. **Flag Rules:** Which misalignment test the write form reports in Z.

/// Width of a shared-RAM transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessWidth {
    /// Single byte; no alignment forced.
    Byte,
    /// 16-bit word; address bit 0 is cleared.
    Word,
    /// 32-bit long; address bits 0-1 are cleared.
    Long,
}

impl AccessWidth {
    /// Number of bytes moved by one access of this width.
    #[inline]
    pub const fn bytes(self) -> usize {
        match self {
            Self::Byte => 1,
            Self::Word => 2,
            Self::Long => 4,
        }
    }

    /// Mask of the address bits cleared to force alignment.
    #[inline]
    pub const fn align_mask(self) -> u32 {
        match self {
            Self::Byte => 0,
            Self::Word => 0b1,
            Self::Long => 0b11,
        }
    }

    /// Mask of the value bits kept by a read of this width.
    #[inline]
    pub const fn value_mask(self) -> u32 {
        match self {
            Self::Byte => 0xFF,
            Self::Word => 0xFFFF,
            Self::Long => u32::MAX,
        }
    }

    /// Address bits the write form of this width reports as misaligned.
    ///
    /// Byte and long writes test the two low bits, word writes only bit 0.
    #[inline]
    pub const fn misalign_mask(self) -> u32 {
        match self {
            Self::Byte | Self::Long => 0b11,
            Self::Word => 0b1,
        }
    }
}
