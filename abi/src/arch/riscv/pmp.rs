//! Physical Memory Protection configuration fields.
//!
//! RISC-V Privileged Architectures V20211203, 3.7.1 Physical Memory
//! Protection CSRs. Each `pmpNcfg` byte is packed into `pmpcfg0` (and
//! successors) at byte N.

use bitflags::bitflags;

pub const PMP_CFG_R: u32 = 0;
pub const PMP_CFG_W: u32 = 1;
pub const PMP_CFG_X: u32 = 2;
/// Address-matching mode, two bits wide.
pub const PMP_CFG_A: u32 = 3;
pub const PMP_CFG_L: u32 = 7;

pub const PMP_A_OFF: u8 = 0;
pub const PMP_A_TOR: u8 = 1;
pub const PMP_A_NA4: u8 = 2;
pub const PMP_A_NAPOT: u8 = 3;

bitflags! {
    /// Permission and lock bits of a `pmpNcfg` byte.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PmpFlags: u8 {
        const R = 1 << PMP_CFG_R;
        const W = 1 << PMP_CFG_W;
        const X = 1 << PMP_CFG_X;
        /// Locked until reset; also applies the entry to M-mode.
        const L = 1 << PMP_CFG_L;
    }
}

/// Address-matching mode of a PMP entry.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PmpAddressMatching {
    /// Null region (disabled).
    Off = PMP_A_OFF,
    /// Top of range.
    Tor = PMP_A_TOR,
    /// Naturally aligned four-byte region.
    Na4 = PMP_A_NA4,
    /// Naturally aligned power-of-two region, at least 8 bytes.
    Napot = PMP_A_NAPOT,
}

impl PmpAddressMatching {
    /// A field of a `pmpNcfg` byte.
    #[inline]
    pub const fn cfg_bits(self) -> u8 {
        (self as u8) << PMP_CFG_A
    }

    /// Build a full `pmpNcfg` byte.
    #[inline]
    pub const fn cfg(self, flags: PmpFlags) -> u8 {
        self.cfg_bits() | flags.bits()
    }
}
