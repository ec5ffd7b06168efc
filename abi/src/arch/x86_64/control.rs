//! Control register bits touched during the real mode to long mode switch.

use bitflags::bitflags;

/// Bit index of CR0.WP, for bit-set helpers that take an index.
pub const CR0_WP: u32 = 16;

bitflags! {
    /// CR0 bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Cr0Flags: u64 {
        /// Protected mode enable.
        const PE = 1 << 0;
        /// Supervisor writes honour read-only pages.
        const WP = 1 << CR0_WP;
        /// Paging enable.
        const PG = 1 << 31;
    }
}

bitflags! {
    /// CR4 bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Cr4Flags: u64 {
        /// Physical Address Extension, required before entering long mode.
        const PAE = 1 << 5;
        /// Global pages.
        const PGE = 1 << 7;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_bits() {
        assert_eq!(Cr0Flags::WP.bits(), 0x1_0000);
        assert_eq!(Cr0Flags::PG.bits(), 0x8000_0000);
        assert_eq!(Cr4Flags::PAE.bits(), 0x20);
    }
}
