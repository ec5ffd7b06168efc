//! Physical address type for boot-time memory layout.
//!
//! Boot code runs with paging disabled (or identity mapped), so every address
//! in this crate is physical. [`PhysAddr`] is a zero-cost `#[repr(transparent)]`
//! wrapper that keeps region bases from being mixed up with sizes, indices or
//! entry values.

/// A physical memory address.
///
/// On x86_64, physical addresses are up to 52 bits (4 PB addressable).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PhysAddr(pub u64);

impl PhysAddr {
    /// The null physical address.
    pub const NULL: Self = Self(0);

    #[inline]
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Add an offset to this address (wrapping on overflow).
    #[inline]
    pub const fn offset(self, off: u64) -> Self {
        Self(self.0.wrapping_add(off))
    }

    /// Add an offset, returning None on overflow.
    #[inline]
    pub const fn checked_offset(self, off: u64) -> Option<Self> {
        match self.0.checked_add(off) {
            Some(addr) => Some(Self(addr)),
            None => None,
        }
    }

    /// Check if address is aligned to the given alignment.
    #[inline]
    pub const fn is_aligned(self, align: u64) -> bool {
        self.0 & (align - 1) == 0
    }

    /// Returns the offset within a 4KB page.
    #[inline]
    pub const fn page_offset(self) -> u64 {
        self.0 & 0xFFF
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alignment_helpers() {
        let addr = PhysAddr::new(0x9123);
        assert!(!addr.is_aligned(0x1000));
        assert_eq!(addr.page_offset(), 0x123);
        assert!(PhysAddr::new(0xa000).is_aligned(0x1000));
    }

    #[test]
    fn checked_offset_detects_overflow() {
        assert_eq!(
            PhysAddr::new(0x9000).checked_offset(0x1000),
            Some(PhysAddr::new(0xa000))
        );
        assert_eq!(PhysAddr::new(u64::MAX).checked_offset(1), None);
        assert_eq!(PhysAddr::new(u64::MAX).offset(1), PhysAddr::NULL);
    }
}
