//! Long-mode paging scaffold.
//!
//! Before any allocator exists, boot code builds an identity map from four
//! page tables placed at fixed physical addresses below 1MB. This module
//! fixes those addresses, describes each table's level and reach, and
//! provides the entry bits needed to link the levels together.
//!
//! AMD64 Architecture Programmer's Manual, Figure 5-17:
//! 4-Kbyte Page Translation, Long Mode 4-Level Paging.
//!
//! ```text
//! PML4T 0x9000  512 entries x 512GB
//! PDPT  0xa000  512 entries x 1GB
//! PDT   0xb000  512 entries x 2MB
//! PT    0xc000  512 entries x 4KB
//! ```

use bitflags::bitflags;

use crate::addr::PhysAddr;
use crate::error::LayoutError;

/// Entries in one table at any level.
pub const TABLE_ENTRIES: usize = 512;

/// Size of one page table entry in bytes.
pub const ENTRY_SIZE: u64 = 8;

/// Size of one page table in bytes (512 eight-byte entries).
pub const TABLE_SIZE: u64 = TABLE_ENTRIES as u64 * ENTRY_SIZE;

/// Mask selecting a 9-bit table index.
pub const INDEX_MASK: u64 = 0x1ff;

/// Physical address bits of a page table entry.
pub const ADDR_MASK: u64 = 0x000f_ffff_ffff_f000;

/// Highest address reachable from real mode (exclusive).
pub const REAL_MODE_LIMIT: u64 = 0x10_0000;

pub const PAGE_SIZE_4KB: u64 = 1 << 12;
pub const PAGE_SIZE_2MB: u64 = 1 << 21;
pub const PAGE_SIZE_1GB: u64 = 1 << 30;
pub const PAGE_SIZE_512GB: u64 = 1 << 39;

/// One level of the 4-level long-mode hierarchy.
///
/// Discriminants follow the usual numbering, with the leaf table at 1.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageLevel {
    /// Page Map Level 4 Table.
    Pml4 = 4,
    /// Page Directory Pointer Table.
    Pdpt = 3,
    /// Page Directory Table.
    Pd = 2,
    /// Page Table.
    Pt = 1,
}

impl PageLevel {
    /// Levels ordered from coarsest to finest.
    pub const ALL: [Self; 4] = [Self::Pml4, Self::Pdpt, Self::Pd, Self::Pt];

    /// Bit position of this level's index within a virtual address.
    #[inline]
    pub const fn index_shift(self) -> u32 {
        match self {
            Self::Pml4 => 39,
            Self::Pdpt => 30,
            Self::Pd => 21,
            Self::Pt => 12,
        }
    }

    /// Bytes of address space covered by one entry at this level.
    #[inline]
    pub const fn entry_granularity(self) -> u64 {
        1 << self.index_shift()
    }

    /// Table index selected by `addr` at this level.
    #[inline]
    pub const fn index_of(self, addr: u64) -> usize {
        ((addr >> self.index_shift()) & INDEX_MASK) as usize
    }

    /// The next level down, or `None` for the leaf table.
    #[inline]
    pub const fn finer(self) -> Option<Self> {
        match self {
            Self::Pml4 => Some(Self::Pdpt),
            Self::Pdpt => Some(Self::Pd),
            Self::Pd => Some(Self::Pt),
            Self::Pt => None,
        }
    }

    /// Whether an entry at this level may map a page directly (PS bit).
    #[inline]
    pub const fn supports_large_pages(self) -> bool {
        matches!(self, Self::Pdpt | Self::Pd)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Pml4 => "PML4T",
            Self::Pdpt => "PDPT",
            Self::Pd => "PDT",
            Self::Pt => "PT",
        }
    }
}

/// Physical placement of one page table.
///
/// There is no bounds checking on writes into the region; boot code must stay
/// within [`TABLE_SIZE`] bytes of `base`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PagingRegion {
    pub level: PageLevel,
    pub base: PhysAddr,
}

impl PagingRegion {
    #[inline]
    pub const fn new(level: PageLevel, base: PhysAddr) -> Self {
        Self { level, base }
    }

    /// First byte past the table.
    #[inline]
    pub const fn end(&self) -> PhysAddr {
        self.base.offset(TABLE_SIZE)
    }

    #[inline]
    pub const fn entry_count(&self) -> usize {
        TABLE_ENTRIES
    }

    /// Address covered by the whole table.
    #[inline]
    pub const fn reach(&self) -> u64 {
        self.level.entry_granularity() * TABLE_ENTRIES as u64
    }

    /// Physical address of entry `index`, or `None` past the last entry.
    #[inline]
    pub const fn entry_addr(&self, index: usize) -> Option<PhysAddr> {
        if index >= TABLE_ENTRIES {
            return None;
        }
        Some(self.base.offset(index as u64 * ENTRY_SIZE))
    }

    /// Check whether two tables share any byte.
    #[inline]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.base.as_u64() < other.end().as_u64() && other.base.as_u64() < self.end().as_u64()
    }
}

/// The four scaffold tables, coarsest first.
///
/// The reference placement is an arbitrary low-memory pick. Any layout that
/// passes [`PagingLayout::validate`] works; keep [`PagingLayout::REFERENCE`]
/// only where other boot code hardcodes those addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PagingLayout {
    pub pml4t: PagingRegion,
    pub pdpt: PagingRegion,
    pub pdt: PagingRegion,
    pub pt: PagingRegion,
}

impl PagingLayout {
    /// 0x9000, 0xa000, 0xb000, 0xc000.
    pub const REFERENCE: Self = Self::contiguous(PhysAddr::new(0x9000));

    /// Place the four tables back to back starting at `base`.
    pub const fn contiguous(base: PhysAddr) -> Self {
        Self {
            pml4t: PagingRegion::new(PageLevel::Pml4, base),
            pdpt: PagingRegion::new(PageLevel::Pdpt, base.offset(TABLE_SIZE)),
            pdt: PagingRegion::new(PageLevel::Pd, base.offset(2 * TABLE_SIZE)),
            pt: PagingRegion::new(PageLevel::Pt, base.offset(3 * TABLE_SIZE)),
        }
    }

    #[inline]
    pub const fn regions(&self) -> [PagingRegion; 4] {
        [self.pml4t, self.pdpt, self.pdt, self.pt]
    }

    /// Region holding the table for `level`.
    #[inline]
    pub const fn region(&self, level: PageLevel) -> PagingRegion {
        match level {
            PageLevel::Pml4 => self.pml4t,
            PageLevel::Pdpt => self.pdpt,
            PageLevel::Pd => self.pdt,
            PageLevel::Pt => self.pt,
        }
    }

    /// Check the invariants boot code relies on.
    ///
    /// Every table must be 4KB aligned, end at or below 1MB, and start at
    /// least one table past the previous (coarser) one. Levels must sit in
    /// their own slots.
    pub const fn validate(&self) -> Result<(), LayoutError> {
        let regions = self.regions();
        let mut i = 0;
        while i < regions.len() {
            let region = regions[i];
            if region.level as u8 != PageLevel::ALL[i] as u8 {
                return Err(LayoutError::OutOfOrder);
            }
            if !region.base.is_aligned(TABLE_SIZE) {
                return Err(LayoutError::Misaligned);
            }
            match region.base.checked_offset(TABLE_SIZE) {
                Some(end) if end.as_u64() <= REAL_MODE_LIMIT => {}
                _ => return Err(LayoutError::AboveRealModeLimit),
            }
            if i > 0 && region.base.as_u64() < regions[i - 1].end().as_u64() {
                return Err(LayoutError::OutOfOrder);
            }
            i += 1;
        }
        Ok(())
    }
}

/// Layout compiled into this build.
pub const ACTIVE_LAYOUT: PagingLayout = PagingLayout::REFERENCE;

const _: () = assert!(
    ACTIVE_LAYOUT.validate().is_ok(),
    "ACTIVE_LAYOUT violates paging scaffold invariants"
);

/// Page Map Level 4 Table (512GB entries).
pub const PML4T: u64 = ACTIVE_LAYOUT.pml4t.base.as_u64();

/// Page Directory Pointer Table (1GB entries).
pub const PDPT: u64 = ACTIVE_LAYOUT.pdpt.base.as_u64();

/// Page Directory Table (2MB entries).
pub const PDT: u64 = ACTIVE_LAYOUT.pdt.base.as_u64();

/// Page Table (4KB entries).
pub const PT: u64 = ACTIVE_LAYOUT.pt.base.as_u64();

bitflags! {
    /// Page table entry flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PageFlags: u64 {
        const PRESENT = 1 << 0;
        const WRITABLE = 1 << 1;
        const USER = 1 << 2;
        const WRITE_THROUGH = 1 << 3;
        const CACHE_DISABLE = 1 << 4;
        const ACCESSED = 1 << 5;
        const DIRTY = 1 << 6;
        /// PS: entry maps a 1GB (PDPT) or 2MB (PD) page instead of a table.
        const HUGE_PAGE = 1 << 7;
        const GLOBAL = 1 << 8;
        /// Only honoured once EFER.NXE is set.
        const NO_EXECUTE = 1 << 63;

        /// Entry pointing at the next table level.
        const TABLE = Self::PRESENT.bits() | Self::WRITABLE.bits();
        /// Entry mapping a large page, read-write.
        const LARGE = Self::TABLE.bits() | Self::HUGE_PAGE.bits();
    }
}

/// Entry linking a table to the next (finer) table.
#[inline]
pub const fn table_entry(next: &PagingRegion, flags: PageFlags) -> u64 {
    (next.base.as_u64() & ADDR_MASK) | flags.bits()
}

/// Entry mapping the frame at `frame`.
#[inline]
pub const fn page_entry(frame: PhysAddr, flags: PageFlags) -> u64 {
    (frame.as_u64() & ADDR_MASK) | flags.bits()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_addresses() {
        assert_eq!(PML4T, 0x9000);
        assert_eq!(PDPT, 0xa000);
        assert_eq!(PDT, 0xb000);
        assert_eq!(PT, 0xc000);
    }

    #[test]
    fn regions_strictly_increasing_aligned_and_disjoint() {
        let regions = ACTIVE_LAYOUT.regions();
        for (i, a) in regions.iter().enumerate() {
            assert!(a.base.is_aligned(PAGE_SIZE_4KB));
            assert!(a.end().as_u64() <= REAL_MODE_LIMIT);
            for b in &regions[i + 1..] {
                assert!(b.base > a.base);
                assert!(b.base.as_u64() - a.base.as_u64() >= PAGE_SIZE_4KB);
                assert!(!a.overlaps(b));
            }
        }
    }

    #[test]
    fn granularity_coarsest_to_finest() {
        let expected = [PAGE_SIZE_512GB, PAGE_SIZE_1GB, PAGE_SIZE_2MB, PAGE_SIZE_4KB];
        for (region, size) in ACTIVE_LAYOUT.regions().iter().zip(expected) {
            assert_eq!(region.level.entry_granularity(), size);
            assert_eq!(region.entry_count(), 512);
        }
        assert_eq!(ACTIVE_LAYOUT.pt.reach(), PAGE_SIZE_2MB);
        assert_eq!(ACTIVE_LAYOUT.pml4t.reach(), 1 << 48);
    }

    #[test]
    fn level_chain() {
        assert_eq!(PageLevel::Pml4.finer(), Some(PageLevel::Pdpt));
        assert_eq!(PageLevel::Pd.finer(), Some(PageLevel::Pt));
        assert_eq!(PageLevel::Pt.finer(), None);
        assert!(!PageLevel::Pml4.supports_large_pages());
        assert!(PageLevel::Pd.supports_large_pages());
        for level in PageLevel::ALL {
            assert_eq!(ACTIVE_LAYOUT.region(level).level, level);
        }
    }

    #[test]
    fn index_extraction() {
        let addr = 0x0000_7fff_ffff_f000;
        assert_eq!(PageLevel::Pml4.index_of(addr), 255);
        assert_eq!(PageLevel::Pdpt.index_of(addr), 511);
        assert_eq!(PageLevel::Pd.index_of(addr), 511);
        assert_eq!(PageLevel::Pt.index_of(addr), 511);
        assert_eq!(PageLevel::Pd.index_of(0x0060_0000), 3);
    }

    #[test]
    fn entry_addresses_stay_inside_table() {
        let pt = ACTIVE_LAYOUT.pt;
        assert_eq!(pt.entry_addr(0), Some(pt.base));
        assert_eq!(pt.entry_addr(511), Some(PhysAddr::new(0xc000 + 511 * 8)));
        assert_eq!(pt.entry_addr(512), None);
        assert!(pt.entry_addr(511).is_some_and(|a| a < pt.end()));
    }

    #[test]
    fn contiguous_layout_elsewhere_is_valid() {
        let layout = PagingLayout::contiguous(PhysAddr::new(0x7_0000));
        assert_eq!(layout.validate(), Ok(()));
        assert_eq!(layout.pt.base, PhysAddr::new(0x7_3000));
    }

    #[test]
    fn validate_rejects_bad_layouts() {
        let misaligned = PagingLayout::contiguous(PhysAddr::new(0x9800));
        assert_eq!(misaligned.validate(), Err(LayoutError::Misaligned));

        let high = PagingLayout::contiguous(PhysAddr::new(0xF_E000));
        assert_eq!(high.validate(), Err(LayoutError::AboveRealModeLimit));

        let mut overlapping = PagingLayout::REFERENCE;
        overlapping.pdt.base = overlapping.pdpt.base;
        assert_eq!(overlapping.validate(), Err(LayoutError::OutOfOrder));

        let mut reversed = PagingLayout::REFERENCE;
        core::mem::swap(&mut reversed.pml4t.base, &mut reversed.pt.base);
        assert_eq!(reversed.validate(), Err(LayoutError::OutOfOrder));

        let mut wrong_level = PagingLayout::REFERENCE;
        wrong_level.pdt.level = PageLevel::Pml4;
        assert_eq!(wrong_level.validate(), Err(LayoutError::OutOfOrder));
    }

    #[test]
    fn entries_link_levels() {
        let entry = table_entry(&ACTIVE_LAYOUT.pdpt, PageFlags::TABLE);
        assert_eq!(entry, 0xa003);
        assert_eq!(PageFlags::LARGE.bits(), 0x83);
        assert_eq!(
            page_entry(PhysAddr::new(0x20_0000), PageFlags::LARGE),
            0x20_0083
        );
        // Low bits of an unaligned frame must not leak into the flags.
        assert_eq!(
            page_entry(PhysAddr::new(0x1fff), PageFlags::PRESENT),
            0x1001
        );
    }
}
