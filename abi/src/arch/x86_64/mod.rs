//! x86_64 architecture definitions.
//!
//! This module provides the constants boot code needs to get from real mode
//! to long mode: the physical placement of the identity-mapping page tables,
//! the EFER MSR index, control register bits, and the legacy prefix bytes
//! used to run 32-bit operations from 16-bit code.
//!
//! # Design Philosophy
//!
//! Raw integer constants are wrapped in newtypes to prevent misuse:
//! - `Msr(u32)` for MSR addresses
//! - `PagingRegion` for page table placement
//! - `LegacyPrefix` for prefix bytes
//! - `PageFlags`, `EferFlags`, `Cr0Flags`, `Cr4Flags` bitflags
//!
//! Raw aliases (`PML4T`, `MSR_EFER`, `DATA32`, ...) are kept for inline
//! assembly operands, where a newtype cannot be used.

pub mod control;
pub mod msr;
pub mod paging;
pub mod prefix;

pub use control::{CR0_WP, Cr0Flags, Cr4Flags};
pub use msr::{EferFlags, MSR_EFER, Msr};
pub use paging::{
    ACTIVE_LAYOUT, PDPT, PDT, PML4T, PT, PageFlags, PageLevel, PagingLayout, PagingRegion,
};
pub use prefix::{ADDR32, CSADDR, DATA32, LegacyPrefix};
