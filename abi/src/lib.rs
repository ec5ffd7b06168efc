//! Bootarch hardware constants.
//!
//! This crate is the single source of truth for the values that the earliest
//! boot code needs before any allocator, console or exception handler exists:
//! - Physical layout of the x86_64 long-mode paging scaffold
//! - MSR indices and real-mode legacy prefix bytes
//! - AArch64 barrier option immediates
//! - RISC-V CSR access instruction words
//!
//! Everything here is `const` and evaluated at build time. Misuse of the
//! checked constructors inside a `const` item is a compile error, not a
//! runtime fault.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod addr;
pub mod arch;
pub mod error;

pub use addr::PhysAddr;
pub use error::*;
