//! RV64 boot table.
//!
//! Same encoders as RV32; boot code on this target uses `t0` as scratch.

pub use super::riscv::*;

pub const XLEN: u32 = 64;

/// Raw index of `t0`, for asm operands.
pub const T0: u8 = 5;

/// Register used by [`csrr_scratch`] and [`csrw_scratch`].
pub const SCRATCH: Reg = Reg::T0;

const _: () = assert!(SCRATCH.index() == T0);

/// `csrr t0, csr`
#[inline]
pub const fn csrr_scratch(csr: Csr) -> u32 {
    csrr(csr, SCRATCH)
}

/// `csrw csr, t0`
#[inline]
pub const fn csrw_scratch(csr: Csr) -> u32 {
    csrw(SCRATCH, csr)
}
