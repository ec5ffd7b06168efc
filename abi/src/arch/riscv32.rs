//! RV32 boot table.
//!
//! RV32 boot code keeps CSR values in `s0` while it has no stack.

pub use super::riscv::*;

pub const XLEN: u32 = 32;

/// Raw index of `s0`, for asm operands.
pub const S0: u8 = 8;

/// Register used by [`csrr_scratch`] and [`csrw_scratch`].
pub const SCRATCH: Reg = Reg::S0;

const _: () = assert!(SCRATCH.index() == S0);

/// `csrr s0, csr`
#[inline]
pub const fn csrr_scratch(csr: Csr) -> u32 {
    csrr(csr, SCRATCH)
}

/// `csrw csr, s0`
#[inline]
pub const fn csrw_scratch(csr: Csr) -> u32 {
    csrw(SCRATCH, csr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scratch_is_s0() {
        assert_eq!(SCRATCH.index(), 8);
        assert_eq!(csrr_scratch(Csr::MEPC), csrr(Csr::MEPC, Reg::S0));
        // csrw mtvec, s0
        assert_eq!(csrw_scratch(Csr::MTVEC), 0x3054_1073);
    }
}
