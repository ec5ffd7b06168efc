//! Model-Specific Register (MSR) addresses.
//!
//! Boot code touches exactly one MSR: EFER, to switch on long mode before
//! enabling paging. The index is kept here so it is never retyped inside an
//! inline `rdmsr`/`wrmsr` sequence.

use bitflags::bitflags;

/// Model-Specific Register address.
///
/// MSRs are accessed via RDMSR/WRMSR instructions using a 32-bit address in
/// ECX. This newtype prevents accidentally using an MSR address where a port
/// number or other value is expected.
///
/// # Example
///
/// ```ignore
/// use bootarch_abi::arch::x86_64::Msr;
///
/// let efer = read_msr(Msr::EFER.address());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Msr(pub u32);

impl Msr {
    /// Extended Feature Enable Register.
    pub const EFER: Self = Self(0xC000_0080);

    /// Returns the raw MSR address for use with RDMSR/WRMSR.
    #[inline]
    pub const fn address(self) -> u32 {
        self.0
    }

    /// Creates a new MSR from a raw address.
    #[inline]
    pub const fn new(address: u32) -> Self {
        Self(address)
    }
}

/// Raw EFER index, for `mov ecx, {MSR_EFER}` style asm operands.
pub const MSR_EFER: u32 = Msr::EFER.address();

bitflags! {
    /// EFER (Extended Feature Enable Register) bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EferFlags: u64 {
        /// System Call Extensions, enables SYSCALL/SYSRET.
        const SCE = 1 << 0;
        /// Long Mode Enable, activates IA-32e paging when set with CR0.PG.
        const LME = 1 << 8;
        /// Long Mode Active, set by hardware once long mode is active.
        const LMA = 1 << 10;
        /// No-Execute Enable, makes bit 63 of page table entries meaningful.
        const NXE = 1 << 11;
    }
}
