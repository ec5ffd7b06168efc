//! CSR access instruction encoding.
//!
//! The boot toolchain cannot assemble `csrr`/`csrw`, so boot code embeds the
//! raw instruction words computed here. Both are SYSTEM-class I-type
//! instructions (Unprivileged ISA, Chapter 9 "Zicsr"):
//!
//! ```text
//!  31        20 19   15 14  12 11    7 6      0
//! +------------+-------+------+-------+--------+
//! |    csr     |  rs1  |funct3|  rd   | opcode |
//! +------------+-------+------+-------+--------+
//! ```
//!
//! - `csrr rd, csr` is `csrrs rd, csr, x0`: read, no bits set.
//! - `csrw csr, rs` is `csrrw x0, csr, rs`: write, old value discarded.

use crate::error::{EncodingError, EncodingResult};

/// SYSTEM major opcode.
pub const SYSTEM_OPCODE: u32 = 0b111_0011;

/// funct3 of CSRRW (atomic read/write).
pub const FUNCT3_CSRRW: u32 = 0b001;

/// funct3 of CSRRS (atomic read and set bits).
pub const FUNCT3_CSRRS: u32 = 0b010;

pub const RD_SHIFT: u32 = 7;
pub const FUNCT3_SHIFT: u32 = 12;
pub const RS1_SHIFT: u32 = 15;
pub const CSR_SHIFT: u32 = 20;

/// Largest CSR index (12-bit field).
pub const CSR_MAX: u32 = 0xFFF;

/// Largest integer register index (5-bit field).
pub const REG_MAX: u32 = 31;

/// `csrrs x0, 0, x0`: CSR read with every operand field zero.
pub const CSRR_BASE: u32 = 0x2073;

/// `csrrw x0, 0, x0`: CSR write with every operand field zero.
pub const CSRW_BASE: u32 = 0x1073;

const _: () = assert!(CSRR_BASE == SYSTEM_OPCODE | (FUNCT3_CSRRS << FUNCT3_SHIFT));
const _: () = assert!(CSRW_BASE == SYSTEM_OPCODE | (FUNCT3_CSRRW << FUNCT3_SHIFT));

/// Integer register index (`x0`..`x31`).
///
/// The field is private; values come from the named ABI registers or from
/// [`Reg::new`], which rejects anything above 31.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Reg(u8);

impl Reg {
    pub const ZERO: Self = Self(0);
    pub const RA: Self = Self(1);
    pub const SP: Self = Self(2);
    pub const GP: Self = Self(3);
    pub const TP: Self = Self(4);
    pub const T0: Self = Self(5);
    pub const T1: Self = Self(6);
    pub const T2: Self = Self(7);
    /// Also the frame pointer.
    pub const S0: Self = Self(8);
    pub const S1: Self = Self(9);
    pub const A0: Self = Self(10);
    pub const A1: Self = Self(11);
    pub const A2: Self = Self(12);
    pub const A3: Self = Self(13);
    pub const A4: Self = Self(14);
    pub const A5: Self = Self(15);
    pub const A6: Self = Self(16);
    pub const A7: Self = Self(17);
    pub const S2: Self = Self(18);
    pub const S3: Self = Self(19);
    pub const S4: Self = Self(20);
    pub const S5: Self = Self(21);
    pub const S6: Self = Self(22);
    pub const S7: Self = Self(23);
    pub const S8: Self = Self(24);
    pub const S9: Self = Self(25);
    pub const S10: Self = Self(26);
    pub const S11: Self = Self(27);
    pub const T3: Self = Self(28);
    pub const T4: Self = Self(29);
    pub const T5: Self = Self(30);
    pub const T6: Self = Self(31);

    pub const fn try_new(index: u32) -> EncodingResult<Self> {
        if index > REG_MAX {
            return Err(EncodingError::RegisterOutOfRange);
        }
        Ok(Self(index as u8))
    }

    /// Checked constructor for `const` items.
    ///
    /// # Panics
    ///
    /// Panics if `index > 31`; in a `const` item this fails the build.
    pub const fn new(index: u32) -> Self {
        match Self::try_new(index) {
            Ok(reg) => reg,
            Err(_) => panic!("register index exceeds 5 bits"),
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }
}

/// Control and Status Register index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Csr(u16);

impl Csr {
    // =========================================================================
    // Supervisor-level CSRs
    // =========================================================================

    pub const SSTATUS: Self = Self(0x100);
    pub const SIE: Self = Self(0x104);
    pub const STVEC: Self = Self(0x105);
    pub const SSCRATCH: Self = Self(0x140);
    pub const SEPC: Self = Self(0x141);
    pub const SCAUSE: Self = Self(0x142);
    pub const STVAL: Self = Self(0x143);
    pub const SIP: Self = Self(0x144);
    /// Supervisor address translation and protection.
    pub const SATP: Self = Self(0x180);

    // =========================================================================
    // Machine-level CSRs
    // =========================================================================

    pub const MSTATUS: Self = Self(0x300);
    pub const MISA: Self = Self(0x301);
    pub const MIE: Self = Self(0x304);
    pub const MTVEC: Self = Self(0x305);
    pub const MSCRATCH: Self = Self(0x340);
    pub const MEPC: Self = Self(0x341);
    pub const MCAUSE: Self = Self(0x342);
    pub const MTVAL: Self = Self(0x343);
    pub const MIP: Self = Self(0x344);
    pub const PMPCFG0: Self = Self(0x3A0);
    pub const PMPADDR0: Self = Self(0x3B0);
    pub const MHARTID: Self = Self(0xF14);

    pub const fn try_new(index: u32) -> EncodingResult<Self> {
        if index > CSR_MAX {
            return Err(EncodingError::CsrOutOfRange);
        }
        Ok(Self(index as u16))
    }

    /// Checked constructor for `const` items.
    ///
    /// # Panics
    ///
    /// Panics if `index > 0xFFF`; in a `const` item this fails the build.
    pub const fn new(index: u32) -> Self {
        match Self::try_new(index) {
            Ok(csr) => csr,
            Err(_) => panic!("CSR index exceeds 12 bits"),
        }
    }

    /// `pmpaddrN`, for N in 0..64.
    pub const fn pmpaddr(n: u32) -> Option<Self> {
        if n >= 64 {
            return None;
        }
        Some(Self(Self::PMPADDR0.0 + n as u16))
    }

    #[inline]
    pub const fn index(self) -> u16 {
        self.0
    }

    /// Lowest privilege level allowed to access this CSR (bits 9:8).
    #[inline]
    pub const fn privilege(self) -> u8 {
        ((self.0 >> 8) & 0b11) as u8
    }

    /// Bits 11:10 set means the CSR is read-only; `csrw` to it traps.
    #[inline]
    pub const fn is_read_only(self) -> bool {
        (self.0 >> 10) & 0b11 == 0b11
    }
}

/// Encode `csrr rd, csr`.
#[inline]
pub const fn csrr(csr: Csr, rd: Reg) -> u32 {
    CSRR_BASE + ((rd.index() as u32) << RD_SHIFT) + ((csr.index() as u32) << CSR_SHIFT)
}

/// Encode `csrw csr, rs`.
#[inline]
pub const fn csrw(rs: Reg, csr: Csr) -> u32 {
    CSRW_BASE + ((rs.index() as u32) << RS1_SHIFT) + ((csr.index() as u32) << CSR_SHIFT)
}

/// [`csrr`] for raw operands that are not known at build time.
pub const fn try_csrr(csr: u32, rd: u32) -> EncodingResult<u32> {
    let csr = match Csr::try_new(csr) {
        Ok(csr) => csr,
        Err(e) => return Err(e),
    };
    match Reg::try_new(rd) {
        Ok(rd) => Ok(csrr(csr, rd)),
        Err(e) => Err(e),
    }
}

/// [`csrw`] for raw operands that are not known at build time.
pub const fn try_csrw(rs: u32, csr: u32) -> EncodingResult<u32> {
    let rs = match Reg::try_new(rs) {
        Ok(rs) => rs,
        Err(e) => return Err(e),
    };
    match Csr::try_new(csr) {
        Ok(csr) => Ok(csrw(rs, csr)),
        Err(e) => Err(e),
    }
}

/// Field view of an encoded SYSTEM-class word, for auditing encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct InstructionFields(pub u32);

impl InstructionFields {
    #[inline]
    pub const fn opcode(self) -> u32 {
        self.0 & 0x7F
    }

    #[inline]
    pub const fn rd(self) -> u32 {
        (self.0 >> RD_SHIFT) & 0x1F
    }

    #[inline]
    pub const fn funct3(self) -> u32 {
        (self.0 >> FUNCT3_SHIFT) & 0x7
    }

    #[inline]
    pub const fn rs1(self) -> u32 {
        (self.0 >> RS1_SHIFT) & 0x1F
    }

    #[inline]
    pub const fn csr(self) -> u32 {
        self.0 >> CSR_SHIFT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_operands_yield_base() {
        assert_eq!(csrr(Csr::new(0), Reg::ZERO), CSRR_BASE);
        assert_eq!(csrw(Reg::ZERO, Csr::new(0)), CSRW_BASE);
    }

    #[test]
    fn single_bit_operands_move_by_field_shift() {
        assert_eq!(csrr(Csr::new(1), Reg::ZERO) - CSRR_BASE, 1 << CSR_SHIFT);
        assert_eq!(csrr(Csr::new(0), Reg::RA) - CSRR_BASE, 1 << RD_SHIFT);
        assert_eq!(csrw(Reg::ZERO, Csr::new(1)) - CSRW_BASE, 1 << CSR_SHIFT);
        assert_eq!(csrw(Reg::RA, Csr::new(0)) - CSRW_BASE, 1 << RS1_SHIFT);
    }

    #[test]
    fn mscratch_into_t0() {
        let word = csrr(Csr::new(0x340), Reg::new(5));
        assert_eq!(word, CSRR_BASE | (5 << 7) | (0x340 << 20));
        // csrr t0, mscratch
        assert_eq!(word, 0x3400_22F3);
    }

    #[test]
    fn s0_into_mscratch() {
        // csrw mscratch, s0
        assert_eq!(csrw(Reg::S0, Csr::MSCRATCH), 0x3404_1073);
    }

    #[test]
    fn fields_decode_back() {
        let read = InstructionFields(csrr(Csr::MCAUSE, Reg::T0));
        assert_eq!(read.opcode(), SYSTEM_OPCODE);
        assert_eq!(read.funct3(), FUNCT3_CSRRS);
        assert_eq!(read.rd(), 5);
        assert_eq!(read.rs1(), 0);
        assert_eq!(read.csr(), 0x342);

        let write = InstructionFields(csrw(Reg::S0, Csr::MTVEC));
        assert_eq!(write.opcode(), SYSTEM_OPCODE);
        assert_eq!(write.funct3(), FUNCT3_CSRRW);
        assert_eq!(write.rd(), 0);
        assert_eq!(write.rs1(), 8);
        assert_eq!(write.csr(), 0x305);
    }

    #[test]
    fn extreme_operands_stay_in_their_fields() {
        let read = InstructionFields(csrr(Csr::new(CSR_MAX), Reg::T6));
        assert_eq!(read.csr(), CSR_MAX);
        assert_eq!(read.rd(), 31);
        assert_eq!(read.rs1(), 0);
        assert_eq!(read.funct3(), FUNCT3_CSRRS);

        let write = InstructionFields(csrw(Reg::T6, Csr::new(CSR_MAX)));
        assert_eq!(write.rs1(), 31);
        assert_eq!(write.rd(), 0);
        assert_eq!(write.funct3(), FUNCT3_CSRRW);
    }

    #[test]
    fn checked_construction() {
        assert_eq!(Reg::try_new(32), Err(EncodingError::RegisterOutOfRange));
        assert_eq!(Csr::try_new(0x1000), Err(EncodingError::CsrOutOfRange));
        assert_eq!(Reg::try_new(31), Ok(Reg::T6));
        assert_eq!(Csr::try_new(0x340), Ok(Csr::MSCRATCH));

        assert_eq!(try_csrr(0x340, 5), Ok(0x3400_22F3));
        assert_eq!(try_csrr(0x1000, 5), Err(EncodingError::CsrOutOfRange));
        assert_eq!(try_csrw(40, 0x340), Err(EncodingError::RegisterOutOfRange));
        assert_eq!(try_csrw(8, 0x340), Ok(0x3404_1073));
    }

    #[test]
    #[should_panic(expected = "register index exceeds 5 bits")]
    fn new_register_panics_out_of_range() {
        let _ = Reg::new(32);
    }

    #[test]
    #[should_panic(expected = "CSR index exceeds 12 bits")]
    fn new_csr_panics_out_of_range() {
        let _ = Csr::new(0x1000);
    }

    #[test]
    fn csr_attributes() {
        assert_eq!(Csr::pmpaddr(7), Some(Csr::new(0x3B7)));
        assert_eq!(Csr::pmpaddr(64), None);
        assert_eq!(Csr::MSTATUS.privilege(), 3);
        assert_eq!(Csr::SSTATUS.privilege(), 1);
        assert!(Csr::MHARTID.is_read_only());
        assert!(!Csr::MSCRATCH.is_read_only());
    }
}
