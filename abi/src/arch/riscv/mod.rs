//! RISC-V definitions shared by the RV32 and RV64 tables.
//!
//! The CSR encoders are width independent; only the scratch register each
//! target's boot code uses differs, see [`super::riscv32`] and
//! [`super::riscv64`].

pub mod csr;
pub mod pmp;

pub use csr::{
    CSR_MAX, CSR_SHIFT, CSRR_BASE, CSRW_BASE, Csr, FUNCT3_CSRRS, FUNCT3_CSRRW, FUNCT3_SHIFT,
    InstructionFields, RD_SHIFT, REG_MAX, RS1_SHIFT, Reg, SYSTEM_OPCODE, csrr, csrw, try_csrr,
    try_csrw,
};
pub use pmp::{PmpAddressMatching, PmpFlags};
