//! Architecture-specific definitions.
//!
//! Every architecture module is plain constant data, so all of them are
//! compiled on every host and can be tested anywhere. Boot code should import
//! from [`target`], which re-exports only the module matching the build
//! target. Exactly one table is ever active in a given image.

pub mod aarch64;
pub mod riscv;
pub mod riscv32;
pub mod riscv64;
pub mod x86_64;

/// The constant table for the architecture being compiled.
pub mod target {
    #[cfg(target_arch = "x86_64")]
    pub use super::x86_64::*;

    #[cfg(target_arch = "aarch64")]
    pub use super::aarch64::*;

    #[cfg(target_arch = "riscv32")]
    pub use super::riscv32::*;

    #[cfg(target_arch = "riscv64")]
    pub use super::riscv64::*;
}

/// Name of the architecture selected by [`target`].
#[cfg(target_arch = "x86_64")]
pub const ARCH_NAME: &str = "x86_64";

#[cfg(target_arch = "aarch64")]
pub const ARCH_NAME: &str = "aarch64";

#[cfg(target_arch = "riscv32")]
pub const ARCH_NAME: &str = "riscv32";

#[cfg(target_arch = "riscv64")]
pub const ARCH_NAME: &str = "riscv64";

/// Hosts without a boot table (e.g. tooling builds) still get a name.
#[cfg(not(any(
    target_arch = "x86_64",
    target_arch = "aarch64",
    target_arch = "riscv32",
    target_arch = "riscv64"
)))]
pub const ARCH_NAME: &str = "unsupported";
