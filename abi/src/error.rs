//! Error types for constant construction and layout validation.
//!
//! These are only produced by the checked (`try_*`) constructors and by
//! layout validation. In `const` contexts the panicking constructors are
//! used instead, so a bad value never reaches a boot image.

use core::fmt;

/// Implement common methods for ABI error enums.
///
/// Generates `as_i32()`, `as_str()` and a `Display` impl for `#[repr(i32)]`
/// error enums.
macro_rules! impl_abi_error {
    ($ty:ty, { $($variant:ident => $msg:literal),* $(,)? }) => {
        impl $ty {
            /// Raw error code.
            #[inline]
            pub const fn as_i32(self) -> i32 {
                self as i32
            }

            /// Static description, usable from `const` panics.
            #[inline]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $msg,)*
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Instruction encoding result type
pub type EncodingResult<T> = Result<T, EncodingError>;

/// Errors returned by checked instruction operand construction
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingError {
    /// CSR index does not fit the 12-bit CSR field
    CsrOutOfRange = -1,
    /// Register index does not fit a 5-bit register field
    RegisterOutOfRange = -2,
}

impl_abi_error!(EncodingError, {
    CsrOutOfRange => "CSR index exceeds 12 bits",
    RegisterOutOfRange => "register index exceeds 5 bits",
});

/// Errors returned by paging layout validation
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// A region base is not 4KB aligned
    Misaligned = -1,
    /// Regions are not strictly increasing by at least one table
    OutOfOrder = -2,
    /// A region ends above the 1MB real-mode limit
    AboveRealModeLimit = -3,
}

impl_abi_error!(LayoutError, {
    Misaligned => "paging region is not 4KB aligned",
    OutOfOrder => "paging regions overlap or are not ordered coarsest to finest",
    AboveRealModeLimit => "paging region extends above 1MB",
});
