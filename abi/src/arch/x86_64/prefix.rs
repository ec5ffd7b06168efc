//! Legacy instruction prefixes for real-mode code.
//!
//! Code assembled for 32/64-bit targets cannot express 16-bit operand or
//! address semantics. Boot code that still runs in real mode emits these
//! bytes by hand, immediately before the encoded instruction they modify.
//! When more than one is needed the caller concatenates them, segment
//! override first.

/// A single-byte legacy instruction prefix.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LegacyPrefix {
    /// CS segment override.
    CsOverride = 0x2E,
    /// Operand-size override (32-bit operands in 16-bit code).
    OperandSize = 0x66,
    /// Address-size override (32-bit addressing in 16-bit code).
    AddressSize = 0x67,
}

impl LegacyPrefix {
    pub const ALL: [Self; 3] = [Self::CsOverride, Self::OperandSize, Self::AddressSize];

    /// The raw prefix byte.
    #[inline]
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Legacy prefix group (SDM Vol. 2, 2.1.1).
    ///
    /// An instruction may carry at most one prefix from each group.
    #[inline]
    pub const fn group(self) -> u8 {
        match self {
            Self::CsOverride => 2,
            Self::OperandSize => 3,
            Self::AddressSize => 4,
        }
    }
}

/// CS segment override prefix.
pub const CSADDR: u8 = LegacyPrefix::CsOverride.byte();

/// 32-bit operand size override prefix.
pub const DATA32: u8 = LegacyPrefix::OperandSize.byte();

/// 32-bit address size override prefix.
pub const ADDR32: u8 = LegacyPrefix::AddressSize.byte();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_bytes() {
        assert_eq!(CSADDR, 0x2E);
        assert_eq!(DATA32, 0x66);
        assert_eq!(ADDR32, 0x67);
        assert_eq!(core::mem::size_of::<LegacyPrefix>(), 1);
    }

    #[test]
    fn prefixes_are_distinct_and_in_separate_groups() {
        for (i, a) in LegacyPrefix::ALL.iter().enumerate() {
            for b in &LegacyPrefix::ALL[i + 1..] {
                assert_ne!(a.byte(), b.byte());
                assert_ne!(a.group(), b.group());
            }
        }
    }

    #[test]
    fn segment_override_orders_first() {
        assert!(LegacyPrefix::CsOverride.group() < LegacyPrefix::OperandSize.group());
        assert!(LegacyPrefix::CsOverride.group() < LegacyPrefix::AddressSize.group());
    }
}
