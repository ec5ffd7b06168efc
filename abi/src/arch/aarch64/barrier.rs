//! DSB/DMB barrier option encodings.
//!
//! ARM Architecture Reference Manual ARMv8, for ARMv8-A architecture profile,
//! C6.2.75 DSB. The 4-bit CRm field packs the shareability domain into
//! bits 3:2 and the access type into bits 1:0.
//!
//! Every option is spelled out as a literal so the table can be audited line
//! by line against the manual. Add rows here rather than composing fields.

/// Shareability domain selected by bits 3:2 of a barrier option.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShareabilityDomain {
    OuterShareable = 0b00,
    NonShareable = 0b01,
    InnerShareable = 0b10,
    FullSystem = 0b11,
}

/// Accesses ordered by a barrier, bits 1:0 of a barrier option.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BarrierAccess {
    /// Loads before the barrier against loads and stores after it.
    Loads = 0b01,
    /// Stores before the barrier against stores after it.
    Stores = 0b10,
    /// All reads and writes.
    ReadWrite = 0b11,
}

/// Barrier option immediate for `dsb`, `dmb`.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BarrierOption {
    OshLd = 0b0001,
    OshSt = 0b0010,
    Osh = 0b0011,
    NshLd = 0b0101,
    NshSt = 0b0110,
    Nsh = 0b0111,
    IshLd = 0b1001,
    IshSt = 0b1010,
    Ish = 0b1011,
    Ld = 0b1101,
    St = 0b1110,
    Sy = 0b1111,
}

impl BarrierOption {
    pub const ALL: [Self; 12] = [
        Self::OshLd,
        Self::OshSt,
        Self::Osh,
        Self::NshLd,
        Self::NshSt,
        Self::Nsh,
        Self::IshLd,
        Self::IshSt,
        Self::Ish,
        Self::Ld,
        Self::St,
        Self::Sy,
    ];

    /// The raw 4-bit CRm value.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Look up an option by its CRm value.
    ///
    /// Values with access bits `00` yield `None`. They are not barrier
    /// options: for DMB they are reserved, while for DSB `0b0000` and
    /// `0b0100` encode SSBB and PSSBB.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0b0001 => Some(Self::OshLd),
            0b0010 => Some(Self::OshSt),
            0b0011 => Some(Self::Osh),
            0b0101 => Some(Self::NshLd),
            0b0110 => Some(Self::NshSt),
            0b0111 => Some(Self::Nsh),
            0b1001 => Some(Self::IshLd),
            0b1010 => Some(Self::IshSt),
            0b1011 => Some(Self::Ish),
            0b1101 => Some(Self::Ld),
            0b1110 => Some(Self::St),
            0b1111 => Some(Self::Sy),
            _ => None,
        }
    }

    pub const fn domain(self) -> ShareabilityDomain {
        match self.bits() >> 2 {
            0b00 => ShareabilityDomain::OuterShareable,
            0b01 => ShareabilityDomain::NonShareable,
            0b10 => ShareabilityDomain::InnerShareable,
            _ => ShareabilityDomain::FullSystem,
        }
    }

    pub const fn access(self) -> BarrierAccess {
        match self.bits() & 0b11 {
            0b01 => BarrierAccess::Loads,
            0b10 => BarrierAccess::Stores,
            _ => BarrierAccess::ReadWrite,
        }
    }

    /// Assembler mnemonic for the option operand.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::OshLd => "oshld",
            Self::OshSt => "oshst",
            Self::Osh => "osh",
            Self::NshLd => "nshld",
            Self::NshSt => "nshst",
            Self::Nsh => "nsh",
            Self::IshLd => "ishld",
            Self::IshSt => "ishst",
            Self::Ish => "ish",
            Self::Ld => "ld",
            Self::St => "st",
            Self::Sy => "sy",
        }
    }
}

/// Inner Shareable, reads and writes.
pub const ISH: u8 = 0b1011;

/// Full system, reads and writes.
pub const SY: u8 = 0b1111;

const _: () = assert!(ISH == BarrierOption::Ish.bits() && SY == BarrierOption::Sy.bits());
