//! AArch64 architecture definitions.
//!
//! Only the barrier option immediates are needed this early: the MMU and
//! cache maintenance sequences in boot code are bracketed by `dsb`/`dmb`
//! with an explicit shareability domain.

pub mod barrier;

pub use barrier::{BarrierAccess, BarrierOption, ISH, SY, ShareabilityDomain};
