//! Boot log dump of the compiled-in hardware table.
//!
//! Boot code calls [`report_target`] once a sink is attached, so a serial log
//! records exactly which addresses and encodings the image was built with.

use bootarch_abi::LayoutError;
use bootarch_abi::arch::riscv::{CSRR_BASE, CSRW_BASE, Csr};
use bootarch_abi::arch::x86_64::{LegacyPrefix, PagingLayout};
use bootarch_abi::arch::{self, aarch64, riscv32, riscv64, x86_64};

use crate::{klog_debug, klog_error, klog_info};

/// Largest binary unit that divides `bytes` exactly.
fn size_label(bytes: u64) -> (u64, &'static str) {
    const UNITS: [(u64, &str); 3] = [(1 << 30, "GB"), (1 << 20, "MB"), (1 << 10, "KB")];
    for (unit, suffix) in UNITS {
        if bytes >= unit && bytes % unit == 0 {
            return (bytes / unit, suffix);
        }
    }
    (bytes, "B")
}

/// Log the table for the architecture this image targets.
pub fn report_target() {
    klog_info!("bootarch: {} boot table", arch::ARCH_NAME);

    #[cfg(target_arch = "x86_64")]
    report_x86_64();

    #[cfg(target_arch = "aarch64")]
    report_aarch64();

    #[cfg(target_arch = "riscv32")]
    report_riscv32();

    #[cfg(target_arch = "riscv64")]
    report_riscv64();

    #[cfg(not(any(
        target_arch = "x86_64",
        target_arch = "aarch64",
        target_arch = "riscv32",
        target_arch = "riscv64"
    )))]
    crate::klog_warn!("bootarch: no boot table for this architecture");
}

pub fn report_x86_64() {
    for region in x86_64::ACTIVE_LAYOUT.regions() {
        let (size, unit) = size_label(region.level.entry_granularity());
        klog_info!(
            "x86_64: {} at {:#x}..{:#x}, {} entries of {}{}",
            region.level.name(),
            region.base.as_u64(),
            region.end().as_u64(),
            region.entry_count(),
            size,
            unit
        );
    }
    klog_info!("x86_64: MSR_EFER {:#x}", x86_64::MSR_EFER);
    for prefix in LegacyPrefix::ALL {
        klog_debug!(
            "x86_64: prefix {:?} {:#04x} (group {})",
            prefix,
            prefix.byte(),
            prefix.group()
        );
    }
}

pub fn report_aarch64() {
    for option in [aarch64::BarrierOption::Ish, aarch64::BarrierOption::Sy] {
        klog_info!(
            "aarch64: barrier {} = {:#06b} ({:?}, {:?})",
            option.mnemonic(),
            option.bits(),
            option.domain(),
            option.access()
        );
    }
}

fn report_riscv(name: &str, xlen: u32, scratch: u8, read: u32, write: u32) {
    klog_info!("{}: XLEN {}, scratch register x{}", name, xlen, scratch);
    klog_info!(
        "{}: csrr base {:#06x}, csrw base {:#06x}",
        name,
        CSRR_BASE,
        CSRW_BASE
    );
    klog_debug!(
        "{}: csrr x{}, mstatus = {:#010x}; csrw mstatus, x{} = {:#010x}",
        name,
        scratch,
        read,
        scratch,
        write
    );
}

pub fn report_riscv32() {
    report_riscv(
        "riscv32",
        riscv32::XLEN,
        riscv32::S0,
        riscv32::csrr_scratch(Csr::MSTATUS),
        riscv32::csrw_scratch(Csr::MSTATUS),
    );
}

pub fn report_riscv64() {
    report_riscv(
        "riscv64",
        riscv64::XLEN,
        riscv64::T0,
        riscv64::csrr_scratch(Csr::MSTATUS),
        riscv64::csrw_scratch(Csr::MSTATUS),
    );
}

/// Validate a candidate paging layout, logging the verdict.
pub fn check_layout(layout: &PagingLayout) -> Result<(), LayoutError> {
    match layout.validate() {
        Ok(()) => {
            klog_debug!(
                "x86_64: paging layout {:#x}..{:#x} accepted",
                layout.pml4t.base.as_u64(),
                layout.pt.end().as_u64()
            );
            Ok(())
        }
        Err(err) => {
            klog_error!(
                "x86_64: paging layout at {:#x} rejected: {}",
                layout.pml4t.base.as_u64(),
                err
            );
            Err(err)
        }
    }
}
