//! Early-boot support for the bootarch tables.
//!
//! The logger here is usable from the first instruction of boot code that
//! can run Rust: no heap, no locks held across output, and silent until a
//! sink is attached.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod klog;
pub mod report;

pub use klog::{
    KlogLevel, KlogSink, klog_attach_sink, klog_detach_sink, klog_get_level, klog_init,
    klog_set_level,
};
pub use report::{
    check_layout, report_aarch64, report_riscv32, report_riscv64, report_target, report_x86_64,
};
