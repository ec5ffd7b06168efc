use core::fmt;
use core::sync::atomic::{AtomicU8, Ordering};

use spin::RwLock;

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum KlogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl KlogLevel {
    fn from_raw(raw: u8) -> Self {
        match raw {
            0 => KlogLevel::Error,
            1 => KlogLevel::Warn,
            2 => KlogLevel::Info,
            3 => KlogLevel::Debug,
            _ => KlogLevel::Trace,
        }
    }
}

/// Byte output for the logger, typically a polled UART.
///
/// Boot code attaches one as soon as it can write characters. Until then
/// every log call is dropped.
pub trait KlogSink: Sync {
    fn write_bytes(&self, bytes: &[u8]);
}

static CURRENT_LEVEL: AtomicU8 = AtomicU8::new(KlogLevel::Info as u8);
static SINK: RwLock<Option<&'static dyn KlogSink>> = RwLock::new(None);

#[inline(always)]
fn is_enabled(level: KlogLevel) -> bool {
    level as u8 <= CURRENT_LEVEL.load(Ordering::Relaxed)
}

fn write_bytes(bytes: &[u8]) {
    // Release the guard before the sink runs so it may detach or re-attach.
    let sink = *SINK.read();
    if let Some(sink) = sink {
        sink.write_bytes(bytes);
    }
}

pub fn is_enabled_level(level: KlogLevel) -> bool {
    is_enabled(level)
}

pub fn log_args(level: KlogLevel, args: fmt::Arguments<'_>) {
    if !is_enabled(level) {
        return;
    }
    struct KlogWriter;
    impl fmt::Write for KlogWriter {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            write_bytes(s.as_bytes());
            Ok(())
        }
    }
    let _ = fmt::write(&mut KlogWriter, args);
    write_bytes(b"\n");
}
pub fn klog_init() {
    CURRENT_LEVEL.store(KlogLevel::Info as u8, Ordering::Relaxed);
    *SINK.write() = None;
}
pub fn klog_attach_sink(sink: &'static dyn KlogSink) {
    *SINK.write() = Some(sink);
}
pub fn klog_detach_sink() {
    *SINK.write() = None;
}
pub fn klog_has_sink() -> bool {
    SINK.read().is_some()
}
pub fn klog_set_level(level: KlogLevel) {
    CURRENT_LEVEL.store(level as u8, Ordering::Relaxed);
}
pub fn klog_get_level() -> KlogLevel {
    KlogLevel::from_raw(CURRENT_LEVEL.load(Ordering::Relaxed))
}
pub fn klog_newline() {
    write_bytes(b"\n");
}

#[macro_export]
macro_rules! klog {
    ($level:expr, $($arg:tt)*) => {{
        $crate::klog::log_args($level, ::core::format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! klog_error {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Error, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_warn {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Warn, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_info {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Info, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_debug {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Debug, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_trace {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Trace, ::core::format_args!($($arg)*))
    };
}

/// Capturing sink shared by tests that inspect log output.
#[cfg(test)]
pub(crate) mod capture {
    use std::string::String;

    use spin::{Mutex, MutexGuard};

    use super::*;

    pub struct Capture(Mutex<String>);

    impl KlogSink for Capture {
        fn write_bytes(&self, bytes: &[u8]) {
            self.0.lock().push_str(&String::from_utf8_lossy(bytes));
        }
    }

    pub static CAPTURE: Capture = Capture(Mutex::new(String::new()));

    /// The sink and level are global, so tests that use them run one at a time.
    static SERIAL: Mutex<()> = Mutex::new(());

    pub struct CaptureGuard {
        _serial: MutexGuard<'static, ()>,
    }

    impl CaptureGuard {
        pub fn take(&self) -> String {
            core::mem::take(&mut *CAPTURE.0.lock())
        }
    }

    impl Drop for CaptureGuard {
        fn drop(&mut self) {
            klog_init();
            CAPTURE.0.lock().clear();
        }
    }

    pub fn begin(level: KlogLevel) -> CaptureGuard {
        let serial = SERIAL.lock();
        CAPTURE.0.lock().clear();
        klog_attach_sink(&CAPTURE);
        klog_set_level(level);
        CaptureGuard { _serial: serial }
    }
}
