/// Native log sink: the write primitive every logger call ends in
use crate::priority::Priority;
use std::ffi::CString;

/// Destination for a tagged, prioritised log line.
///
/// Writes are fire-and-forget: the platform gives no failure signal worth
/// surfacing, so neither does this trait. Implement it to capture or
/// redirect output in tests.
#[cfg_attr(test, mockall::automock)]
pub trait LogSink: Send + Sync {
    /// Write one line at `priority` under `tag`.
    fn write(&self, priority: Priority, tag: &str, msg: &str);
}

/// The platform log buffer.
///
/// On Android this is liblog's `__android_log_write`. Elsewhere the line is
/// rendered in logcat's brief format on stderr so code using the crate can
/// run on a development host.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeSink;

impl LogSink for NativeSink {
    fn write(&self, priority: Priority, tag: &str, msg: &str) {
        let tag = c_string(tag);
        let msg = c_string(msg);
        write_native(priority, &tag, &msg);
    }
}

#[cfg(target_os = "android")]
#[allow(unsafe_code)]
fn write_native(priority: Priority, tag: &std::ffi::CStr, msg: &std::ffi::CStr) {
    // SAFETY: `tag` and `msg` are NUL-terminated and borrowed for the whole
    // call; liblog copies both strings before returning.
    unsafe {
        android_log_sys::__android_log_write(priority.as_i32(), tag.as_ptr(), msg.as_ptr());
    }
}

#[cfg(not(target_os = "android"))]
fn write_native(priority: Priority, tag: &std::ffi::CStr, msg: &std::ffi::CStr) {
    use std::io::Write;

    let line = render_brief(priority, &tag.to_string_lossy(), &msg.to_string_lossy());
    let _ = writeln!(std::io::stderr().lock(), "{line}");
}

/// Render a line the way `logcat -v brief` prints it, minus the pid.
pub fn render_brief(priority: Priority, tag: &str, msg: &str) -> String {
    format!("{}/{}: {}", priority.letter(), tag, msg)
}

/// Convert to a C string, cutting at the first interior NUL.
///
/// C consumers stop reading at the first NUL anyway, so truncating keeps the
/// visible text identical instead of dropping the whole line.
pub(crate) fn c_string(s: &str) -> CString {
    let visible = match s.find('\0') {
        Some(end) => s.get(..end).unwrap_or_default(),
        None => s,
    };
    CString::new(visible).unwrap_or_default()
}
