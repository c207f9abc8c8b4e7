#![deny(unsafe_code)]

// The only unsafe code is the liblog call in `sink`
mod bridge;
mod diagnostics;
mod error;
mod logger;
mod priority;
mod sink;
pub mod store;

pub use crate::bridge::init;
pub use crate::diagnostics::{ConsoleDiagnostics, Diagnostics, LogDiagnostics};
pub use crate::error::StoreError;
pub use crate::logger::{Logger, LoggerBuilder};
pub use crate::priority::Priority;
pub use crate::sink::{render_brief, LogSink, NativeSink};
pub use crate::store::{LogRecord, RecordStore, SqliteRecordStore};

///
/// Everything needed to log from application code
///
/// ```
/// use androidlog::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Logger;
    pub use crate::Priority;
}
