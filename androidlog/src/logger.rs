//! The tagged logger facade.
//!
//! Every call writes to the native sink first. When the logger carries a
//! package name, the same line is then mirrored into that package's record
//! store. Mirroring is best effort: failures go to the configured
//! [`Diagnostics`] and are never returned to the caller.
//!
//! # Example
//!
//! ```no_run
//! use androidlog::Logger;
//!
//! let logger = Logger::new("MyApp").with_package_name("com.example.app");
//! logger.info("hello");
//! logger.errorf(format_args!("failed: {}", 42));
//! ```

use crate::diagnostics::{ConsoleDiagnostics, Diagnostics};
use crate::priority::Priority;
use crate::sink::{LogSink, NativeSink};
use crate::store::{LogRecord, RecordStore, SqliteRecordStore, DEFAULT_DATA_ROOT};
use log::LevelFilter;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Logger bound to one tag and, optionally, one application package.
///
/// Cloning is cheap; clones share the same sink, store and diagnostics.
#[derive(Clone)]
pub struct Logger {
    tag: String,
    package_name: String,
    max_level: LevelFilter,
    sink: Arc<dyn LogSink>,
    store: Arc<dyn RecordStore>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("tag", &self.tag)
            .field("package_name", &self.package_name)
            .field("max_level", &self.max_level)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Logger writing to the native sink under `tag`, without persistence.
    ///
    /// The tag is used verbatim, empty or not.
    pub fn new(tag: impl Into<String>) -> Self {
        Self::builder(tag).build()
    }

    pub fn builder(tag: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(tag)
    }

    /// Mirror every line into the record store of `package_name`.
    ///
    /// An empty name turns persistence off again.
    pub fn with_package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = package_name.into();
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Configured package name; empty when persistence is off.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Most verbose level accepted through the `log` facade.
    pub fn max_level(&self) -> LevelFilter {
        self.max_level
    }

    pub(crate) fn set_max_level(&mut self, level: LevelFilter) {
        self.max_level = level;
    }

    /// Write `msg` at `priority`, then mirror it if a package is configured.
    pub fn log(&self, priority: Priority, msg: &str) {
        self.sink.write(priority, &self.tag, msg);

        if self.package_name.is_empty() {
            return;
        }

        let record = LogRecord::new(&self.tag, priority, msg);
        if let Err(e) = self.store.persist(&self.package_name, &record) {
            self.diagnostics.report(&e);
        }
    }

    pub fn verbose(&self, msg: &str) {
        self.log(Priority::Verbose, msg);
    }

    pub fn debug(&self, msg: &str) {
        self.log(Priority::Debug, msg);
    }

    pub fn info(&self, msg: &str) {
        self.log(Priority::Info, msg);
    }

    pub fn warn(&self, msg: &str) {
        self.log(Priority::Warn, msg);
    }

    pub fn error(&self, msg: &str) {
        self.log(Priority::Error, msg);
    }

    /// Logs at FATAL priority. Does not abort the process.
    pub fn fatal(&self, msg: &str) {
        self.log(Priority::Fatal, msg);
    }

    pub fn verbosef(&self, args: fmt::Arguments<'_>) {
        self.verbose(&fmt::format(args));
    }

    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.debug(&fmt::format(args));
    }

    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.info(&fmt::format(args));
    }

    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.warn(&fmt::format(args));
    }

    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.error(&fmt::format(args));
    }

    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.fatal(&fmt::format(args));
    }
}

/// Collects a logger's configuration before it is fixed by [`build`].
///
/// Anything left unset falls back to the platform defaults: the native sink,
/// the SQLite store under `/data/data` and stderr diagnostics.
///
/// [`build`]: LoggerBuilder::build
pub struct LoggerBuilder {
    tag: String,
    package_name: String,
    max_level: LevelFilter,
    data_root: Option<PathBuf>,
    sink: Option<Arc<dyn LogSink>>,
    store: Option<Arc<dyn RecordStore>>,
    diagnostics: Option<Arc<dyn Diagnostics>>,
}

impl LoggerBuilder {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            package_name: String::new(),
            max_level: LevelFilter::Trace,
            data_root: None,
            sink: None,
            store: None,
            diagnostics: None,
        }
    }

    pub fn package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = package_name.into();
        self
    }

    pub fn max_level(mut self, level: LevelFilter) -> Self {
        self.max_level = level;
        self
    }

    /// Directory holding the per-package data directories.
    ///
    /// Ignored when a custom store is supplied.
    pub fn data_root(mut self, data_root: impl Into<PathBuf>) -> Self {
        self.data_root = Some(data_root.into());
        self
    }

    pub fn sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    pub fn store(mut self, store: impl RecordStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    pub fn diagnostics(mut self, diagnostics: impl Diagnostics + 'static) -> Self {
        self.diagnostics = Some(Arc::new(diagnostics));
        self
    }

    pub fn build(self) -> Logger {
        let data_root = self
            .data_root
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_ROOT));

        Logger {
            tag: self.tag,
            package_name: self.package_name,
            max_level: self.max_level,
            sink: self.sink.unwrap_or_else(|| Arc::new(NativeSink)),
            store: self
                .store
                .unwrap_or_else(|| Arc::new(SqliteRecordStore::new(data_root))),
            diagnostics: self
                .diagnostics
                .unwrap_or_else(|| Arc::new(ConsoleDiagnostics)),
        }
    }
}
