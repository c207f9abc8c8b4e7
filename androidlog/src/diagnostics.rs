/// Reporting channel for failures the logger swallows
use crate::error::StoreError;
use std::io::Write;

/// Receives persistence failures.
///
/// Logging calls never return errors. When the record store cannot be opened
/// or written, the failure is passed here instead and the call carries on.
#[cfg_attr(test, mockall::automock)]
pub trait Diagnostics: Send + Sync {
    fn report(&self, error: &StoreError);
}

/// Prints one line per failure on stderr.
///
/// Output goes straight to the stream, never through `log`, so a logger
/// installed as the `log` backend cannot feed its own failures back into
/// itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
    fn report(&self, error: &StoreError) {
        let _ = writeln!(std::io::stderr().lock(), "androidlog: {error}");
    }
}

/// Forwards failures to the `log` facade at warn level.
///
/// Only use this when the active `log` backend is not itself an
/// [`crate::Logger`] with persistence enabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&self, error: &StoreError) {
        log::warn!(target: "androidlog", "{error}");
    }
}
