/// `log` facade backend built on [`Logger`]
use crate::logger::Logger;
use crate::priority::Priority;
use log::{LevelFilter, Metadata, Record, SetLoggerError};

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let priority = Priority::from(record.level());
        match record.args().as_str() {
            Some(msg) => Logger::log(self, priority, msg),
            None => Logger::log(self, priority, &record.args().to_string()),
        }
    }

    fn flush(&self) {}
}

/// Install `logger` as the process-wide `log` backend.
///
/// Records more verbose than `level` are dropped. Fails if another backend
/// was installed first.
pub fn init(mut logger: Logger, level: LevelFilter) -> Result<(), SetLoggerError> {
    logger.set_max_level(level);
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(())
}
