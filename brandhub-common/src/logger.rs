use brandhub_error::{BHError, BHResult};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{subscriber::set_global_default, Level};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    filter::DynFilterFn,
    fmt::{self},
    layer::SubscriberExt,
    Layer, Registry,
};

/// Console plus daily-rolling file output sharing one adjustable level.
pub struct Logger {
    level: Arc<Mutex<Level>>,
    _file_guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn new(level: Option<Level>) -> Self {
        Logger {
            level: Arc::new(Mutex::new(level.unwrap_or(Level::INFO))),
            _file_guard: None,
        }
    }

    /// Sets the new logging level. Takes effect for both outputs immediately.
    #[inline]
    pub fn set_level(&self, new_level: Level) {
        *lock(&self.level) = new_level;
    }

    #[inline]
    pub fn get_level(&self) -> Level {
        *lock(&self.level)
    }

    /// Install the global subscriber writing to stdout and to `dir/file`, rotated daily.
    ///
    /// Fails if a global subscriber is already set.
    pub fn initialize(&mut self, dir: &str, file: &str) -> BHResult<()> {
        let file_appender = rolling::daily(dir, file);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        self._file_guard = Some(guard);

        let console_filter = {
            let level = Arc::clone(&self.level);
            DynFilterFn::new(move |metadata, _| metadata.level() <= &*lock(&level))
        };
        let file_filter = {
            let level = Arc::clone(&self.level);
            DynFilterFn::new(move |metadata, _| metadata.level() <= &*lock(&level))
        };

        let console_layer = {
            #[cfg(debug_assertions)]
            let layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_file(true)
                .with_line_number(true);

            #[cfg(not(debug_assertions))]
            let layer = fmt::layer().with_writer(std::io::stdout).with_target(false);

            layer.with_filter(console_filter)
        };

        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_filter(file_filter);

        let subscriber = Registry::default().with(console_layer).with(file_layer);
        set_global_default(subscriber).map_err(|_| BHError::from("Failed to set logger"))?;
        Ok(())
    }
}

/// A poisoned level lock still holds a valid level.
#[inline]
fn lock(level: &Mutex<Level>) -> MutexGuard<'_, Level> {
    level.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Parse a configured level name, case-insensitively.
pub fn parse_level(value: &str) -> Option<Level> {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(Level::DEBUG));
        assert_eq!(parse_level(" WARN "), Some(Level::WARN));
        assert_eq!(parse_level("Info"), Some(Level::INFO));
        assert_eq!(parse_level("verbose"), None);
        assert_eq!(parse_level(""), None);
    }

    #[test]
    fn test_level_is_adjustable() {
        let logger = Logger::new(None);
        assert_eq!(logger.get_level(), Level::INFO);
        logger.set_level(Level::TRACE);
        assert_eq!(logger.get_level(), Level::TRACE);
    }
}
