//! Console Logger
//!
//! `log` backend writing timestamped lines to the browser console (stderr
//! when not running as wasm). The most recent lines are kept in a ring
//! buffer so they can be shown or copied from inside the page.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub level: LevelFilter,
    /// Lines retained by the ring buffer; 0 disables retention
    pub capacity: usize,
    /// Prefix on every line
    pub app_name: String,
}

impl LoggerConfig {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            ..Self::default()
        }
    }

    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info },
            capacity: DEFAULT_CAPACITY,
            app_name: String::new(),
        }
    }
}

pub struct ConsoleLogger {
    config: LoggerConfig,
    buffer: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(config: LoggerConfig) -> Self {
        let buffer = Mutex::new(VecDeque::with_capacity(config.capacity));
        Self { config, buffer }
    }

    /// Retained lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn format(&self, record: &Record) -> String {
        let time = chrono::Local::now().format("%H:%M:%S%.3f");
        if self.config.app_name.is_empty() {
            format!("[{}] {} {}: {}", time, record.level(), record.target(), record.args())
        } else {
            format!(
                "[{}] [{}] {} {}: {}",
                time,
                self.config.app_name,
                record.level(),
                record.target(),
                record.args()
            )
        }
    }

    fn retain(&self, line: &str) {
        if self.config.capacity == 0 {
            return;
        }
        if let Ok(mut buffer) = self.buffer.lock() {
            while buffer.len() >= self.config.capacity {
                buffer.pop_front();
            }
            buffer.push_back(line.to_string());
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.config.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format(record);
        write_line(record.level(), &line);
        self.retain(&line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Install the global logger. Fails if any logger is already set.
pub fn init(config: LoggerConfig) -> Result<(), SetLoggerError> {
    let level = config.level;
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(config));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Lines retained by the global logger, oldest first
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::recent_lines).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(logger: &ConsoleLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("content_store::store")
                .args(format_args!("{}", message))
                .build(),
        );
    }

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let logger = ConsoleLogger::new(LoggerConfig::new("Test").capacity(2).level(LevelFilter::Info));
        emit(&logger, Level::Info, "one");
        emit(&logger, Level::Info, "two");
        emit(&logger, Level::Warn, "three");

        let lines = logger.recent_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("two"));
        assert!(lines[1].contains("WARN content_store::store: three"));
        assert!(lines[1].contains("[Test]"));
    }

    #[test]
    fn test_level_filter() {
        let logger = ConsoleLogger::new(LoggerConfig::new("Test").level(LevelFilter::Warn));
        emit(&logger, Level::Info, "skipped");
        emit(&logger, Level::Error, "kept");

        let lines = logger.recent_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("ERROR content_store::store: kept"));
    }

    #[test]
    fn test_zero_capacity_retains_nothing() {
        let logger = ConsoleLogger::new(LoggerConfig::default().capacity(0));
        emit(&logger, Level::Error, "gone");
        assert!(logger.recent_lines().is_empty());
    }

    #[test]
    fn test_global_snapshot_sees_later_records() {
        init(LoggerConfig::new("Test").level(LevelFilter::Info)).unwrap();
        log::info!("opened");
        let first = recent_lines();

        log::warn!("saved later");
        let second = recent_lines();

        assert!(!first.iter().any(|l| l.ends_with("saved later")));
        assert!(second.last().unwrap().ends_with("saved later"));
        assert_eq!(second.len(), first.len() + 1);
    }
}
