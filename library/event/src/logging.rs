//! A `log` backend for code running in the browser
//!
//! Records are written as `{secs} {level} [{module}] {message}`. On wasm32 with the
//! `console_log` feature they go to the browser console and without it they are dropped;
//! everywhere else they go to stdout. The time stamp always comes from the host clock on wasm32.
use log::{Level, Log, Metadata, Record, SetLoggerError};

pub struct ConsoleLogger {
    level: Level,
}

impl ConsoleLogger {
    pub const fn new(level: Level) -> Self {
        Self { level }
    }

    /// Installs a `ConsoleLogger` as the global logger
    ///
    /// Fails if a logger has already been installed.
    pub fn init(level: Level) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(Self::new(level)))?;
        log::set_max_level(level.to_level_filter());
        Ok(())
    }

    fn format(record: &Record) -> String {
        format!(
            "{} {:<5} [{}] {}",
            sys::seconds_since_epoch(),
            record.level(),
            record.module_path().unwrap_or_default(),
            record.args(),
        )
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn flush(&self) {}

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            sys::write(&Self::format(record));
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        mod sys {
            pub use super::sink::write;

            pub fn seconds_since_epoch() -> u64 {
                (js_sys::Date::now() / 1_000.0) as u64
            }
        }
    } else {
        mod sys {
            use std::time::{SystemTime, UNIX_EPOCH};

            pub fn seconds_since_epoch() -> u64 {
                SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|elapsed| elapsed.as_secs())
                    .unwrap_or_default()
            }

            pub fn write(line: &str) {
                println!("{}", line);
            }
        }
    }
}

// Without `console_log`, records are dropped on wasm32
#[cfg(target_arch = "wasm32")]
mod sink {
    cfg_if::cfg_if! {
        if #[cfg(feature = "console_log")] {
            use wasm_bindgen::JsValue;

            pub fn write(line: &str) {
                web_sys::console::log_1(&JsValue::from_str(line));
            }
        } else {
            pub fn write(_line: &str) {}
        }
    }
}
