//! Routes `log` records to the browser console.
//!
//! Only wasm32 builds install a logger here; native builds leave that to the
//! binary (`env_logger`).

use log::{Level, Record};

#[cfg(target_arch = "wasm32")]
use log::{LevelFilter, Log, Metadata};

/// Writes each record to the matching `console` method.
#[cfg(target_arch = "wasm32")]
pub struct ConsoleLogger;

#[cfg(target_arch = "wasm32")]
static LOGGER: ConsoleLogger = ConsoleLogger;

#[cfg(target_arch = "wasm32")]
impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = wasm_bindgen::JsValue::from_str(&format_record(record));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// `[pixelpad LEVEL] message`
pub fn format_record(record: &Record<'_>) -> String {
    let level = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("[pixelpad {level}] {}", record.args())
}

/// Install the console logger. Later calls only adjust the level.
#[cfg(target_arch = "wasm32")]
pub fn init(level: LevelFilter) {
    log::set_max_level(level);
    if log::set_logger(&LOGGER).is_ok() {
        log::debug!("console logger installed");
    }
}
