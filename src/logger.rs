use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};

static LOGGER: OnceLock<GameLogger> = OnceLock::new();

/// Writes every record to stdout and, if one was opened, appends it to a log file.
pub struct GameLogger {
    level: LevelFilter,
    file: Option<Mutex<File>>,
}

impl GameLogger {
    fn new(level: LevelFilter, file: Option<File>) -> Self {
        Self { level, file: file.map(Mutex::new) }
    }
}

/// `[<timestamp>] LEVEL: message`
pub fn format_line(level: log::Level, message: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    format!("[{}] {}: {}\n", timestamp, level, message)
}

impl Log for GameLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), &record.args().to_string());
        print!("{line}");
        if let Some(file) = &self.file {
            if let Ok(mut f) = file.lock() {
                // a failed write must not take the game down
                let _ = f.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
        if let Some(file) = &self.file {
            if let Ok(mut f) = file.lock() {
                let _ = f.flush();
            }
        }
    }
}

/// Installs the logger once; later calls are ignored. An unopenable log file
/// only costs the file output.
pub fn init(level: LevelFilter, log_file: Option<&Path>) {
    let file = log_file.and_then(|path| {
        OpenOptions::new().create(true).append(true).open(path).ok()
    });
    let logger = LOGGER.get_or_init(|| GameLogger::new(level, file));
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}
