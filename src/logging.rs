// src/logging.rs
use anyhow::{Context, Result};
use chrono::Local;
use lazy_static::lazy_static;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use crate::config::Config;

/// Severity of a log line. Lines below the configured level are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    #[default]
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level: {}", other)),
        }
    }
}

lazy_static! {
    static ref LOG_FILE: Mutex<Option<File>> = Mutex::new(None);
    static ref MIN_LEVEL: Mutex<LogLevel> = Mutex::new(LogLevel::Debug);
}

/// Drops every line below `level` from now on.
pub fn set_level(level: LogLevel) {
    if let Ok(mut guard) = MIN_LEVEL.lock() {
        *guard = level;
    }
}

pub fn enabled(level: LogLevel) -> bool {
    MIN_LEVEL.lock().map(|min| level >= *min).unwrap_or(true)
}

fn get_log_dir() -> PathBuf {
    Config::config_dir().join("logs")
}

pub fn init_logger() -> Result<()> {
    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_file_path = log_dir.join(format!("galleryview_{}.log", timestamp));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
        .context("Failed to create log file")?;

    let mut guard = LOG_FILE
        .lock()
        .map_err(|_| anyhow::anyhow!("Failed to lock log file mutex"))?;
    *guard = Some(file);
    Ok(())
}

/// Writes one line to the log file. Does nothing before `init_logger`.
pub fn log(level: LogLevel, message: &str) {
    if !enabled(level) {
        return;
    }
    let mut guard = match LOG_FILE.lock() {
        Ok(g) => g,
        Err(_) => {
            eprintln!("Failed to lock log file mutex");
            return;
        }
    };
    if let Some(file) = &mut *guard {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let log_entry = format!("[{}] {} - {}\n", timestamp, level.as_str(), message);
        if let Err(e) = file.write_all(log_entry.as_bytes()) {
            eprintln!("Failed to write to log file: {}", e);
            return;
        }
        if let Err(e) = file.flush() {
            eprintln!("Failed to flush log file: {}", e);
        }
    }
}

pub fn debug(message: &str) {
    log(LogLevel::Debug, message)
}

pub fn info(message: &str) {
    log(LogLevel::Info, message)
}

pub fn warn(message: &str) {
    log(LogLevel::Warning, message)
}

pub fn error(message: &str) {
    log(LogLevel::Error, message)
}

/// Records which page became visible, by 1-based position.
pub fn page_shown(index: usize, count: usize) {
    debug(&format!("Showing page {}/{}", index + 1, count))
}
