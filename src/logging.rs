use std::fs::{OpenOptions, create_dir_all};
use std::io::Write;
use std::path::PathBuf;
use chrono::Local;
use std::sync::Mutex;

use crate::error::{ErrorContext, LeadHubResult};

lazy_static::lazy_static! {
    static ref LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);
}

pub fn init_logging() -> LeadHubResult<PathBuf> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("leadhub")
        .join("logs");

    create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join(format!("leadhub-{}.log", Local::now().format("%Y%m%d-%H%M%S")));
    set_log_file(Some(log_file.clone()));

    log_info(&format!("Logging initialized to: {}", log_file.display()));

    Ok(log_file)
}

/// Point the logger at `path`, or disable it with `None`.
pub fn set_log_file(path: Option<PathBuf>) {
    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = path;
    }
}

pub fn log_error(message: &str) {
    log_with_level("ERROR", message);
}

pub fn log_warn(message: &str) {
    log_with_level("WARN", message);
}

pub fn log_info(message: &str) {
    log_with_level("INFO", message);
}

pub fn log_debug(message: &str) {
    log_with_level("DEBUG", message);
}

fn log_with_level(level: &str, message: &str) {
    let Ok(guard) = LOG_FILE.lock() else {
        return;
    };
    if let Some(log_file) = guard.as_ref() {
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
        {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            let _ = writeln!(file, "[{}] {} - {}", timestamp, level, message);
        }
    }

    // Never echo to stderr; the navigator owns the terminal.
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_leveled_lines_once_configured() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("test.log");

        set_log_file(Some(path.clone()));
        log_warn("stored session unreadable");
        set_log_file(None);
        log_info("dropped after disabling");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("WARN - stored session unreadable"));
        assert!(!content.contains("dropped after disabling"));
    }
}
