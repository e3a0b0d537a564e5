//! Submission logging to disk.
//!
//! When enabled, accepted submissions are appended to daily log files named
//! `submissions_<date>.log` in the configured log directory (default:
//! `~/.local/share/crabform/logs/`). Diagnostic `tracing` events go to
//! `crabform.log` in the same directory; the terminal belongs to the TUI,
//! so nothing ever logs to stdout.

use crate::config::LoggingConfig;
use crate::form::{FieldId, FormValues};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

/// Route `tracing` output to a file in the log directory. No-op when logging
/// is disabled.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }
    let log_dir = expand_log_dir(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let path = log_dir.join("crabform.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .init();
    Ok(())
}

// Expand ~ in log_dir
fn expand_log_dir(log_dir: &str) -> PathBuf {
    if let Some(rest) = log_dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(log_dir)
}

/// Writes one line per accepted submission to a daily log file.
///
/// File handles are cached for the lifetime of the logger to avoid repeated
/// opens. Falls back to `/dev/null` if a log file cannot be created.
pub struct SubmissionLogger {
    enabled: bool,
    log_dir: String,
    timestamp_format: String,
    file_handles: HashMap<String, fs::File>,
}

impl SubmissionLogger {
    pub fn new(config: &LoggingConfig, timestamp_format: &str) -> Self {
        Self {
            enabled: config.enabled,
            log_dir: config.log_dir.clone(),
            timestamp_format: timestamp_format.to_string(),
            file_handles: HashMap::new(),
        }
    }

    /// Append the diagnostic record for one submission. No-op if logging is
    /// disabled.
    pub fn log_submission(&mut self, values: &FormValues) {
        if !self.enabled {
            return;
        }

        let timestamp = chrono::Local::now()
            .format(&self.timestamp_format)
            .to_string();
        let line = format_record(values, &timestamp);

        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        let filename = format!("submissions_{}.log", date);

        let log_dir = expand_log_dir(&self.log_dir);
        let filepath = log_dir.join(&filename);

        // Get or create file handle
        let handle = self.file_handles.entry(filename).or_insert_with(|| {
            let _ = fs::create_dir_all(&log_dir);
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&filepath)
                .unwrap_or_else(|_| {
                    // Fallback: a file that goes nowhere
                    OpenOptions::new()
                        .write(true)
                        .open(if cfg!(unix) { "/dev/null" } else { "NUL" })
                        .unwrap()
                })
        });

        let _ = writeln!(handle, "{}", line);
    }
}

/// One-line record of a submission. Newlines in the message are flattened so
/// each record stays on a single line.
fn format_record(values: &FormValues, timestamp: &str) -> String {
    let mut line = format!("[{}]", timestamp);
    for field in FieldId::ALL {
        let value = values.get(field).replace(['\r', '\n'], " ");
        line.push_str(&format!(" {}={:?}", field.key(), value));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record() {
        let values = FormValues {
            name: "Ann".into(),
            email: "ann@x.com".into(),
            message: "Hello".into(),
        };
        assert_eq!(
            format_record(&values, "2026-08-25 10:00:00"),
            r#"[2026-08-25 10:00:00] name="Ann" email="ann@x.com" message="Hello""#
        );
    }

    #[test]
    fn test_format_record_flattens_newlines() {
        let values = FormValues {
            name: "Ann".into(),
            email: "ann@x.com".into(),
            message: "line one\nline two".into(),
        };
        let line = format_record(&values, "ts");
        assert!(!line.contains('\n'));
        assert!(line.contains(r#"message="line one line two""#));
    }

    #[test]
    fn test_expand_log_dir_plain_path() {
        assert_eq!(expand_log_dir("/tmp/logs"), PathBuf::from("/tmp/logs"));
    }
}
