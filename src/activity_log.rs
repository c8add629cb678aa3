//! Debug activity logging.
//!
//! When `debug_logging` is enabled in the config, every mutating operation
//! performed through the CLI is appended as a JSONL line to
//! `activity.jsonl` in the data directory. This allows reconstructing what
//! happened to the list by inspecting exactly which operations ran.

use crate::config::AppConfig;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Log file name within the data directory.
const ACTIVITY_LOG_FILE: &str = "activity.jsonl";

/// Log an operation in a specific data directory, if debug logging is
/// enabled there.
///
/// Errors are silently ignored — logging must never break the operation
/// being logged.
pub fn log_operation_in(operation: &str, detail: &str, data_dir: &Path) {
    // Load config — if it fails, skip logging
    let Ok(Some(config)) = AppConfig::load_from(data_dir) else {
        return;
    };

    if !config.debug_logging {
        return;
    }

    write_entry(operation, detail, data_dir);
}

/// Write the log entry to the activity file.
fn write_entry(operation: &str, detail: &str, data_dir: &Path) {
    if std::fs::create_dir_all(data_dir).is_err() {
        return;
    }

    let log_path = data_dir.join(ACTIVITY_LOG_FILE);

    let entry = serde_json::json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "operation": operation,
        "detail": detail,
    });

    let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&log_path) else {
        return;
    };

    let _ = writeln!(file, "{entry}");
}
