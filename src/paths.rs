//! Path utilities for determining data storage locations.
//!
//! All persistent state lives in a single data directory, `~/.taskdeck/` by
//! default: the task database, the config file, and the activity log.

use std::path::PathBuf;

/// The base directory name for taskdeck data.
const DATA_DIR_NAME: &str = ".taskdeck";

/// The database filename.
pub const DATABASE_FILENAME: &str = "taskdeck.sqlite3";

/// The config filename within the data directory.
pub const CONFIG_FILENAME: &str = "config.yaml";

/// Get the base data directory for taskdeck.
///
/// Returns `~/.taskdeck/` or `None` if the home directory cannot be
/// determined.
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DATA_DIR_NAME))
}
