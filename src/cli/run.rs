//! Command execution for the CLI.
//!
//! This module handles running CLI commands and producing output. Commands
//! run against the data directory's store; every handler leaves state
//! unchanged when it reports an error.

use crate::activity_log;
use crate::cli::{Command, SettingsCommand};
use crate::config::{self, AppConfig};
use crate::paths;
use crate::settings::{FontSize, SettingsStore, Theme};
use crate::storage::SqliteKvStore;
use crate::tasks::{codec, TaskStore, Urgency};
use crate::traits::NoBiometrics;
use chrono::{Local, NaiveDate, NaiveTime};
use std::path::Path;

/// Date format accepted by `add --date`.
const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Time format accepted by `add --time`.
const INPUT_TIME_FORMAT: &str = "%H:%M";

/// Output from running the CLI, with separate stdout and stderr messages.
#[derive(Debug)]
pub struct CliOutput {
    /// Exit code for the process.
    pub exit_code: u8,
    /// Messages to print to stdout.
    pub stdout: Vec<String>,
    /// Messages to print to stderr.
    pub stderr: Vec<String>,
}

fn success(stdout: Vec<String>) -> CliOutput {
    CliOutput { exit_code: 0, stdout, stderr: vec![] }
}

fn failure(message: String) -> CliOutput {
    CliOutput { exit_code: 1, stdout: vec![], stderr: vec![message] }
}

/// Run a CLI command against the default data directory.
pub fn run(command: Command) -> CliOutput {
    let Some(config_dir) = paths::data_dir() else {
        return failure(format!("Error: {}", crate::error::Error::NoDataDir));
    };
    run_in(command, &config_dir)
}

/// Run a CLI command against a specific data directory.
pub fn run_in(command: Command, config_dir: &Path) -> CliOutput {
    let config = match config::ensure_config_in(config_dir) {
        Ok(config) => config,
        Err(e) => return failure(format!("Error loading config: {e}")),
    };

    let data_dir = config.resolved_data_dir(config_dir);
    let store = match SqliteKvStore::in_dir(&data_dir) {
        Ok(store) => store,
        Err(e) => return failure(format!("Error opening store: {e}")),
    };

    match command {
        Command::Add { title, urgency, date, time } => {
            run_add(&store, &config, config_dir, &title, urgency, date, time)
        }
        Command::List { completed, pending } => run_list(&store, completed, pending),
        Command::Done { index } => run_done(&store, config_dir, index),
        Command::Rm { index } => run_rm(&store, config_dir, index),
        Command::Clear { yes } => run_clear(&store, config_dir, yes),
        Command::Count => run_count(&store),
        Command::Settings(cmd) => run_settings(store, config_dir, cmd),
        Command::Version => success(vec![format!("taskdeck v{}", crate::VERSION)]),
    }
}

// === Task Commands ===

fn run_add(
    store: &SqliteKvStore,
    config: &AppConfig,
    config_dir: &Path,
    title: &str,
    urgency: Option<String>,
    date: Option<String>,
    time: Option<String>,
) -> CliOutput {
    let urgency = match urgency {
        None => config.default_urgency,
        Some(s) => match Urgency::from_str(&s) {
            Ok(u) => u,
            Err(e) => return failure(format!("Error: {e}")),
        },
    };

    let due_date = match date {
        None => Local::now().date_naive(),
        Some(s) => match NaiveDate::parse_from_str(&s, INPUT_DATE_FORMAT) {
            Ok(d) => d,
            Err(_) => return failure(format!("Error: invalid date '{s}' (expected YYYY-MM-DD)")),
        },
    };

    let due_time = match time {
        None => Local::now().time(),
        Some(s) => match NaiveTime::parse_from_str(&s, INPUT_TIME_FORMAT) {
            Ok(t) => t,
            Err(_) => return failure(format!("Error: invalid time '{s}' (expected HH:MM)")),
        },
    };

    let tasks = TaskStore::new(store.clone());
    match tasks.add_task(title, urgency, due_date, due_time) {
        Ok(task) => {
            let record = codec::encode(&task);
            activity_log::log_operation_in("add", &record, config_dir);
            success(vec![format!("Added: {record}")])
        }
        Err(e) => failure(format!("Error: {e}")),
    }
}

fn run_list(store: &SqliteKvStore, completed: bool, pending: bool) -> CliOutput {
    let tasks = TaskStore::new(store.clone());
    let entries = match tasks.tasks() {
        Ok(entries) => entries,
        Err(e) => return failure(format!("Error: {e}")),
    };

    // Filtered views keep full-list indices so `done`/`rm` addressing
    // stays valid.
    let lines: Vec<String> = entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| {
            if completed {
                entry.completed()
            } else if pending {
                !entry.completed()
            } else {
                true
            }
        })
        .map(|(index, entry)| format!("{index}. {entry}"))
        .collect();

    if lines.is_empty() {
        return success(vec!["No tasks.".to_string()]);
    }
    success(lines)
}

fn run_done(store: &SqliteKvStore, config_dir: &Path, index: usize) -> CliOutput {
    let tasks = TaskStore::new(store.clone());
    match tasks.complete_task(index) {
        Ok(true) => {
            activity_log::log_operation_in("done", &index.to_string(), config_dir);
            success(vec![format!("Completed task {index}.")])
        }
        Ok(false) => success(vec![format!("Task {index} is already complete.")]),
        Err(e) => failure(format!("Error: {e}")),
    }
}

fn run_rm(store: &SqliteKvStore, config_dir: &Path, index: usize) -> CliOutput {
    let tasks = TaskStore::new(store.clone());
    match tasks.delete_task(index) {
        Ok(removed) => {
            activity_log::log_operation_in("rm", &removed, config_dir);
            success(vec![format!("Deleted: {removed}")])
        }
        Err(e) => failure(format!("Error: {e}")),
    }
}

fn run_clear(store: &SqliteKvStore, config_dir: &Path, yes: bool) -> CliOutput {
    if !yes {
        return failure("Refusing to delete all tasks without --yes".to_string());
    }

    let tasks = TaskStore::new(store.clone());
    let count = tasks.count().unwrap_or(0);
    match tasks.clear_all() {
        Ok(()) => {
            activity_log::log_operation_in("clear", &count.to_string(), config_dir);
            success(vec![format!("Cleared {count} tasks.")])
        }
        Err(e) => failure(format!("Error: {e}")),
    }
}

fn run_count(store: &SqliteKvStore) -> CliOutput {
    let tasks = TaskStore::new(store.clone());
    match tasks.count() {
        Ok(count) => success(vec![format!("Total Tasks: {count}")]),
        Err(e) => failure(format!("Error: {e}")),
    }
}

// === Settings Commands ===

/// Parse an on/off switch argument.
fn parse_switch(state: &str) -> Option<bool> {
    match state.to_lowercase().as_str() {
        "on" | "true" => Some(true),
        "off" | "false" => Some(false),
        _ => None,
    }
}

fn run_settings(store: SqliteKvStore, config_dir: &Path, command: SettingsCommand) -> CliOutput {
    let settings = SettingsStore::new(store);

    let result = match command {
        SettingsCommand::Show => return run_settings_show(&settings),
        SettingsCommand::DarkMode { state } => match parse_switch(&state) {
            Some(enabled) => settings
                .set_dark_mode_enabled(enabled)
                .map(|()| format!("Dark mode {state}.")),
            None => return failure(format!("Error: expected 'on' or 'off', got '{state}'")),
        },
        SettingsCommand::Notifications { state } => match parse_switch(&state) {
            Some(enabled) => settings
                .set_notifications_enabled(enabled)
                .map(|()| format!("Notifications {state}.")),
            None => return failure(format!("Error: expected 'on' or 'off', got '{state}'")),
        },
        SettingsCommand::FontSize { size } => match size.to_lowercase().as_str() {
            "small" => settings.set_font_size(FontSize::Small),
            "medium" => settings.set_font_size(FontSize::Medium),
            "large" => settings.set_font_size(FontSize::Large),
            _ => {
                return failure(format!(
                    "Error: expected 'small', 'medium' or 'large', got '{size}'"
                ))
            }
        }
        .map(|()| format!("Font size set to {size}.")),
        SettingsCommand::Theme { theme } => match theme.to_lowercase().as_str() {
            "light" => settings.set_theme(Theme::Light),
            "dark" => settings.set_theme(Theme::Dark),
            "system" => settings.set_theme(Theme::System),
            _ => {
                return failure(format!(
                    "Error: expected 'light', 'dark' or 'system', got '{theme}'"
                ))
            }
        }
        .map(|()| format!("Theme set to {theme}.")),
        SettingsCommand::Biometrics { state } => match parse_switch(&state) {
            Some(enabled) => settings
                .set_biometric_enabled(&NoBiometrics, enabled)
                .map(|()| format!("Biometric lock {state}.")),
            None => return failure(format!("Error: expected 'on' or 'off', got '{state}'")),
        },
        SettingsCommand::ClearData { yes } => {
            if !yes {
                return failure("Refusing to clear all data without --yes".to_string());
            }
            let out = settings.clear_all_data().map(|()| "Cleared all data.".to_string());
            if out.is_ok() {
                activity_log::log_operation_in("clear-data", "", config_dir);
            }
            out
        }
    };

    match result {
        Ok(message) => success(vec![message]),
        Err(e) => failure(format!("Error: {e}")),
    }
}

fn run_settings_show(settings: &SettingsStore<SqliteKvStore>) -> CliOutput {
    let show = || -> crate::error::Result<Vec<String>> {
        let on_off = |enabled: bool| if enabled { "on" } else { "off" };
        let font = settings.font_size()?;
        Ok(vec![
            format!("Dark mode: {}", on_off(settings.dark_mode_enabled()?)),
            format!("Notifications: {}", on_off(settings.notifications_enabled()?)),
            format!("Font size: {font} ({}pt)", font.points()),
            format!("Theme: {}", settings.theme()?),
            format!("Biometric lock: {}", on_off(settings.biometric_enabled()?)),
        ])
    };

    match show() {
        Ok(lines) => success(lines),
        Err(e) => failure(format!("Error: {e}")),
    }
}
