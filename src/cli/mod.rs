//! Command-line interface for taskdeck.
//!
//! The CLI is a thin view layer: every subcommand maps onto one store
//! operation, errors are surfaced as dismissable messages on stderr, and
//! destructive commands refuse to run without an explicit `--yes`.

mod run;

pub use run::{run, run_in, CliOutput};

use clap::{Parser, Subcommand};

/// Taskdeck CLI - a to-do list with urgency and deadline tracking.
#[derive(Parser, Debug)]
#[command(name = "taskdeck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new task to the end of the list.
    ///
    /// The due date and time default to today and now, mirroring the
    /// pickers a graphical front-end would show.
    Add {
        /// Title for the task (required, must not be blank)
        title: String,

        /// Urgency: low, medium, or high (default from config)
        #[arg(short, long)]
        urgency: Option<String>,

        /// Due date as YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Due time as HH:MM, 24-hour (default: now)
        #[arg(short, long)]
        time: Option<String>,
    },

    /// List tasks with their indices.
    ///
    /// Indices are positions in the full list and are what `done` and `rm`
    /// take, so they stay valid when a filter is active.
    List {
        /// Only show completed tasks
        #[arg(long, conflicts_with = "pending")]
        completed: bool,

        /// Only show tasks not yet completed
        #[arg(long)]
        pending: bool,
    },

    /// Mark the task at the given index complete.
    ///
    /// Completing an already-complete task is a no-op.
    Done {
        /// Position of the task in the list (see `list`)
        index: usize,
    },

    /// Delete the task at the given index.
    Rm {
        /// Position of the task in the list (see `list`)
        index: usize,
    },

    /// Delete every task.
    Clear {
        /// Confirm the destructive action
        #[arg(long)]
        yes: bool,
    },

    /// Show the total number of tasks.
    Count,

    /// App settings - read and change the independent flags.
    #[command(subcommand)]
    Settings(SettingsCommand),

    /// Show version information.
    Version,
}

/// Settings commands.
#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Show all settings.
    Show,

    /// Turn dark mode on or off.
    DarkMode {
        /// "on" or "off"
        state: String,
    },

    /// Turn notifications on or off.
    Notifications {
        /// "on" or "off"
        state: String,
    },

    /// Select the font size.
    FontSize {
        /// "small", "medium", or "large"
        size: String,
    },

    /// Select the app theme.
    Theme {
        /// "light", "dark", or "system"
        theme: String,
    },

    /// Turn the biometric lock on or off.
    ///
    /// The capability probe is consulted first; without biometric hardware
    /// the request is rejected and the flag stays off.
    Biometrics {
        /// "on" or "off"
        state: String,
    },

    /// Wipe all app data: every task and every setting.
    ClearData {
        /// Confirm the destructive action
        #[arg(long)]
        yes: bool,
    },
}
