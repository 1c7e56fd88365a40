//! CLI argument definitions.
//!
//! Each subcommand stands in for one screen or screen action of the
//! mobile app: `tasks` is the task list, `show` the detail view,
//! `start`/`complete`/`hold`/`reopen` its action buttons, `dashboard`
//! and `profile` the remaining screens.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `fieldops`.
#[derive(Debug, Parser)]
#[command(name = "fieldops", version, about = "Field-service task management")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List tasks, optionally narrowed by status and free-text search.
    Tasks {
        /// Status filter: all, pending, in_progress, completed, or cancelled.
        #[arg(long, default_value = "all")]
        status: String,
        /// Case-insensitive search over title, customer name, and address.
        #[arg(long)]
        search: Option<String>,
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Show one task in full, including notes and available actions.
    Show {
        /// Task identifier.
        id: String,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Start a pending task.
    Start {
        /// Task identifier.
        id: String,
    },
    /// Complete an in-progress task.
    Complete {
        /// Task identifier.
        id: String,
    },
    /// Put an in-progress task back on hold.
    Hold {
        /// Task identifier.
        id: String,
    },
    /// Reopen a completed task.
    Reopen {
        /// Task identifier.
        id: String,
    },
    /// Administrative override: set any status with no transition checks.
    SetStatus {
        /// Task identifier.
        id: String,
        /// Target status: pending, in_progress, completed, or cancelled.
        status: String,
    },
    /// Append a free-text note to a task.
    Note {
        /// Task identifier.
        id: String,
        /// Note text; multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Show today's stats and upcoming tasks.
    Dashboard,
    /// Show the signed-in technician's profile.
    Profile,
}
