//! Data source port supplying the initial task snapshot.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Task, User};

/// Everything a data source hands the store at session start: the task
/// collection, the technician profile, and metrics the source computes
/// on our behalf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Task collection; the store preserves this order.
    pub tasks: Vec<Task>,
    /// The signed-in technician.
    pub user: User,
    /// Fleet-wide average completion time in minutes, computed upstream.
    #[serde(default)]
    pub avg_completion_minutes: u32,
}

/// Failure loading a snapshot from a data source.
///
/// The core performs no retries; the caller decides whether to surface
/// the message or fall back. Not-found lookups inside the store are
/// `Option`s, never this error.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source could not be reached or read (timeout, connection
    /// failure, missing file).
    #[error("data source unavailable: {0}")]
    Transport(String),
    /// The source responded with data that does not match the expected
    /// entity shapes.
    #[error("data source returned malformed data: {0}")]
    Malformed(String),
}

/// Supplies the initial data snapshot.
///
/// The in-memory demo source and the YAML seed-file source implement
/// this; a production replacement talking to a real backend would too.
pub trait TaskSource {
    /// Loads the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Transport`] when the source cannot be
    /// reached and [`SourceError::Malformed`] when its payload does not
    /// parse into the expected shapes.
    fn load(&self) -> Result<Snapshot, SourceError>;
}
