//! Filter/search engine for the task list.
//!
//! Pure functions of the collection and the screen's transient filter
//! state — deterministic, stable (input order preserved), and
//! recomputed whenever the store, filter, or query changes.

use std::str::FromStr;

use crate::model::{Task, TaskStatus};

/// How many entries the dashboard's upcoming-tasks card shows.
const UPCOMING_LIMIT: usize = 3;

/// The status constraint a screen has selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// No constraint.
    #[default]
    All,
    /// Only tasks in this status.
    Only(TaskStatus),
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// Transient filter state owned by the task-list screen; passed in on
/// every change, never persisted.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Active status constraint.
    pub status: StatusFilter,
    /// Free-text query; whitespace-only is equivalent to no query.
    pub query: String,
}

/// Derives the visible subset of `tasks` under `filter`.
///
/// The status step keeps tasks matching the constraint; the query step
/// then case-insensitively matches the trimmed query as a substring of
/// the title, customer name, or location address (any one suffices).
/// Output order is input order.
#[must_use]
pub fn apply<'a>(tasks: &'a [Task], filter: &TaskFilter) -> Vec<&'a Task> {
    let query = filter.query.trim().to_lowercase();
    tasks
        .iter()
        .filter(|task| match filter.status {
            StatusFilter::All => true,
            StatusFilter::Only(status) => task.status == status,
        })
        .filter(|task| query.is_empty() || matches_query(task, &query))
        .collect()
}

fn matches_query(task: &Task, query: &str) -> bool {
    task.title.to_lowercase().contains(query)
        || task.customer_name.to_lowercase().contains(query)
        || task.location.address.to_lowercase().contains(query)
}

/// The dashboard's upcoming-tasks summary: open tasks (neither completed
/// nor cancelled), input order, at most three entries. A fixed
/// specialization, not user-configurable.
#[must_use]
pub fn upcoming(tasks: &[Task]) -> Vec<&Task> {
    tasks.iter().filter(|t| t.status.is_open()).take(UPCOMING_LIMIT).collect()
}
