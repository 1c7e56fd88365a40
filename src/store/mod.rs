//! Task store — the authoritative in-memory task collection.
//!
//! One store instance is constructed per session from a data-source
//! snapshot and passed by reference to consumers; there is no ambient
//! global state. The store is the single writer: callers issue
//! mutations sequentially, and each mutation is all-or-nothing for the
//! task it touches. Anyone adding concurrent callers must serialize
//! mutations per task id.

pub mod transition;

use crate::model::{DashboardStats, Task, TaskStatus, User};
use crate::ports::clock::Clock;
use crate::ports::source::Snapshot;

pub use transition::{available_actions, next_status, TaskAction, TransitionError};

/// Holds the canonical task collection and technician profile.
///
/// Lookups that miss return `None` — an absent task is a valid result,
/// not a fault. The only error the store produces is
/// [`TransitionError`] on the validated [`apply`](TaskStore::apply)
/// path.
pub struct TaskStore {
    tasks: Vec<Task>,
    user: User,
    avg_completion_minutes: u32,
    clock: Box<dyn Clock>,
}

impl TaskStore {
    /// Creates a store from a data-source snapshot. Collection order is
    /// preserved as insertion order for the life of the store.
    #[must_use]
    pub fn new(snapshot: Snapshot, clock: Box<dyn Clock>) -> Self {
        Self {
            tasks: snapshot.tasks,
            user: snapshot.user,
            avg_completion_minutes: snapshot.avg_completion_minutes,
            clock,
        }
    }

    /// The full collection, insertion order preserved. Never fails.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Administrative override: sets the status unconditionally, with no
    /// transition validation, and stamps `updated_at`. Returns the
    /// updated task, or `None` (collection untouched) when the id is
    /// unknown.
    ///
    /// UI-initiated changes should go through [`apply`](Self::apply)
    /// instead, which enforces the transition table.
    pub fn set_status(&mut self, id: &str, status: TaskStatus) -> Option<Task> {
        let now = self.clock.now();
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.status = status;
        task.updated_at = now;
        Some(task.clone())
    }

    /// Applies a technician action, enforcing the transition table.
    ///
    /// `Ok(None)` means the id is unknown; the collection is untouched
    /// both then and on an illegal transition.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] when the action is not legal from the
    /// task's current status.
    pub fn apply(&mut self, id: &str, action: TaskAction) -> Result<Option<Task>, TransitionError> {
        let now = self.clock.now();
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        task.status = next_status(task.status, action)?;
        task.updated_at = now;
        Ok(Some(task.clone()))
    }

    /// Appends a note verbatim and stamps `updated_at`. Whitespace-only
    /// text is a no-op returning the unchanged task; the screens filter
    /// empty input before calling, but the store stays defensive.
    /// Returns `None` when the id is unknown.
    pub fn add_note(&mut self, id: &str, text: &str) -> Option<Task> {
        let now = self.clock.now();
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        if !text.trim().is_empty() {
            task.notes.push(text.to_string());
            task.updated_at = now;
        }
        Some(task.clone())
    }

    /// The signed-in technician's profile.
    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Dashboard metrics, recomputed from the live collection on every
    /// call. "Today" is the current calendar day in UTC per the clock
    /// port.
    #[must_use]
    pub fn dashboard_stats(&self) -> DashboardStats {
        let today = self.clock.now().date_naive();
        let scheduled_today =
            self.tasks.iter().filter(|t| t.scheduled_date.date_naive() == today);
        let (mut today_tasks, mut completed_today) = (0, 0);
        for task in scheduled_today {
            today_tasks += 1;
            if task.status == TaskStatus::Completed {
                completed_today += 1;
            }
        }
        DashboardStats {
            today_tasks,
            completed_today,
            pending_tasks: self.tasks.iter().filter(|t| t.status == TaskStatus::Pending).count(),
            avg_completion_time: self.avg_completion_minutes,
        }
    }
}
