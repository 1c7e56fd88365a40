//! Status transition table.
//!
//! The four actions correspond to the buttons the task-detail screen
//! offers. `cancelled` is terminal: no action leads out of it, and none
//! produces it — only the store's administrative override can set it.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::TaskStatus;

/// A technician-initiated status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    /// `pending -> in_progress`.
    Start,
    /// `in_progress -> completed`.
    Complete,
    /// `in_progress -> pending`.
    Hold,
    /// `completed -> in_progress`.
    Reopen,
}

impl TaskAction {
    /// CLI spelling of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Complete => "complete",
            Self::Hold => "hold",
            Self::Reopen => "reopen",
        }
    }

    /// Button label the detail screen shows for this action.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Start => "Start Task",
            Self::Complete => "Complete Task",
            Self::Hold => "Put on Hold",
            Self::Reopen => "Reopen Task",
        }
    }
}

impl fmt::Display for TaskAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "complete" => Ok(Self::Complete),
            "hold" => Ok(Self::Hold),
            "reopen" => Ok(Self::Reopen),
            other => Err(format!(
                "unknown action '{other}' (expected start, complete, hold, or reopen)"
            )),
        }
    }
}

/// A requested action that the transition table does not allow from the
/// task's current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot {action} a task that is {from}")]
pub struct TransitionError {
    /// The task's status when the action was requested.
    pub from: TaskStatus,
    /// The action that was refused.
    pub action: TaskAction,
}

/// Resolves an action against the transition table.
///
/// # Errors
///
/// Returns [`TransitionError`] when the table has no entry for
/// `(from, action)`.
pub fn next_status(from: TaskStatus, action: TaskAction) -> Result<TaskStatus, TransitionError> {
    match (from, action) {
        (TaskStatus::Pending, TaskAction::Start) => Ok(TaskStatus::InProgress),
        (TaskStatus::InProgress, TaskAction::Complete) => Ok(TaskStatus::Completed),
        (TaskStatus::InProgress, TaskAction::Hold) => Ok(TaskStatus::Pending),
        (TaskStatus::Completed, TaskAction::Reopen) => Ok(TaskStatus::InProgress),
        _ => Err(TransitionError { from, action }),
    }
}

/// Actions a UI may legally offer for a task in the given status.
#[must_use]
pub const fn available_actions(status: TaskStatus) -> &'static [TaskAction] {
    match status {
        TaskStatus::Pending => &[TaskAction::Start],
        TaskStatus::InProgress => &[TaskAction::Complete, TaskAction::Hold],
        TaskStatus::Completed => &[TaskAction::Reopen],
        TaskStatus::Cancelled => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_transitions_follow_the_table() {
        assert_eq!(
            next_status(TaskStatus::Pending, TaskAction::Start).unwrap(),
            TaskStatus::InProgress
        );
        assert_eq!(
            next_status(TaskStatus::InProgress, TaskAction::Complete).unwrap(),
            TaskStatus::Completed
        );
        assert_eq!(
            next_status(TaskStatus::InProgress, TaskAction::Hold).unwrap(),
            TaskStatus::Pending
        );
        assert_eq!(
            next_status(TaskStatus::Completed, TaskAction::Reopen).unwrap(),
            TaskStatus::InProgress
        );
    }

    #[test]
    fn cancelled_is_terminal() {
        for action in [TaskAction::Start, TaskAction::Complete, TaskAction::Hold, TaskAction::Reopen]
        {
            let err = next_status(TaskStatus::Cancelled, action).unwrap_err();
            assert_eq!(err.from, TaskStatus::Cancelled);
            assert_eq!(err.action, action);
        }
        assert!(available_actions(TaskStatus::Cancelled).is_empty());
    }

    #[test]
    fn no_action_produces_cancelled() {
        for from in [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Completed] {
            for action in
                [TaskAction::Start, TaskAction::Complete, TaskAction::Hold, TaskAction::Reopen]
            {
                if let Ok(to) = next_status(from, action) {
                    assert_ne!(to, TaskStatus::Cancelled);
                }
            }
        }
    }

    #[test]
    fn available_actions_match_the_table() {
        for status in [
            TaskStatus::Pending,
            TaskStatus::InProgress,
            TaskStatus::Completed,
            TaskStatus::Cancelled,
        ] {
            for action in available_actions(status) {
                assert!(next_status(status, *action).is_ok());
            }
        }
    }

    #[test]
    fn illegal_transition_error_is_readable() {
        let err = next_status(TaskStatus::Pending, TaskAction::Complete).unwrap_err();
        assert_eq!(err.to_string(), "cannot complete a task that is pending");
    }

    #[test]
    fn action_parses_from_cli_spelling() {
        assert_eq!("start".parse::<TaskAction>().unwrap(), TaskAction::Start);
        assert!("cancel".parse::<TaskAction>().is_err());
    }
}
