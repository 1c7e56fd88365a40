//! Entity types shared by the store, filter engine, and CLI.
//!
//! Field names serialize in camelCase and timestamps as RFC 3339 strings,
//! matching the JSON shapes the mobile screens already consume. A real
//! backend replacing the mock source must produce these same shapes.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Scheduled but not yet started.
    Pending,
    /// A technician is actively working on it.
    InProgress,
    /// Work finished.
    Completed,
    /// Terminal; reachable only by administrative override.
    Cancelled,
}

impl TaskStatus {
    /// Wire spelling of the status (snake_case, as the UI and seed files use).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether the task still represents open work (neither completed nor
    /// cancelled). Drives the dashboard's upcoming-tasks summary.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Pending | Self::InProgress)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(format!(
                "unknown status '{other}' (expected pending, in_progress, completed, or cancelled)"
            )),
        }
    }
}

/// Urgency of a task, assigned at creation by the dispatching system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Routine work.
    Low,
    /// Standard scheduling.
    Medium,
    /// Should be handled ahead of medium/low work.
    High,
    /// Emergency call.
    Urgent,
}

impl TaskPriority {
    /// Wire spelling of the priority.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic position of a job site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Decimal degrees north.
    pub latitude: f64,
    /// Decimal degrees east.
    pub longitude: f64,
    /// Human-readable street address; searched by the filter engine.
    pub address: String,
}

/// One unit of field-service work.
///
/// Created externally (seed/import); mutated in scope only through the
/// store's status-change and add-note operations, each of which stamps
/// `updated_at`. Never deleted in scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique, immutable identifier.
    pub id: String,
    /// Short job title.
    pub title: String,
    /// Longer work description.
    pub description: String,
    /// Current lifecycle status.
    pub status: TaskStatus,
    /// Urgency.
    pub priority: TaskPriority,
    /// Job site.
    pub location: Location,
    /// Customer display name; searched by the filter engine.
    pub customer_name: String,
    /// Customer contact number.
    pub customer_phone: String,
    /// When the job is scheduled to take place.
    pub scheduled_date: DateTime<Utc>,
    /// Estimated duration in whole minutes.
    pub estimated_duration: u32,
    /// Free-text notes, append-only, insertion order preserved.
    pub notes: Vec<String>,
    /// Photo references attached to the job.
    pub photos: Vec<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last mutated; always `>= created_at`.
    pub updated_at: DateTime<Utc>,
}

/// The signed-in technician's profile. Read-only in this core; an
/// external collaborator owns updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Job role description.
    pub role: String,
    /// Optional avatar image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Lifetime completed-task count.
    pub tasks_completed: u32,
    /// Customer rating, 0.0–5.0.
    pub rating: f64,
}

/// Derived dashboard metrics; recomputed on every read, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Tasks scheduled for the current calendar day.
    pub today_tasks: usize,
    /// Of today's tasks, how many are completed.
    pub completed_today: usize,
    /// All tasks currently pending, regardless of day.
    pub pending_tasks: usize,
    /// Average completion time in minutes; supplied by the data source,
    /// not computed from the collection.
    pub avg_completion_time: u32,
}
