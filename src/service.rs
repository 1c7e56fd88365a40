//! Async facade over the task store.
//!
//! Mirrors the boundary surface the screens call. Each operation first
//! awaits the configured simulated latency, modelling a backend round
//! trip: the caller suspends cooperatively without blocking other
//! pending work. Operations issued sequentially by the single UI actor
//! complete in order; there are no cancellation semantics in scope, so
//! a production replacement must add its own (and discard superseded
//! responses rather than applying them).

use std::time::Duration;

use crate::model::{DashboardStats, Task, TaskStatus, User};
use crate::ports::clock::Clock;
use crate::ports::source::{SourceError, TaskSource};
use crate::store::{TaskAction, TaskStore, TransitionError};

/// Owns a [`TaskStore`] and serves the screens' requests.
pub struct TaskService {
    store: TaskStore,
    latency: Duration,
}

impl TaskService {
    /// Loads the snapshot from `source` and builds the service.
    ///
    /// `latency` is awaited before every operation; pass
    /// [`Duration::ZERO`] to disable the simulation.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the snapshot cannot be loaded.
    pub fn open(
        source: &dyn TaskSource,
        clock: Box<dyn Clock>,
        latency: Duration,
    ) -> Result<Self, SourceError> {
        let snapshot = source.load()?;
        Ok(Self { store: TaskStore::new(snapshot, clock), latency })
    }

    async fn simulate_round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// The full task collection, insertion order preserved.
    pub async fn get_tasks(&self) -> Vec<Task> {
        self.simulate_round_trip().await;
        self.store.tasks().to_vec()
    }

    /// Looks up a task by id; `None` means not found.
    pub async fn get_task_by_id(&self, id: &str) -> Option<Task> {
        self.simulate_round_trip().await;
        self.store.task(id).cloned()
    }

    /// Administrative status override (no transition validation).
    pub async fn update_task_status(&mut self, id: &str, status: TaskStatus) -> Option<Task> {
        self.simulate_round_trip().await;
        self.store.set_status(id, status)
    }

    /// Validated technician action.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] when the action is illegal from the
    /// task's current status.
    pub async fn apply_action(
        &mut self,
        id: &str,
        action: TaskAction,
    ) -> Result<Option<Task>, TransitionError> {
        self.simulate_round_trip().await;
        self.store.apply(id, action)
    }

    /// Appends a note; whitespace-only text is a no-op.
    pub async fn add_note(&mut self, id: &str, text: &str) -> Option<Task> {
        self.simulate_round_trip().await;
        self.store.add_note(id, text)
    }

    /// The signed-in technician's profile.
    pub async fn get_user(&self) -> User {
        self.simulate_round_trip().await;
        self.store.user().clone()
    }

    /// Dashboard metrics as of this call.
    pub async fn get_dashboard_stats(&self) -> DashboardStats {
        self.simulate_round_trip().await;
        self.store.dashboard_stats()
    }

    /// Direct access to the underlying store, for callers that want the
    /// synchronous core (the filter engine operates on `store().tasks()`).
    #[must_use]
    pub fn store(&self) -> &TaskStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::SystemClock;
    use crate::adapters::demo::DemoSource;
    use chrono::Utc;

    fn demo_service(latency: Duration) -> TaskService {
        let source = DemoSource::new(Utc::now());
        TaskService::open(&source, Box::new(SystemClock), latency).unwrap()
    }

    #[tokio::test]
    async fn surfaces_the_store_operations() {
        let mut service = demo_service(Duration::ZERO);

        assert_eq!(service.get_tasks().await.len(), 5);
        assert!(service.get_task_by_id("999").await.is_none());

        let task = service.apply_action("1", TaskAction::Start).await.unwrap().unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);

        let task = service.add_note("1", "On my way").await.unwrap();
        assert_eq!(task.notes.last().map(String::as_str), Some("On my way"));

        let user = service.get_user().await;
        assert_eq!(user.id, "tech-001");
        assert_eq!(service.get_dashboard_stats().await.avg_completion_time, 67);
    }

    #[tokio::test]
    async fn sequential_operations_observe_prior_mutations() {
        let mut service = demo_service(Duration::ZERO);
        service.update_task_status("3", TaskStatus::Cancelled).await.unwrap();
        let task = service.get_task_by_id("3").await.unwrap();
        assert_eq!(task.status, TaskStatus::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn operations_wait_out_the_simulated_latency() {
        let service = demo_service(Duration::from_millis(300));
        let started = tokio::time::Instant::now();
        let _ = service.get_tasks().await;
        assert!(started.elapsed() >= Duration::from_millis(300));
    }
}
