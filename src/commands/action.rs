//! `fieldops start|complete|hold|reopen|set-status` commands — the
//! detail screen's action buttons plus the administrative override.

use crate::model::TaskStatus;
use crate::service::TaskService;
use crate::store::TaskAction;

/// Execute one of the validated action commands.
///
/// # Errors
///
/// Returns an error string when the id does not match any task or the
/// transition table refuses the action.
pub async fn run(service: &mut TaskService, id: &str, action: TaskAction) -> Result<(), String> {
    match service.apply_action(id, action).await {
        Ok(Some(task)) => {
            println!("Task {}: {} -> {}", task.id, action.label(), task.status);
            Ok(())
        }
        Ok(None) => Err(format!("No task with id '{id}'.")),
        Err(e) => Err(format!("Cannot {action} task {id}: {e}.")),
    }
}

/// Execute the `set-status` override: any status, no transition checks.
///
/// # Errors
///
/// Returns an error string when the status does not parse or the id
/// does not match any task.
pub async fn run_override(service: &mut TaskService, id: &str, status: &str) -> Result<(), String> {
    let status: TaskStatus = status.parse()?;
    match service.update_task_status(id, status).await {
        Some(task) => {
            println!("Task {} status set to {} (override).", task.id, task.status);
            Ok(())
        }
        None => Err(format!("No task with id '{id}'.")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::SystemClock;
    use crate::adapters::demo::DemoSource;
    use chrono::Utc;
    use std::time::Duration;

    fn demo_service() -> TaskService {
        let source = DemoSource::new(Utc::now());
        TaskService::open(&source, Box::new(SystemClock), Duration::ZERO).unwrap()
    }

    #[tokio::test]
    async fn starts_a_pending_task() {
        let mut service = demo_service();
        assert!(run(&mut service, "1", TaskAction::Start).await.is_ok());
        let task = service.get_task_by_id("1").await.unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
    }

    #[tokio::test]
    async fn illegal_transition_is_reported() {
        let mut service = demo_service();
        // Task "1" is pending; it cannot be completed directly.
        let err = run(&mut service, "1", TaskAction::Complete).await.unwrap_err();
        assert!(err.contains("pending"));
    }

    #[tokio::test]
    async fn unknown_id_is_reported() {
        let mut service = demo_service();
        let err = run(&mut service, "999", TaskAction::Start).await.unwrap_err();
        assert!(err.contains("999"));
    }

    #[tokio::test]
    async fn override_accepts_any_status() {
        let mut service = demo_service();
        assert!(run_override(&mut service, "1", "cancelled").await.is_ok());
        let task = service.get_task_by_id("1").await.unwrap();
        assert_eq!(task.status, TaskStatus::Cancelled);
    }

    #[tokio::test]
    async fn override_rejects_unknown_status_spelling() {
        let mut service = demo_service();
        assert!(run_override(&mut service, "1", "done").await.is_err());
    }
}
