//! `fieldops note` command — append a note to a task.

use crate::service::TaskService;

/// Execute the `note` command.
///
/// Empty or whitespace-only text is rejected here, before it reaches
/// the store (which would silently no-op).
///
/// # Errors
///
/// Returns an error string when the text is blank or the id does not
/// match any task.
pub async fn run(service: &mut TaskService, id: &str, text: &str) -> Result<(), String> {
    if text.trim().is_empty() {
        return Err("Note text is empty.".to_string());
    }
    match service.add_note(id, text).await {
        Some(task) => {
            println!("Task {}: note added ({} total).", task.id, task.notes.len());
            Ok(())
        }
        None => Err(format!("No task with id '{id}'.")),
    }
}
