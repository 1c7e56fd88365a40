//! `fieldops show` command — the task-detail screen.

use crate::model::Task;
use crate::service::TaskService;
use crate::store::available_actions;

/// Execute the `show` command.
///
/// # Errors
///
/// Returns an error string when the id does not match any task or JSON
/// serialization fails.
pub async fn run(service: &TaskService, id: &str, json: bool) -> Result<(), String> {
    let Some(task) = service.get_task_by_id(id).await else {
        return Err(format!("No task with id '{id}'."));
    };

    if json {
        let out = serde_json::to_string_pretty(&task)
            .map_err(|e| format!("Failed to serialize task: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    print_task(&task);
    Ok(())
}

fn print_task(task: &Task) {
    println!("Task: {}", task.id);
    println!("Title: {}", task.title);
    println!("Status: {}", task.status);
    println!("Priority: {}", task.priority);
    println!("Customer: {} {}", task.customer_name, task.customer_phone);
    println!("Address: {}", task.location.address);
    println!("Scheduled: {}", task.scheduled_date.to_rfc3339());
    println!("Estimated: {} min", task.estimated_duration);
    println!("\n{}", task.description);

    if !task.notes.is_empty() {
        println!("\nNotes:");
        for (i, note) in task.notes.iter().enumerate() {
            println!("  {}. {note}", i + 1);
        }
    }
    if !task.photos.is_empty() {
        println!("\nPhotos: {}", task.photos.len());
    }

    let actions = available_actions(task.status);
    if actions.is_empty() {
        println!("\nNo actions available.");
    } else {
        println!("\nActions:");
        for action in actions {
            println!("  {} ({})", action, action.label());
        }
    }
}
