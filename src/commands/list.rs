//! `fieldops tasks` command — the task-list screen.

use crate::filter::{self, TaskFilter};
use crate::service::TaskService;

/// Execute the `tasks` command.
///
/// Applies the status filter and free-text search the same way the
/// task-list screen does, then prints a table (or JSON with `--json`).
///
/// # Errors
///
/// Returns an error string if the status filter does not parse or JSON
/// serialization fails.
pub async fn run(
    service: &TaskService,
    status: &str,
    search: Option<&str>,
    json: bool,
) -> Result<(), String> {
    let filter = TaskFilter {
        status: status.parse()?,
        query: search.unwrap_or_default().to_string(),
    };
    let tasks = service.get_tasks().await;
    let visible = filter::apply(&tasks, &filter);

    if json {
        let out = serde_json::to_string_pretty(&visible)
            .map_err(|e| format!("Failed to serialize tasks: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    if visible.is_empty() {
        println!("No tasks match.");
        return Ok(());
    }

    // Collect rows for column-width calculation.
    let rows: Vec<(String, String, String, String, String)> = visible
        .iter()
        .map(|t| {
            (
                t.id.clone(),
                t.status.to_string(),
                t.priority.to_string(),
                t.title.clone(),
                t.customer_name.clone(),
            )
        })
        .collect();

    let id_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(2).max(2);
    let status_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(6).max(6);
    let priority_width = rows.iter().map(|r| r.2.len()).max().unwrap_or(8).max(8);
    let title_width = rows.iter().map(|r| r.3.len()).max().unwrap_or(5).max(5);
    let customer_width = rows.iter().map(|r| r.4.len()).max().unwrap_or(8).max(8);

    println!(
        "{:<id_width$}  {:<status_width$}  {:<priority_width$}  {:<title_width$}  {:<customer_width$}",
        "ID", "STATUS", "PRIORITY", "TITLE", "CUSTOMER",
    );
    println!(
        "{:-<id_width$}  {:-<status_width$}  {:-<priority_width$}  {:-<title_width$}  {:-<customer_width$}",
        "", "", "", "", "",
    );
    for (id, status, priority, title, customer) in &rows {
        println!(
            "{id:<id_width$}  {status:<status_width$}  {priority:<priority_width$}  {title:<title_width$}  {customer:<customer_width$}",
        );
    }

    println!("\n{} task(s).", rows.len());
    Ok(())
}
