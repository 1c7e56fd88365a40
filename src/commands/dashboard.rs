//! `fieldops dashboard` command — today's stats and upcoming tasks.

use crate::filter;
use crate::service::TaskService;

/// Execute the `dashboard` command.
///
/// # Errors
///
/// Currently infallible; the signature matches the other handlers.
pub async fn run(service: &TaskService) -> Result<(), String> {
    let stats = service.get_dashboard_stats().await;

    println!("Today's tasks:     {}", stats.today_tasks);
    println!("Completed today:   {}", stats.completed_today);
    println!("Pending overall:   {}", stats.pending_tasks);
    println!("Avg completion:    {} min", stats.avg_completion_time);

    let tasks = service.get_tasks().await;
    let upcoming = filter::upcoming(&tasks);
    if upcoming.is_empty() {
        println!("\nNo upcoming tasks.");
    } else {
        println!("\nUpcoming:");
        for task in upcoming {
            println!("  [{}] {} for {}", task.status, task.title, task.customer_name);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::SystemClock;
    use crate::adapters::demo::DemoSource;
    use chrono::Utc;
    use std::time::Duration;

    #[tokio::test]
    async fn dashboard_renders_demo_data() {
        let source = DemoSource::new(Utc::now());
        let service = TaskService::open(&source, Box::new(SystemClock), Duration::ZERO).unwrap();
        assert!(run(&service).await.is_ok());
    }
}
