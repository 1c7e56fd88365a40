//! `fieldops profile` command — the technician profile screen.

use crate::service::TaskService;

/// Execute the `profile` command.
///
/// # Errors
///
/// Currently infallible; the signature matches the other handlers.
pub async fn run(service: &TaskService) -> Result<(), String> {
    let user = service.get_user().await;

    println!("{} ({})", user.name, user.role);
    println!("Email: {}", user.email);
    println!("Tasks completed: {}", user.tasks_completed);
    println!("Rating: {:.1}", user.rating);
    Ok(())
}
