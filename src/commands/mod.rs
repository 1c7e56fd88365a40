//! Command dispatch and handlers.

pub mod action;
pub mod dashboard;
pub mod list;
pub mod note;
pub mod profile;
pub mod show;

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Command;
use crate::context::ServiceContext;
use crate::service::TaskService;
use crate::store::TaskAction;

/// Dispatch a parsed command to its handler.
///
/// Environment (a `.env` file is honored): `FIELDOPS_SEED` points the
/// session at a YAML seed file instead of the built-in demo data;
/// `FIELDOPS_LATENCY_MS` simulates backend latency per operation.
///
/// # Errors
///
/// Returns an error string if configuration, snapshot loading, or the
/// selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let _ = dotenvy::dotenv();

    let ctx = match env::var("FIELDOPS_SEED") {
        Ok(path) => ServiceContext::with_seed_file(&PathBuf::from(path)),
        Err(_) => ServiceContext::live(),
    };
    let latency = latency_from_env()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(|e| format!("Failed to start runtime: {e}"))?;
    runtime.block_on(dispatch_with_context(command, ctx, latency))
}

/// Dispatch a command with the given service context.
async fn dispatch_with_context(
    command: &Command,
    ctx: ServiceContext,
    latency: Duration,
) -> Result<(), String> {
    let ServiceContext { clock, source } = ctx;
    let mut service =
        TaskService::open(source.as_ref(), clock, latency).map_err(|e| e.to_string())?;

    match command {
        Command::Tasks { status, search, json } => {
            list::run(&service, status, search.as_deref(), *json).await
        }
        Command::Show { id, json } => show::run(&service, id, *json).await,
        Command::Start { id } => action::run(&mut service, id, TaskAction::Start).await,
        Command::Complete { id } => action::run(&mut service, id, TaskAction::Complete).await,
        Command::Hold { id } => action::run(&mut service, id, TaskAction::Hold).await,
        Command::Reopen { id } => action::run(&mut service, id, TaskAction::Reopen).await,
        Command::SetStatus { id, status } => action::run_override(&mut service, id, status).await,
        Command::Note { id, text } => note::run(&mut service, id, &text.join(" ")).await,
        Command::Dashboard => dashboard::run(&service).await,
        Command::Profile => profile::run(&service).await,
    }
}

fn latency_from_env() -> Result<Duration, String> {
    match env::var("FIELDOPS_LATENCY_MS") {
        Ok(raw) => raw
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| format!("FIELDOPS_LATENCY_MS must be an integer, got '{raw}'")),
        Err(_) => Ok(Duration::ZERO),
    }
}
