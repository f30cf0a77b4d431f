//! Command dispatch and handlers.
//!
//! Handlers return the text to print so they can be exercised without
//! capturing stdout.

pub mod align;
pub mod labels;
pub mod reconcile;
pub mod reset;

use std::env;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::Command;
use crate::config::{Settings, RECORD_VAR};
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// When `MENUSORT_RECORD` is set to a file path, all port interactions are
/// recorded to that cassette file.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails or the
/// recording cannot be saved.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let (ctx, session) = match env::var(RECORD_VAR) {
        Ok(path) if !path.is_empty() => {
            let (ctx, session) = ServiceContext::recording_at(Path::new(&path));
            (ctx, Some(session))
        }
        _ => (ServiceContext::live(), None),
    };

    let result = dispatch_with_context(command, &ctx, Settings::from_env());
    if let Ok(output) = &result {
        println!("{output}");
    }

    // Recording adapters hold the recorder; release them before finishing.
    drop(ctx);
    match session {
        Some(session) => conclude(result, session.finish()),
        None => result.map(drop),
    }
}

/// Combines a command's result with the outcome of writing its cassette.
///
/// The command's own error always comes first; a failed recording is reported
/// after it, or on its own when the command succeeded.
fn conclude(
    result: Result<String, String>,
    recording: Result<PathBuf, String>,
) -> Result<(), String> {
    match (result, recording) {
        (Ok(_), Ok(path)) => {
            eprintln!("Recording saved to: {}", path.display());
            Ok(())
        }
        (Err(e), Ok(path)) => {
            eprintln!("Recording saved to: {}", path.display());
            Err(e)
        }
        (Ok(_), Err(rec)) => Err(format!("Recording not saved: {rec}")),
        (Err(e), Err(rec)) => Err(format!("{e}\nRecording not saved: {rec}")),
    }
}

/// Run a command with the given context and settings, returning its output.
///
/// # Errors
///
/// Returns an error string if the handler fails.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    settings: Settings,
) -> Result<String, String> {
    let with = |resources: &Option<PathBuf>| settings.clone().with_resources(resources.clone());
    match command {
        Command::Labels { resources } => labels::run(ctx, &with(resources)),
        Command::Align { observed, resources } => align::run(ctx, &with(resources), observed),
        Command::Reconcile { observed, resources, dry_run, report } => {
            let options = reconcile::Options { dry_run: *dry_run, report: report.as_deref() };
            let settings = with(resources);
            info!(resources = %settings.resources.display(), dry_run, "reconciling menu");
            reconcile::run(ctx, &settings, observed, &options)
        }
        Command::Reset { resources } => reset::run(ctx, &with(resources)),
    }
}
