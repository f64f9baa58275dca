//! Command dispatch and handlers.

pub mod id;
pub mod session;

use std::env;
use std::path::PathBuf;

use tracing::info;

use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::context::ServiceContext;

/// Directory to record id generation into.
pub const RECORD_ENV: &str = "ROUTERBITS_RECORD";
/// Cassette file to replay ids from.
pub const REPLAY_ENV: &str = "ROUTERBITS_REPLAY";

/// Dispatch a parsed command to its handler.
///
/// When `ROUTERBITS_RECORD` is set to a directory, generated ids are
/// recorded to a cassette there. When `ROUTERBITS_REPLAY` names a cassette
/// file, ids are served from it instead of being generated.
///
/// # Errors
///
/// Returns an error string if the context cannot be built or the command fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let (ctx, session) = build_context(env::var(RECORD_ENV).ok(), env::var(REPLAY_ENV).ok())?;

    let result = dispatch_with_context(command, &ctx);

    // Finish recording after command completes (even on error)
    if let Some(session) = session {
        // Drop context first to release Arc references
        drop(ctx);
        finish_recording(session)?;
    }

    result
}

fn build_context(
    record: Option<String>,
    replay: Option<String>,
) -> Result<(ServiceContext, Option<RecordingSession>), String> {
    match (record, replay) {
        (Some(_), Some(_)) => Err(format!("{RECORD_ENV} and {REPLAY_ENV} cannot both be set")),
        (Some(dir), None) => {
            info!(dir = %dir, "recording id generation");
            let (ctx, session) = ServiceContext::recording_at(&PathBuf::from(dir))?;
            Ok((ctx, Some(session)))
        }
        (None, Some(path)) => {
            info!(cassette = %path, "replaying id generation");
            Ok((ServiceContext::replaying(&PathBuf::from(path))?, None))
        }
        (None, None) => Ok((ServiceContext::live(), None)),
    }
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::Session { script, format } => session::run(ctx, script.as_deref(), *format),
        Command::Id { count } => id::run(ctx, *count),
    }
}

/// Finish a recording session and print the output directory.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}
