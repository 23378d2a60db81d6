//! Command dispatch and handlers.

pub mod is_regular;
pub mod output;
pub mod size;
pub mod status;

use crate::cassette::session::RecordingSession;
use crate::cli::{Cli, Command};
use crate::config::{Mode, Settings};
use crate::context::ServiceContext;

pub use output::OutputFormat;

/// Dispatch a parsed command to its handler.
///
/// `settings.mode` picks the metadata adapter: live, recording into a
/// cassette directory, or replaying from a cassette file.
///
/// # Errors
///
/// Returns an error string if the context cannot be built or the selected
/// command handler fails.
pub fn dispatch(cli: &Cli, settings: &Settings) -> Result<(), String> {
    let (ctx, session) = match &settings.mode {
        Mode::Live => (ServiceContext::live(), None),
        Mode::Record(dir) => {
            let (ctx, session) = ServiceContext::recording_at(dir)?;
            (ctx, Some(session))
        }
        Mode::Replay(file) => {
            tracing::debug!(cassette = %file.display(), "replaying metadata");
            (ServiceContext::replaying(file)?, None)
        }
    };

    let format = OutputFormat::from_json_flag(cli.json);
    let result = dispatch_with_context(&cli.command, &ctx, format);
    if let Err(err) = &result {
        tracing::debug!(%err, "command failed");
    }

    // Finish recording after command completes (even on error)
    if let Some(session) = session {
        // Drop context first to release Arc references
        drop(ctx);
        finish_recording(session)?;
    }

    result
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    format: OutputFormat,
) -> Result<(), String> {
    match command {
        Command::Status { path } => status::run(ctx, path, format),
        Command::IsRegular { path } => is_regular::run(ctx, path, format),
        Command::Size { path } => size::run(ctx, path, format),
    }
}

/// Finish a recording session and report the output directory.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}
