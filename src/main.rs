//! Binary entrypoint for the `statprobe` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Record/replay wiring comes from STATPROBE_RECORD / STATPROBE_REPLAY.
    match statprobe::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
