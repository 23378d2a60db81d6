//! Stat-backed file metadata probe.
//!
//! The library answers three questions about a path with one stat call each:
//! its raw status ([`probe::status`]), whether it is a regular file
//! ([`probe::is_regular_file_at`]) and the size of a regular file
//! ([`probe::file_size`]). Failures carry the OS error number as a
//! [`ProbeError`].

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod ports;
pub mod probe;

use clap::Parser;

pub use error::{ErrorCategory, ProbeError};
pub use probe::{
    file_size, is_regular_file, is_regular_file_at, status, FileMetadataProbe, FileType,
    MetadataRecord,
};

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing, configuration or command
/// execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    let settings = config::Settings::from_env()?;
    logging::init(settings.log_filter.as_deref());
    commands::dispatch(&cli, &settings)
}
