//! `statprobe size` command.

use std::path::Path;

use serde::Serialize;

use super::output::{self, OutputFormat, Report};
use crate::context::ServiceContext;
use crate::probe::FileMetadataProbe;

/// Size of a regular file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeReport {
    /// The path as given.
    pub path: String,
    /// Size in bytes.
    pub size: u64,
}

impl Report for SizeReport {
    fn text(&self) -> String {
        self.size.to_string()
    }
}

/// Execute the `size` command.
///
/// # Errors
///
/// Returns an error string if the stat call fails or the path is not a
/// regular file.
pub fn run(ctx: &ServiceContext, path: &Path, format: OutputFormat) -> Result<(), String> {
    let probe = FileMetadataProbe::from_context(ctx);
    let outcome =
        probe.file_size(path).map(|size| SizeReport { path: path.display().to_string(), size });
    output::finish(format, path, outcome)
}
