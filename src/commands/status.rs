//! `statprobe status` command.

use std::path::Path;

use serde::Serialize;

use super::output::{self, OutputFormat, Report};
use crate::context::ServiceContext;
use crate::error::ProbeError;
use crate::probe::{FileMetadataProbe, FileType};

/// Everything `status` reports about one path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    /// The path as given.
    pub path: String,
    /// Decoded file type.
    #[serde(rename = "type")]
    pub file_type: FileType,
    /// Whether the entry is a regular file.
    pub regular: bool,
    /// Raw mode bits.
    pub mode: u32,
    /// Permission bits.
    pub permissions: u32,
    /// Size in bytes as reported by stat.
    pub size: u64,
}

impl Report for StatusReport {
    fn text(&self) -> String {
        format!(
            "path:        {}\ntype:        {}\nmode:        {:07o}\npermissions: {:04o}\nsize:        {}",
            self.path, self.file_type, self.mode, self.permissions, self.size
        )
    }
}

/// Stats `path` and builds the report.
///
/// # Errors
///
/// Returns the OS error from the stat call.
pub fn report(probe: &FileMetadataProbe<'_>, path: &Path) -> Result<StatusReport, ProbeError> {
    let record = probe.status(path)?;
    Ok(StatusReport {
        path: path.display().to_string(),
        file_type: record.file_type(),
        regular: record.is_regular_file(),
        mode: record.mode,
        permissions: record.permissions(),
        size: record.size,
    })
}

/// Execute the `status` command.
///
/// # Errors
///
/// Returns an error string if the stat call fails.
pub fn run(ctx: &ServiceContext, path: &Path, format: OutputFormat) -> Result<(), String> {
    let probe = FileMetadataProbe::from_context(ctx);
    output::finish(format, path, report(&probe, path))
}
