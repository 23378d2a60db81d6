//! Recording session owning the metadata port's cassette recorder.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;

/// File name of the metadata port's cassette inside a session directory.
pub const METADATA_CASSETTE: &str = "metadata.cassette.yaml";

/// Owns the recorder shared with recording adapters for one session.
pub struct RecordingSession {
    /// Recorder for metadata port interactions.
    pub metadata: Arc<Mutex<CassetteRecorder>>,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Create a session that writes `<output_dir>/metadata.cassette.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A cassette already exists in the directory
    /// - The directory cannot be created
    pub fn new(output_dir: &Path) -> Result<Self, String> {
        let cassette_path = output_dir.join(METADATA_CASSETTE);
        if cassette_path.exists() {
            return Err(format!("Cassette already exists: {}", cassette_path.display()));
        }

        std::fs::create_dir_all(output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let name = format!("{}-metadata", Utc::now().format("%Y-%m-%dT%H-%M-%S"));
        let recorder = CassetteRecorder::new(cassette_path, name, get_commit_hash());
        tracing::debug!(dir = %output_dir.display(), "recording session started");

        Ok(Self { metadata: Arc::new(Mutex::new(recorder)), output_dir: output_dir.to_path_buf() })
    }

    /// Directory the cassette is written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write the cassette file to disk.
    ///
    /// Every recording adapter sharing the recorder must be dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if a recording adapter is still alive or the file
    /// cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.metadata)
            .map_err(|_| "Recording adapter for metadata still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock for metadata poisoned: {e}"))?;
        let count = recorder.len();
        let path =
            recorder.finish().map_err(|e| format!("Failed to write metadata cassette: {e}"))?;
        tracing::debug!(path = %path.display(), interactions = count, "cassette written");
        Ok(self.output_dir)
    }
}

/// Get the current git commit hash, or "unknown" if unavailable.
fn get_commit_hash() -> String {
    let hash = std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string());

    hash.unwrap_or_else(|| {
        tracing::warn!("could not get git commit hash, using 'unknown'");
        "unknown".to_string()
    })
}
