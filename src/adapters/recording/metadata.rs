//! Recording adapter for the `MetadataSource` port.

use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::error::ProbeError;
use crate::ports::MetadataSource;
use crate::probe::MetadataRecord;

/// Records stat calls while delegating to an inner implementation.
pub struct RecordingMetadataSource {
    inner: Box<dyn MetadataSource>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingMetadataSource {
    /// Creates a new recording source wrapping the given implementation.
    pub fn new(inner: Box<dyn MetadataSource>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct PathInput<'a> {
    path: &'a str,
}

impl MetadataSource for RecordingMetadataSource {
    fn stat(&self, path: &Path) -> Result<MetadataRecord, ProbeError> {
        let result = self.inner.stat(path);
        let path = path.display().to_string();
        let input = PathInput { path: &path };
        if let Err(err) = record_result(&self.recorder, "metadata", "stat", &input, &result) {
            tracing::warn!(%path, %err, "failed to record stat interaction");
        }
        result
    }
}
