//! Service context bundling the port trait objects.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::live::LiveMetadataSource;
use crate::adapters::recording::RecordingMetadataSource;
use crate::adapters::replaying::ReplayingMetadataSource;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::ports::MetadataSource;

/// Bundles the port trait objects into a single context.
///
/// Constructors wire up different adapter implementations (live, replaying,
/// recording).
pub struct ServiceContext {
    /// Source of raw file metadata.
    pub metadata: Box<dyn MetadataSource>,
}

impl ServiceContext {
    /// Creates a live context backed by the host's stat call.
    #[must_use]
    pub fn live() -> Self {
        Self { metadata: Box::new(LiveMetadataSource) }
    }

    /// Creates a recording context that captures every stat into a cassette
    /// under `dir`.
    ///
    /// The context must be dropped before [`RecordingSession::finish`] so the
    /// recorder has a single owner.
    ///
    /// # Errors
    ///
    /// Returns an error if the session directory cannot be prepared.
    pub fn recording_at(dir: &Path) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new(dir)?;
        let metadata = RecordingMetadataSource::new(
            Box::new(LiveMetadataSource),
            Arc::clone(&session.metadata),
        );
        Ok((Self { metadata: Box::new(metadata) }, session))
    }

    /// Creates a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let replayer = CassetteReplayer::load(path)?;
        Ok(Self { metadata: Box::new(ReplayingMetadataSource::new(replayer)) })
    }
}
