//! Replaying adapter for the `MetadataSource` port.

use std::path::Path;
use std::sync::{Mutex, PoisonError};

use super::replay_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::ProbeError;
use crate::ports::metadata::MetadataSource;
use crate::probe::MetadataRecord;

/// Replays recorded stat outcomes from a cassette.
pub struct ReplayingMetadataSource {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingMetadataSource {
    /// Creates a new replaying source from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl MetadataSource for ReplayingMetadataSource {
    fn stat(&self, path: &Path) -> Result<MetadataRecord, ProbeError> {
        let interaction = {
            let mut replayer = self.replayer.lock().unwrap_or_else(PoisonError::into_inner);
            replayer.next_interaction("metadata", "stat")
        };

        let requested = path.display().to_string();
        let recorded = interaction.input.get("path").and_then(serde_json::Value::as_str);
        if recorded != Some(requested.as_str()) {
            tracing::warn!(
                seq = interaction.seq,
                requested = %requested,
                recorded = ?recorded,
                "replayed stat was recorded for a different path"
            );
        }

        replay_result(interaction.output, "metadata::stat")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use crate::probe::mode;
    use chrono::Utc;
    use serde_json::json;

    fn make_replayer(interactions: Vec<Interaction>) -> CassetteReplayer {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            commit: "abc".into(),
            interactions,
        };
        CassetteReplayer::new(&cassette)
    }

    fn stat_interaction(seq: u64, path: &str, output: serde_json::Value) -> Interaction {
        Interaction {
            seq,
            port: "metadata".into(),
            method: "stat".into(),
            input: json!({ "path": path }),
            output,
        }
    }

    #[test]
    fn replays_record() {
        let replayer = make_replayer(vec![stat_interaction(
            0,
            "/srv/a.bin",
            json!({"ok": {"mode": mode::S_IFREG | 0o600, "size": 42}}),
        )]);
        let source = ReplayingMetadataSource::new(replayer);
        let record = source.stat(Path::new("/srv/a.bin")).unwrap();
        assert_eq!(record, MetadataRecord::new(mode::S_IFREG | 0o600, 42));
    }

    #[test]
    fn replays_exact_error_code() {
        let replayer = make_replayer(vec![stat_interaction(
            0,
            "/srv/missing",
            json!({"err": {"code": 2, "category": "generic"}}),
        )]);
        let source = ReplayingMetadataSource::new(replayer);
        let err = source.stat(Path::new("/srv/missing")).unwrap_err();
        assert_eq!(err, ProbeError::from_raw_os_error(2));
    }

    #[test]
    fn replays_in_recorded_order() {
        let replayer = make_replayer(vec![
            stat_interaction(0, "/a", json!({"ok": {"mode": mode::S_IFDIR, "size": 0}})),
            stat_interaction(1, "/a", json!({"err": {"code": 2}})),
        ]);
        let source = ReplayingMetadataSource::new(replayer);
        assert!(source.stat(Path::new("/a")).is_ok());
        assert!(source.stat(Path::new("/a")).is_err());
    }

    #[test]
    #[should_panic(expected = "Cassette exhausted")]
    fn exhausted_cassette_panics() {
        let replayer = make_replayer(vec![]);
        let source = ReplayingMetadataSource::new(replayer);
        let _ = source.stat(Path::new("/a"));
    }

    #[test]
    #[should_panic(expected = "neither")]
    fn malformed_output_panics() {
        let replayer = make_replayer(vec![stat_interaction(0, "/a", json!({"size": 1}))]);
        let source = ReplayingMetadataSource::new(replayer);
        let _ = source.stat(Path::new("/a"));
    }
}
