//! Recording adapters that capture interactions to cassettes.

pub mod metadata;

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

pub use metadata::RecordingMetadataSource;

use crate::cassette::recorder::CassetteRecorder;

/// Record a `Result<T, E>` interaction using the ok/err JSON convention.
///
/// Mirror of `replaying::replay_result`.
///
/// Convention:
/// - `Ok(v)` is serialized as `{"ok": v}`
/// - `Err(e)` is serialized as `{"err": e}`
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) -> Result<(), serde_json::Error>
where
    T: Serialize,
    E: Serialize,
    I: Serialize,
{
    let input_json = serde_json::to_value(input)?;
    let output_json = match result {
        Ok(v) => serde_json::json!({ "ok": serde_json::to_value(v)? }),
        Err(e) => serde_json::json!({ "err": serde_json::to_value(e)? }),
    };

    let mut guard = recorder.lock().unwrap_or_else(PoisonError::into_inner);
    guard.record(port, method, input_json, output_json);
    Ok(())
}
