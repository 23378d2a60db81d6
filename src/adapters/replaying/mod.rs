//! Replaying adapters that replay recorded interactions.

pub mod metadata;

use serde::de::DeserializeOwned;

pub use metadata::ReplayingMetadataSource;

/// Decodes a `Result` from a cassette output value.
///
/// Mirror of `recording::record_result`: expects `{"ok": v}` or `{"err": e}`.
///
/// # Panics
///
/// Panics if the output has neither key or the payload does not decode.
/// A malformed cassette is a broken fixture, like an exhausted one.
pub(crate) fn replay_result<T, E>(output: serde_json::Value, context: &str) -> Result<T, E>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
{
    match output {
        serde_json::Value::Object(mut map) => {
            if let Some(err) = map.remove("err") {
                return Err(decode(err, context));
            }
            match map.remove("ok") {
                Some(ok) => Ok(decode(ok, context)),
                None => panic!("{context}: cassette output has neither \"ok\" nor \"err\""),
            }
        }
        other => panic!("{context}: expected an object in cassette output, got {other}"),
    }
}

fn decode<V: DeserializeOwned>(value: serde_json::Value, context: &str) -> V {
    serde_json::from_value(value)
        .unwrap_or_else(|e| panic!("{context}: cassette output does not decode: {e}"))
}
