//! Runtime settings read from the environment.
//!
//! A `.env` file in the working directory is loaded first (if present), so
//! the same variables can be kept there during development.

use std::path::PathBuf;

/// Directory to record a metadata cassette into.
pub const RECORD_VAR: &str = "STATPROBE_RECORD";
/// Cassette file to replay metadata from.
pub const REPLAY_VAR: &str = "STATPROBE_REPLAY";
/// Log filter directive, e.g. `statprobe=debug`.
pub const LOG_VAR: &str = "STATPROBE_LOG";

/// How the metadata port is wired for a run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Stat the real filesystem.
    #[default]
    Live,
    /// Stat the real filesystem and record every call under this directory.
    Record(PathBuf),
    /// Serve stats from this cassette file.
    Replay(PathBuf),
}

/// Settings for a CLI run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    /// Adapter wiring for the metadata port.
    pub mode: Mode,
    /// Log filter override; `None` falls back to `RUST_LOG`, then `warn`.
    pub log_filter: Option<String>,
}

impl Settings {
    /// Loads `.env` (if any) and reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if both record and replay are requested.
    pub fn from_env() -> Result<Self, String> {
        // A missing .env is the normal case.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if both record and replay are requested.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mode = match (get(RECORD_VAR), get(REPLAY_VAR)) {
            (Some(_), Some(_)) => {
                return Err(format!("{RECORD_VAR} and {REPLAY_VAR} cannot both be set"));
            }
            (Some(dir), None) => Mode::Record(PathBuf::from(dir)),
            (None, Some(file)) => Mode::Replay(PathBuf::from(file)),
            (None, None) => Mode::Live,
        };

        Ok(Self { mode, log_filter: get(LOG_VAR) })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        Settings::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_to_live() {
        assert_eq!(settings(&[]).unwrap(), Settings::default());
    }

    #[test]
    fn record_and_replay_modes() {
        let rec = settings(&[(RECORD_VAR, "/tmp/rec")]).unwrap();
        assert_eq!(rec.mode, Mode::Record(PathBuf::from("/tmp/rec")));

        let rep = settings(&[(REPLAY_VAR, "/tmp/x.cassette.yaml")]).unwrap();
        assert_eq!(rep.mode, Mode::Replay(PathBuf::from("/tmp/x.cassette.yaml")));
    }

    #[test]
    fn record_and_replay_together_is_an_error() {
        let err = settings(&[(RECORD_VAR, "a"), (REPLAY_VAR, "b")]).unwrap_err();
        assert!(err.contains("cannot both be set"));
    }

    #[test]
    fn blank_values_are_unset() {
        let s = settings(&[(RECORD_VAR, "  "), (LOG_VAR, "")]).unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn log_filter_is_read() {
        let s = settings(&[(LOG_VAR, "statprobe=debug")]).unwrap();
        assert_eq!(s.log_filter.as_deref(), Some("statprobe=debug"));
    }
}
