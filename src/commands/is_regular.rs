//! `statprobe is-regular` command.

use std::path::Path;

use serde::Serialize;

use super::output::{self, OutputFormat, Report};
use crate::context::ServiceContext;
use crate::probe::FileMetadataProbe;

/// Answer to "is this path a regular file?".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IsRegularReport {
    /// The path as given.
    pub path: String,
    /// The answer.
    pub regular: bool,
}

impl Report for IsRegularReport {
    fn text(&self) -> String {
        self.regular.to_string()
    }
}

/// Execute the `is-regular` command.
///
/// A path that exists but is not a regular file prints `false` and succeeds.
///
/// # Errors
///
/// Returns an error string if the stat call fails.
pub fn run(ctx: &ServiceContext, path: &Path, format: OutputFormat) -> Result<(), String> {
    let probe = FileMetadataProbe::from_context(ctx);
    let outcome = probe
        .is_regular_file(path)
        .map(|regular| IsRegularReport { path: path.display().to_string(), regular });
    output::finish(format, path, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProbeError;

    #[test]
    fn text_is_bare_boolean() {
        let report = IsRegularReport { path: "/a".into(), regular: false };
        assert_eq!(report.text(), "false");
    }

    #[test]
    fn failure_surfaces_as_error() {
        let ctx = ServiceContext::live();
        let path = std::env::temp_dir().join("statprobe_is_regular_missing/none");
        let err = run(&ctx, &path, OutputFormat::Text).unwrap_err();
        assert!(err.contains("statprobe_is_regular_missing"));
    }

    #[test]
    fn probe_error_type_is_propagated() {
        let ctx = ServiceContext::live();
        let probe = FileMetadataProbe::from_context(&ctx);
        let path = std::env::temp_dir().join("statprobe_is_regular_missing/none");
        let err: ProbeError = probe.is_regular_file(&path).unwrap_err();
        assert!(err.is_not_found());
    }
}
