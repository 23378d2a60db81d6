//! Shared rendering for command output.

use std::path::Path;

use serde::Serialize;

use crate::error::ProbeError;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// One JSON object per invocation.
    Json,
}

impl OutputFormat {
    /// Picks the format from the `--json` flag.
    #[must_use]
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

#[derive(Serialize)]
struct ErrorReport<'a> {
    path: String,
    error: &'a ProbeError,
    message: String,
}

/// A successful command result that can be printed in either format.
pub(crate) trait Report: Serialize {
    /// Human-readable rendering.
    fn text(&self) -> String;
}

/// Serializes a report to a JSON string.
pub(crate) fn to_json<T: Serialize>(report: &T) -> Result<String, String> {
    serde_json::to_string(report).map_err(|e| format!("Failed to serialize output: {e}"))
}

/// Renders a successful report in the requested format.
pub(crate) fn render<R: Report>(format: OutputFormat, report: &R) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(report.text()),
        OutputFormat::Json => to_json(report),
    }
}

/// Renders a probe failure for `path`.
///
/// Text mode yields `None` (the caller's error message is enough); JSON mode
/// yields an object for stdout.
pub(crate) fn render_error(
    format: OutputFormat,
    path: &Path,
    err: &ProbeError,
) -> Result<Option<String>, String> {
    match format {
        OutputFormat::Text => Ok(None),
        OutputFormat::Json => {
            let report =
                ErrorReport { path: path.display().to_string(), error: err, message: err.to_string() };
            to_json(&report).map(Some)
        }
    }
}

/// Prints a command's outcome and converts failure into a CLI error string.
pub(crate) fn finish<R: Report>(
    format: OutputFormat,
    path: &Path,
    outcome: Result<R, ProbeError>,
) -> Result<(), String> {
    match outcome {
        Ok(report) => {
            println!("{}", render(format, &report)?);
            Ok(())
        }
        Err(err) => {
            if let Some(rendered) = render_error(format, path, &err)? {
                println!("{rendered}");
            }
            Err(format!("{}: {err}", path.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_error_carries_code_and_category() {
        let err = ProbeError::from_raw_os_error(2);
        let out = render_error(OutputFormat::Json, Path::new("/x"), &err).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["path"], "/x");
        assert_eq!(value["error"]["code"], 2);
        assert_eq!(value["error"]["category"], "generic");
        assert!(value["message"].as_str().unwrap().contains("[generic]"));
    }

    #[test]
    fn text_error_renders_nothing() {
        let err = ProbeError::not_supported();
        assert_eq!(render_error(OutputFormat::Text, Path::new("/x"), &err), Ok(None));
    }

    #[derive(Serialize)]
    struct Answer {
        value: u64,
    }

    impl Report for Answer {
        fn text(&self) -> String {
            self.value.to_string()
        }
    }

    #[test]
    fn renders_report_in_both_formats() {
        let answer = Answer { value: 42 };
        assert_eq!(render(OutputFormat::Text, &answer).unwrap(), "42");
        assert_eq!(render(OutputFormat::Json, &answer).unwrap(), r#"{"value":42}"#);
    }

    #[test]
    fn finish_maps_failure_to_message() {
        let err = ProbeError::from_raw_os_error(13);
        let outcome: Result<Answer, ProbeError> = Err(err);
        let msg = finish(OutputFormat::Text, Path::new("/secret"), outcome).unwrap_err();
        assert!(msg.starts_with("/secret: "));
    }
}
