//! Error type shared by every probe operation.

use std::borrow::Borrow;
use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Platform error numbers the probe synthesizes itself.
#[cfg(unix)]
mod os {
    pub const NOT_SUPPORTED: i32 = libc::ENOTSUP;
    pub const INVALID_ARGUMENT: i32 = libc::EINVAL;
}

/// Win32 codes, matching what `std::fs` reports on this host.
#[cfg(windows)]
mod os {
    /// `ERROR_NOT_SUPPORTED`
    pub const NOT_SUPPORTED: i32 = 50;
    /// `ERROR_INVALID_NAME`
    pub const INVALID_ARGUMENT: i32 = 123;
}

#[cfg(not(any(unix, windows)))]
mod os {
    pub const NOT_SUPPORTED: i32 = 95;
    pub const INVALID_ARGUMENT: i32 = 22;
}

/// Category an error code belongs to.
///
/// Every code the probe reports is an OS-native error number, so there is a
/// single generic category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    /// OS error numbers as reported by the stat call.
    #[default]
    Generic,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => f.write_str("generic"),
        }
    }
}

/// Failure outcome of a probe operation: an OS error number and its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[error("{} [{category}]", os_message(.code))]
pub struct ProbeError {
    code: i32,
    #[serde(default)]
    category: ErrorCategory,
}

fn os_message(code: impl Borrow<i32>) -> String {
    io::Error::from_raw_os_error(*code.borrow()).to_string()
}

impl ProbeError {
    /// Wraps a raw OS error number in the generic category.
    #[must_use]
    pub const fn from_raw_os_error(code: i32) -> Self {
        Self { code, category: ErrorCategory::Generic }
    }

    /// The error reported by `file_size` for paths that are not regular files.
    #[must_use]
    pub const fn not_supported() -> Self {
        Self::from_raw_os_error(os::NOT_SUPPORTED)
    }

    /// The OS-native error number.
    #[must_use]
    pub const fn code(&self) -> i32 {
        self.code
    }

    /// The category the code belongs to.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        self.category
    }

    /// The portable `io::ErrorKind` for this code.
    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        io::Error::from_raw_os_error(self.code).kind()
    }

    /// Returns `true` for "no such file or directory".
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind() == io::ErrorKind::NotFound
    }

    /// Returns `true` for "operation not supported".
    #[must_use]
    pub const fn is_not_supported(&self) -> bool {
        self.code == os::NOT_SUPPORTED
    }
}

impl From<io::Error> for ProbeError {
    fn from(err: io::Error) -> Self {
        // std rejects some paths (interior NUL) before reaching the OS.
        Self::from_raw_os_error(err.raw_os_error().unwrap_or(os::INVALID_ARGUMENT))
    }
}

impl From<ProbeError> for io::Error {
    fn from(err: ProbeError) -> Self {
        io::Error::from_raw_os_error(err.code)
    }
}
