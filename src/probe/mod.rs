//! File metadata probe: `status`, `is_regular_file` and `file_size`.
//!
//! Every query issues exactly one stat through a [`MetadataSource`] and
//! reports failure as a [`ProbeError`] carrying the OS error number. Nothing
//! is cached, retried or logged here.

mod record;

use std::path::Path;

pub use record::{mode, FileType, MetadataRecord};

use crate::adapters::live::metadata::LiveMetadataSource;
use crate::context::ServiceContext;
use crate::error::ProbeError;
use crate::ports::MetadataSource;

/// Metadata queries over a borrowed [`MetadataSource`].
#[derive(Clone, Copy)]
pub struct FileMetadataProbe<'a> {
    source: &'a dyn MetadataSource,
}

impl<'a> FileMetadataProbe<'a> {
    /// Creates a probe over the given source.
    #[must_use]
    pub fn new(source: &'a dyn MetadataSource) -> Self {
        Self { source }
    }

    /// Creates a probe over the metadata port of a service context.
    #[must_use]
    pub fn from_context(ctx: &'a ServiceContext) -> Self {
        Self::new(ctx.metadata.as_ref())
    }

    /// Stats `path` once and returns its record.
    ///
    /// # Errors
    ///
    /// Returns the OS error from the stat call, unchanged.
    pub fn status(&self, path: &Path) -> Result<MetadataRecord, ProbeError> {
        self.source.stat(path)
    }

    /// Returns whether `path` names a regular file.
    ///
    /// # Errors
    ///
    /// Propagates the failure of [`Self::status`].
    pub fn is_regular_file(&self, path: &Path) -> Result<bool, ProbeError> {
        self.status(path).map(|record| is_regular_file(&record))
    }

    /// Returns the size in bytes of the regular file at `path`.
    ///
    /// # Errors
    ///
    /// Propagates the failure of [`Self::status`], and reports
    /// "operation not supported" when `path` is not a regular file.
    pub fn file_size(&self, path: &Path) -> Result<u64, ProbeError> {
        let record = self.status(path)?;
        if !is_regular_file(&record) {
            return Err(ProbeError::not_supported());
        }
        Ok(record.size)
    }
}

/// Returns `true` iff the record's type bits designate a regular file.
#[must_use]
pub fn is_regular_file(record: &MetadataRecord) -> bool {
    record.is_regular_file()
}

/// Stats `path` with the host's stat call.
///
/// # Errors
///
/// Returns the OS error from the stat call, unchanged.
pub fn status(path: impl AsRef<Path>) -> Result<MetadataRecord, ProbeError> {
    FileMetadataProbe::new(&LiveMetadataSource).status(path.as_ref())
}

/// Returns whether `path` names a regular file, using the host's stat call.
///
/// # Errors
///
/// Propagates the failure of [`status`].
pub fn is_regular_file_at(path: impl AsRef<Path>) -> Result<bool, ProbeError> {
    FileMetadataProbe::new(&LiveMetadataSource).is_regular_file(path.as_ref())
}

/// Returns the size in bytes of the regular file at `path`, using the host's
/// stat call.
///
/// # Errors
///
/// Propagates the failure of [`status`], and reports "operation not
/// supported" when `path` is not a regular file.
pub fn file_size(path: impl AsRef<Path>) -> Result<u64, ProbeError> {
    FileMetadataProbe::new(&LiveMetadataSource).file_size(path.as_ref())
}
