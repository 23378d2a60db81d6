//! Metadata port: the single "stat a path" boundary.

use std::path::Path;

use crate::error::ProbeError;
use crate::probe::MetadataRecord;

/// Retrieves raw metadata for a path.
///
/// All platform divergence in the probe lives behind this trait. Each call
/// must issue at most one underlying stat and keep no state between calls.
pub trait MetadataSource: Send + Sync {
    /// Returns the metadata record for `path`.
    ///
    /// # Errors
    ///
    /// Returns the OS error number when the stat call fails.
    fn stat(&self, path: &Path) -> Result<MetadataRecord, ProbeError>;
}
