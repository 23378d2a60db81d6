//! Live metadata adapter backed by the host's stat call.

use std::path::Path;

use crate::error::ProbeError;
use crate::ports::metadata::MetadataSource;
use crate::probe::MetadataRecord;

/// Live metadata source. Follows symbolic links, as `stat` does.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveMetadataSource;

impl MetadataSource for LiveMetadataSource {
    fn stat(&self, path: &Path) -> Result<MetadataRecord, ProbeError> {
        raw_stat(path)
    }
}

#[cfg(unix)]
fn raw_stat(path: &Path) -> Result<MetadataRecord, ProbeError> {
    use std::os::unix::fs::MetadataExt;

    let meta = std::fs::metadata(path)?;
    Ok(MetadataRecord::new(meta.mode(), meta.size()))
}

/// No native `st_mode` here; synthesize the type bits the way the MSVC
/// `_stat64` does.
#[cfg(not(unix))]
fn raw_stat(path: &Path) -> Result<MetadataRecord, ProbeError> {
    use crate::probe::mode;

    let meta = std::fs::metadata(path)?;
    let kind = if meta.is_dir() { mode::S_IFDIR } else { mode::S_IFREG };
    let perms = if meta.permissions().readonly() { 0o444 } else { 0o666 };
    Ok(MetadataRecord::new(kind | perms, meta.len()))
}
