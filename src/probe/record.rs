//! Raw metadata record returned by the stat call.

use std::fmt;

use serde::{Deserialize, Serialize};

/// POSIX file-type bits of `st_mode`.
pub mod mode {
    /// Mask selecting the file-type bits.
    pub const S_IFMT: u32 = 0o170_000;
    /// Socket.
    pub const S_IFSOCK: u32 = 0o140_000;
    /// Symbolic link.
    pub const S_IFLNK: u32 = 0o120_000;
    /// Regular file.
    pub const S_IFREG: u32 = 0o100_000;
    /// Block device.
    pub const S_IFBLK: u32 = 0o060_000;
    /// Directory.
    pub const S_IFDIR: u32 = 0o040_000;
    /// Character device.
    pub const S_IFCHR: u32 = 0o020_000;
    /// FIFO.
    pub const S_IFIFO: u32 = 0o010_000;
    /// Permission and set-id/sticky bits.
    pub const PERMISSIONS: u32 = 0o7777;
}

/// Kind of filesystem entry, decoded from the type bits of the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    /// Plain data file.
    Regular,
    /// Directory.
    Directory,
    /// Symbolic link. Only seen when the source does not follow links.
    Symlink,
    /// Character device.
    CharDevice,
    /// Block device.
    BlockDevice,
    /// Named pipe.
    Fifo,
    /// Unix domain socket.
    Socket,
    /// Type bits matched none of the above.
    Unknown,
}

impl FileType {
    /// Decodes the type bits of a raw `st_mode` value.
    #[must_use]
    pub const fn from_mode(raw: u32) -> Self {
        match raw & mode::S_IFMT {
            mode::S_IFREG => Self::Regular,
            mode::S_IFDIR => Self::Directory,
            mode::S_IFLNK => Self::Symlink,
            mode::S_IFCHR => Self::CharDevice,
            mode::S_IFBLK => Self::BlockDevice,
            mode::S_IFIFO => Self::Fifo,
            mode::S_IFSOCK => Self::Socket,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Regular => "regular file",
            Self::Directory => "directory",
            Self::Symlink => "symlink",
            Self::CharDevice => "character device",
            Self::BlockDevice => "block device",
            Self::Fifo => "fifo",
            Self::Socket => "socket",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Metadata for one path, as reported by a single stat call.
///
/// Only the mode and size fields are carried. A record only exists for a
/// successful call; failed calls yield a [`crate::error::ProbeError`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetadataRecord {
    /// Raw `st_mode`: type bits plus permission bits.
    pub mode: u32,
    /// Raw `st_size` in bytes.
    pub size: u64,
}

impl MetadataRecord {
    /// Builds a record from raw stat fields.
    #[must_use]
    pub const fn new(mode: u32, size: u64) -> Self {
        Self { mode, size }
    }

    /// Returns `true` iff the type bits designate a regular file.
    #[must_use]
    pub const fn is_regular_file(&self) -> bool {
        self.mode & mode::S_IFMT == mode::S_IFREG
    }

    /// The decoded file type.
    #[must_use]
    pub const fn file_type(&self) -> FileType {
        FileType::from_mode(self.mode)
    }

    /// Permission bits, including set-id and sticky bits.
    #[must_use]
    pub const fn permissions(&self) -> u32 {
        self.mode & mode::PERMISSIONS
    }
}
