//! Port traits defining external boundaries.
//!
//! The probe has one boundary, the operating system's stat call.
//! Implementations live in `src/adapters/`.

pub mod metadata;

pub use metadata::MetadataSource;
