//! Live adapters for real external interactions.

pub mod metadata;

pub use metadata::LiveMetadataSource;
