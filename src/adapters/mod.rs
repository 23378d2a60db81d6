//! Adapters implementing the port traits.
//!
//! - `live`: the host operating system.
//! - `recording`: wraps another adapter and captures every call to a cassette.
//! - `replaying`: serves previously captured calls without touching the disk.

pub mod live;
pub mod recording;
pub mod replaying;
