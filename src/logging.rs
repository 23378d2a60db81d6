//! Tracing subscriber setup for the CLI.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when neither `STATPROBE_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "warn";

/// Builds the filter: the explicit directive, else `RUST_LOG`, else `warn`.
///
/// An unparsable directive falls back to the default rather than failing.
#[must_use]
pub fn build_filter(directive: Option<&str>) -> EnvFilter {
    match directive {
        Some(d) => EnvFilter::try_new(d).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Installs a stderr `fmt` subscriber as the global default.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(directive: Option<&str>) {
    let _ = tracing_subscriber::registry()
        .with(build_filter(directive))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
