//! Development-time tracing.
//!
//! Diagnostics go to stderr and are controlled by `RUST_LOG`. They never
//! reach stdout (the per-file report) or the combined output file.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber. Unset or unparsable `RUST_LOG` means `warn`.
///
/// # Example
/// ```bash
/// RUST_LOG=combiner=debug combiner combine a.txt b.txt
/// ```
pub fn init() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
