//! Logging setup for the CLI
//!
//! Library crates only emit `tracing` events; the binary decides where they go. Events are
//! written to stderr so they never mix with token output on stdout.

use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install the global subscriber. `RUST_LOG` wins over the configured `default_filter`.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_writer(io::stderr)
        .with_filter(filter);

    // A second init (tests driving main twice) keeps the first subscriber
    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}
