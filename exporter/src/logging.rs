//! Stderr tracing for `export-resume`.
//!
//! Two output channels never mix. What the user is asked and told (banner,
//! prompt, `✅` lines, the final `❌ Error:`) goes through
//! [`Terminal`](crate::io::terminal::Terminal) and `main`. This module only
//! wires the `tracing` events from the I/O adapters (git lookup, config
//! parse, copy) to stderr, and they stay quiet unless `RUST_LOG` asks.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber: `RUST_LOG` filter (`warn` when unset),
/// compact lines on stderr.
///
/// `RUST_LOG=resume_export=debug export-resume` shows the branch fallback
/// and copy details.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
