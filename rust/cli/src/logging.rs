//! Tracing subscriber setup for the `handrank` binary.
//!
//! Events go to stderr so they never mix with command output on stdout.
//! `RUST_LOG` wins over the configured level when it is set.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber once; later calls are no-ops.
pub fn init_logging(default_level: &str) {
    static INIT: OnceLock<()> = OnceLock::new();

    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        // another subscriber may already be installed (e.g. by a test harness)
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .try_init();
    });
}
