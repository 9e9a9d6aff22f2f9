//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with stderr output.
///
/// The filter comes from `config.trace_level` (an `EnvFilter` directive such
/// as `"debug"` or `"wantshelf=trace"`), defaulting to `"info"`. Output goes
/// to stderr so the shim binary's stdout stays clean for screen output.
///
/// Idempotent: only the first call installs a subscriber; later calls are
/// no-ops.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let _ = subscriber.try_init();
}
