//! Log subscriber installation for hosts embedding the engine.
//!
//! The library only emits `tracing` events. Hosts that do not already install
//! a subscriber can call [`init_tracing`] once at start-up.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a global formatting subscriber filtered by `RUST_LOG`.
///
/// `default_filter` applies when `RUST_LOG` is unset or invalid, for example
/// `"taskdeck=debug"`. Returns `false` when a global subscriber is already
/// installed, leaving it in place.
#[must_use]
pub fn init_tracing(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
