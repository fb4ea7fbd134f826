// SPDX-License-Identifier: MPL-2.0
//! Global tracing subscriber setup.
//!
//! The filter is read from `RUST_LOG`; without it only this crate logs, at
//! `info` level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVE: &str = "gallery_admin=info";

/// Builds the env filter from `RUST_LOG`, falling back to [`DEFAULT_DIRECTIVE`].
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the global subscriber.
///
/// Returns `false` when a subscriber was already installed (tests, embedding).
pub fn init() -> bool {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().compact().with_target(true))
        .try_init()
        .is_ok()
}
