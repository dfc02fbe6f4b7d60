//! Process-wide tracing subscriber.
//!
//! # Responsibilities
//! - Initialize the subscriber that `TracingSink` writes through
//! - Honour `RUST_LOG`, falling back to the configured filter
//!
//! # Design Decisions
//! - Writes to stderr so request lines stay out of program output
//! - ANSI output follows the palette decision

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Call once, early in `main`.
pub fn init(default_filter: &str, ansi: bool) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi),
        )
        .init();
}
