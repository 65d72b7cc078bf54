use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when RUST_LOG is not set
pub const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber: `RUST_LOG` filter plus a stderr fmt layer.
///
/// Only binaries call this; the library itself just emits events.
pub fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.into());

    let result = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();

    if let Err(e) = result {
        eprintln!("Failed to install tracing subscriber: {}", e);
    }
}
