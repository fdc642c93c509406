use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset. `TraceLayer` emits its request
/// spans at `debug`, so `tower_http` is raised to keep them visible.
pub const DEFAULT_FILTER: &str = "info,tower_http=debug";

/// Initialize structured JSON tracing on stdout. Call once at service startup.
///
/// Later calls are ignored.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_current_span(false))
        .try_init();
}
