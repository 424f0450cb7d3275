use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

/// Filter used when `RUST_LOG` is unset or unparsable
pub const DEFAULT_LOG_FILTER: &str = "login_router=debug";

/// Installs the global tracing subscriber.
///
/// Fails if a subscriber is already set, which callers running several
/// tests in one process can ignore.
pub fn init_tracing() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
