use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "catalog_api=info,catalog_core=info,tower_http=info";

/// Install the global fmt subscriber.
///
/// `RUST_LOG` takes precedence, e.g. `RUST_LOG=catalog_core=debug` to see
/// every upstream URL. Without it, the crate and request traces log at info.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
