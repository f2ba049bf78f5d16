use catalog_api::{app, logging, ApiConfig, AppState};
use catalog_core::{CancellationToken, Catalog};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    logging::setup_tracing();

    let config = ApiConfig::from_env()?;
    let catalog = Catalog::from_config(&config.upstream)?;

    let shutdown = CancellationToken::new();
    let state = AppState::new(catalog, shutdown.clone());
    let router = app(state, &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(
        addr = %config.bind_addr,
        upstream = %config.upstream.base_url,
        timeout_secs = config.upstream.timeout.as_secs(),
        "catalog api listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal(shutdown: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "could not listen for ctrl-c, running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutting down, cancelling in-flight upstream calls");
    shutdown.cancel();
}
