use eth_tx_indexer::{
    api,
    blockchain::{BlockIndexer, EthClient, Indexer},
    config::Config,
    state::AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting eth-tx-indexer");

    let config = Config::from_env();
    tracing::info!("Configuration loaded: {:?}", config);

    let client = Arc::new(EthClient::new(&config)?);
    let indexer = Arc::new(BlockIndexer::new(client));

    // Start blockchain polling task
    let polling = indexer.start(config.poll_interval);
    tracing::info!("Blockchain polling task started");

    let app_state = Arc::new(AppState::new(indexer.clone()));
    let app = api::create_router(app_state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Starting HTTP server on {}", addr);

    let shutdown = polling.shutdown_token();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => tracing::info!("Received Ctrl-C"),
                _ = shutdown.cancelled() => {}
            }
        })
        .await?;

    polling.stop().await;
    tracing::info!("Stopped at block {}", indexer.current_block());

    Ok(())
}
