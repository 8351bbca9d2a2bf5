//! Smoke check against the configured RPC endpoint: fetch the current height
//! and the contents of the latest block.

use eth_tx_indexer::{blockchain::{ChainClient, EthClient}, config::Config};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let config = Config::from_env();
    let client = EthClient::new(&config)?;

    let height = client.current_height().await?;
    info!("Current height: {}", height);

    let transactions = client.block_transactions(height).await?;
    info!("Block {} has {} transactions", height, transactions.len());
    for tx in transactions.iter().take(5) {
        info!("   {} {} -> {} ({})", tx.hash, tx.from, tx.to, tx.value);
    }

    Ok(())
}
