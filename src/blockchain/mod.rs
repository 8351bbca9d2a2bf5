pub mod client;
pub mod index;
pub mod indexer;
pub mod models;
pub mod polling;

// Re-exports for convenience
pub use client::{ChainClient, ClientError, EthClient};
pub use indexer::{BlockIndexer, Indexer, PollError, PollOutcome};
pub use polling::{start_polling, PollingHandle};
