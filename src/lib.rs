pub mod api;
pub mod blockchain;
pub mod config;
pub mod models;
pub mod state;
pub mod validation;

#[cfg(test)]
pub mod tests;

// Re-export specific items for convenience
pub use api::error::ApiError;
pub use api::route::create_router;
pub use blockchain::{BlockIndexer, ChainClient, ClientError, EthClient, Indexer, PollingHandle};
pub use config::Config;
pub use models::Transaction;
pub use validation::validate_address;
