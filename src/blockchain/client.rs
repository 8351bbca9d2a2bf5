use crate::blockchain::models::{
    encode_block_number, parse_hex_u64, JsonRpcRequest, JsonRpcResponse, RpcBlock,
    METHOD_BLOCK_NUMBER, METHOD_GET_BLOCK_BY_NUMBER,
};
use crate::config::Config;
use crate::models::Transaction;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid hex quantity: {0:?}")]
    Format(String),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Block {0} not available from provider")]
    MissingBlock(u64),
}

/// The two provider calls the indexer depends on.
///
/// Implementations surface failures as-is; there is no retrying or caching
/// at this level.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Latest block number known to the provider.
    async fn current_height(&self) -> Result<u64, ClientError>;

    /// Full transaction objects of the given block.
    async fn block_transactions(&self, number: u64) -> Result<Vec<Transaction>, ClientError>;
}

/// JSON-RPC over HTTP client for an Ethereum-compatible node.
pub struct EthClient {
    http: reqwest::Client,
    rpc_url: String,
    next_id: AtomicU64,
}

impl EthClient {
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        Self::with_timeout(
            config.eth_rpc_url.clone(),
            Duration::from_secs(config.rpc_timeout_secs),
        )
    }

    pub fn with_timeout(rpc_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let rpc_url = rpc_url.into();
        info!("Initializing Ethereum client with RPC endpoint: {}", rpc_url);

        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            rpc_url,
            next_id: AtomicU64::new(1),
        })
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &'static str,
        params: Vec<Value>,
    ) -> Result<Option<T>, ClientError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = JsonRpcRequest::new(id, method, params);
        debug!("Sending {} (id {})", method, id);

        let body = self
            .http
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let response: JsonRpcResponse<T> = serde_json::from_slice(&body)?;
        if let Some(err) = response.error {
            return Err(ClientError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        Ok(response.result)
    }
}

#[async_trait]
impl ChainClient for EthClient {
    async fn current_height(&self) -> Result<u64, ClientError> {
        let raw: String = self
            .call(METHOD_BLOCK_NUMBER, Vec::new())
            .await?
            .unwrap_or_default();

        parse_hex_u64(&raw).ok_or(ClientError::Format(raw))
    }

    async fn block_transactions(&self, number: u64) -> Result<Vec<Transaction>, ClientError> {
        let params = vec![json!(encode_block_number(number)), json!(true)];
        let block: Option<RpcBlock> = self.call(METHOD_GET_BLOCK_BY_NUMBER, params).await?;

        block
            .map(|b| b.transactions)
            .ok_or(ClientError::MissingBlock(number))
    }
}
