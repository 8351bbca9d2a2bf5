//! JSON-RPC 2.0 wire types for the two provider calls we make.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::Transaction;

pub const METHOD_BLOCK_NUMBER: &str = "eth_blockNumber";
pub const METHOD_GET_BLOCK_BY_NUMBER: &str = "eth_getBlockByNumber";

#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: &'static str,
    pub method: &'static str,
    pub params: Vec<Value>,
    pub id: u64,
}

impl JsonRpcRequest {
    pub fn new(id: u64, method: &'static str, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: "2.0",
            method,
            params,
            id,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

/// Response envelope, generic over the shape of `result`.
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<JsonRpcError>,
}

/// The part of an `eth_getBlockByNumber` result we care about.
#[derive(Debug, Deserialize)]
pub struct RpcBlock {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// Encode a block number the way the node expects it (`0x`-prefixed hex).
pub fn encode_block_number(number: u64) -> String {
    format!("{:#x}", number)
}

/// Parse a `0x`-prefixed hex quantity.
pub fn parse_hex_u64(s: &str) -> Option<u64> {
    let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))?;
    u64::from_str_radix(digits, 16).ok()
}
