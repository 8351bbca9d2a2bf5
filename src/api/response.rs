use axum::{
    http::HeaderValue,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use crate::models::Transaction;

#[derive(Debug, Serialize, Deserialize)]
pub struct BlockResponse {
    pub current_block: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubscribeResponse {
    pub address: String,
    pub subscribed: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionsResponse {
    pub address: String,
    pub transactions: Vec<Transaction>,
}

/// Serialize `data` as JSON and attach an `X-Total-Count` header.
pub fn with_total_count<T: Serialize>(data: T, count: usize) -> Response {
    let mut response = Json(data).into_response();
    response
        .headers_mut()
        .insert("x-total-count", HeaderValue::from(count));
    response
}
