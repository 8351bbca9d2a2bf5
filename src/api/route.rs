use crate::{
    api::{
        error::ApiError,
        response::{with_total_count, BlockResponse, SubscribeResponse, TransactionsResponse},
    },
    models::normalize_address,
    state::AppState,
    validation::validate_address,
};
use axum::{
    extract::{Query, State},
    response::Response,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

// Query parameters shared by /subscribe and /transactions
#[derive(Deserialize)]
pub struct AddressQuery {
    address: Option<String>,
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/block", get(get_block))
        .route("/subscribe", get(subscribe).post(subscribe))
        .route("/transactions", get(get_transactions))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

// GET /block handler
async fn get_block(State(state): State<Arc<AppState>>) -> Json<BlockResponse> {
    Json(BlockResponse {
        current_block: state.indexer.current_block(),
    })
}

// GET|POST /subscribe handler
async fn subscribe(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AddressQuery>,
) -> Result<Json<SubscribeResponse>, ApiError> {
    let address = validate_address(params.address.as_deref())?;

    let subscribed = state.indexer.subscribe(address);
    if !subscribed {
        info!("Address {} was already subscribed", address);
    }

    Ok(Json(SubscribeResponse {
        address: address.to_string(),
        subscribed,
    }))
}

// GET /transactions handler
async fn get_transactions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AddressQuery>,
) -> Result<Response, ApiError> {
    let address = normalize_address(validate_address(params.address.as_deref())?);

    let transactions = state.indexer.transactions(&address);
    let total = transactions.len();

    Ok(with_total_count(
        TransactionsResponse {
            address,
            transactions,
        },
        total,
    ))
}
