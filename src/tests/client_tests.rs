use crate::blockchain::{ChainClient, ClientError, EthClient};
use crate::models::Transaction;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> EthClient {
    EthClient::with_timeout(server.uri(), Duration::from_secs(5)).unwrap()
}

async fn mount_result(server: &MockServer, rpc_method: &str, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "method": rpc_method })))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_current_height_decodes_hex() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "eth_blockNumber",
        json!({ "jsonrpc": "2.0", "id": 1, "result": "0x10" }),
    )
    .await;

    let height = client_for(&server).current_height().await.unwrap();
    assert_eq!(height, 16);
}

#[tokio::test]
async fn test_block_transactions_requests_full_objects() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "jsonrpc": "2.0",
            "method": "eth_getBlockByNumber",
            "params": ["0x10", true]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "number": "0x10",
                "transactions": [
                    { "hash": "0x123", "from": "0xabc", "to": "0xdef", "value": "0x1", "nonce": "0x0" },
                    { "hash": "0x456", "from": "0xabc", "to": null, "value": "0x0" }
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let txs = client_for(&server).block_transactions(16).await.unwrap();

    assert_eq!(
        txs,
        vec![
            Transaction::new("0x123", "0xabc", "0xdef", "0x1"),
            Transaction::new("0x456", "0xabc", "", "0x0"),
        ]
    );
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).current_height().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_non_hex_height_is_format_error() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "eth_blockNumber",
        json!({ "jsonrpc": "2.0", "id": 1, "result": "sixteen" }),
    )
    .await;

    let err = client_for(&server).current_height().await.unwrap_err();
    assert!(matches!(err, ClientError::Format(ref raw) if raw == "sixteen"), "got {err:?}");
}

#[tokio::test]
async fn test_rpc_error_object_is_surfaced() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "eth_getBlockByNumber",
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": -32602, "message": "invalid argument 0" }
        }),
    )
    .await;

    let err = client_for(&server).block_transactions(1).await.unwrap_err();
    assert!(
        matches!(err, ClientError::Rpc { code: -32602, ref message } if message == "invalid argument 0"),
        "got {err:?}"
    );
}

#[tokio::test]
async fn test_null_block_is_missing() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "eth_getBlockByNumber",
        json!({ "jsonrpc": "2.0", "id": 1, "result": null }),
    )
    .await;

    let err = client_for(&server).block_transactions(99).await.unwrap_err();
    assert!(matches!(err, ClientError::MissingBlock(99)), "got {err:?}");
}

#[tokio::test]
async fn test_http_failure_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).current_height().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn test_unreachable_provider_is_transport_error() {
    let client = EthClient::with_timeout("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();

    let err = client.current_height().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)), "got {err:?}");
}
