#![allow(clippy::unwrap_used)]
// Integration tests for `DashboardClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tagview_api::{ApiError, DashboardClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, DashboardClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = DashboardClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

// ── Edge catalog ────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_edges() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/edges"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["rig-1", "rig-2"])))
        .mount(&server)
        .await;

    let edges = client.list_edges().await.unwrap();
    assert_eq!(edges, vec!["rig-1".to_owned(), "rig-2".to_owned()]);
}

#[tokio::test]
async fn test_list_edges_http_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/edges"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let result = client.list_edges().await;
    assert!(
        matches!(result, Err(ApiError::Http { status: 503, .. })),
        "expected Http error, got: {result:?}"
    );
    assert!(result.unwrap_err().is_transient());
}

// ── Current values ──────────────────────────────────────────────────

#[tokio::test]
async fn test_current_values() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/current"))
        .and(query_param("edge", "rig-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Pump1_Wref_spm": 88.5,
            "PC_IO_2.30": 1,
        })))
        .mount(&server)
        .await;

    let current = client.current("rig-1").await.unwrap();
    assert_eq!(current.len(), 2);
    assert_eq!(current["Pump1_Wref_spm"], json!(88.5));
}

#[tokio::test]
async fn test_current_decode_error_keeps_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/current"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = client.current("rig-1").await;
    match result {
        Err(ApiError::Deserialization { body, .. }) => assert_eq!(body, "not json"),
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

// ── History ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_history_returns_raw_payload() {
    let (server, client) = setup().await;

    let payload = json!({
        "Pump1_Wref_spm": [
            {"timestamp": 1700000000, "value": 80.0},
            {"timestamp": 1700000010, "value": 82.5},
        ],
    });

    Mock::given(method("GET"))
        .and(path("/history"))
        .and(query_param("edge", "rig-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&payload))
        .mount(&server)
        .await;

    let history = client.history("rig-1").await.unwrap();
    assert_eq!(history, payload);
}

// ── Customization store ─────────────────────────────────────────────

#[tokio::test]
async fn test_tag_customizations_filtering() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/tag-customization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"edge_id": "rig-1", "tag_id": "Pump1_Wref_spm", "key": "Gauge", "value": "{min=0;max=180}"},
            {"edge_id": "rig-1", "tag_id": "Pump1_Wref_spm", "key": "color", "value": "red"},
            {"edge_id": "rig-1", "tag_id": "other", "key": "led", "value": "{}"},
            {"edge_id": "rig-2", "tag_id": "Pump1_Wref_spm", "key": "chart", "value": "{}"},
        ])))
        .mount(&server)
        .await;

    let all = client.tag_customizations().await.unwrap();
    assert_eq!(all.len(), 4);

    let for_edge = client.tag_customizations_for_edge("rig-1").await.unwrap();
    assert_eq!(for_edge.len(), 3);

    let for_tag = client
        .tag_customizations_for_tag("rig-1", "Pump1_Wref_spm")
        .await
        .unwrap();
    assert_eq!(for_tag.len(), 2);
    assert_eq!(for_tag[0].key, "Gauge");
    assert_eq!(for_tag[0].value, "{min=0;max=180}");
}

#[tokio::test]
async fn test_edge_and_block_customizations() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/edge-customization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"edge_id": "rig-1", "key": "color", "value": "blue"},
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/block-customization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"block_id": "blk-9", "key": "isVisible", "value": "true"},
        ])))
        .mount(&server)
        .await;

    let edges = client.edge_customizations_for("rig-1").await.unwrap();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].key, "color");

    let blocks = client.block_customizations().await.unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].block_id, "blk-9");
}

#[tokio::test]
async fn test_not_found_detection() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/history"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client.history("missing").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(!err.is_transient());
}
