mod common;

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use common::{Reply, TEST_TOKEN, VALID_SECRET, start_mock_vault};
use secret_fetch::{
    SharedData, configs::FetchConfig, handler::SecretFetchHandler, http::application_routes,
};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn router_for(vault_addr: &str) -> axum::Router {
    let handler =
        SecretFetchHandler::from_config(FetchConfig::new(vault_addr, TEST_TOKEN)).unwrap();
    application_routes("", SharedData::new(handler))
}

async fn send(router: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health_endpoint() {
    let router = router_for("http://127.0.0.1:9").await;

    let request = Request::get("/health").body(Body::empty()).unwrap();
    let (status, json) = send(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "status": "OK" }));
}

#[tokio::test]
async fn test_invoke_success() {
    let vault = start_mock_vault(Reply::Body(200, VALID_SECRET)).await;
    let router = router_for(&vault.addr).await;

    let request = Request::post("/invoke")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"trigger":"manual"}"#))
        .unwrap();
    let (status, json) = send(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["statusCode"], 200);
    let body: Value = serde_json::from_str(json["body"].as_str().unwrap()).unwrap();
    assert_eq!(body["key_length"], 8);
}

#[tokio::test]
async fn test_invoke_empty_body() {
    let vault = start_mock_vault(Reply::Body(500, "{}")).await;
    let router = router_for(&vault.addr).await;

    let request = Request::post("/invoke").body(Body::empty()).unwrap();
    let (status, json) = send(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({ "statusCode": 500, "body": r#"{"error":"Vault HTTP error: 500"}"# })
    );
}

#[tokio::test]
async fn test_invoke_passes_non_json_event_through() {
    let vault = start_mock_vault(Reply::Body(200, VALID_SECRET)).await;
    let router = router_for(&vault.addr).await;

    let request = Request::post("/invoke")
        .body(Body::from("not json"))
        .unwrap();
    let (status, json) = send(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "statusCode": 200,
            "body": r#"{"message":"Secret fetched successfully","key_length":8}"#
        })
    );
    assert_eq!(vault.recorded().len(), 1);
}
