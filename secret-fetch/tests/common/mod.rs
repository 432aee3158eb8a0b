#![allow(dead_code)]

use axum::{
    Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::get,
};
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::net::TcpListener;

pub const TEST_TOKEN: &str = "hvs.test-token";
pub const VALID_SECRET: &str = r#"{"request_id":"6f2c","data":{"data":{"api_key":"abcd1234"},"metadata":{"version":1}}}"#;

#[derive(Clone)]
pub enum Reply {
    Body(u16, &'static str),
    Slow(Duration),
}

#[derive(Clone, Debug, Default)]
pub struct Recorded {
    pub path: String,
    pub token: Option<String>,
    pub namespace: Option<String>,
}

pub struct MockVault {
    pub addr: String,
    pub requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockVault {
    pub fn recorded(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

type VaultState = (Reply, Arc<Mutex<Vec<Recorded>>>);

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn vault_read(
    State((reply, requests)): State<VaultState>,
    Path(path): Path<String>,
    headers: HeaderMap,
) -> Response {
    requests.lock().unwrap().push(Recorded {
        path,
        token: header(&headers, "x-vault-token"),
        namespace: header(&headers, "x-vault-namespace"),
    });

    match reply {
        Reply::Body(status, body) => (
            StatusCode::from_u16(status).unwrap(),
            [(CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Reply::Slow(delay) => {
            tokio::time::sleep(delay).await;
            (StatusCode::OK, [(CONTENT_TYPE, "application/json")], VALID_SECRET).into_response()
        }
    }
}

pub async fn start_server(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

pub async fn start_mock_vault(reply: Reply) -> MockVault {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/v1/{*path}", get(vault_read))
        .with_state((reply, Arc::clone(&requests)));

    MockVault {
        addr: start_server(app).await,
        requests,
    }
}
