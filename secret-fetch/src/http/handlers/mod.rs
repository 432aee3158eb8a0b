use crate::SharedData;
use axum::{
    Json, Router,
    routing::{get, post},
};
use serde_json::json;

pub mod invoke;

pub fn application_routes(api_prefix: &str, shared_data: SharedData) -> Router {
    let all_handlers = Router::new()
        .route("/health", get(|| async { Json(json!({ "status": "OK" })) }))
        .route("/invoke", post(invoke::handle_invoke));

    let router = if api_prefix.is_empty() || api_prefix == "/" {
        Router::new().merge(all_handlers)
    } else {
        Router::new().nest(api_prefix, all_handlers)
    };
    router.with_state(shared_data)
}
