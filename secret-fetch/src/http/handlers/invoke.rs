use axum::{Json, body::Bytes, extract::State};

use crate::{
    SharedData,
    handler::{InvocationContext, LambdaResponse, parse_event},
};

/// Runs the function with the request body as its event.
///
/// The envelope is always returned with HTTP 200, the same way a direct
/// Lambda invoke reports a handled failure inside `statusCode`.
pub async fn handle_invoke(State(state): State<SharedData>, body: Bytes) -> Json<LambdaResponse> {
    let event = parse_event(&body);
    let context = InvocationContext::local();
    let result = state.handler.handle(&event, &context).await;

    Json(result.into_lambda_response())
}
