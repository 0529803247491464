//! HTTP endpoints.
//!
//! - `GET /` answers a fixed liveness string.
//! - `POST /webhook` verifies the LINE signature over the raw body, then
//!   answers every text message before acknowledging.

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{error, instrument, warn};

use crate::{
    base::types::WebhookPayload,
    interaction::webhook_event::handle_webhook_payload,
    runtime::Runtime,
    service::chat::signature::{SIGNATURE_HEADER, verify_signature},
};

/// Liveness response body.
pub const LIVENESS_BODY: &str = "LINE Bot is running.";

/// Build the router for the relay.
pub fn router(runtime: Runtime) -> Router {
    Router::new().route("/", get(liveness)).route("/webhook", post(receive)).with_state(runtime)
}

/// Liveness endpoint (GET).
async fn liveness() -> &'static str {
    LIVENESS_BODY
}

/// Webhook receiver endpoint (POST).
///
/// # Returns
/// - 403 `Invalid signature` if the signature header is missing or wrong; nothing else happens.
/// - 200 `OK` otherwise, whatever the outcome of the outbound calls.
#[instrument(skip_all)]
async fn receive(State(runtime): State<Runtime>, headers: HeaderMap, body: Bytes) -> impl IntoResponse {
    let signature = headers.get(SIGNATURE_HEADER).and_then(|value| value.to_str().ok());

    let Some(signature) = signature else {
        warn!("Missing or unreadable {} header", SIGNATURE_HEADER);
        return (StatusCode::FORBIDDEN, "Invalid signature");
    };

    if !verify_signature(&body, signature, &runtime.config.line_channel_secret) {
        warn!("Signature error");
        return (StatusCode::FORBIDDEN, "Invalid signature");
    }

    let payload: WebhookPayload = match serde_json::from_slice(&body) {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to parse webhook payload: {}", e);
            WebhookPayload::default()
        }
    };

    handle_webhook_payload(payload, &runtime.config.fallback_reply, &runtime.llm, &runtime.chat).await;

    (StatusCode::OK, "OK")
}
