use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::routing::{get, post};
use axum::Router;
use tracing::{debug, error, info, warn};

use crate::pipeline::LabelPipeline;
use crate::webhook::{creation_bundle, EventKind, WebhookPayload};

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<LabelPipeline>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/webhook-handler", post(webhook_handler))
        .route("/debug-info", get(debug_info))
        .with_state(state)
}

/// Main route for tracker webhooks. The sender always gets `200 OK`: this
/// is a fire-and-forget consumer, and downstream failures are only logged.
async fn webhook_handler(State(state): State<AppState>, body: Bytes) -> &'static str {
    let payload: WebhookPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(error = %e, "Ignoring malformed webhook payload");
            return "OK";
        }
    };
    debug!(event = %payload.webhook_event, "Received webhook");

    match payload.kind() {
        EventKind::IssueCreated => handle_issue_created(&state, &payload).await,
        EventKind::IssueUpdated => {
            if let Some(issue) = &payload.issue {
                info!(issue_key = %issue.key, "Issue updated");
            }
        }
        EventKind::Other => {
            debug!(event = %payload.webhook_event, "Ignoring unhandled webhook event");
        }
    }

    "OK"
}

async fn handle_issue_created(state: &AppState, payload: &WebhookPayload) {
    let bundle = match creation_bundle(payload) {
        Ok(bundle) => bundle,
        Err(e) => {
            warn!(error = %e, "Dropping creation event with incomplete fields");
            return;
        }
    };
    info!(issue_key = %bundle.issue_key, "Issue created");
    debug!(text = %bundle.text, "Ticket text");

    if let Err(e) = state
        .pipeline
        .label_issue(&bundle.issue_key, &bundle.text)
        .await
    {
        error!(issue_key = %bundle.issue_key, error = %e, "Label pipeline failed");
    }
}

/// Debug route reporting the externally visible base URL of the service.
async fn debug_info(headers: HeaderMap) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("localhost");
    format!("This server is running at: {scheme}://{host}/")
}
