//! HTTP server for the merge bot.
//!
//! # Endpoints
//!
//! - `POST /` - Accepts GitHub `issue_comment` webhook deliveries
//! - `GET /health` - Returns 200 if server is running

use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tracing::debug;

use crate::platform::RemoteCall;
use crate::types::EngineSettings;

pub mod events;
pub mod handler;

pub use events::IssueCommentPayload;
pub use handler::{MERGE_COMMENT, WebhookError, process_issue_comment, webhook_handler};

/// Shared application state.
///
/// Passed to handlers via Axum's `State` extractor. Read-only once built.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Capability used for every GitHub call.
    remote: Arc<dyn RemoteCall>,

    /// Settings for each decision run.
    settings: EngineSettings,
}

impl AppState {
    /// Creates a new `AppState`.
    pub fn new(remote: Arc<dyn RemoteCall>, settings: EngineSettings) -> Self {
        Self {
            inner: Arc::new(AppStateInner { remote, settings }),
        }
    }

    /// Returns the remote-call capability.
    pub fn remote(&self) -> &dyn RemoteCall {
        self.inner.remote.as_ref()
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.inner.settings
    }
}

/// Health check handler.
pub async fn health_handler() -> (StatusCode, &'static str) {
    debug!("request made to /health");
    (StatusCode::OK, "OK")
}

/// Builds the router with all endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(webhook_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}
