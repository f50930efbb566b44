//! Webhook endpoint handler.
//!
//! Acknowledges the delivery straight away and processes the comment on a
//! background task, so GitHub never waits on the merge API.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::AppState;
use super::events::IssueCommentPayload;
use crate::merge::decide_comment;
use crate::platform::RemoteCall;
use crate::platform::github::issue_comments_url;
use crate::types::{EngineSettings, MergeCommentEvent, Method};

/// Comment text that triggers a merge (compared case-insensitively)
pub const MERGE_COMMENT: &str = "please merge";

/// Header name for GitHub event type.
const HEADER_EVENT: &str = "x-github-event";

/// Event type the bot acts on.
const ISSUE_COMMENT_EVENT: &str = "issue_comment";

/// Errors that can occur when accepting a webhook.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Invalid JSON body.
    #[error("could not parse body: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidJson(_) => StatusCode::BAD_REQUEST,
        };
        (status, self.to_string()).into_response()
    }
}

/// Whether a comment body asks for a merge
pub fn is_merge_comment(body: &str) -> bool {
    body.trim().to_lowercase() == MERGE_COMMENT
}

/// Webhook handler.
///
/// - 200 OK: delivery accepted (processing continues in the background),
///   or ignored because it is not an `issue_comment` event
/// - 400 Bad Request: body is not valid JSON
pub async fn webhook_handler(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, &'static str), WebhookError> {
    if let Some(event_type) = headers.get(HEADER_EVENT).and_then(|v| v.to_str().ok())
        && event_type != ISSUE_COMMENT_EVENT
    {
        debug!(event_type, "ignoring delivery");
        return Ok((StatusCode::OK, "OK"));
    }

    let payload: IssueCommentPayload = serde_json::from_slice(&body)?;

    tokio::spawn(async move {
        process_issue_comment(&payload, app_state.remote(), app_state.settings()).await;
    });

    Ok((StatusCode::OK, "OK"))
}

/// Act on one `issue_comment` delivery.
///
/// Ignores comments that are not merge requests and comments on plain
/// issues. Otherwise runs the merge engine and, when it has something to
/// say, posts it back on the PR. Returns the comment that was posted.
pub async fn process_issue_comment(
    payload: &IssueCommentPayload,
    remote: &dyn RemoteCall,
    settings: &EngineSettings,
) -> Option<String> {
    if !is_merge_comment(&payload.comment.body) {
        debug!(url = %payload.comment.html_url, "comment was not '{MERGE_COMMENT}'");
        return None;
    }

    if payload.pull_request_url().is_none() {
        info!(url = %payload.comment.html_url, "merge comment on an issue, not a pull request");
        return None;
    }

    let event = MergeCommentEvent::from(payload);
    let comment = decide_comment(&event, remote, settings).await;
    if comment.is_empty() {
        return None;
    }

    info!(
        pr_number = event.issue_number,
        repo = %event.repository_full_name,
        url = %payload.issue.html_url,
        %comment,
        "commenting on pull request"
    );
    let url = issue_comments_url(
        &settings.api_base_url,
        &event.repository_full_name,
        event.issue_number,
    );
    let body = serde_json::json!({ "body": comment }).to_string();
    let response = remote.call(&url, Method::Post, &body).await;
    if let Some(error) = &response.error {
        warn!(
            url = %payload.issue.html_url,
            %error,
            body = %response.body_text(),
            "failed to comment on the pull request"
        );
    }

    Some(comment)
}
