//! Merge planning - pure functions for the merge decision
//!
//! No I/O happens here. The executor fetches data and feeds it through
//! these checks, which makes every branch of the decision unit-testable.

use crate::types::{EngineSettings, MergeCommentEvent, PullRequestView};
use serde::Deserialize;
use tracing::{debug, warn};

/// Commit message used for every squash merge
pub const COMMIT_MESSAGE: &str = "PR automatically merged";

/// Merges are always squashed
pub const MERGE_METHOD: &str = "squash";

/// Terminal result of a decision run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The pull request was merged
    Merged {
        /// API URL of the merged PR
        url: String,
    },
    /// The issue is closed
    NotOpen,
    /// PR details could not be fetched or decoded
    FetchFailed,
    /// GitHub does not consider the PR mergeable
    NotMergeable,
    /// Author restriction is on and someone else asked for the merge
    AuthorMismatch,
    /// The merge endpoint answered with a body that is not JSON
    UnreadableMergeResponse,
    /// GitHub refused the merge
    Rejected {
        /// HTTP status of the merge response, if one arrived
        status: Option<u16>,
        /// GitHub's explanation, quotes already sanitized
        message: String,
    },
}

impl MergeOutcome {
    /// Whether the PR was merged
    pub const fn is_merged(&self) -> bool {
        matches!(self, Self::Merged { .. })
    }

    /// Comment to post back on the PR. Empty means nothing to say.
    pub fn comment(&self) -> String {
        match self {
            Self::Merged { .. } => String::new(),
            Self::NotOpen => "Pull request is not open.".to_string(),
            Self::FetchFailed => "Error fetching pull request details. Try again.".to_string(),
            Self::NotMergeable => {
                "Pull Request is not mergeable. Make sure there is approval and status checks have passed."
                    .to_string()
            }
            Self::AuthorMismatch => {
                "Merge request comment must be made by the pull request author.".to_string()
            }
            Self::UnreadableMergeResponse => {
                "Error fetching merge request response details.".to_string()
            }
            Self::Rejected { message, .. } if !message.is_empty() => message.clone(),
            Self::Rejected {
                status: Some(status),
                ..
            } => format!("Merge failed with status {status}."),
            Self::Rejected { status: None, .. } => "Merge failed.".to_string(),
        }
    }
}

impl std::fmt::Display for MergeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.comment())
    }
}

/// Only open issues can be merged
pub fn check_open(event: &MergeCommentEvent) -> Option<MergeOutcome> {
    (event.issue_state != "open").then_some(MergeOutcome::NotOpen)
}

/// Find the first reason the PR must not be merged, if any.
///
/// Mergeability is checked before the author restriction, so a PR that
/// cannot be merged says so regardless of who asked.
pub fn check_eligibility(
    event: &MergeCommentEvent,
    pr: &PullRequestView,
    settings: &EngineSettings,
) -> Option<MergeOutcome> {
    if !pr.is_mergeable() {
        return Some(MergeOutcome::NotMergeable);
    }
    if settings.restrict_merge_to_author && pr.author_login != event.comment_author_login {
        return Some(MergeOutcome::AuthorMismatch);
    }
    None
}

/// JSON body for the merge endpoint: a squash pinned to the head SHA
pub fn merge_request_payload(pr: &PullRequestView) -> String {
    serde_json::json!({
        "commit_title": pr.title,
        "commit_message": COMMIT_MESSAGE,
        "sha": pr.head_sha,
        "merge_method": MERGE_METHOD,
    })
    .to_string()
}

/// Swap double quotes for single quotes so the text renders in a comment
pub fn sanitize_message(message: &str) -> String {
    message.replace('"', "'")
}

#[derive(Deserialize)]
struct MergeResponseBody {
    #[serde(default)]
    message: Option<String>,
}

/// Turn the merge endpoint's answer into an outcome.
///
/// The body is decoded before the status is looked at; a body that is not
/// JSON is reported as such whatever the status.
pub fn interpret_merge_response(status: Option<u16>, body: &[u8], pr_url: &str) -> MergeOutcome {
    let decoded: MergeResponseBody = match serde_json::from_slice(body) {
        Ok(decoded) => decoded,
        Err(e) => {
            warn!(?status, error = %e, "failed to decode merge response");
            return MergeOutcome::UnreadableMergeResponse;
        }
    };
    let message = sanitize_message(decoded.message.as_deref().unwrap_or_default());

    match status {
        Some(200) => MergeOutcome::Merged {
            url: pr_url.to_string(),
        },
        Some(405 | 409) => {
            debug!(?status, %message, "merge rejected");
            MergeOutcome::Rejected { status, message }
        }
        _ => {
            warn!(
                ?status,
                body = %String::from_utf8_lossy(body),
                "unexpected response from pull request merge API"
            );
            MergeOutcome::Rejected { status, message }
        }
    }
}
