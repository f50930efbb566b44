//! Core types for please-merge

use crate::error::RemoteError;
use serde::Deserialize;

/// HTTP method used for a remote call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Read a resource
    Get,
    /// Replace a resource (the merge endpoint)
    Put,
    /// Create a resource (issue comments)
    Post,
}

impl Method {
    /// Upper-case method name as sent on the wire
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one remote call
///
/// `error` is `None` on success. The body and status are kept even when an
/// error is present, since GitHub explains most rejections in the body.
/// `E` is [`RemoteError`] everywhere except inside the retry loop, where
/// operations report a [`ClassifiedError`](crate::retry::ClassifiedError).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteResponse<E = RemoteError> {
    /// Raw response body (empty when no response arrived)
    pub body: Vec<u8>,
    /// HTTP status, `None` when no response arrived
    pub status_code: Option<u16>,
    /// Failure cause, `None` on success
    pub error: Option<E>,
}

impl<E> RemoteResponse<E> {
    /// A successful response
    pub fn success(status_code: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: body.into(),
            status_code: Some(status_code),
            error: None,
        }
    }

    /// A call that failed before any response was received
    pub const fn failed(error: E) -> Self {
        Self {
            body: Vec::new(),
            status_code: None,
            error: Some(error),
        }
    }

    /// Whether the call succeeded
    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Body as text, for logging
    pub fn body_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Convert the error type, keeping body and status
    pub fn map_error<F, T>(self, f: F) -> RemoteResponse<T>
    where
        F: FnOnce(E) -> T,
    {
        RemoteResponse {
            body: self.body,
            status_code: self.status_code,
            error: self.error.map(f),
        }
    }
}

/// The parts of a GitHub pull request the merge engine looks at
///
/// Decoded fresh from the API on every decision run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "PullRequestWire")]
pub struct PullRequestView {
    /// API URL of the pull request
    pub url: String,
    /// SHA of the head commit; the merge is pinned to it
    pub head_sha: String,
    /// Whether GitHub considers the PR mergeable
    /// - `Some(true)` = mergeable
    /// - `Some(false)` = conflicts or blocked
    /// - `None` = unknown (GitHub still computing)
    pub mergeable: Option<bool>,
    /// PR title, reused as the squash commit title
    pub title: String,
    /// Login of the PR author
    pub author_login: String,
}

impl PullRequestView {
    /// Only a definite `true` counts as mergeable
    pub fn is_mergeable(&self) -> bool {
        self.mergeable == Some(true)
    }
}

#[derive(Deserialize)]
struct PullRequestWire {
    #[serde(default)]
    url: String,
    #[serde(default)]
    head: HeadWire,
    #[serde(default)]
    mergeable: Option<bool>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    user: UserWire,
}

#[derive(Default, Deserialize)]
struct HeadWire {
    #[serde(default)]
    sha: String,
}

#[derive(Default, Deserialize)]
struct UserWire {
    #[serde(default)]
    login: String,
}

impl From<PullRequestWire> for PullRequestView {
    fn from(pr: PullRequestWire) -> Self {
        Self {
            url: pr.url,
            head_sha: pr.head.sha,
            mergeable: pr.mergeable,
            title: pr.title,
            author_login: pr.user.login,
        }
    }
}

/// A merge request comment, as seen by the merge engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeCommentEvent {
    /// Issue state ("open", "closed")
    pub issue_state: String,
    /// Issue / PR number
    pub issue_number: u64,
    /// Repository in `owner/name` form
    pub repository_full_name: String,
    /// Pull request API URL, `None` when the comment is on a plain issue
    pub pull_request_url: Option<String>,
    /// Login of whoever wrote the comment
    pub comment_author_login: String,
}

/// Read-only settings for a decision run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    /// Only honor merge comments written by the PR author
    pub restrict_merge_to_author: bool,
    /// GitHub API base URL, e.g. `https://api.github.com`
    pub api_base_url: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            restrict_merge_to_author: true,
            api_base_url: crate::platform::github::GITHUB_API_BASE_URL.to_string(),
        }
    }
}
