//! `issue_comment` webhook payload

use crate::types::MergeCommentEvent;
use serde::Deserialize;

/// The subset of GitHub's `issue_comment` delivery the bot reads
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IssueCommentPayload {
    /// Issue (or PR) the comment was made on
    pub issue: Issue,
    /// Repository the issue lives in
    pub repository: Repository,
    /// The comment itself
    pub comment: Comment,
}

/// Issue section of the payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Issue {
    /// Issue number (shared with the PR number)
    pub number: u64,
    /// "open" or "closed"
    pub state: String,
    /// Web URL of the issue
    pub html_url: String,
    /// Present only when the issue is a pull request
    pub pull_request: Option<IssuePullRequest>,
}

/// Pull request link on an issue
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IssuePullRequest {
    /// API URL of the pull request
    pub url: String,
}

/// Repository section of the payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Repository {
    /// `owner/name`
    pub full_name: String,
}

/// Comment section of the payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Comment {
    /// Comment text
    pub body: String,
    /// Web URL of the comment
    pub html_url: String,
    /// Comment author
    pub user: User,
}

/// A GitHub user
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct User {
    /// Login name
    pub login: String,
}

impl IssueCommentPayload {
    /// Pull request URL, if the comment is on a PR rather than a plain issue
    pub fn pull_request_url(&self) -> Option<&str> {
        self.issue
            .pull_request
            .as_ref()
            .map(|pr| pr.url.as_str())
            .filter(|url| !url.is_empty())
    }
}

impl From<&IssueCommentPayload> for MergeCommentEvent {
    fn from(payload: &IssueCommentPayload) -> Self {
        Self {
            issue_state: payload.issue.state.clone(),
            issue_number: payload.issue.number,
            repository_full_name: payload.repository.full_name.clone(),
            pull_request_url: payload.pull_request_url().map(str::to_string),
            comment_author_login: payload.comment.user.login.clone(),
        }
    }
}
