//! Shared test fixtures

#![allow(dead_code)]

mod mock_remote;

pub use mock_remote::{CallRecord, MockRemote};

use please_merge::platform::github::{
    GITHUB_API_BASE_URL, issue_comments_url, merge_url, pull_request_url,
};
use please_merge::types::{EngineSettings, MergeCommentEvent};
use please_merge::webhook::IssueCommentPayload;

/// Repository used by every fixture
pub const REPO: &str = "octo/hello";

/// PR number used by every fixture
pub const PR_NUMBER: u64 = 7;

/// Login of the PR author in [`pr_json`]
pub const AUTHOR: &str = "octocat";

/// `GET` URL of the fixture PR
pub fn pr_url() -> String {
    pull_request_url(GITHUB_API_BASE_URL, REPO, PR_NUMBER)
}

/// `PUT` URL of the fixture PR
pub fn pr_merge_url() -> String {
    merge_url(GITHUB_API_BASE_URL, REPO, PR_NUMBER)
}

/// `POST` URL for comments on the fixture PR
pub fn pr_comments_url() -> String {
    issue_comments_url(GITHUB_API_BASE_URL, REPO, PR_NUMBER)
}

/// GitHub-shaped pull request body
pub fn pr_json(mergeable: bool, author: &str) -> String {
    serde_json::json!({
        "url": pr_url(),
        "number": PR_NUMBER,
        "state": "open",
        "title": "Add \"hello\" greeting",
        "head": { "sha": "abc123", "ref": "feature" },
        "mergeable": mergeable,
        "user": { "login": author }
    })
    .to_string()
}

/// Open merge comment on the fixture PR
pub fn merge_event(commenter: &str) -> MergeCommentEvent {
    MergeCommentEvent {
        issue_state: "open".to_string(),
        issue_number: PR_NUMBER,
        repository_full_name: REPO.to_string(),
        pull_request_url: Some(pr_url()),
        comment_author_login: commenter.to_string(),
    }
}

/// Settings with author restriction on (the default)
pub fn restricted() -> EngineSettings {
    EngineSettings::default()
}

/// Settings with author restriction off
pub fn unrestricted() -> EngineSettings {
    EngineSettings {
        restrict_merge_to_author: false,
        ..EngineSettings::default()
    }
}

/// `issue_comment` webhook body
pub fn issue_comment_json(
    comment: &str,
    commenter: &str,
    on_pull_request: bool,
) -> serde_json::Value {
    let mut issue = serde_json::json!({
        "number": PR_NUMBER,
        "state": "open",
        "html_url": format!("https://github.com/{REPO}/pull/{PR_NUMBER}"),
    });
    if on_pull_request {
        issue["pull_request"] = serde_json::json!({ "url": pr_url() });
    }
    serde_json::json!({
        "action": "created",
        "issue": issue,
        "repository": { "full_name": REPO },
        "comment": {
            "body": comment,
            "html_url": format!("https://github.com/{REPO}/pull/{PR_NUMBER}#issuecomment-1"),
            "user": { "login": commenter }
        }
    })
}

/// Parsed `issue_comment` payload
pub fn issue_comment(comment: &str, commenter: &str, on_pull_request: bool) -> IssueCommentPayload {
    serde_json::from_value(issue_comment_json(comment, commenter, on_pull_request)).unwrap()
}
