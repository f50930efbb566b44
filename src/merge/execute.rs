//! Merge execution - effectful operations
//!
//! Walks a single decision run: check the issue is open, fetch the PR,
//! check eligibility, attempt the squash merge and interpret the answer.
//! Each step either ends the run with an outcome or moves on to the next.

use crate::merge::plan::{
    MergeOutcome, check_eligibility, check_open, interpret_merge_response, merge_request_payload,
};
use crate::platform::RemoteCall;
use crate::platform::github::{merge_url, pull_request_url};
use crate::types::{EngineSettings, MergeCommentEvent, Method, PullRequestView};
use tracing::{debug, info, warn};

/// Decide whether to merge the PR a merge comment refers to, and do it.
///
/// Remote failures are logged here and only ever reach the user as one of
/// the fixed [`MergeOutcome`] comments; GitHub's own `message` is the only
/// remote text echoed back.
pub async fn decide(
    event: &MergeCommentEvent,
    remote: &dyn RemoteCall,
    settings: &EngineSettings,
) -> MergeOutcome {
    let repo = event.repository_full_name.as_str();
    let pr_number = event.issue_number;

    if let Some(outcome) = check_open(event) {
        debug!(repo, pr_number, state = %event.issue_state, "issue is not open");
        return outcome;
    }

    let url = pull_request_url(&settings.api_base_url, repo, pr_number);
    let response = remote.call(&url, Method::Get, "").await;
    if let Some(error) = &response.error {
        warn!(
            repo,
            pr_number,
            %error,
            body = %response.body_text(),
            "failed to get the pull request details"
        );
        return MergeOutcome::FetchFailed;
    }

    let pr: PullRequestView = match serde_json::from_slice(&response.body) {
        Ok(pr) => pr,
        Err(e) => {
            warn!(repo, pr_number, error = %e, "failed to decode the pull request details");
            return MergeOutcome::FetchFailed;
        }
    };

    if let Some(outcome) = check_eligibility(event, &pr, settings) {
        info!(
            repo,
            pr_number,
            mergeable = ?pr.mergeable,
            author = %pr.author_login,
            requester = %event.comment_author_login,
            ?outcome,
            "not merging"
        );
        return outcome;
    }

    let url = merge_url(&settings.api_base_url, repo, pr_number);
    let merge_response = remote
        .call(&url, Method::Put, &merge_request_payload(&pr))
        .await;
    debug!(
        repo,
        pr_number,
        status = ?merge_response.status_code,
        body = %merge_response.body_text(),
        "merge response"
    );
    if let Some(error) = &merge_response.error {
        debug!(repo, pr_number, %error, "merge call reported an error");
    }

    let outcome = interpret_merge_response(
        merge_response.status_code,
        &merge_response.body,
        &pr.url,
    );
    if let MergeOutcome::Merged { url } = &outcome {
        info!(repo, pr_number, url = %url, "merged pull request");
    }
    outcome
}

/// [`decide`], rendered as the comment to post (empty for none)
pub async fn decide_comment(
    event: &MergeCommentEvent,
    remote: &dyn RemoteCall,
    settings: &EngineSettings,
) -> String {
    decide(event, remote, settings).await.comment()
}
