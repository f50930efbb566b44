//! Merge decision engine
//!
//! Two-part pattern:
//! 1. Plan - eligibility checks and response interpretation (pure, testable)
//! 2. Execute - fetch the PR and attempt the merge through a `RemoteCall`

mod execute;
mod plan;

pub use execute::{decide, decide_comment};
pub use plan::{
    COMMIT_MESSAGE, MERGE_METHOD, MergeOutcome, check_eligibility, check_open,
    interpret_merge_response, merge_request_payload, sanitize_message,
};
