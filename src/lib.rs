//! please-merge: merge GitHub pull requests on a "please merge" comment
//!
//! An `issue_comment` webhook arrives, the merge engine decides whether the
//! referenced pull request can be squash-merged, and anything that prevents
//! the merge is explained back to the commenter.
//!
//! Layers, leaves first:
//! - [`retry`] - retrying executor for remote calls
//! - [`platform`] - the `RemoteCall` seam and its GitHub implementation
//! - [`merge`] - the merge decision engine
//! - [`webhook`] - HTTP endpoints feeding events into the engine

pub mod auth;
pub mod config;
pub mod error;
pub mod merge;
pub mod platform;
pub mod retry;
pub mod types;
pub mod webhook;
