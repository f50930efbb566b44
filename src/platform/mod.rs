//! Remote-call capability
//!
//! The merge engine never talks to the network itself; it is handed a
//! [`RemoteCall`] implementation. Production uses [`GitHubClient`], tests
//! substitute a double.

pub mod github;

pub use github::GitHubClient;

use crate::types::{Method, RemoteResponse};
use async_trait::async_trait;

/// Performs one logical API call
///
/// Implementations own authentication, transport and retry. Failures are
/// reported through [`RemoteResponse::error`], never as a panic.
#[async_trait]
pub trait RemoteCall: Send + Sync {
    /// Send `payload` (JSON, may be empty) to `url` with `method`
    async fn call(&self, url: &str, method: Method, payload: &str) -> RemoteResponse;
}
