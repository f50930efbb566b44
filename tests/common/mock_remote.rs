//! Mock remote-call capability for testing

use async_trait::async_trait;
use please_merge::error::RemoteError;
use please_merge::platform::RemoteCall;
use please_merge::types::{Method, RemoteResponse};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// One recorded call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    pub url: String,
    pub method: Method,
    pub payload: String,
}

/// Simple mock remote for testing
///
/// Features:
/// - Queued responses per method + URL, served in order
/// - Call tracking for verification
/// - Unconfigured calls fail with a transport error
#[derive(Default)]
pub struct MockRemote {
    responses: Mutex<HashMap<(Method, String), VecDeque<RemoteResponse>>>,
    calls: Mutex<Vec<CallRecord>>,
}

impl MockRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response for `method` + `url`
    pub fn push_response(&self, method: Method, url: &str, response: RemoteResponse) {
        self.responses
            .lock()
            .unwrap()
            .entry((method, url.to_string()))
            .or_default()
            .push_back(response);
    }

    /// Queue an HTTP answer, classified the way the GitHub client does
    pub fn respond(&self, method: Method, url: &str, status: u16, body: &str) {
        let error = match status {
            500.. => Some(RemoteError::Server(status)),
            400..=499 => Some(RemoteError::Client(status)),
            _ => None,
        };
        self.push_response(
            method,
            url,
            RemoteResponse {
                body: body.as_bytes().to_vec(),
                status_code: Some(status),
                error,
            },
        );
    }

    /// Queue a transport failure (no response at all)
    pub fn fail(&self, method: Method, url: &str, msg: &str) {
        self.push_response(
            method,
            url,
            RemoteResponse::failed(RemoteError::Transport(msg.to_string())),
        );
    }

    // === Call tracking ===

    /// All calls, in order
    pub fn calls(&self) -> Vec<CallRecord> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls made with `method`
    pub fn calls_with(&self, method: Method) -> Vec<CallRecord> {
        self.calls()
            .into_iter()
            .filter(|c| c.method == method)
            .collect()
    }

    /// Total number of calls
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Assert no merge was attempted
    pub fn assert_no_merge(&self) {
        assert!(
            self.calls_with(Method::Put).is_empty(),
            "expected no merge attempt, got {:?}",
            self.calls_with(Method::Put)
        );
    }
}

#[async_trait]
impl RemoteCall for MockRemote {
    async fn call(&self, url: &str, method: Method, payload: &str) -> RemoteResponse {
        self.calls.lock().unwrap().push(CallRecord {
            url: url.to_string(),
            method,
            payload: payload.to_string(),
        });

        self.responses
            .lock()
            .unwrap()
            .get_mut(&(method, url.to_string()))
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| {
                RemoteResponse::failed(RemoteError::Transport(format!(
                    "no response configured for {method} {url}"
                )))
            })
    }
}
