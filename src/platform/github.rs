//! GitHub REST API client

use crate::auth::Credentials;
use crate::error::{Error, RemoteError, Result};
use crate::platform::RemoteCall;
use crate::retry::{self, ClassifiedError, RetryConfig};
use crate::types::{Method, RemoteResponse};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

/// Public GitHub API
pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";

/// `GET` target for a pull request
pub fn pull_request_url(base: &str, repository_full_name: &str, number: u64) -> String {
    format!(
        "{}/repos/{repository_full_name}/pulls/{number}",
        base.trim_end_matches('/')
    )
}

/// `PUT` target that merges a pull request
pub fn merge_url(base: &str, repository_full_name: &str, number: u64) -> String {
    format!("{}/merge", pull_request_url(base, repository_full_name, number))
}

/// `POST` target for comments on an issue or pull request
pub fn issue_comments_url(base: &str, repository_full_name: &str, number: u64) -> String {
    format!(
        "{}/repos/{repository_full_name}/issues/{number}/comments",
        base.trim_end_matches('/')
    )
}

/// Classify a received response for the retry loop.
///
/// 5xx is retried, 4xx stops immediately (the request itself is at fault),
/// anything below 400 is success.
pub fn classify(status: u16, body: Vec<u8>) -> RemoteResponse<ClassifiedError> {
    let error = match status {
        500.. => Some(ClassifiedError::Retryable(RemoteError::Server(status))),
        400..=499 => Some(ClassifiedError::Stop(RemoteError::Client(status))),
        _ => None,
    };
    RemoteResponse {
        body,
        status_code: Some(status),
        error,
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Put => reqwest::Method::PUT,
        Method::Post => reqwest::Method::POST,
    }
}

/// GitHub client using reqwest with basic auth
pub struct GitHubClient {
    http_client: Client,
    credentials: Credentials,
    retry: RetryConfig,
}

impl GitHubClient {
    /// Create a new GitHub client with the default retry policy
    pub fn new(credentials: Credentials) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(concat!("please-merge/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            credentials,
            retry: RetryConfig::DEFAULT,
        })
    }

    /// Override the retry policy
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// One attempt, classified for [`retry::execute`]
    async fn attempt(
        &self,
        url: &str,
        method: Method,
        payload: &str,
    ) -> RemoteResponse<ClassifiedError> {
        let sent = self
            .http_client
            .request(to_reqwest(method), url)
            .header(AUTHORIZATION, self.credentials.basic_auth_header())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/vnd.github+json")
            .body(payload.to_string())
            .send()
            .await;

        let response = match sent {
            Ok(response) => response,
            Err(e) => {
                return RemoteResponse::failed(ClassifiedError::Retryable(RemoteError::Transport(
                    e.to_string(),
                )));
            }
        };

        let status = response.status().as_u16();
        match response.bytes().await {
            Ok(body) => classify(status, body.to_vec()),
            Err(e) => RemoteResponse {
                body: Vec::new(),
                status_code: Some(status),
                error: Some(ClassifiedError::Retryable(RemoteError::Body(e.to_string()))),
            },
        }
    }
}

#[async_trait]
impl RemoteCall for GitHubClient {
    async fn call(&self, url: &str, method: Method, payload: &str) -> RemoteResponse {
        debug!(%method, url, "calling GitHub API");
        let response = retry::execute(self.retry, move || self.attempt(url, method, payload)).await;
        debug!(
            %method,
            url,
            status = ?response.status_code,
            ok = response.is_success(),
            "GitHub API call finished"
        );
        response
    }
}
