//! Authentication for the GitHub API
//!
//! The bot authenticates with HTTP basic auth: a GitHub username plus a
//! personal access token.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// GitHub credentials used for every API call
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// GitHub username
    pub username: String,
    /// Personal access token
    pub token: String,
}

impl Credentials {
    /// Create credentials from a username and token
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
        }
    }

    /// Value for the `Authorization` header
    pub fn basic_auth_header(&self) -> String {
        let encoded = STANDARD.encode(format!("{}:{}", self.username, self.token));
        format!("Basic {encoded}")
    }
}

// Keep the token out of logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}
