//! Service configuration
//!
//! Every option can be given as a flag or through the environment, which is
//! how the service is normally deployed.

use std::net::SocketAddr;

use clap::Parser;
use tracing::warn;
use url::Url;

use crate::auth::Credentials;
use crate::error::{Error, Result};
use crate::platform::github::GITHUB_API_BASE_URL;
use crate::types::EngineSettings;

/// Runtime configuration for the webhook service
#[derive(Clone, Parser)]
#[command(name = "please-merge", version, about, long_about = None)]
pub struct Config {
    /// GitHub username used for API calls
    #[arg(long, env = "GITHUB_USERNAME", hide_env_values = true)]
    pub github_username: String,

    /// GitHub personal access token used for API calls
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: String,

    /// Only honor merge comments from the PR author (default: true)
    #[arg(long, env = "RESTRICT_MERGE_REQUESTER")]
    pub restrict_merge_requester: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// GitHub API base URL (set for GitHub Enterprise)
    #[arg(long, env = "GITHUB_API_URL", default_value = GITHUB_API_BASE_URL)]
    pub github_api_url: Url,
}

impl Config {
    /// Refuse to start without credentials
    pub fn validate(&self) -> Result<()> {
        if self.github_username.trim().is_empty() || self.github_token.trim().is_empty() {
            return Err(Error::Config(
                "GitHub username or token not set, cannot start application".to_string(),
            ));
        }
        Ok(())
    }

    /// Credentials for the GitHub client
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.github_username, &self.github_token)
    }

    /// Settings handed to every decision run
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            restrict_merge_to_author: parse_restrict_flag(self.restrict_merge_requester.as_deref()),
            api_base_url: self.github_api_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    /// Address the server binds to
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Resolve the author-restriction flag.
///
/// Unset or empty means restricted. Anything that is not a recognised
/// boolean spelling means unrestricted.
pub fn parse_restrict_flag(raw: Option<&str>) -> bool {
    match raw.map(str::trim) {
        None | Some("") => true,
        Some("1" | "t" | "T" | "true" | "TRUE" | "True") => true,
        Some("0" | "f" | "F" | "false" | "FALSE" | "False") => false,
        Some(other) => {
            warn!(value = other, "unrecognised RESTRICT_MERGE_REQUESTER value, not restricting");
            false
        }
    }
}
