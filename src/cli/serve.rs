//! Serve command - run the webhook server

use std::sync::Arc;

use please_merge::config::Config;
use please_merge::error::Result;
use please_merge::platform::GitHubClient;
use please_merge::webhook::{AppState, build_router};
use tracing::info;

/// Validate configuration, then serve webhooks until the process exits
pub async fn run_serve(config: Config) -> Result<()> {
    info!("server starting");
    config.validate()?;

    let client = GitHubClient::new(config.credentials())?;
    let settings = config.engine_settings();
    info!(
        api = %settings.api_base_url,
        restrict_merge_to_author = settings.restrict_merge_to_author,
        "merge engine configured"
    );

    let app = build_router(AppState::new(Arc::new(client), settings));

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "server started");

    axum::serve(listener, app).await?;
    Ok(())
}
