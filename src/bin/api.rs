use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tweetrelay::clients::TwitterClient;
use tweetrelay::core::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tweetrelay::setup_logging();

    let config = AppConfig::from_env().context("loading configuration")?;
    info!(api_base_url = %config.api_base_url, "Configuration loaded");

    let twitter = Arc::new(TwitterClient::from_config(&config));
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;

    tweetrelay::api::serve(listener, twitter).await?;
    Ok(())
}
