/// tweetrelay - a small HTTP service that posts and deletes tweets on behalf of
/// a single pre-authorized Twitter account.
///
/// # Architecture
///
/// The system uses:
/// - axum for the two HTTP endpoints (`POST /tweet`, `POST /delete`)
/// - reqwest with OAuth 1.0a signing for the Twitter v1.1 API
/// - a fixed error table that turns Twitter failures into a JSON envelope
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use tweetrelay::clients::TwitterClient;
/// use tweetrelay::core::config::{AppConfig, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     tweetrelay::setup_logging();
///
///     let config = AppConfig {
///         credentials: Credentials {
///             consumer_key: "dummy_consumer_key".to_string(),
///             consumer_secret: "dummy_consumer_secret".to_string(),
///             access_token: "dummy_access_token".to_string(),
///             access_secret: "dummy_access_secret".to_string(),
///         },
///         api_base_url: "https://api.twitter.com/1.1".to_string(),
///         listen_addr: "127.0.0.1:8080".parse()?,
///     };
///
///     let twitter = Arc::new(TwitterClient::from_config(&config));
///     let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
///     tweetrelay::api::serve(listener, twitter).await?;
///     Ok(())
/// }
/// ```
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;

pub use errors::TwitterError;

/// Configure structured logging with JSON output.
///
/// Verbosity follows `RUST_LOG` and defaults to `info`. Calling this more than
/// once is harmless; later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// tweetrelay::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
