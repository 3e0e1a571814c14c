use std::env;
use std::fmt;
use std::net::SocketAddr;

use crate::errors::TwitterError;

pub const DEFAULT_API_BASE_URL: &str = "https://api.twitter.com/1.1";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// OAuth 1.0a user-context credentials, obtained out of band.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[redacted]")
            .field("access_token", &self.access_token)
            .field("access_secret", &"[redacted]")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub credentials: Credentials,
    pub api_base_url: String,
    pub listen_addr: SocketAddr,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `TwitterError::Config` if a credential is missing or
    /// `LISTEN_ADDR` is not a socket address.
    pub fn from_env() -> Result<Self, TwitterError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TwitterError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            get(key).ok_or_else(|| TwitterError::Config(format!("{key}: environment variable not found")))
        };

        let credentials = Credentials {
            consumer_key: required("TWITTER_CONSUMER_KEY")?,
            consumer_secret: required("TWITTER_CONSUMER_SECRET")?,
            access_token: required("TWITTER_ACCESS_TOKEN")?,
            access_secret: required("TWITTER_ACCESS_SECRET")?,
        };

        let api_base_url = get("TWITTER_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let listen_raw = get("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_raw
            .parse::<SocketAddr>()
            .map_err(|e| TwitterError::Config(format!("LISTEN_ADDR: {e}")))?;

        Ok(Self {
            credentials,
            api_base_url,
            listen_addr,
        })
    }
}
