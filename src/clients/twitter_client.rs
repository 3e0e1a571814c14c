//! Twitter API client module
//!
//! Wraps the v1.1 REST endpoints the relay needs behind the [`TwitterApi`]
//! trait so handlers can be driven by any implementation.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{error, info};

use super::oauth::{authorization_header, current_timestamp, generate_nonce};
use crate::core::config::{AppConfig, Credentials};
use crate::core::models::Message;
use crate::errors::TwitterError;

/// Operations the relay performs against the remote platform.
#[async_trait]
pub trait TwitterApi: Send + Sync {
    /// Posts `text` as a new tweet.
    async fn post_message(&self, text: &str) -> Result<Message, TwitterError>;

    /// Returns the authenticated account's most recent tweet, or
    /// `TwitterError::NotFound` when the timeline is empty.
    async fn fetch_most_recent_message(&self) -> Result<Message, TwitterError>;

    /// Deletes the tweet and returns its last snapshot.
    async fn delete_message(&self, id: i64) -> Result<Message, TwitterError>;
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    errors: Vec<ApiErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEntry {
    #[serde(default)]
    code: Option<i64>,
    message: String,
}

/// Twitter v1.1 client signing every request with OAuth 1.0a.
pub struct TwitterClient {
    http: Client,
    credentials: Credentials,
    base_url: String,
}

impl TwitterClient {
    pub fn new(credentials: Credentials, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            credentials,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.credentials.clone(), config.api_base_url.clone())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn signed(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        form: &[(String, String)],
    ) -> Result<RequestBuilder, TwitterError> {
        let url = format!("{}{path}", self.base_url);

        let mut params = query.to_vec();
        params.extend(form.iter().cloned());
        let auth = authorization_header(
            &self.credentials,
            method.as_str(),
            &url,
            &params,
            &generate_nonce(),
            current_timestamp(),
        )?;

        let empty_post = form.is_empty() && method != Method::GET;
        let mut request = self
            .http
            .request(method, &url)
            .header(reqwest::header::AUTHORIZATION, auth);
        if !query.is_empty() {
            request = request.query(query);
        }
        if empty_post {
            request = request.header(reqwest::header::CONTENT_LENGTH, "0");
        } else if !form.is_empty() {
            request = request.form(form);
        }
        Ok(request)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        operation: &str,
    ) -> Result<T, TwitterError> {
        let response = request.send().await.map_err(|e| {
            error!(operation, "Twitter request failed: {}", e);
            TwitterError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let detail = error_detail(response).await;
            error!(operation, status = status.as_u16(), "Twitter API error: {}", detail);
            return Err(TwitterError::Remote { status, detail });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            error!(operation, "Unexpected Twitter payload: {}", e);
            TwitterError::from(e)
        })
    }
}

async fn error_detail(response: Response) -> String {
    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(parsed) => match parsed.errors.first() {
            Some(ApiErrorEntry {
                code: Some(code),
                message,
            }) => format!("{message} (code {code})"),
            Some(ApiErrorEntry { message, .. }) => message.clone(),
            None => body,
        },
        Err(_) => body,
    }
}

fn log_text(text: &str) -> String {
    #[cfg(feature = "debug-logs")]
    {
        text.to_string()
    }
    #[cfg(not(feature = "debug-logs"))]
    {
        format!("[{} chars masked, enable debug-logs to view]", text.chars().count())
    }
}

#[async_trait]
impl TwitterApi for TwitterClient {
    async fn post_message(&self, text: &str) -> Result<Message, TwitterError> {
        info!("Posting tweet: {}", log_text(text));
        let form = [("status".to_string(), text.to_string())];
        let request = self.signed(Method::POST, "/statuses/update.json", &[], &form)?;
        let message: Message = self.execute(request, "statuses/update").await?;
        info!(tweet_id = message.id, "Tweet posted");
        Ok(message)
    }

    async fn fetch_most_recent_message(&self) -> Result<Message, TwitterError> {
        let query = [("count".to_string(), "1".to_string())];
        let request = self.signed(Method::GET, "/statuses/user_timeline.json", &query, &[])?;
        let timeline: Vec<Message> = self.execute(request, "statuses/user_timeline").await?;
        timeline.into_iter().next().ok_or(TwitterError::NotFound)
    }

    async fn delete_message(&self, id: i64) -> Result<Message, TwitterError> {
        info!(tweet_id = id, "Deleting tweet");
        let path = format!("/statuses/destroy/{id}.json");
        let request = self.signed(Method::POST, &path, &[], &[])?;
        self.execute(request, "statuses/destroy").await
    }
}
