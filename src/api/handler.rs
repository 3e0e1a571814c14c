//! HTTP routes for the relay.
//!
//! `POST /tweet` posts a new tweet; `POST /delete` removes the account's most
//! recent one. Every failure is answered with the `{status_code, message}`
//! envelope.

use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use tracing::{error, info, warn};

use super::error_mapper::{NO_TWEETS_MESSAGE, map_twitter_error};
use super::helpers::{err_response, ok_message};
use crate::clients::TwitterApi;
use crate::core::models::TweetRequest;
use crate::errors::TwitterError;

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    pub twitter: Arc<dyn TwitterApi>,
}

impl AppState {
    pub fn new(twitter: Arc<dyn TwitterApi>) -> Self {
        Self { twitter }
    }
}

/// Builds the router with the given adapter injected as state.
pub fn router(twitter: Arc<dyn TwitterApi>) -> Router {
    Router::new()
        .route("/tweet", post(tweet_handler).fallback(method_not_allowed))
        .route(
            "/delete",
            post(delete_tweet_handler).fallback(method_not_allowed),
        )
        .fallback(route_not_found)
        .with_state(AppState::new(twitter))
}

/// Posts the `message` field of the JSON body as a new tweet.
#[tracing::instrument(level = "info", skip_all)]
pub async fn tweet_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(b) => b,
        Err(rejection) => {
            warn!("Failed to read /tweet body: {}", rejection.body_text());
            return err_response(rejection.status().as_u16(), "Invalid request body");
        }
    };

    let request: TweetRequest = match serde_json::from_slice(&body) {
        Ok(r) => r,
        Err(e) => {
            warn!("Rejecting /tweet body: {}", e);
            return err_response(400, "Invalid request body");
        }
    };

    match state.twitter.post_message(&request.message).await {
        Ok(message) => ok_message(message),
        Err(e) => failure_response(&e),
    }
}

/// Deletes the authenticated account's most recent tweet.
#[tracing::instrument(level = "info", skip_all)]
pub async fn delete_tweet_handler(State(state): State<AppState>) -> Response {
    let latest = match state.twitter.fetch_most_recent_message().await {
        Ok(message) => message,
        Err(TwitterError::NotFound) => {
            info!("Timeline is empty, nothing to delete");
            return err_response(404, NO_TWEETS_MESSAGE);
        }
        Err(e) => return failure_response(&e),
    };

    match state.twitter.delete_message(latest.id).await {
        Ok(deleted) => {
            info!(tweet_id = deleted.id, "Deleted most recent tweet");
            ok_message(deleted)
        }
        Err(e) => failure_response(&e),
    }
}

async fn method_not_allowed() -> Response {
    err_response(405, "Invalid request method")
}

async fn route_not_found() -> Response {
    err_response(404, "Not found")
}

fn failure_response(e: &TwitterError) -> Response {
    let envelope = map_twitter_error(e);
    error!(
        status_code = envelope.status_code,
        "Twitter call failed: {}", e
    );
    envelope.into_response()
}
