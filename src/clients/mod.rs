//! Client modules for external API interactions

pub mod oauth;
pub mod twitter_client;

pub use twitter_client::{TwitterApi, TwitterClient};
