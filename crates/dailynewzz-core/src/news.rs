//! Top-headlines client.
//!
//! Talks to a NewsAPI-compatible `top-headlines` endpoint. The [`NewsSource`]
//! trait is the seam the controller depends on, so tests can swap in canned
//! responses without a network.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use tracing::{debug, trace};
use url::Url;

use crate::config::BotConfig;
use crate::error::{NewsError, Result};
use crate::genre::Genre;

/// Status value the endpoint reports on success.
pub const STATUS_OK: &str = "ok";

/// One article as returned upstream.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Article {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
}

/// Body of a `top-headlines` response.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlinesResponse {
    pub status: String,
    #[serde(default)]
    pub articles: Vec<Article>,
    /// Error code, present when `status` is not `"ok"`.
    #[serde(default)]
    pub code: Option<String>,
    /// Error message, present when `status` is not `"ok"`.
    #[serde(default)]
    pub message: Option<String>,
}

impl HeadlinesResponse {
    /// Whether the endpoint reported success.
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Anything that can supply top headlines for a genre.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Fetch the current top headlines for `genre`.
    ///
    /// An `Ok` response may still carry a non-`ok` status or no articles;
    /// only transport, HTTP status and decoding failures are errors.
    async fn top_headlines(&self, genre: Genre) -> Result<HeadlinesResponse>;
}

/// HTTP client for the headlines endpoint.
#[derive(Clone)]
pub struct NewsApiClient {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
    country: String,
}

impl NewsApiClient {
    /// Create a client with an explicit endpoint and request timeout.
    pub fn new(
        endpoint: Url,
        api_key: impl Into<String>,
        country: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NewsError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.into(),
            country: country.into(),
        })
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &BotConfig) -> Result<Self> {
        Self::new(
            config.news_api_url.clone(),
            config.news_api_key.clone(),
            config.country.clone(),
            config.request_timeout,
        )
    }

    /// The configured endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl NewsSource for NewsApiClient {
    async fn top_headlines(&self, genre: Genre) -> Result<HeadlinesResponse> {
        let category = genre.category();
        debug!(category = %category, country = %self.country, "Requesting top headlines");

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("category", category.as_str()),
                ("country", self.country.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NewsError::Status(status.as_u16()));
        }

        let body: HeadlinesResponse = response.json().await?;
        trace!(status = %body.status, articles = body.articles.len(), "Headlines response decoded");
        Ok(body)
    }
}
