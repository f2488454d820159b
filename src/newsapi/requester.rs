//! HTTP client for the NewsAPI top-headlines endpoint.
//!
//! This module provides the [`NewsRequester`] struct for fetching technology
//! headlines from NewsAPI, and the [`Requester`] trait that abstracts it for
//! testing with mocks.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use mockall::automock;
use reqwest::Client;

use crate::commands::language::Language;
use crate::newsapi::response_structs::HeadlinesResponse;

/// Timeout applied to every outbound request. No retries are attempted.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Number of articles requested from NewsAPI.
///
/// More than the three rendered articles, so a response with a few unusable
/// entries still fills the reply.
pub const PAGE_SIZE: &str = "5";

/// News category requested from NewsAPI.
pub const CATEGORY: &str = "technology";

/// Failure cases of a top-headlines fetch.
///
/// The variants separate transport problems from protocol-level ones so the
/// caller can report them differently.
#[derive(Debug)]
pub enum FetchError {
    /// The request never completed: timeout, DNS failure, connection reset.
    Transport(reqwest::Error),
    /// The server answered with a non-success HTTP status.
    Status(u16),
    /// The body could not be parsed as the expected JSON shape.
    Malformed(reqwest::Error),
}

/// HTTP client for requesting headlines from NewsAPI.
///
/// # Examples
///
/// ```no_run
/// let requester = NewsRequester::new("https://newsapi.org", "your_api_key").unwrap();
/// let headlines = requester.top_headlines(Language::English).await.unwrap();
/// println!("{} articles", headlines.articles.len());
/// ```
pub struct NewsRequester {
    /// NewsAPI base url, without trailing slash
    url: String,
    /// NewsAPI key
    api_key: String,
    /// HTTP client
    client: Client,
}

/// Trait for fetching headlines from the news source.
///
/// This trait abstracts the HTTP operations for easier testing with mocks.
#[automock]
#[async_trait]
pub trait Requester {
    /// Fetches the current top technology headlines in the given language.
    async fn top_headlines(&self, language: Language) -> Result<HeadlinesResponse, FetchError>;
}

impl NewsRequester {
    /// Create a new [NewsRequester].
    ///
    /// # Arguments
    ///
    /// * `url` - The base URL of the NewsAPI service.
    /// * `api_key` - The NewsAPI key used to authenticate requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(url: &str, api_key: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(NewsRequester {
            url: url.to_string(),
            api_key: api_key.to_string(),
            client,
        })
    }
}

#[async_trait]
impl Requester for NewsRequester {
    /// Request `/v2/top-headlines` for the technology category.
    ///
    /// The api call returns a json object:
    /// ```
    /// {
    ///   status: "ok",
    ///   articles: [
    ///     { title: "...", description: "...", url: "...", urlToImage: "...",
    ///       publishedAt: "2024-05-01T10:30:00Z", source: { name: "..." } }
    ///   ]
    /// }
    /// ```
    /// This method transforms this json into a [`HeadlinesResponse`].
    ///
    /// A single request is made, bounded by [`REQUEST_TIMEOUT`]. A transport
    /// failure maps to [`FetchError::Transport`], a non-success status to
    /// [`FetchError::Status`] and an unparseable body to
    /// [`FetchError::Malformed`].
    async fn top_headlines(&self, language: Language) -> Result<HeadlinesResponse, FetchError> {
        let url = format!("{}/v2/top-headlines", &self.url);
        info!("request top headlines in '{}'", language.code());
        debug!(
            "request {}?category={}&language={}&pageSize={}",
            &url,
            CATEGORY,
            language.code(),
            PAGE_SIZE
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("category", CATEGORY),
                ("language", language.code()),
                ("pageSize", PAGE_SIZE),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let headlines: HeadlinesResponse = response.json().await.map_err(|error| {
            // A timeout while reading the body is still a transport failure
            if error.is_timeout() {
                FetchError::Transport(error)
            } else {
                FetchError::Malformed(error)
            }
        })?;

        debug!("response from {} -> {}", &url, &headlines);

        Ok(headlines)
    }
}
