//! NewsAPI integration and HTTP client.
//!
//! This module provides integration with the NewsAPI service
//! (<https://newsapi.org>), handling the top-headlines API call and the
//! deserialization of its response.
//!
//! # Modules
//!
//! - `requester` - HTTP client for making API requests to NewsAPI
//! - `response_structs` - Data structures for API responses
//!
//! # Examples
//!
//! ```no_run
//! use technews_bot::newsapi::NewsRequester;
//!
//! let requester = NewsRequester::new("https://newsapi.org", "api_key").unwrap();
//! // Fetch headlines through the Requester trait
//! ```

mod requester;
mod response_structs;

pub use crate::newsapi::requester::{FetchError, NewsRequester, Requester};
#[cfg(test)]
pub use crate::newsapi::requester::MockRequester;
pub use crate::newsapi::response_structs::{ArticleResponse, HeadlinesResponse, SourceResponse};
