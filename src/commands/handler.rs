//! Core handler for the technews command.
//!
//! This module implements the command pipeline independently of any chat
//! platform: validate the requested language, fetch headlines through the
//! [`Requester`] trait, select the top articles and map them to cards. The
//! Discord layer only adapts interactions in and cards out.
//!
//! # Flow
//!
//! ```text
//! CommandRequest -> validate -> fetch -> extract -> select -> Vec<NewsCard>
//! ```
//!
//! Every request terminates in exactly one outcome: a card sequence or a
//! single [`ReplyError`]. The handler holds no shared mutable state, so
//! concurrent invocations need no coordination.

use log::debug;

use crate::commands::embed_response::{NewsCard, build_cards};
use crate::commands::language::Language;
use crate::commands::{CommandRequest, ReplyError};
use crate::newsapi::Requester;

/// Handler producing news cards from a command invocation.
///
/// The requester is injected at construction, which keeps the handler free of
/// ambient state and lets tests substitute a mock.
///
/// # Examples
///
/// ```no_run
/// let requester = NewsRequester::new("https://newsapi.org", "api_key").unwrap();
/// let handler = NewsCommandHandler::new(requester);
/// let cards = handler
///     .handle(&CommandRequest { language: "en".to_owned() })
///     .await
///     .unwrap();
/// ```
pub struct NewsCommandHandler<R: Requester> {
    /// News source client
    requester: R,
}

impl<R: Requester> NewsCommandHandler<R> {
    /// Creates a new handler around the given news requester.
    pub fn new(requester: R) -> Self {
        NewsCommandHandler { requester }
    }

    /// Handles one command invocation.
    ///
    /// The language is validated before anything else; an invalid language
    /// returns [`ReplyError::InvalidLanguage`] without touching the network.
    /// On success the first three articles are returned as cards, in the
    /// order the source ranked them.
    ///
    /// # Errors
    ///
    /// * [`ReplyError::InvalidLanguage`] - the language is not `en` or `ar`
    /// * [`ReplyError::NetworkError`] - transport failure or timeout
    /// * [`ReplyError::FetchFailed`] - non-success HTTP status from NewsAPI
    /// * [`ReplyError::NoResults`] - the source returned no articles
    /// * [`ReplyError::Unexpected`] - the response body could not be parsed
    pub async fn handle(&self, request: &CommandRequest) -> Result<Vec<NewsCard>, ReplyError> {
        let language =
            Language::from_code(&request.language).ok_or(ReplyError::InvalidLanguage)?;

        let headlines = self.requester.top_headlines(language).await?;

        if headlines.articles.is_empty() {
            return Err(ReplyError::NoResults);
        }

        let cards = build_cards(&headlines.articles);
        debug!(
            "selected {} of {} articles in '{}'",
            cards.len(),
            headlines.articles.len(),
            language.code()
        );

        Ok(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::newsapi::{
        ArticleResponse, FetchError, HeadlinesResponse, MockRequester, SourceResponse,
    };
    use mockall::predicate::eq;

    fn create_article(title: &str) -> ArticleResponse {
        ArticleResponse {
            source: Some(SourceResponse {
                id: None,
                name: Some("Example News".to_owned()),
            }),
            title: Some(title.to_owned()),
            description: Some(format!("About {}", title)),
            url: Some(format!("https://example.com/{}", title)),
            url_to_image: None,
            published_at: Some("2024-05-01T10:30:00Z".to_owned()),
        }
    }

    fn create_response(titles: &[&str]) -> HeadlinesResponse {
        HeadlinesResponse {
            status: "ok".to_owned(),
            articles: titles.iter().map(|title| create_article(title)).collect(),
        }
    }

    async fn transport_error() -> reqwest::Error {
        // Bind then drop a listener so the request hits a closed port
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        reqwest::Client::new()
            .get(format!("http://127.0.0.1:{}/", port))
            .send()
            .await
            .unwrap_err()
    }

    #[tokio::test]
    async fn test_invalid_language_makes_no_request() {
        let mut requester = MockRequester::new();
        requester.expect_top_headlines().times(0);

        let handler = NewsCommandHandler::new(requester);
        let request = CommandRequest {
            language: "fr".to_owned(),
        };

        let result = handler.handle(&request).await;
        assert!(matches!(result, Err(ReplyError::InvalidLanguage)));
    }

    #[tokio::test]
    async fn test_uppercase_language_is_rejected() {
        let mut requester = MockRequester::new();
        requester.expect_top_headlines().times(0);

        let handler = NewsCommandHandler::new(requester);
        let request = CommandRequest {
            language: "EN".to_owned(),
        };

        let result = handler.handle(&request).await;
        assert!(matches!(result, Err(ReplyError::InvalidLanguage)));
    }

    #[tokio::test]
    async fn test_three_articles_in_source_order() {
        let mut requester = MockRequester::new();
        requester
            .expect_top_headlines()
            .with(eq(Language::English))
            .times(1)
            .returning(|_| Ok(create_response(&["A", "B", "C"])));

        let handler = NewsCommandHandler::new(requester);
        let request = CommandRequest {
            language: "en".to_owned(),
        };

        let cards = handler.handle(&request).await.unwrap();
        let titles: Vec<_> = cards.iter().map(|card| card.title.as_str()).collect();

        assert_eq!(titles, vec!["A", "B", "C"]);
        assert!(cards[0].lead);
    }

    #[tokio::test]
    async fn test_more_than_three_articles_are_capped() {
        let mut requester = MockRequester::new();
        requester
            .expect_top_headlines()
            .times(1)
            .returning(|_| Ok(create_response(&["a", "b", "c", "d", "e"])));

        let handler = NewsCommandHandler::new(requester);
        let request = CommandRequest {
            language: "en".to_owned(),
        };

        let cards = handler.handle(&request).await.unwrap();
        assert_eq!(cards.len(), 3);
    }

    #[tokio::test]
    async fn test_fewer_than_three_articles_all_returned() {
        let mut requester = MockRequester::new();
        requester
            .expect_top_headlines()
            .with(eq(Language::Arabic))
            .times(1)
            .returning(|_| Ok(create_response(&["only one"])));

        let handler = NewsCommandHandler::new(requester);
        let request = CommandRequest {
            language: "ar".to_owned(),
        };

        let cards = handler.handle(&request).await.unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "only one");
    }

    #[tokio::test]
    async fn test_empty_articles_is_no_results() {
        let mut requester = MockRequester::new();
        requester
            .expect_top_headlines()
            .times(1)
            .returning(|_| Ok(create_response(&[])));

        let handler = NewsCommandHandler::new(requester);
        let request = CommandRequest {
            language: "en".to_owned(),
        };

        let result = handler.handle(&request).await;
        assert!(matches!(result, Err(ReplyError::NoResults)));
    }

    #[tokio::test]
    async fn test_non_success_status_is_fetch_failed() {
        let mut requester = MockRequester::new();
        requester
            .expect_top_headlines()
            .times(1)
            .returning(|_| Err(FetchError::Status(500)));

        let handler = NewsCommandHandler::new(requester);
        let request = CommandRequest {
            language: "en".to_owned(),
        };

        let result = handler.handle(&request).await;
        assert!(matches!(result, Err(ReplyError::FetchFailed(500))));
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        let error = transport_error().await;

        let mut requester = MockRequester::new();
        requester
            .expect_top_headlines()
            .times(1)
            .return_once(move |_| Err(FetchError::Transport(error)));

        let handler = NewsCommandHandler::new(requester);
        let request = CommandRequest {
            language: "en".to_owned(),
        };

        let result = handler.handle(&request).await;
        assert!(matches!(result, Err(ReplyError::NetworkError)));
    }
}
