//! Technews command core: validation, fetching and response formatting.
//!
//! This module implements the command pipeline independently of Discord.
//! The lifecycle of an invocation:
//!
//! 1. **Validation** - The raw `language` option is matched against the
//!    supported codes ([`language`])
//! 2. **Fetch** - Headlines are requested through the
//!    [`Requester`](crate::newsapi::Requester) trait
//! 3. **Selection** - The first three articles are kept, in source order
//! 4. **Formatting** - Articles become [`NewsCard`](embed_response::NewsCard)
//!    values ([`embed_response`])
//!
//! # Architecture
//!
//! ```text
//! Discord interaction
//!      │
//!      ▼
//! ┌────────────────────┐
//! │ CommandRequest     │  raw language option
//! └────────────────────┘
//!      │
//!      ▼
//! ┌────────────────────┐       ┌──────────────────────┐
//! │ NewsCommandHandler │ ────► │ Requester (NewsAPI)  │
//! └────────────────────┘       └──────────────────────┘
//!      │
//!      ▼
//! Result<Vec<NewsCard>, ReplyError>
//! ```
//!
//! # Error Handling
//!
//! Failures are values, not panics: [`ReplyError`] tags the five failure
//! kinds and every call site matches them exhaustively. Exactly one of a card
//! sequence or a single error reply reaches the user per invocation.
//!
//! # Module Organization
//!
//! - [`handler`] - Core command pipeline
//! - [`language`] - Language validation and autocomplete suggestions
//! - [`embed_response`] - Card construction and response texts

pub mod embed_response;
pub mod handler;
pub mod language;

use crate::newsapi::FetchError;

/// One technews command invocation, as received from the chat platform.
///
/// Created per invocation and discarded after the reply is sent. The
/// language is kept as the raw user text so validation stays in the handler.
#[derive(Debug, Clone)]
pub struct CommandRequest {
    /// Raw language option typed or picked by the user
    pub language: String,
}

/// Failure kinds of a technews invocation.
///
/// Each variant maps to exactly one user-facing message (see
/// [`embed_response::format_reply_error`]). Diagnostic payloads (status code,
/// parse detail) are logged for the operator and never shown to the user.
#[derive(Debug)]
pub enum ReplyError {
    /// The language option is not `en` or `ar`
    InvalidLanguage,
    /// Transport failure or timeout while reaching the news source
    NetworkError,
    /// The news source answered with a non-success HTTP status
    FetchFailed(u16),
    /// The news source returned no articles
    NoResults,
    /// Malformed response or other unhandled failure
    Unexpected(String),
}

impl From<FetchError> for ReplyError {
    fn from(error: FetchError) -> Self {
        match error {
            FetchError::Transport(_) => ReplyError::NetworkError,
            FetchError::Status(status) => ReplyError::FetchFailed(status),
            FetchError::Malformed(detail) => ReplyError::Unexpected(detail.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_maps_to_fetch_failed() {
        let error = ReplyError::from(FetchError::Status(503));
        assert!(matches!(error, ReplyError::FetchFailed(503)));
    }

    #[test]
    fn test_status_keeps_code_for_diagnostics() {
        match ReplyError::from(FetchError::Status(429)) {
            ReplyError::FetchFailed(status) => assert_eq!(status, 429),
            other => panic!("expected FetchFailed, got {:?}", other),
        }
    }
}
