//! Card construction and response texts for the technews command.
//!
//! This module maps NewsAPI articles into [`NewsCard`] values ready to be
//! rendered as Discord embeds, and provides the user-facing texts for every
//! failure kind. All functions are deterministic: the same article list
//! always produces the same card sequence.

use chrono::{DateTime, Utc};

use crate::commands::ReplyError;
use crate::newsapi::ArticleResponse;

/// Maximum number of articles rendered per request.
pub const MAX_ARTICLES: usize = 3;

/// Character budget for card descriptions, counted in codepoints.
pub const DESCRIPTION_BUDGET: usize = 100;

/// Marker appended to descriptions cut at the budget.
pub const ELLIPSIS: &str = "...";

/// One formatted reply unit representing a single article.
///
/// The first card of a reply is the lead card: it carries the article image
/// at full size, while the remaining cards show it as a thumbnail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsCard {
    /// Article headline.
    pub title: String,
    /// Article description, truncated to [`DESCRIPTION_BUDGET`] codepoints.
    pub description: Option<String>,
    /// Direct link to the article.
    pub url: Option<String>,
    /// Link to the article image.
    pub image_url: Option<String>,
    /// Display name of the publishing outlet.
    pub source_name: Option<String>,
    /// Publication time, when the source provided a parseable timestamp.
    pub published_at: Option<DateTime<Utc>>,
    /// Whether this is the first, visually distinguished card.
    pub lead: bool,
}

/// Builds the card sequence for a list of articles.
///
/// Selects the first [`MAX_ARTICLES`] articles, preserving the relevance
/// order returned by the source, and marks the first one as the lead card.
///
/// # Arguments
///
/// * `articles` - Articles in source order, as returned by NewsAPI
pub fn build_cards(articles: &[ArticleResponse]) -> Vec<NewsCard> {
    articles
        .iter()
        .take(MAX_ARTICLES)
        .enumerate()
        .map(|(index, article)| NewsCard {
            title: article
                .title
                .clone()
                .unwrap_or_else(|| "No title".to_owned()),
            description: article
                .description
                .as_deref()
                .map(|description| truncate_description(description, DESCRIPTION_BUDGET)),
            url: article.url.clone(),
            image_url: article.url_to_image.clone(),
            source_name: article
                .source
                .as_ref()
                .and_then(|source| source.name.clone()),
            published_at: article
                .published_at
                .as_deref()
                .and_then(parse_published_at),
            lead: index == 0,
        })
        .collect()
}

/// Truncates a description to a codepoint budget.
///
/// Descriptions within the budget are returned unchanged. Longer ones are cut
/// after `budget` codepoints and [`ELLIPSIS`] is appended. Cutting on
/// codepoints rather than bytes keeps multi-byte text intact, which matters
/// for the Arabic headlines.
///
/// Truncation is idempotent: re-truncating an already truncated description
/// yields the same string.
pub fn truncate_description(description: &str, budget: usize) -> String {
    if description.chars().count() <= budget {
        return description.to_owned();
    }

    let truncated: String = description.chars().take(budget).collect();
    format!("{}{}", truncated, ELLIPSIS)
}

/// Parses a NewsAPI `publishedAt` timestamp.
///
/// NewsAPI emits ISO-8601 timestamps with a trailing `Z` UTC marker.
/// Unparseable values are dropped rather than failing the whole reply.
pub fn parse_published_at(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|timestamp| timestamp.with_timezone(&Utc))
}

/// Formats the footer text of a card from its source name and publish date.
pub fn format_card_footer(card: &NewsCard) -> String {
    let published = card
        .published_at
        .map(|timestamp| timestamp.format("%d %b %Y, %H:%M UTC").to_string());

    match (&card.source_name, published) {
        (Some(source), Some(date)) => format!("{} | {}", source, date),
        (Some(source), None) => source.clone(),
        (None, Some(date)) => date,
        (None, None) => "Powered by NewsAPI".to_owned(),
    }
}

/// Formats the error response for an invalid language option.
pub fn format_invalid_language() -> String {
    "Please choose 'en' for English or 'ar' for Arabic.".to_owned()
}

/// Formats the error response for a transport-level fetch failure.
pub fn format_network_error() -> String {
    "Network error. Please try again later.".to_owned()
}

/// Formats the error response for a non-success NewsAPI status.
pub fn format_fetch_failed() -> String {
    "Failed to fetch news. Please try again later.".to_owned()
}

/// Formats the response for an empty article list.
pub fn format_no_results() -> String {
    "No tech news found at the moment.".to_owned()
}

/// Formats the generic error response.
///
/// The diagnostic detail stays in the operator log and is never shown here.
pub fn format_unexpected_error() -> String {
    "An error occurred. Please try again later.".to_owned()
}

/// Maps a [`ReplyError`] to its user-facing message.
pub fn format_reply_error(error: &ReplyError) -> String {
    match error {
        ReplyError::InvalidLanguage => format_invalid_language(),
        ReplyError::NetworkError => format_network_error(),
        ReplyError::FetchFailed(_) => format_fetch_failed(),
        ReplyError::NoResults => format_no_results(),
        ReplyError::Unexpected(_) => format_unexpected_error(),
    }
}
