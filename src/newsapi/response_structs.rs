//! Response structures for the NewsAPI top-headlines endpoint.
//!
//! This module contains structures for deserializing JSON responses from
//! `https://newsapi.org/v2/top-headlines`. Every article field is optional
//! in the NewsAPI payload, so all fields are modeled as `Option`.

use serde::Deserialize;
use std::fmt;

/// Response from `/v2/top-headlines`.
///
/// NewsAPI returns a `status` string (`"ok"` or `"error"`) and an ordered
/// list of articles, most relevant first.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HeadlinesResponse {
    /// Request status reported by NewsAPI.
    #[serde(default)]
    pub status: String,
    /// Ordered list of articles. Missing field deserializes as empty.
    #[serde(default)]
    pub articles: Vec<ArticleResponse>,
}

impl fmt::Display for HeadlinesResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "status={}, articles={}",
            self.status,
            self.articles.len()
        )
    }
}

/// Representation of a single article from `/v2/top-headlines`.
///
/// All fields can be `null` or absent in the NewsAPI payload.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    /// Publishing outlet of the article.
    pub source: Option<SourceResponse>,
    /// Article headline.
    pub title: Option<String>,
    /// Short description or snippet of the article.
    pub description: Option<String>,
    /// Direct URL to the article.
    pub url: Option<String>,
    /// URL to a relevant image for the article.
    pub url_to_image: Option<String>,
    /// Publication date in ISO-8601 format with a `Z` UTC marker.
    pub published_at: Option<String>,
}

impl fmt::Display for ArticleResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "title={:?}, url={:?}, published_at={:?}",
            self.title, self.url, self.published_at
        )
    }
}

/// Publishing outlet of an article.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SourceResponse {
    /// NewsAPI identifier of the outlet, when it has one.
    pub id: Option<String>,
    /// Display name of the outlet.
    pub name: Option<String>,
}

impl fmt::Display for SourceResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "id={:?}, name={:?}", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headlines_response_display() {
        let response = HeadlinesResponse {
            status: "ok".to_string(),
            articles: vec![],
        };

        assert_eq!(format!("{}", response), "status=ok, articles=0");
    }

    #[test]
    fn test_parse_full_article() {
        let json = r#"{
            "status": "ok",
            "totalResults": 1,
            "articles": [
                {
                    "source": {"id": "the-verge", "name": "The Verge"},
                    "author": "Jane Doe",
                    "title": "New chip announced",
                    "description": "A new chip has been announced.",
                    "url": "https://example.com/chip",
                    "urlToImage": "https://example.com/chip.png",
                    "publishedAt": "2024-05-01T10:30:00Z",
                    "content": "Full content here"
                }
            ]
        }"#;

        let response: HeadlinesResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.status, "ok");
        assert_eq!(response.articles.len(), 1);

        let article = &response.articles[0];
        assert_eq!(article.title.as_deref(), Some("New chip announced"));
        assert_eq!(
            article.description.as_deref(),
            Some("A new chip has been announced.")
        );
        assert_eq!(article.url.as_deref(), Some("https://example.com/chip"));
        assert_eq!(
            article.url_to_image.as_deref(),
            Some("https://example.com/chip.png")
        );
        assert_eq!(
            article.published_at.as_deref(),
            Some("2024-05-01T10:30:00Z")
        );
        assert_eq!(
            article.source.as_ref().and_then(|s| s.name.as_deref()),
            Some("The Verge")
        );
    }

    #[test]
    fn test_parse_article_with_null_fields() {
        let json = r#"{
            "status": "ok",
            "articles": [
                {
                    "source": {"id": null, "name": null},
                    "title": "Bare headline",
                    "description": null,
                    "url": null,
                    "urlToImage": null,
                    "publishedAt": null
                }
            ]
        }"#;

        let response: HeadlinesResponse = serde_json::from_str(json).unwrap();
        let article = &response.articles[0];

        assert_eq!(article.title.as_deref(), Some("Bare headline"));
        assert!(article.description.is_none());
        assert!(article.url.is_none());
        assert!(article.url_to_image.is_none());
        assert!(article.published_at.is_none());
    }

    #[test]
    fn test_parse_missing_articles_field() {
        let json = r#"{"status": "error"}"#;

        let response: HeadlinesResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.status, "error");
        assert!(response.articles.is_empty());
    }

    #[test]
    fn test_articles_keep_source_order() {
        let json = r#"{
            "status": "ok",
            "articles": [
                {"title": "first"},
                {"title": "second"},
                {"title": "third"}
            ]
        }"#;

        let response: HeadlinesResponse = serde_json::from_str(json).unwrap();
        let titles: Vec<_> = response
            .articles
            .iter()
            .map(|a| a.title.as_deref().unwrap())
            .collect();

        assert_eq!(titles, vec!["first", "second", "third"]);
    }
}
