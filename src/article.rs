//! Article records as delivered by the news API.

use serde::{Deserialize, Serialize};

/// Publisher of an article
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    #[serde(default)]
    pub name: String,
}

/// A single news article.
///
/// `title` and `url` are expected to be non-empty once an article has been
/// through [`crate::news::clean_articles`]; `description` and `content` are
/// frequently missing from API results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub source: ArticleSource,
    /// ISO-8601 timestamp, kept verbatim since upstream values are not always valid
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl Article {
    /// Create an article with the required fields set
    pub fn new(title: &str, url: &str, source: &str, published_at: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
            source: ArticleSource {
                name: source.to_string(),
            },
            published_at: published_at.to_string(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    /// Description, if present and non-blank
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.trim().is_empty())
    }

    /// Content, if present and non-blank
    pub fn content_text(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_newsapi_article() {
        let json = r#"{
            "source": {"id": null, "name": "Example News"},
            "author": null,
            "title": "AI Breakthrough",
            "description": "Researchers announce a new model.",
            "url": "https://example.com/ai",
            "urlToImage": "https://example.com/ai.png",
            "publishedAt": "2024-03-05T10:00:00Z",
            "content": null
        }"#;

        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.title, "AI Breakthrough");
        assert_eq!(article.source.name, "Example News");
        assert_eq!(article.published_at, "2024-03-05T10:00:00Z");
        assert_eq!(article.url_to_image.as_deref(), Some("https://example.com/ai.png"));
        assert!(article.content.is_none());
        assert!(article.author.is_none());
    }

    #[test]
    fn test_blank_fields_are_absent() {
        let article = Article::new("t", "u", "s", "").with_description("   ");
        assert!(article.description_text().is_none());
        assert!(article.content_text().is_none());
    }
}
