//! NewsAPI client and article clean-up.
//!
//! Uses reqwest for fetching. Only a single page is requested per search.

use crate::article::Article;
use crate::config::{Config, ConfigError};
use reqwest::Client;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// User-Agent string identifying this client
const USER_AGENT: &str = concat!("newsbrief/", env!("CARGO_PKG_VERSION"));

/// Title NewsAPI uses for articles that were taken down
const REMOVED_MARKER: &str = "[Removed]";

#[derive(Error, Debug)]
pub enum NewsError {
    #[error("failed to fetch news: {0}")]
    FetchError(#[from] reqwest::Error),
    #[error("news API error ({code}): {message}")]
    Api { code: String, message: String },
    #[error("failed to parse articles: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("failed to read article file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("search keyword is empty")]
    EmptyKeyword,
    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),
}

/// Response body of the `everything` endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewsApiResponse {
    status: String,
    #[serde(default)]
    total_results: u64,
    #[serde(default)]
    articles: Vec<Article>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Article files may hold a bare list or a saved API response
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ArticleFile {
    List(Vec<Article>),
    Response(NewsApiResponse),
}

/// Client for keyword searches against NewsAPI
pub struct NewsClient {
    client: Client,
    endpoint: String,
    api_key: String,
    language: String,
    page_size: u32,
}

impl NewsClient {
    /// Create a client from configuration; fails if no API key is available
    pub fn new(config: &Config) -> Result<Self, NewsError> {
        let api_key = config.api_key()?.to_string();
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.news.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.news.endpoint.clone(),
            api_key,
            language: config.news.language.clone(),
            page_size: config.news.page_size,
        })
    }

    /// Search recent articles for `keyword`, newest first, cleaned
    pub async fn search(&self, keyword: &str) -> Result<Vec<Article>, NewsError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(NewsError::EmptyKeyword);
        }

        info!(keyword, language = %self.language, "fetching news");

        let page_size = self.page_size.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .header("X-Api-Key", &self.api_key)
            .query(&[
                ("q", keyword),
                ("language", self.language.as_str()),
                ("sortBy", "publishedAt"),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .await?;

        // Error payloads come with non-2xx statuses but are still JSON
        let body = response.text().await?;
        let articles = parse_response(&body)?;
        Ok(clean_articles(articles))
    }
}

/// Decode an `everything` response body into raw articles
fn parse_response(body: &str) -> Result<Vec<Article>, NewsError> {
    let response: NewsApiResponse = serde_json::from_str(body)?;
    into_articles(response)
}

fn into_articles(response: NewsApiResponse) -> Result<Vec<Article>, NewsError> {
    if response.status != "ok" {
        return Err(NewsError::Api {
            code: response.code.unwrap_or_else(|| "unknown".to_string()),
            message: response.message.unwrap_or_default(),
        });
    }

    debug!(
        total = response.total_results,
        received = response.articles.len(),
        "news response"
    );
    Ok(response.articles)
}

/// Load and clean articles from a JSON file
pub fn load_articles(path: &Path) -> Result<Vec<Article>, NewsError> {
    let content = std::fs::read_to_string(path)?;
    let articles = match serde_json::from_str::<ArticleFile>(&content)? {
        ArticleFile::List(articles) => articles,
        ArticleFile::Response(response) => into_articles(response)?,
    };
    Ok(clean_articles(articles))
}

/// Drop articles without a usable title or URL and normalise blank fields
pub fn clean_articles(articles: Vec<Article>) -> Vec<Article> {
    let received = articles.len();

    let cleaned: Vec<Article> = articles
        .into_iter()
        .filter_map(|mut article| {
            article.title = article.title.trim().to_string();
            article.url = article.url.trim().to_string();
            if article.title.is_empty() || article.url.is_empty() || article.title == REMOVED_MARKER
            {
                return None;
            }
            article.description = non_blank(article.description);
            article.content = non_blank(article.content);
            Some(article)
        })
        .collect();

    if cleaned.len() < received {
        debug!(dropped = received - cleaned.len(), "dropped invalid articles");
    }

    cleaned
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
