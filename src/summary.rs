//! Summary struct - the structured output of the summarizer.

use crate::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Overview used when there are no articles to summarise
pub const NO_DATA_OVERVIEW: &str = "暂无数据";

/// Overview used when summary generation fails
pub const FAILED_OVERVIEW: &str = "总结生成失败";

/// A ranked keyword and its accumulated weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub word: String,
    pub frequency: u32,
}

/// One highlighted headline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPoint {
    pub point: String,
    /// Strictly descending, the last point has importance 1
    pub importance: usize,
}

/// An article as listed in the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub title: String,
    pub source: String,
    pub url: String,
    pub published_at: String,
    pub url_to_image: Option<String>,
}

impl From<&Article> for Source {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            source: article.source.name.clone(),
            url: article.url.clone(),
            published_at: article.published_at.clone(),
            url_to_image: article.url_to_image.clone(),
        }
    }
}

/// Extractive summary of a set of articles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// One or two sentences describing the current hotspots
    pub overview: String,
    /// Most relevant recent headlines
    pub key_points: Vec<KeyPoint>,
    /// Highest-weighted terms, descending
    pub top_keywords: Vec<Keyword>,
    /// Every input article, in input order
    pub sources: Vec<Source>,
    /// When the summary was generated
    pub timestamp: DateTime<Utc>,
}

impl Summary {
    /// Summary for an empty article list
    pub fn no_data(timestamp: DateTime<Utc>) -> Self {
        Self {
            overview: NO_DATA_OVERVIEW.to_string(),
            key_points: Vec::new(),
            top_keywords: Vec::new(),
            sources: Vec::new(),
            timestamp,
        }
    }

    /// Degraded summary: only the source list survives
    pub fn failed(sources: Vec<Source>, timestamp: DateTime<Utc>) -> Self {
        Self {
            overview: FAILED_OVERVIEW.to_string(),
            key_points: Vec::new(),
            top_keywords: Vec::new(),
            sources,
            timestamp,
        }
    }

    /// Check if the summary has any content
    pub fn is_empty(&self) -> bool {
        self.key_points.is_empty() && self.top_keywords.is_empty() && self.sources.is_empty()
    }
}
