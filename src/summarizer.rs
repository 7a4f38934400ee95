//! Heuristic extractive summarization of a batch of news articles.
//!
//! The summary is built from weighted term frequencies: titles count more than
//! descriptions, which count more than body text. The heaviest terms become the
//! keyword list and drive which recent headlines are promoted to key points.

use crate::article::Article;
use crate::summary::{KeyPoint, Keyword, Source, Summary};
use crate::time::{parse_timestamp, time_description, RECENT_WINDOW};
use crate::tokenize::{is_countable, tokenize};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use std::cmp::Reverse;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, warn};

/// Number of keywords reported in a summary
pub const TOP_KEYWORD_COUNT: usize = 10;

/// Titles more similar than this are treated as the same story
pub const DUPLICATE_THRESHOLD: f64 = 0.6;

const OVERVIEW_KEYWORD_COUNT: usize = 3;
const MAX_KEY_POINTS: usize = 5;
/// Points admitted regardless of keyword overlap
const MIN_KEY_POINTS: usize = 3;

const OVERVIEW_DESCRIPTION_CHARS: usize = 100;
const POINT_DESCRIPTION_CHARS: usize = 80;
const MAX_POINT_CHARS: usize = 150;
const ELLIPSIS: &str = "...";

const TITLE_WEIGHT: u32 = 3;
const DESCRIPTION_WEIGHT: u32 = 2;
const CONTENT_WEIGHT: u32 = 1;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SummaryError {
    #[error("article {index} has an empty title")]
    MissingTitle { index: usize },
}

/// Accumulated term weights for one summarisation run.
///
/// Iteration follows first insertion, which is what keyword ties fall back on.
#[derive(Debug, Clone, Default)]
pub struct WordFrequency {
    weights: IndexMap<String, u32>,
}

impl WordFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every article's title, description and content with their tiered weights
    pub fn from_articles(articles: &[Article]) -> Self {
        let mut frequency = Self::new();
        for article in articles {
            frequency.add_text(&article.title, TITLE_WEIGHT);
            if let Some(description) = article.description_text() {
                frequency.add_text(description, DESCRIPTION_WEIGHT);
            }
            if let Some(content) = article.content_text() {
                frequency.add_text(content, CONTENT_WEIGHT);
            }
        }
        frequency
    }

    /// Add `weight` for each countable token in `text`
    pub fn add_text(&mut self, text: &str, weight: u32) {
        for token in tokenize(text) {
            let token = token.to_lowercase();
            if !is_countable(&token) {
                continue;
            }
            *self.weights.entry(token).or_insert(0) += weight;
        }
    }

    /// Weight of a (lower-cased) term, zero if never seen
    pub fn get(&self, word: &str) -> u32 {
        self.weights.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// The `limit` heaviest terms, descending by weight
    pub fn top_keywords(&self, limit: usize) -> Vec<Keyword> {
        let mut entries: Vec<(&String, &u32)> = self.weights.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(a.1));
        entries
            .into_iter()
            .take(limit)
            .map(|(word, frequency)| Keyword {
                word: word.clone(),
                frequency: *frequency,
            })
            .collect()
    }
}

/// Fields that depend on a successful analysis
struct Analysis {
    overview: String,
    key_points: Vec<KeyPoint>,
    top_keywords: Vec<Keyword>,
}

/// Summarise `articles` as of the current time.
///
/// Never fails: an empty list yields the no-data summary and an analysis
/// failure yields the degraded summary that only carries sources.
pub fn generate_summary(articles: &[Article]) -> Summary {
    generate_summary_at(articles, Utc::now())
}

/// Summarise `articles` with an explicit "now", used for the overview's time
/// window and the summary timestamp.
pub fn generate_summary_at(articles: &[Article], now: DateTime<Utc>) -> Summary {
    if articles.is_empty() {
        return Summary::no_data(now);
    }

    let sources = format_sources(articles);

    match analyze(articles, now) {
        Ok(analysis) => Summary {
            overview: analysis.overview,
            key_points: analysis.key_points,
            top_keywords: analysis.top_keywords,
            sources,
            timestamp: now,
        },
        Err(e) => {
            warn!(error = %e, articles = articles.len(), "summary generation failed");
            Summary::failed(sources, now)
        }
    }
}

fn analyze(articles: &[Article], now: DateTime<Utc>) -> Result<Analysis, SummaryError> {
    if let Some(index) = articles.iter().position(|a| a.title.trim().is_empty()) {
        return Err(SummaryError::MissingTitle { index });
    }

    let frequency = WordFrequency::from_articles(articles);
    let top_keywords = frequency.top_keywords(TOP_KEYWORD_COUNT);
    let by_recency = sort_by_recency(articles);

    let overview_keywords = &top_keywords[..top_keywords.len().min(OVERVIEW_KEYWORD_COUNT)];
    let overview = generate_overview(&by_recency, articles.len(), overview_keywords, now);
    let key_points = extract_key_points(&by_recency, &top_keywords);

    debug!(
        articles = articles.len(),
        terms = frequency.len(),
        keywords = top_keywords.len(),
        key_points = key_points.len(),
        "summary generated"
    );

    Ok(Analysis {
        overview,
        key_points,
        top_keywords,
    })
}

/// Newest first; articles with unparseable dates sink to the end in input order
fn sort_by_recency(articles: &[Article]) -> Vec<&Article> {
    let mut sorted: Vec<&Article> = articles.iter().collect();
    sorted.sort_by_key(|a| Reverse(parse_timestamp(&a.published_at)));
    sorted
}

fn generate_overview(
    by_recency: &[&Article],
    total: usize,
    keywords: &[Keyword],
    now: DateTime<Utc>,
) -> String {
    let latest = by_recency.first();
    let window = latest
        .map(|a| time_description(&a.published_at, now))
        .unwrap_or(RECENT_WINDOW);

    let mut overview = format!("基于{}篇{}的最新新闻", total, window);
    if !keywords.is_empty() {
        let hotspots: Vec<&str> = keywords.iter().map(|k| k.word.as_str()).collect();
        overview.push_str("，当前热点集中在");
        overview.push_str(&hotspots.join("、"));
    }
    overview.push('。');

    if let Some(description) = latest.and_then(|a| a.description_text()) {
        overview.push_str(&truncate_chars(description.trim(), OVERVIEW_DESCRIPTION_CHARS));
    }

    overview
}

fn extract_key_points(by_recency: &[&Article], keywords: &[Keyword]) -> Vec<KeyPoint> {
    let mut admitted: Vec<&Article> = Vec::new();

    for &article in by_recency {
        if admitted.len() >= MAX_KEY_POINTS {
            break;
        }

        let title = article.title.to_lowercase();
        let relevant = keywords.iter().any(|k| title.contains(k.word.as_str()));
        if !relevant && admitted.len() >= MIN_KEY_POINTS {
            continue;
        }

        let duplicate = admitted
            .iter()
            .any(|a| similarity(&a.title, &article.title) > DUPLICATE_THRESHOLD);
        if duplicate {
            debug!(title = %article.title, "skipping near-duplicate headline");
            continue;
        }

        admitted.push(article);
    }

    let count = admitted.len();
    admitted
        .into_iter()
        .enumerate()
        .map(|(index, article)| KeyPoint {
            point: format_key_point(article),
            importance: count - index,
        })
        .collect()
}

fn format_key_point(article: &Article) -> String {
    let title = article.title.trim();
    let mut point = title.to_string();

    if let Some(description) = article.description_text() {
        let description = description.trim();
        if description != title {
            point.push('。');
            point.push_str(&truncate_chars(description, POINT_DESCRIPTION_CHARS));
        }
    }

    if point.chars().count() > MAX_POINT_CHARS {
        let kept: String = point
            .chars()
            .take(MAX_POINT_CHARS - ELLIPSIS.len())
            .collect();
        point = format!("{}{}", kept, ELLIPSIS);
    }

    point
}

/// Jaccard similarity of the token sets of two strings, compared case-insensitively.
///
/// Returns 0.0 when either side is empty or neither side has any tokens.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a: HashSet<String> = tokenize(&a.to_lowercase()).into_iter().collect();
    let b: HashSet<String> = tokenize(&b.to_lowercase()).into_iter().collect();

    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(&b).count();

    intersection as f64 / union as f64
}

/// Project every article to a source entry, keeping input order
pub fn format_sources(articles: &[Article]) -> Vec<Source> {
    articles.iter().map(Source::from).collect()
}

/// First `max` characters of `text`, with an ellipsis when cut
fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max).collect();
    format!("{}{}", kept, ELLIPSIS)
}
