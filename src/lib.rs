//! # Newsbrief
//!
//! Keyword news digests built from heuristic extractive summaries.
//!
//! ## Features
//!
//! - **Weighted keywords**: titles, descriptions and body text are counted with tiered weights
//! - **CJK aware**: ideograph runs are expanded into overlapping 2–4 character n-grams
//! - **Key points**: recent, keyword-relevant headlines with near-duplicates suppressed
//! - **Total**: summarising never fails; bad input degrades to a sources-only summary

pub mod article;
pub mod config;
pub mod news;
pub mod render;
pub mod summarizer;
pub mod summary;
pub mod time;
pub mod tokenize;

pub use article::{Article, ArticleSource};
pub use config::Config;
pub use summarizer::{generate_summary, generate_summary_at, similarity, WordFrequency};
pub use summary::{KeyPoint, Keyword, Source, Summary};
pub use time::format_relative_time;
