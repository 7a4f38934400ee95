//! Terminal rendering of summaries.

use crate::summary::Summary;
use crate::time::format_relative_time;
use chrono::{DateTime, Utc};
use colored::Colorize;
use std::fmt::Write;

/// Render a summary for the terminal, with source times relative to `now`
pub fn render_summary(keyword: &str, summary: &Summary, now: DateTime<Utc>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}\n", format!("=== {} ===", keyword).bold());

    let _ = writeln!(out, "💡 {}", "Overview:".bold());
    let _ = writeln!(out, "  {}\n", summary.overview);

    if summary.is_empty() {
        return out;
    }

    if !summary.key_points.is_empty() {
        let _ = writeln!(out, "📌 {}", "Key Points:".bold());
        for point in &summary.key_points {
            let _ = writeln!(out, "  {} {}", format!("[{}]", point.importance).cyan(), point.point);
        }
        out.push('\n');
    }

    if !summary.top_keywords.is_empty() {
        let keywords: Vec<String> = summary
            .top_keywords
            .iter()
            .map(|k| format!("{} ({})", k.word, k.frequency))
            .collect();
        let _ = writeln!(out, "🏷️  {}", "Keywords:".bold());
        let _ = writeln!(out, "  {}\n", keywords.join(", "));
    }

    if !summary.sources.is_empty() {
        let _ = writeln!(out, "📰 {} ({}):", "Sources".bold(), summary.sources.len());
        for source in &summary.sources {
            let _ = writeln!(
                out,
                "  • {} {}",
                source.title,
                format!(
                    "({}, {})",
                    source.source,
                    format_relative_time(&source.published_at, now)
                )
                .dimmed()
            );
            let _ = writeln!(out, "    {}", source.url.blue());
        }
    }

    out
}
