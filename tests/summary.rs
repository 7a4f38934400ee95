//! End-to-end checks of summary generation through the public API.

use chrono::{DateTime, Duration, Utc};
use newsbrief::summarizer::DUPLICATE_THRESHOLD;
use newsbrief::summary::{FAILED_OVERVIEW, NO_DATA_OVERVIEW};
use newsbrief::{generate_summary, generate_summary_at, similarity, Article};

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-06-01T08:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn article(title: &str, minutes_ago: i64, description: Option<&str>) -> Article {
    let published = (now() - Duration::minutes(minutes_ago)).to_rfc3339();
    let article = Article::new(
        title,
        &format!("https://news.example.com/{}", minutes_ago),
        "Example Wire",
        &published,
    );
    match description {
        Some(d) => article.with_description(d),
        None => article,
    }
}

fn sample() -> Vec<Article> {
    vec![
        article(
            "人工智能芯片发布",
            20,
            Some("多家厂商发布新一代人工智能芯片，性能大幅提升。"),
        ),
        article("人工智能监管新规出台", 90, Some("监管部门公布人工智能管理办法。")),
        article("股市收盘上涨", 200, None),
        article("人工智能芯片正式发布", 240, Some("新一代人工智能芯片正式上市。")),
        article("AI Breakthrough in robotics", 300, Some("Robots learn faster with AI.")),
        article("天气预报：周末降温", 400, None),
        article("人工智能教育应用", 500, Some("学校引入人工智能辅助教学。")),
    ]
}

#[test]
fn empty_input_yields_placeholder() {
    let summary = generate_summary(&[]);
    assert_eq!(summary.overview, NO_DATA_OVERVIEW);
    assert!(summary.key_points.is_empty());
    assert!(summary.top_keywords.is_empty());
    assert!(summary.sources.is_empty());
}

#[test]
fn sources_preserve_input_order() {
    let articles = sample();
    let summary = generate_summary_at(&articles, now());

    assert_eq!(summary.sources.len(), articles.len());
    for (source, article) in summary.sources.iter().zip(&articles) {
        assert_eq!(source.title, article.title);
        assert_eq!(source.url, article.url);
        assert_eq!(source.source, "Example Wire");
    }
}

#[test]
fn keywords_are_bounded_and_sorted() {
    let summary = generate_summary_at(&sample(), now());

    assert!(!summary.top_keywords.is_empty());
    assert!(summary.top_keywords.len() <= 10);
    assert!(summary
        .top_keywords
        .windows(2)
        .all(|w| w[0].frequency >= w[1].frequency));
    assert_eq!(summary.top_keywords[0].word, "人工");
}

#[test]
fn keyword_ranking_is_stable_across_runs() {
    let first = generate_summary_at(&sample(), now());
    let second = generate_summary_at(&sample(), now());
    assert_eq!(first.top_keywords, second.top_keywords);
    assert_eq!(first.key_points, second.key_points);
}

#[test]
fn key_points_are_ranked_and_distinct() {
    let articles = sample();
    let summary = generate_summary_at(&articles, now());
    let points = &summary.key_points;

    assert!(points.len() >= 3.min(articles.len()));
    assert!(points.len() <= 5.min(articles.len()));
    assert_eq!(points.last().map(|p| p.importance), Some(1));
    assert!(points
        .windows(2)
        .all(|w| w[0].importance == w[1].importance + 1));

    // Newest first
    assert!(points[0].point.starts_with("人工智能芯片发布。"));

    let titles: Vec<&str> = points
        .iter()
        .map(|p| p.point.split('。').next().unwrap_or_default())
        .collect();
    for (i, a) in titles.iter().enumerate() {
        for b in &titles[i + 1..] {
            assert!(similarity(a, b) <= DUPLICATE_THRESHOLD, "{} vs {}", a, b);
        }
    }
}

#[test]
fn overview_mentions_count_window_and_hotspots() {
    let summary = generate_summary_at(&sample(), now());

    assert!(summary.overview.starts_with("基于7篇1小时内的最新新闻，当前热点集中在人工、"));
    assert!(summary
        .overview
        .ends_with("。多家厂商发布新一代人工智能芯片，性能大幅提升。"));
}

#[test]
fn overview_truncates_long_description() {
    let long = "Markets opened higher as investors weighed fresh economic data ".repeat(3);
    let articles = vec![article("Markets open higher", 10, Some(&long))];
    let summary = generate_summary_at(&articles, now());

    assert!(summary.overview.ends_with("..."));
}

#[test]
fn malformed_article_degrades_but_keeps_sources() {
    let mut articles = sample();
    articles[2].title = String::new();

    let summary = generate_summary_at(&articles, now());
    assert_eq!(summary.overview, FAILED_OVERVIEW);
    assert!(summary.key_points.is_empty());
    assert!(summary.top_keywords.is_empty());
    assert_eq!(summary.sources.len(), articles.len());
    assert_eq!(summary.timestamp, now());
}

#[test]
fn similarity_properties() {
    let a = "人工智能芯片发布";
    let b = "人工智能芯片正式发布";
    assert_eq!(similarity(a, b), similarity(b, a));
    assert_eq!(similarity(a, a), 1.0);
    assert_eq!(similarity("", b), 0.0);
}

#[test]
fn summary_round_trips_as_json() {
    let summary = generate_summary_at(&sample(), now());
    let json = serde_json::to_value(&summary).unwrap();

    assert!(json["keyPoints"][0]["importance"].is_u64());
    assert_eq!(json["sources"].as_array().map(Vec::len), Some(7));
    assert!(json["timestamp"].as_str().unwrap().starts_with("2024-06-01T08:00:00"));
}

#[test]
fn few_articles_all_become_key_points() {
    let one = vec![article("Rust compiler release", 5, None)];
    let summary = generate_summary_at(&one, now());
    assert_eq!(summary.key_points.len(), 1);
    assert_eq!(summary.key_points[0].importance, 1);

    let two = vec![
        article("Solar farm opens", 5, None),
        article("Museum reopens downtown", 15, None),
    ];
    let summary = generate_summary_at(&two, now());
    let importances: Vec<usize> = summary.key_points.iter().map(|p| p.importance).collect();
    assert_eq!(importances, vec![2, 1]);
    assert_eq!(summary.key_points[0].point, "Solar farm opens");
}

#[test]
fn key_points_capped_at_five() {
    let titles = [
        "Rust async runtime",
        "Rust borrow checker",
        "Rust embedded boards",
        "Rust web frameworks",
        "Rust game engines",
        "Rust compiler speed",
        "Rust kernel modules",
        "Rust cloud tooling",
    ];
    let articles: Vec<Article> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| article(title, 10 * (i as i64 + 1), None))
        .collect();

    let summary = generate_summary_at(&articles, now());
    let importances: Vec<usize> = summary.key_points.iter().map(|p| p.importance).collect();
    assert_eq!(importances, vec![5, 4, 3, 2, 1]);

    let points: Vec<&str> = summary.key_points.iter().map(|p| p.point.as_str()).collect();
    assert_eq!(points, titles[..5].to_vec());
}
