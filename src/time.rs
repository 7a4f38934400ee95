//! Human-readable time labels.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};

/// Label for timestamps that cannot be parsed
pub const UNKNOWN_TIME: &str = "未知时间";

/// Window label used when nothing more specific applies
pub const RECENT_WINDOW: &str = "最近";

/// ISO-8601 forms with an explicit offset, tried after RFC 3339
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"];

/// Offset-less forms, read as UTC
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Parse an ISO-8601 timestamp into UTC.
///
/// Accepts RFC 3339, offsets without a colon, minute precision and bare
/// dates (midnight). Values without an offset are taken as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    let naive = value.strip_suffix('Z').unwrap_or(value);
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(naive, format) {
            return Some(dt.and_utc());
        }
    }

    NaiveDate::parse_from_str(naive, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Describe how recent `published_at` is, relative to `now`.
///
/// Used in the summary overview ("6小时内" etc.).
pub fn time_description(published_at: &str, now: DateTime<Utc>) -> &'static str {
    let Some(published) = parse_timestamp(published_at) else {
        return RECENT_WINDOW;
    };

    let elapsed = now - published;
    if elapsed < Duration::hours(1) {
        "1小时内"
    } else if elapsed < Duration::hours(6) {
        "6小时内"
    } else if elapsed < Duration::hours(12) {
        "12小时内"
    } else if elapsed < Duration::hours(24) {
        "24小时内"
    } else {
        RECENT_WINDOW
    }
}

/// Format a timestamp as "N分钟前" style relative time, falling back to an
/// absolute date after a week.
pub fn format_relative_time(value: &str, now: DateTime<Utc>) -> String {
    let Some(time) = parse_timestamp(value) else {
        return UNKNOWN_TIME.to_string();
    };

    let elapsed = now - time;
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "刚刚".to_string()
    } else if minutes < 60 {
        format!("{}分钟前", minutes)
    } else if hours < 24 {
        format!("{}小时前", hours)
    } else if days < 7 {
        format!("{}天前", days)
    } else {
        format!("{}年{}月{}日", time.year(), time.month(), time.day())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        parse_timestamp("2024-03-10T12:00:00Z").unwrap()
    }

    fn ago(duration: Duration) -> String {
        (now() - duration).to_rfc3339()
    }

    #[test]
    fn test_parse_offsets() {
        let parsed = parse_timestamp("2024-03-10T20:00:00+08:00").unwrap();
        assert_eq!(parsed, now());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("2024-13-40").is_none());
    }

    #[test]
    fn test_parse_iso_variants() {
        let expected = parse_timestamp("2024-03-10T11:30:00Z").unwrap();
        for value in [
            "2024-03-10T11:30:00",
            "2024-03-10T11:30:00.000+0000",
            "2024-03-10T19:30:00+0800",
            "2024-03-10T11:30Z",
            "2024-03-10T11:30",
            "2024-03-10 11:30:00",
        ] {
            assert_eq!(parse_timestamp(value), Some(expected), "{}", value);
        }

        let midnight = parse_timestamp("2024-03-01T00:00:00Z").unwrap();
        assert_eq!(parse_timestamp("2024-03-01"), Some(midnight));
    }

    #[test]
    fn test_relative_time_without_offset() {
        assert_eq!(format_relative_time("2024-03-10T11:30:00", now()), "30分钟前");
        assert_eq!(format_relative_time("2024-03-10T11:30Z", now()), "30分钟前");
        assert_eq!(format_relative_time("2024-03-01", now()), "2024年3月1日");
        assert_eq!(time_description("2024-03-10T11:30:00", now()), "1小时内");
    }

    #[test]
    fn test_time_description_buckets() {
        assert_eq!(time_description(&ago(Duration::minutes(30)), now()), "1小时内");
        assert_eq!(time_description(&ago(Duration::hours(1)), now()), "6小时内");
        assert_eq!(time_description(&ago(Duration::hours(7)), now()), "12小时内");
        assert_eq!(time_description(&ago(Duration::hours(23)), now()), "24小时内");
        assert_eq!(time_description(&ago(Duration::hours(24)), now()), RECENT_WINDOW);
        assert_eq!(time_description("not a date", now()), RECENT_WINDOW);
    }

    #[test]
    fn test_relative_minutes_boundary() {
        assert_eq!(format_relative_time(&ago(Duration::seconds(30)), now()), "刚刚");
        assert_eq!(format_relative_time(&ago(Duration::minutes(59)), now()), "59分钟前");
        assert_eq!(format_relative_time(&ago(Duration::minutes(60)), now()), "1小时前");
    }

    #[test]
    fn test_relative_days_and_absolute() {
        assert_eq!(format_relative_time(&ago(Duration::hours(23)), now()), "23小时前");
        assert_eq!(format_relative_time(&ago(Duration::days(3)), now()), "3天前");
        assert_eq!(
            format_relative_time(&ago(Duration::days(9)), now()),
            "2024年3月1日"
        );
    }

    #[test]
    fn test_relative_unparseable() {
        assert_eq!(format_relative_time("garbage", now()), UNKNOWN_TIME);
    }
}
