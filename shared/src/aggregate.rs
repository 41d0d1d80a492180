//! Pure aggregation helpers behind the dashboard charts
//!
//! Nothing here performs I/O or mutates its input. Empty input always gives
//! an empty result.

use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Marker appended to truncated labels
pub const ELLIPSIS: &str = "...";

// ============================================================================
// Ranking and Grouping
// ============================================================================

/// The `n` items with the largest metric, largest first
///
/// Items with equal metrics keep their original relative order.
pub fn top_n_by<T, K, F>(items: &[T], n: usize, metric: F) -> Vec<&T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut ranked: Vec<&T> = items.iter().collect();
    ranked.sort_by(|a, b| metric(*b).cmp(&metric(*a)));
    ranked.truncate(n);
    ranked
}

/// Count occurrences of each category, in the order categories first appear
///
/// Items whose category is absent or empty are skipped rather than counted
/// under a placeholder bucket.
pub fn count_by_category<T, F>(items: &[T], category: F) -> Vec<(String, u64)>
where
    F: Fn(&T) -> Option<&str>,
{
    let mut counts: Vec<(String, u64)> = Vec::new();
    for value in items.iter().filter_map(|item| category(item)) {
        if value.is_empty() {
            continue;
        }
        match counts.iter_mut().find(|(seen, _)| seen.as_str() == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value.to_string(), 1)),
        }
    }
    counts
}

/// Leading slice of at most `window` items
pub fn leading_window<T>(items: &[T], window: usize) -> &[T] {
    &items[..items.len().min(window)]
}

// ============================================================================
// Labels
// ============================================================================

/// Shorten a label to at most `max_len` characters
///
/// Labels that fit are returned unchanged. Longer ones keep their first
/// `max_len - 3` characters followed by [`ELLIPSIS`]. A limit too small to
/// hold the marker cuts the label without it.
pub fn truncate_label(label: &str, max_len: usize) -> String {
    if label.chars().count() <= max_len {
        return label.to_string();
    }

    let marker = ELLIPSIS.chars().count();
    if max_len <= marker {
        return label.chars().take(max_len).collect();
    }

    let mut out: String = label.chars().take(max_len - marker).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Uppercase the first character ("light rain" -> "Light rain")
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// Unit Conversions
// ============================================================================

/// Kilobytes to whole megabytes, rounded to nearest
pub fn kb_to_mb(kilobytes: u64) -> u64 {
    (kilobytes as f64 / 1024.0).round() as u64
}

/// Meters to a kilometer display string with one decimal
pub fn meters_to_km(meters: f64) -> String {
    format!("{:.1}", meters / 1000.0)
}

/// Epoch seconds to a local `hh:mm AM/PM` string
///
/// `utc_offset_seconds` is the location's shift from UTC. Offsets outside
/// +/-24h fall back to UTC; timestamps chrono cannot represent give an empty
/// string.
pub fn format_hour_minute(epoch_seconds: i64, utc_offset_seconds: i32) -> String {
    let offset = FixedOffset::east_opt(utc_offset_seconds).unwrap_or_else(|| Utc.fix());

    match DateTime::<Utc>::from_timestamp(epoch_seconds, 0) {
        Some(ts) => ts.with_timezone(&offset).format("%I:%M %p").to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, PartialEq)]
    struct Repo {
        name: &'static str,
        stars: u64,
        language: Option<&'static str>,
    }

    fn repo(name: &'static str, stars: u64, language: Option<&'static str>) -> Repo {
        Repo {
            name,
            stars,
            language,
        }
    }

    #[test]
    fn test_top_n_descending() {
        let repos = vec![repo("a", 5, None), repo("b", 50, None), repo("c", 1, None)];
        let top: Vec<u64> = top_n_by(&repos, 2, |r| r.stars)
            .into_iter()
            .map(|r| r.stars)
            .collect();
        assert_eq!(top, vec![50, 5]);
    }

    #[test]
    fn test_top_n_ties_keep_input_order() {
        let repos = vec![
            repo("first", 3, None),
            repo("second", 7, None),
            repo("third", 3, None),
            repo("fourth", 3, None),
        ];
        let names: Vec<&str> = top_n_by(&repos, 10, |r| r.stars)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["second", "first", "third", "fourth"]);
    }

    #[test]
    fn test_top_n_leaves_input_untouched() {
        let repos = vec![repo("a", 1, None), repo("b", 2, None)];
        let _ = top_n_by(&repos, 1, |r| r.stars);
        assert_eq!(repos[0].name, "a");
        assert_eq!(repos[1].name, "b");
    }

    #[test]
    fn test_top_n_empty() {
        let repos: Vec<Repo> = Vec::new();
        assert!(top_n_by(&repos, 10, |r| r.stars).is_empty());
    }

    #[test]
    fn test_count_skips_missing_category() {
        let repos = vec![
            repo("a", 0, Some("Go")),
            repo("b", 0, None),
            repo("c", 0, Some("Go")),
            repo("d", 0, Some("Rust")),
            repo("e", 0, Some("")),
        ];
        let counts = count_by_category(&repos, |r| r.language);

        assert_eq!(counts, vec![("Go".to_string(), 2), ("Rust".to_string(), 1)]);
    }

    #[test]
    fn test_count_keeps_first_seen_order() {
        let repos = vec![
            repo("a", 0, Some("Rust")),
            repo("b", 0, Some("C")),
            repo("c", 0, Some("Rust")),
        ];
        let counts = count_by_category(&repos, |r| r.language);

        assert_eq!(counts, vec![("Rust".to_string(), 2), ("C".to_string(), 1)]);
    }

    #[test]
    fn test_count_empty() {
        let repos: Vec<Repo> = Vec::new();
        assert!(count_by_category(&repos, |r| r.language).is_empty());
    }

    #[test]
    fn test_leading_window() {
        let samples: Vec<u32> = (0..40).collect();
        assert_eq!(leading_window(&samples, 8), &[0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(leading_window(&samples[..3], 8), &[0, 1, 2]);
        assert!(leading_window::<u32>(&[], 8).is_empty());
    }

    #[test]
    fn test_truncate_long_label() {
        let out = truncate_label("a-very-long-repository-name", 15);
        assert_eq!(out, "a-very-long-...");
        assert_eq!(out.chars().count(), 15);
        assert!(out.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_truncate_short_label_unchanged() {
        assert_eq!(truncate_label("dotfiles", 15), "dotfiles");
        assert_eq!(truncate_label("exactly-15-char", 15), "exactly-15-char");
        assert_eq!(truncate_label("", 10), "");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_label("ÄÖÜäöüßÄÖÜäöü", 10), "ÄÖÜäöüß...");
    }

    #[test]
    fn test_truncate_tiny_limit() {
        assert_eq!(truncate_label("symfony", 3), "sym");
        assert_eq!(truncate_label("symfony", 0), "");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("light rain"), "Light rain");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("éclair"), "Éclair");
    }

    #[test]
    fn test_kb_to_mb() {
        assert_eq!(kb_to_mb(2048), 2);
        assert_eq!(kb_to_mb(0), 0);
        assert_eq!(kb_to_mb(511), 0);
        assert_eq!(kb_to_mb(1536), 2);
    }

    #[test]
    fn test_meters_to_km() {
        assert_eq!(meters_to_km(10000.0), "10.0");
        assert_eq!(meters_to_km(7500.0), "7.5");
        assert_eq!(meters_to_km(0.0), "0.0");
    }

    #[test]
    fn test_format_hour_minute() {
        // 2024-01-01T15:00:00Z
        assert_eq!(format_hour_minute(1_704_121_200, 0), "03:00 PM");
        // Same instant in UTC+7
        assert_eq!(format_hour_minute(1_704_121_200, 7 * 3600), "10:00 PM");
        // Midnight UTC
        assert_eq!(format_hour_minute(1_704_067_200, 0), "12:00 AM");
    }

    #[test]
    fn test_format_hour_minute_bad_offset_uses_utc() {
        assert_eq!(format_hour_minute(1_704_121_200, 90_000), "03:00 PM");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_truncate_never_exceeds_limit(label in "\\PC{0,40}", max_len in 0usize..30) {
            let out = truncate_label(&label, max_len);
            prop_assert!(out.chars().count() <= max_len);
            if label.chars().count() <= max_len {
                prop_assert_eq!(out, label);
            }
        }

        #[test]
        fn prop_truncated_label_keeps_prefix(label in "[a-z-]{16,40}") {
            let out = truncate_label(&label, 15);
            prop_assert_eq!(out.chars().count(), 15);
            prop_assert!(label.starts_with(out.trim_end_matches(ELLIPSIS)));
        }

        #[test]
        fn prop_top_n_is_sorted_and_bounded(stars in prop::collection::vec(0u64..1000, 0..50), n in 0usize..20) {
            let top = top_n_by(&stars, n, |s| *s);
            prop_assert!(top.len() <= n);
            prop_assert!(top.len() <= stars.len());
            prop_assert!(top.windows(2).all(|w| w[0] >= w[1]));
        }

        #[test]
        fn prop_counts_sum_to_present_items(langs in prop::collection::vec(prop::option::of("[A-C]"), 0..50)) {
            let counts = count_by_category(&langs, |l| l.as_deref());
            let present = langs.iter().filter(|l| l.is_some()).count() as u64;
            prop_assert_eq!(counts.iter().map(|(_, n)| n).sum::<u64>(), present);
        }
    }
}
