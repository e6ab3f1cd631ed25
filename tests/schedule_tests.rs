//! Integration tests for airing schedule day grouping.
//!
//! Tests cover:
//! - UTC date bucketing and day-boundary truncation
//! - Bucket key order and per-bucket event order
//! - Partition invariant (every event in exactly one bucket)
//! - Malformed timestamp rejection

use aniplan::core::schedule::group_by_day;
use aniplan::models::media::{AiringEvent, MediaSummary, MediaTitle};
use aniplan::Error;

// 2024-06-01T00:00:00Z
const JUNE_FIRST: i64 = 1_717_200_000;

fn event(media_id: u64, episode: u32, airing_at: i64) -> AiringEvent {
    AiringEvent {
        media_id,
        episode,
        airing_at,
        time_until_airing: 3_600,
        media: MediaSummary {
            title: MediaTitle {
                english: Some(format!("Show {}", media_id)),
                romaji: None,
            },
            cover_url: None,
            episodes: Some(12),
            genres: Vec::new(),
            average_score: Some(75),
        },
    }
}

// ========== BUCKETING TESTS ==========

#[test]
fn test_groups_by_utc_date_preserving_orders() {
    let events = vec![
        event(1, 1, JUNE_FIRST + 3_600),          // A on 06-01
        event(2, 5, JUNE_FIRST + 86_400 + 100),   // B on 06-02
        event(3, 2, JUNE_FIRST + 7_200),          // C on 06-01
    ];

    let grouped = group_by_day(&events).unwrap();

    let keys: Vec<&String> = grouped.keys().collect();
    assert_eq!(keys, vec!["2024-06-01", "2024-06-02"]);

    let first_day: Vec<u64> = grouped["2024-06-01"].iter().map(|e| e.media_id).collect();
    assert_eq!(first_day, vec![1, 3]);
    assert_eq!(grouped["2024-06-02"].len(), 1);
    assert_eq!(grouped["2024-06-02"][0].media_id, 2);
}

#[test]
fn test_day_boundary_truncates_at_midnight_utc() {
    let events = vec![
        event(1, 1, JUNE_FIRST + 86_399), // 23:59:59 on 06-01
        event(2, 1, JUNE_FIRST + 86_400), // 00:00:00 on 06-02
    ];

    let grouped = group_by_day(&events).unwrap();

    assert_eq!(grouped["2024-06-01"][0].media_id, 1);
    assert_eq!(grouped["2024-06-02"][0].media_id, 2);
}

#[test]
fn test_key_order_follows_first_appearance_not_chronology() {
    // Later date appears first in the input; no re-sorting happens.
    let events = vec![
        event(1, 1, JUNE_FIRST + 86_400),
        event(2, 1, JUNE_FIRST),
    ];

    let grouped = group_by_day(&events).unwrap();

    let keys: Vec<&String> = grouped.keys().collect();
    assert_eq!(keys, vec!["2024-06-02", "2024-06-01"]);
}

#[test]
fn test_within_bucket_order_matches_input() {
    let events = vec![
        event(1, 1, JUNE_FIRST + 9_000),
        event(2, 1, JUNE_FIRST + 1_000), // earlier time, later in input
        event(3, 1, JUNE_FIRST + 5_000),
    ];

    let grouped = group_by_day(&events).unwrap();

    let ids: Vec<u64> = grouped["2024-06-01"].iter().map(|e| e.media_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

// ========== PARTITION TESTS ==========

#[test]
fn test_every_event_lands_in_exactly_one_bucket() {
    let events: Vec<AiringEvent> = (0..50)
        .map(|i| event(i, 1, JUNE_FIRST + i as i64 * 10_000))
        .collect();

    let grouped = group_by_day(&events).unwrap();

    let mut bucketed: Vec<u64> = grouped
        .values()
        .flat_map(|bucket| bucket.iter().map(|e| e.media_id))
        .collect();
    bucketed.sort_unstable();
    let expected: Vec<u64> = (0..50).collect();
    assert_eq!(bucketed, expected);
}

#[test]
fn test_empty_input_yields_empty_mapping() {
    let grouped = group_by_day(&[]).unwrap();
    assert!(grouped.is_empty());
}

#[test]
fn test_buckets_created_lazily() {
    // Two events a week apart: only their two dates exist as keys.
    let events = vec![
        event(1, 1, JUNE_FIRST),
        event(2, 1, JUNE_FIRST + 7 * 86_400),
    ];

    let grouped = group_by_day(&events).unwrap();
    assert_eq!(grouped.len(), 2);
}

// ========== INPUT VALIDATION TESTS ==========

#[test]
fn test_out_of_range_timestamp_rejected() {
    let result = group_by_day(&[event(1, 1, i64::MAX)]);
    assert!(matches!(
        result,
        Err(Error::InvalidAiringTimestamp(t)) if t == i64::MAX
    ));
}
