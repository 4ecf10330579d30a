mod common;
use common::{booking, shift};
use tourdesk::core::{DateBucketAggregator, SearchQuery, search, search_by_day};
use tourdesk::errors::QueryError;
use tourdesk::models::booking::BookingStatus;
use tourdesk::models::shift::ShiftStatus;
use tourdesk::models::{DatedRecord, Record, SearchField};

fn sample() -> Vec<Record> {
    vec![
        booking(
            "b3",
            "TX-300",
            "Maria Lopez",
            Some("maria@example.com"),
            Some("2024-06-03"),
            BookingStatus::Confirmed,
            Some(2),
        ),
        booking(
            "b1",
            "TX-100",
            "Mario Rossi",
            Some("mrossi@example.com"),
            Some("2024-06-01"),
            BookingStatus::Pending,
            Some(1),
        ),
        booking(
            "b2",
            "TX-200",
            "Luca Bianchi",
            None,
            Some("2024-06-01"),
            BookingStatus::Cancelled,
            Some(4),
        ),
        booking("b4", "TX-400", "Nobody Dated", None, None, BookingStatus::Pending, None),
        shift("s1", Some("2024-06-02"), ShiftStatus::Approved, None),
    ]
}

fn ids<'a>(records: &[&'a Record]) -> Vec<&'a str> {
    records.iter().map(|r| r.id()).collect()
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let outcome = DateBucketAggregator::default().build(sample());
    let hits = search(&outcome.index, "MARI", &[SearchField::Name]);
    // day order first: b1 (06-01) before b3 (06-03)
    assert_eq!(ids(&hits), vec!["b1", "b3"]);
}

#[test]
fn test_search_respects_insertion_order_within_day() {
    let outcome = DateBucketAggregator::default().build(sample());
    let hits = search(&outcome.index, "tx-", &[SearchField::Code]);
    assert_eq!(ids(&hits), vec!["b1", "b2", "b3"]);
}

#[test]
fn test_search_only_looks_at_requested_fields() {
    let outcome = DateBucketAggregator::default().build(sample());

    assert!(search(&outcome.index, "example.com", &[SearchField::Name]).is_empty());
    let hits = search(&outcome.index, "example.com", &[SearchField::Email]);
    assert_eq!(ids(&hits), vec!["b1", "b3"]);
}

#[test]
fn test_search_multiple_fields() {
    let outcome = DateBucketAggregator::default().build(sample());
    let hits = search(
        &outcome.index,
        "tx-200",
        &[SearchField::Name, SearchField::Code],
    );
    assert_eq!(ids(&hits), vec!["b2"]);
}

#[test]
fn test_search_skips_rejected_records() {
    let outcome = DateBucketAggregator::default().build(sample());
    assert!(search(&outcome.index, "nobody", &[SearchField::Name]).is_empty());
}

#[test]
fn test_empty_query_returns_nothing() {
    let outcome = DateBucketAggregator::default().build(sample());
    assert!(!outcome.index.is_empty());
    assert!(search(&outcome.index, "", &[SearchField::Name, SearchField::Code]).is_empty());
    assert!(search(&outcome.index, "   \t", &[SearchField::Code]).is_empty());
}

#[test]
fn test_no_match_is_empty_result() {
    let outcome = DateBucketAggregator::default().build(sample());
    assert!(search(&outcome.index, "zzz", &[SearchField::Code]).is_empty());
}

#[test]
fn test_search_by_day_reports_bucket_date() {
    let outcome = DateBucketAggregator::default().build(sample());
    let hits = search_by_day(&outcome.index, "guide", &[SearchField::Name]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].0.to_string(), "2024-06-02");
    assert_eq!(hits[0].1.id(), "s1");
}

#[test]
fn test_query_parse() {
    assert_eq!(SearchQuery::parse("  "), Err(QueryError::InvalidQuery));
    assert_eq!(
        SearchQuery::parse(" TX-1 ").map(|q| q.as_str().to_string()),
        Ok("tx-1".to_string())
    );
}
