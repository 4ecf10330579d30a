//! Free-text search across an aggregation index.

use crate::core::aggregator::AggregationIndex;
use crate::errors::QueryError;
use crate::models::{DatedRecord, SearchField};
use chrono::NaiveDate;
use tracing::debug;

/// A validated, lowercased search needle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(QueryError::InvalidQuery);
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches<R: DatedRecord>(&self, record: &R, fields: &[SearchField]) -> bool {
        fields.iter().any(|field| {
            record
                .text_fields(*field)
                .iter()
                .any(|value| value.to_lowercase().contains(&self.0))
        })
    }
}

/// Case-insensitive substring search over `fields` of every bucketed record.
///
/// Results follow day order, then fetch order within a day. An empty or
/// blank query returns nothing without touching the index.
pub fn search<'a, R: DatedRecord>(
    index: &'a AggregationIndex<R>,
    query: &str,
    fields: &[SearchField],
) -> Vec<&'a R> {
    search_by_day(index, query, fields)
        .into_iter()
        .map(|(_, record)| record)
        .collect()
}

/// Same as `search`, each hit paired with the day it was bucketed on.
pub fn search_by_day<'a, R: DatedRecord>(
    index: &'a AggregationIndex<R>,
    query: &str,
    fields: &[SearchField],
) -> Vec<(NaiveDate, &'a R)> {
    let query = match SearchQuery::parse(query) {
        Ok(q) => q,
        Err(e) => {
            debug!("search skipped: {e}");
            return Vec::new();
        }
    };

    index
        .days()
        .flat_map(|(day, bucket)| bucket.records().iter().map(move |r| (day, r)))
        .filter(|(_, record)| query.matches(*record, fields))
        .collect()
}
