//! Date-bucketed aggregation of fetched records.
//!
//! `DateBucketAggregator::build` turns a flat fetch result into an immutable
//! `AggregationIndex` keyed by calendar day. The index is never patched: a new
//! fetch produces a new index which replaces the old one (see `IndexSlot`).

use crate::errors::RecordError;
use crate::models::{DatedRecord, DaySummary};
use crate::utils::date::{self, ReferenceZone};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Records of one calendar day, in fetch order.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket<R> {
    pub date: NaiveDate,
    records: Vec<R>,
    counts_by_status: BTreeMap<String, usize>,
    total_secondary_quantity: u64,
}

impl<R: DatedRecord> DayBucket<R> {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            records: Vec::new(),
            counts_by_status: BTreeMap::new(),
            total_secondary_quantity: 0,
        }
    }

    fn push(&mut self, record: R) {
        *self
            .counts_by_status
            .entry(record.status().to_string())
            .or_insert(0) += 1;
        self.total_secondary_quantity += u64::from(record.secondary_quantity().unwrap_or(0));
        self.records.push(record);
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn counts_by_status(&self) -> &BTreeMap<String, usize> {
        &self.counts_by_status
    }

    pub fn total_secondary_quantity(&self) -> u64 {
        self.total_secondary_quantity
    }

    pub fn summary(&self) -> DaySummary {
        DaySummary {
            count: self.records.len(),
            counts_by_status: self.counts_by_status().clone(),
            total_secondary_quantity: self.total_secondary_quantity(),
        }
    }
}

/// A record left out of every bucket, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord<R> {
    pub record: R,
    pub error: RecordError,
}

/// Day -> bucket mapping for one fetch. Days without records have no entry.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationIndex<R> {
    zone: ReferenceZone,
    buckets: BTreeMap<NaiveDate, DayBucket<R>>,
}

impl<R: DatedRecord> AggregationIndex<R> {
    pub fn empty(zone: ReferenceZone) -> Self {
        Self {
            zone,
            buckets: BTreeMap::new(),
        }
    }

    pub fn zone(&self) -> ReferenceZone {
        self.zone
    }

    /// Records for `day` in fetch order; empty when the day has none.
    pub fn bucket_for(&self, day: NaiveDate) -> &[R] {
        self.buckets
            .get(&day)
            .map(|b| b.records())
            .unwrap_or(&[])
    }

    pub fn bucket(&self, day: NaiveDate) -> Option<&DayBucket<R>> {
        self.buckets.get(&day)
    }

    pub fn summarize(&self, day: NaiveDate) -> DaySummary {
        self.buckets
            .get(&day)
            .map(DayBucket::summary)
            .unwrap_or_default()
    }

    /// One summary per day of the inclusive range, empty days included.
    pub fn summaries_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<(NaiveDate, DaySummary)> {
        date::days_between(start, end)
            .into_iter()
            .map(|d| (d, self.summarize(d)))
            .collect()
    }

    /// Non-empty days in ascending order.
    pub fn days(&self) -> impl Iterator<Item = (NaiveDate, &DayBucket<R>)> {
        self.buckets.iter().map(|(d, b)| (*d, b))
    }

    /// Non-empty days within the inclusive range.
    pub fn days_in(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = (NaiveDate, &DayBucket<R>)> {
        self.buckets.range(start..=end).map(|(d, b)| (*d, b))
    }

    /// All bucketed records, day by day, each day in fetch order.
    pub fn records(&self) -> impl Iterator<Item = &R> {
        self.buckets.values().flat_map(|b| b.records().iter())
    }

    pub fn day_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn len(&self) -> usize {
        self.buckets.values().map(|b| b.records().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Result of a build: the index plus everything that could not be placed.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOutcome<R> {
    pub index: AggregationIndex<R>,
    pub rejected: Vec<RejectedRecord<R>>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DateBucketAggregator {
    zone: ReferenceZone,
}

impl DateBucketAggregator {
    pub fn new(zone: ReferenceZone) -> Self {
        Self { zone }
    }

    pub fn zone(&self) -> ReferenceZone {
        self.zone
    }

    /// Calendar day of a record under this aggregator's zone.
    pub fn day_of<R: DatedRecord>(&self, record: &R) -> Option<NaiveDate> {
        record.occurs_on().and_then(|raw| date::day_key(raw, self.zone))
    }

    /// Bucket `records` by calendar day. Never fails: records without a
    /// usable date end up in `rejected`.
    pub fn build<R, I>(&self, records: I) -> BuildOutcome<R>
    where
        R: DatedRecord,
        I: IntoIterator<Item = R>,
    {
        let mut index = AggregationIndex::empty(self.zone);
        let mut rejected = Vec::new();

        for record in records {
            match self.day_of(&record) {
                Some(day) => index
                    .buckets
                    .entry(day)
                    .or_insert_with(|| DayBucket::new(day))
                    .push(record),
                None => {
                    let error = RecordError::MalformedRecordDate {
                        id: record.id().to_string(),
                        raw: record.occurs_on().map(str::to_string),
                    };
                    warn!(%error, "record excluded from day buckets");
                    rejected.push(RejectedRecord { record, error });
                }
            }
        }

        debug!(
            days = index.day_count(),
            records = index.len(),
            rejected = rejected.len(),
            zone = %self.zone,
            "aggregation index built"
        );

        BuildOutcome { index, rejected }
    }
}
