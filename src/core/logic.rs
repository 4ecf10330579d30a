use crate::config::Config;
use crate::core::aggregator::{AggregationIndex, DateBucketAggregator, RejectedRecord};
use crate::errors::AppResult;
use crate::models::{Record, RecordKind};
use crate::source::{JsonFileSource, RecordSource, UnreadableEntry};
use chrono::NaiveDate;

/// Everything one fetch produced: the index, the records left out of it,
/// and the entries that were not records at all.
#[derive(Debug)]
pub struct Loaded {
    pub index: AggregationIndex<Record>,
    pub rejected: Vec<RejectedRecord<Record>>,
    pub unreadable: Vec<UnreadableEntry>,
}

pub struct Core;

impl Core {
    /// Fetch `[start, end]` from `source`, keep only `kind` if given, and
    /// bucket the result.
    pub fn load(
        source: &dyn RecordSource,
        aggregator: &DateBucketAggregator,
        start: NaiveDate,
        end: NaiveDate,
        kind: Option<RecordKind>,
    ) -> AppResult<Loaded> {
        let fetched = source.fetch_range(start, end)?;
        let filtered = fetched
            .records
            .into_iter()
            .filter(|r| kind.is_none_or(|k| r.kind() == k));

        let outcome = aggregator.build(filtered);
        Ok(Loaded {
            index: outcome.index,
            rejected: outcome.rejected,
            unreadable: fetched.unreadable,
        })
    }

    /// `load` against the snapshot and zone named in `cfg`.
    pub fn load_configured(
        cfg: &Config,
        start: NaiveDate,
        end: NaiveDate,
        kind: Option<RecordKind>,
    ) -> AppResult<Loaded> {
        let zone = cfg.zone()?;
        let source = JsonFileSource::new(cfg.records_path(), zone);
        Self::load(&source, &DateBucketAggregator::new(zone), start, end, kind)
    }
}
