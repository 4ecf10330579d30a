pub mod aggregator;
pub mod calculator;
pub mod logic;
pub mod slot;

pub use aggregator::{
    AggregationIndex, BuildOutcome, DateBucketAggregator, DayBucket, RejectedRecord,
};
pub use calculator::markers::{MarkerMode, MarkerPolicy, MarkerSpec, StatusDot, marker_glyph};
pub use calculator::search::{SearchQuery, search, search_by_day};
pub use logic::{Core, Loaded};
pub use slot::{FetchTicket, IndexSlot};
