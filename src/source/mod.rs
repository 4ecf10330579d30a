//! Boundary to the backend services that own bookings, shifts, guide
//! applications and bus assignments.

pub mod json_file;

pub use json_file::JsonFileSource;

use crate::errors::AppResult;
use crate::models::Record;
use chrono::NaiveDate;

/// A fetched entry that is not a record of any known kind.
#[derive(Debug, Clone, PartialEq)]
pub struct UnreadableEntry {
    /// Position in the fetch result
    pub position: usize,
    pub id: Option<String>,
    pub reason: String,
}

/// Result of one range fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fetched {
    pub records: Vec<Record>,
    pub unreadable: Vec<UnreadableEntry>,
}

/// Range-bounded fetch of dated records.
///
/// Implementations must return records whose date cannot be read as well,
/// so that the aggregator can report them instead of losing them. Entries
/// that cannot be read as records at all go to `Fetched::unreadable`.
pub trait RecordSource {
    fn fetch_range(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Fetched>;
}
