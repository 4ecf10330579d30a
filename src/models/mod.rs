pub mod booking;
pub mod bus_assignment;
pub mod day_summary;
pub mod guide_application;
pub mod raw_date;
pub mod record;
pub mod search_field;
pub mod shift;

pub use day_summary::DaySummary;
pub use record::{DatedRecord, Record, RecordKind};
pub use search_field::SearchField;
