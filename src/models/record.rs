use super::booking::BookingRecord;
use super::bus_assignment::BusAssignmentRecord;
use super::guide_application::GuideApplicationRecord;
use super::search_field::SearchField;
use super::shift::ShiftRecord;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Anything the aggregator can put into a day bucket.
pub trait DatedRecord {
    fn id(&self) -> &str;

    /// Raw timestamp as delivered by the backend; `None` when the field is absent.
    fn occurs_on(&self) -> Option<&str>;

    /// Lowercase status tag from the record's closed set.
    fn status(&self) -> &str;

    /// Passengers, participants or seats; absent counts as zero in sums.
    fn secondary_quantity(&self) -> Option<u32> {
        None
    }

    /// Textual values exposed for `field`. Empty when the record has none.
    fn text_fields(&self, field: SearchField) -> Vec<&str>;
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Booking,
    Shift,
    GuideApplication,
    BusAssignment,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Booking => "booking",
            RecordKind::Shift => "shift",
            RecordKind::GuideApplication => "guide_application",
            RecordKind::BusAssignment => "bus_assignment",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "booking" | "bookings" => Some(Self::Booking),
            "shift" | "shifts" => Some(Self::Shift),
            "guide_application" | "application" => Some(Self::GuideApplication),
            "bus_assignment" | "bus" => Some(Self::BusAssignment),
            _ => None,
        }
    }

    pub fn all() -> [RecordKind; 4] {
        [
            RecordKind::Booking,
            RecordKind::Shift,
            RecordKind::GuideApplication,
            RecordKind::BusAssignment,
        ]
    }
}

/// A record fetched from one of the backend services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Booking(BookingRecord),
    Shift(ShiftRecord),
    GuideApplication(GuideApplicationRecord),
    BusAssignment(BusAssignmentRecord),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Booking(_) => RecordKind::Booking,
            Record::Shift(_) => RecordKind::Shift,
            Record::GuideApplication(_) => RecordKind::GuideApplication,
            Record::BusAssignment(_) => RecordKind::BusAssignment,
        }
    }

    /// Short human label for list output.
    pub fn label(&self) -> String {
        match self {
            Record::Booking(b) => format!("{} {}", b.confirmation_code, b.customer_name),
            Record::Shift(s) => s.guide_name.clone(),
            Record::GuideApplication(g) => g.applicant_name.clone(),
            Record::BusAssignment(b) => match &b.driver_name {
                Some(driver) => format!("{} ({}) / {}", b.bus_name, b.plate, driver),
                None => format!("{} ({})", b.bus_name, b.plate),
            },
        }
    }
}

impl DatedRecord for Record {
    fn id(&self) -> &str {
        match self {
            Record::Booking(b) => &b.id,
            Record::Shift(s) => &s.id,
            Record::GuideApplication(g) => &g.id,
            Record::BusAssignment(b) => &b.id,
        }
    }

    fn occurs_on(&self) -> Option<&str> {
        match self {
            Record::Booking(b) => b.tour_date.as_deref(),
            Record::Shift(s) => s.shift_date.as_deref(),
            Record::GuideApplication(g) => g.submitted_at.as_deref(),
            Record::BusAssignment(b) => b.service_date.as_deref(),
        }
    }

    fn status(&self) -> &str {
        match self {
            Record::Booking(b) => b.status.as_str(),
            Record::Shift(s) => s.status.as_str(),
            Record::GuideApplication(g) => g.status.as_str(),
            Record::BusAssignment(b) => b.status.as_str(),
        }
    }

    fn secondary_quantity(&self) -> Option<u32> {
        match self {
            Record::Booking(b) => b.passengers,
            Record::Shift(s) => s.participants,
            Record::GuideApplication(_) => None,
            Record::BusAssignment(b) => b.seats_booked,
        }
    }

    fn text_fields(&self, field: SearchField) -> Vec<&str> {
        match self {
            Record::Booking(b) => b.fields(field),
            Record::Shift(s) => s.fields(field),
            Record::GuideApplication(g) => g.fields(field),
            Record::BusAssignment(b) => b.fields(field),
        }
    }
}
