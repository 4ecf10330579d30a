use super::search_field::SearchField;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    #[serde(alias = "canceled")]
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Pending => "pending",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Statuses in the order the bookings calendar draws its dots.
    pub fn priority() -> Vec<&'static str> {
        vec!["pending", "confirmed", "cancelled"]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: String,
    pub confirmation_code: String,
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: Option<String>,
    /// Tour date as sent by the booking service
    #[serde(default, deserialize_with = "crate::models::raw_date::lenient")]
    pub tour_date: Option<String>,
    pub status: BookingStatus,
    #[serde(default)]
    pub passengers: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl BookingRecord {
    pub(crate) fn fields(&self, field: SearchField) -> Vec<&str> {
        match field {
            SearchField::Id => vec![self.id.as_str()],
            SearchField::Code => vec![self.confirmation_code.as_str()],
            SearchField::Name => vec![self.customer_name.as_str()],
            SearchField::Email => self.customer_email.as_deref().into_iter().collect(),
            SearchField::Notes => self.notes.as_deref().into_iter().collect(),
        }
    }
}
