use super::search_field::SearchField;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusStatus {
    Scheduled,
    Active,
    Maintenance,
    Retired,
}

impl BusStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BusStatus::Scheduled => "scheduled",
            BusStatus::Active => "active",
            BusStatus::Maintenance => "maintenance",
            BusStatus::Retired => "retired",
        }
    }

    pub fn priority() -> Vec<&'static str> {
        vec!["maintenance", "scheduled", "active", "retired"]
    }
}

/// A bus put on a tour day, optionally with a driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusAssignmentRecord {
    pub id: String,
    pub plate: String,
    pub bus_name: String,
    #[serde(default)]
    pub driver_name: Option<String>,
    #[serde(default, deserialize_with = "crate::models::raw_date::lenient")]
    pub service_date: Option<String>,
    pub status: BusStatus,
    #[serde(default)]
    pub seats_booked: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl BusAssignmentRecord {
    pub(crate) fn fields(&self, field: SearchField) -> Vec<&str> {
        match field {
            SearchField::Id => vec![self.id.as_str()],
            SearchField::Code => vec![self.plate.as_str()],
            SearchField::Name => {
                let mut names = vec![self.bus_name.as_str()];
                names.extend(self.driver_name.as_deref());
                names
            }
            SearchField::Email => Vec::new(),
            SearchField::Notes => self.notes.as_deref().into_iter().collect(),
        }
    }
}
