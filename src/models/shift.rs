use super::search_field::SearchField;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
}

impl ShiftStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftStatus::Pending => "pending",
            ShiftStatus::Approved => "approved",
            ShiftStatus::Rejected => "rejected",
            ShiftStatus::Completed => "completed",
        }
    }

    pub fn priority() -> Vec<&'static str> {
        vec!["pending", "approved", "rejected", "completed"]
    }
}

/// A guide's requested or assigned working day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    pub id: String,
    pub guide_id: String,
    pub guide_name: String,
    #[serde(default)]
    pub guide_email: Option<String>,
    #[serde(default, deserialize_with = "crate::models::raw_date::lenient")]
    pub shift_date: Option<String>,
    pub status: ShiftStatus,
    #[serde(default)]
    pub participants: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ShiftRecord {
    pub(crate) fn fields(&self, field: SearchField) -> Vec<&str> {
        match field {
            SearchField::Id => vec![self.id.as_str()],
            SearchField::Code => vec![self.guide_id.as_str()],
            SearchField::Name => vec![self.guide_name.as_str()],
            SearchField::Email => self.guide_email.as_deref().into_iter().collect(),
            SearchField::Notes => self.notes.as_deref().into_iter().collect(),
        }
    }
}
