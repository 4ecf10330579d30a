use super::search_field::SearchField;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    pub fn priority() -> Vec<&'static str> {
        vec!["pending", "approved", "rejected"]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideApplicationRecord {
    pub id: String,
    pub applicant_name: String,
    #[serde(default)]
    pub applicant_email: Option<String>,
    #[serde(default, deserialize_with = "crate::models::raw_date::lenient")]
    pub submitted_at: Option<String>,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub languages: Vec<String>,
}

impl GuideApplicationRecord {
    pub(crate) fn fields(&self, field: SearchField) -> Vec<&str> {
        match field {
            SearchField::Id => vec![self.id.as_str()],
            SearchField::Code => Vec::new(),
            SearchField::Name => vec![self.applicant_name.as_str()],
            SearchField::Email => self.applicant_email.as_deref().into_iter().collect(),
            // one value per spoken language
            SearchField::Notes => self.languages.iter().map(String::as_str).collect(),
        }
    }
}
